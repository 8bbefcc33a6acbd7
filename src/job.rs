//! One input-file-to-output-file conversion attempt.

use crate::config::Quality;
use crate::optimizer::path_resolver::PathResolver;
use anyhow::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A pending conversion built from one command-line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input_path: PathBuf,
    pub quality: Quality,
}

impl Job {
    pub fn new(input_path: impl Into<PathBuf>, quality: Quality) -> Self {
        Self {
            input_path: input_path.into(),
            quality,
        }
    }

    /// Exact, case-sensitive `.pdf` extension check
    pub fn is_pdf(&self) -> bool {
        has_pdf_extension(&self.input_path)
    }

    /// Where Ghostscript writes the optimized copy
    pub fn output_path(&self) -> Result<PathBuf> {
        PathResolver::get_output_path(&self.input_path, self.quality)
    }
}

pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("pdf"))
}

/// Result of attempting a single job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Not a PDF, nothing was spawned
    Skipped,
    /// Ghostscript exited successfully
    Optimized { output_path: PathBuf },
    /// Ghostscript failed or could not be started (best-effort only)
    Failed { reason: String },
}
