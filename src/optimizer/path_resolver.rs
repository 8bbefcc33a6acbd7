//! # Path Resolution Module
//!
//! Centralizza la logica di calcolo del path di output.
//! Il file ottimizzato resta nella stessa directory dell'input.

use crate::{config::Quality, error::OptimizeError};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix inserted between the input stem and the quality preset
pub const OPTIMIZED_SUFFIX: &str = "_optimized_q_";

/// Utility per calcolare i path di output in modo centralizzato
pub struct PathResolver;

impl PathResolver {
    /// Calcola il path di output: `<parent>/<stem>_optimized_q_<quality>.pdf`
    pub fn get_output_path(input_path: &Path, quality: Quality) -> Result<PathBuf> {
        let file_stem = input_path
            .file_stem()
            .ok_or_else(|| OptimizeError::InvalidFileName(input_path.display().to_string()))?;

        // Lavora su OsString per non perdere nomi non UTF-8
        let mut filename = file_stem.to_os_string();
        filename.push(format!("{}{}.pdf", OPTIMIZED_SUFFIX, quality));

        let result = input_path.with_file_name(filename);
        debug!("Resolved output path: {} -> {}", input_path.display(), result.display());

        Ok(result)
    }
}
