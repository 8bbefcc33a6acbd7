//! # Batch Optimizer
//!
//! Orchestratore principale: un job per ogni path, in ordine, uno alla volta.
//! Un errore di Ghostscript su un file non interrompe il batch.

use crate::{
    config::{Config, FailurePolicy},
    error::OptimizeError,
    ghostscript::Ghostscript,
    job::{Job, JobOutcome},
    tool_resolver::ToolPathResolver,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Drives one Ghostscript conversion per supplied path
pub struct BatchOptimizer {
    config: Config,
    ghostscript: Ghostscript,
}

impl BatchOptimizer {
    /// Crea nuova istanza dell'ottimizzatore
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let program = ToolPathResolver::new(config.ghostscript.clone()).resolve_ghostscript();

        Ok(Self {
            config,
            ghostscript: Ghostscript::new(program),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processa tutti i file nell'ordine ricevuto
    pub async fn run(&self, paths: &[PathBuf]) -> Result<()> {
        debug!(
            "Optimizing {} file(s) with quality '{}' using {}",
            paths.len(),
            self.config.quality,
            self.ghostscript.program().display()
        );

        for path in paths {
            let outcome = self.optimize_file(path).await?;
            debug!("Outcome for '{}': {:?}", path.display(), outcome);
        }

        Ok(())
    }

    /// Processa un singolo file
    pub async fn optimize_file(&self, input_path: &Path) -> Result<JobOutcome> {
        let job = Job::new(input_path, self.config.quality);

        if !job.is_pdf() {
            warn!("Skipping non-PDF file '{}'", input_path.display());
            return Ok(JobOutcome::Skipped);
        }

        let output_path = job.output_path()?;

        info!("Starting with optimization of '{}'", input_path.display());
        match self.ghostscript.compress(&job, &output_path).await {
            Ok(()) => {
                info!("Optimized '{}' to '{}'", input_path.display(), output_path.display());
                Ok(JobOutcome::Optimized { output_path })
            }
            Err(e) if e.is_per_job() => Ok(self.report_failure(input_path, e)),
            Err(e) => self.handle_startup_failure(input_path, e),
        }
    }

    /// Errori prima che Ghostscript giri davvero: decide la policy
    fn handle_startup_failure(&self, input_path: &Path, e: OptimizeError) -> Result<JobOutcome> {
        match self.config.failure_policy {
            FailurePolicy::FailFast => {
                Err(e).with_context(|| format!("Error optimizing '{}'", input_path.display()))
            }
            FailurePolicy::BestEffort => Ok(self.report_failure(input_path, e)),
        }
    }

    fn report_failure(&self, input_path: &Path, e: OptimizeError) -> JobOutcome {
        error!("Error optimizing '{}': {}", input_path.display(), e);
        JobOutcome::Failed { reason: e.to_string() }
    }
}
