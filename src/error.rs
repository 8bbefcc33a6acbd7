//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore custom dell'applicazione.
//!
//! ## Categorie di errori:
//! - `ToolFailed`: Ghostscript è terminato con exit status diverso da zero
//! - `MissingDependency`: Ghostscript non trovato al momento dello spawn
//! - `Spawn`: Altri errori di I/O durante l'avvio o l'attesa del processo
//! - `InvalidFileName`: Il path di input non ha un nome file utilizzabile
//! - `Validation`: Errori di validazione della configurazione
//!
//! Solo `ToolFailed` resta confinato al singolo file. `MissingDependency` e
//! `Spawn` seguono la `FailurePolicy` configurata.

use std::process::ExitStatus;

/// Custom error types for PDF optimization
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("Command '{command}' returned non-zero {status}")]
    ToolFailed { command: String, status: ExitStatus },

    #[error("Dependency missing: {0}")]
    MissingDependency(String),

    // Not a #[source]: the io error is already part of the message
    #[error("Failed to execute {tool}: {error}")]
    Spawn { tool: String, error: std::io::Error },

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Configuration error: {0}")]
    Validation(String),
}

impl OptimizeError {
    /// Whether the failure belongs to one file only (the tool ran and said no)
    pub fn is_per_job(&self) -> bool {
        matches!(self, OptimizeError::ToolFailed { .. })
    }
}
