//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione di una singola esecuzione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri dell'ottimizzazione
//! - Definisce i preset di qualità Ghostscript (`Quality`)
//! - Definisce la policy per gli errori di avvio del tool (`FailurePolicy`)
//! - Valida i parametri prima di avviare il batch
//!
//! ## Parametri di configurazione:
//! - `quality`: Preset `-dPDFSETTINGS` (default: `ebook`)
//! - `failure_policy`: Cosa fare se Ghostscript non parte (default: `fail-fast`)
//! - `ghostscript`: Path esplicito del binario (default: None = risoluzione automatica)
//!
//! ## Esempio:
//! ```rust
//! use pdf_optimizer::config::{Config, Quality};
//!
//! let config = Config {
//!     quality: Quality::Screen,
//!     ..Default::default()
//! };
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::error::OptimizeError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Ghostscript `PDFSETTINGS` presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Low resolution, smallest output (72 dpi)
    Screen,
    /// Medium resolution (150 dpi)
    Ebook,
    /// High resolution (300 dpi)
    Printer,
    /// Prepress quality, preserves color information
    Prepress,
    /// Ghostscript's general-purpose defaults
    Default,
}

impl Quality {
    /// Preset name as Ghostscript and the output suffix expect it
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Screen => "screen",
            Quality::Ebook => "ebook",
            Quality::Printer => "printer",
            Quality::Prepress => "prepress",
            Quality::Default => "default",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to treat failures that happen before Ghostscript even runs
/// (binary missing, permission denied on the executable, ...).
///
/// A non-zero exit from Ghostscript is always contained to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole batch
    FailFast,
    /// Log the error and move on to the next file
    BestEffort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => f.write_str("fail-fast"),
            FailurePolicy::BestEffort => f.write_str("best-effort"),
        }
    }
}

/// Configuration for a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ghostscript quality preset
    pub quality: Quality,
    /// Policy for tool startup failures
    pub failure_policy: FailurePolicy,
    /// Explicit Ghostscript executable (None = resolve from env / PATH)
    pub ghostscript: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quality: Quality::Ebook,
            failure_policy: FailurePolicy::FailFast,
            ghostscript: None,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(ref ghostscript) = self.ghostscript {
            if ghostscript.as_os_str().is_empty() {
                return Err(OptimizeError::Validation(
                    "Ghostscript path must not be empty".to_string(),
                )
                .into());
            }
            if ghostscript.is_dir() {
                return Err(OptimizeError::Validation(format!(
                    "Ghostscript path is a directory: {}",
                    ghostscript.display()
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.quality, Quality::Ebook);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert!(config.ghostscript.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            ghostscript: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let temp_dir = TempDir::new().unwrap();
        config.ghostscript = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_err());

        // A path that does not exist yet is left to the spawn step
        config.ghostscript = Some(temp_dir.path().join("gs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quality_names() {
        let names: Vec<&str> = [
            Quality::Screen,
            Quality::Ebook,
            Quality::Printer,
            Quality::Prepress,
            Quality::Default,
        ]
        .iter()
        .map(Quality::as_str)
        .collect();
        assert_eq!(names, ["screen", "ebook", "printer", "prepress", "default"]);
        assert_eq!(Quality::Prepress.to_string(), "prepress");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            quality: Quality::Screen,
            failure_policy: FailurePolicy::BestEffort,
            ghostscript: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""quality":"screen""#));
        assert!(json.contains(r#""failure_policy":"best-effort""#));

        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.quality, Quality::Screen);
        assert_eq!(loaded.failure_policy, FailurePolicy::BestEffort);
    }
}
