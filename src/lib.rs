//! # PDF Optimizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Architettura dei moduli:
//! - `config`: Preset di qualità, failure policy e validazione parametri
//! - `error`: Tipi di errore custom per le diverse operazioni
//! - `job`: Modello dati di una singola conversione
//! - `tool_resolver`: Ricerca dell'eseguibile Ghostscript
//! - `ghostscript`: Invocazione del processo esterno
//! - `optimizer`: Orchestratore del batch e calcolo dei path di output
//!
//! La libreria emette solo eventi `tracing`; il subscriber lo sceglie chi la usa.
//!
//! ## Utilizzo:
//! ```no_run
//! use pdf_optimizer::{BatchOptimizer, Config};
//! use std::path::PathBuf;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let optimizer = BatchOptimizer::new(Config::default())?;
//! optimizer.run(&[PathBuf::from("report.pdf")]).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod ghostscript;
pub mod job;
pub mod optimizer;
pub mod tool_resolver;

#[cfg(test)]
mod test_support;

pub use config::{Config, FailurePolicy, Quality};
pub use error::OptimizeError;
pub use job::{Job, JobOutcome};
pub use optimizer::BatchOptimizer;
