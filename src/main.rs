//! # PDF Optimizer - Main Entry Point
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Creazione della configurazione e avvio del batch
//!
//! ## Esempio di utilizzo:
//! ```bash
//! optimize-pdf report.pdf slides.pdf --quality screen
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pdf_optimizer::{BatchOptimizer, Config, FailurePolicy, Quality};

#[derive(Parser, Debug)]
#[command(name = "optimize-pdf")]
#[command(about = "Optimize PDF filesize with Ghostscript")]
struct Args {
    /// PDF files to optimize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Ghostscript quality preset
    #[arg(short, long, value_enum, default_value_t = Quality::Ebook)]
    quality: Quality,

    /// What to do when Ghostscript cannot be started
    #[arg(long, value_enum, default_value_t = FailurePolicy::FailFast)]
    on_error: FailurePolicy,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging, RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config {
        quality: args.quality,
        failure_policy: args.on_error,
        ..Default::default()
    };
    debug!("Configuration: {}", serde_json::to_string(&config)?);

    let optimizer = BatchOptimizer::new(config)?;
    optimizer.run(&args.files).await?;

    Ok(())
}
