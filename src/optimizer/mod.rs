//! # Optimizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `batch_optimizer`: Orchestratore del batch e policy sugli errori
//! - `path_resolver`: Logica di calcolo path centralizzata

pub mod batch_optimizer;
pub mod path_resolver;

pub use batch_optimizer::BatchOptimizer;
pub use path_resolver::PathResolver;
