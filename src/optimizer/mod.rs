//! # Optimizer Module
//!
//! Separa le responsabilità in sottomoduli:
//! - `png_optimizer`: Orchestratore principale (scansione, report, statistiche)
//! - `task_optimizer`: Worker per singoli file

pub mod png_optimizer;
pub mod task_optimizer;

pub use png_optimizer::PngOptimizer;
pub use task_optimizer::TaskOptimizer;
