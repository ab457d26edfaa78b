//! # Task Optimizer Module
//!
//! Worker per l'ottimizzazione di un singolo file.
//! Separato dall'orchestratore principale per maggiore modularità.

use crate::{
    error::OptimizeError,
    image_processor::{ImageProcessor, ProcessedFile},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Runs one re-encode on tokio's blocking pool
pub struct TaskOptimizer {
    processor: Arc<dyn ImageProcessor>,
}

impl TaskOptimizer {
    pub fn new(processor: Arc<dyn ImageProcessor>) -> Self {
        Self { processor }
    }

    /// Processa un singolo file
    ///
    /// A panic inside the processor comes back as [`OptimizeError::Task`].
    pub async fn process_single_file(&self, file_path: PathBuf) -> Result<ProcessedFile, OptimizeError> {
        let processor = Arc::clone(&self.processor);
        let processed = tokio::task::spawn_blocking(move || processor.optimize(&file_path)).await??;

        debug!(
            "Optimized {} ({:.2}% reduction)",
            processed.path.display(),
            processed.reduction_percent()
        );
        Ok(processed)
    }
}
