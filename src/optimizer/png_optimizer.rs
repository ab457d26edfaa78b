//! # PNG Optimizer Main Orchestrator
//!
//! Orchestratore principale che delega la ri-codifica al `TaskOptimizer`.
//!
//! ## Flusso di esecuzione:
//! 1. **Inizializzazione**: Valida la config (directory radice esistente)
//! 2. **File discovery**: Scansione lazy dei PNG sotto la radice
//! 3. **Processing sequenziale**: Un file alla volta, in ordine di scansione
//! 4. **Reporting**: Riga di inizio per file, riga di errore per fallimento
//! 5. **Statistics**: Riepilogo finale loggato con `tracing`
//!
//! Un errore su un singolo file non interrompe mai la scansione.

use crate::{
    config::Config,
    error::OptimizeError,
    file_manager::FileManager,
    image_processor::{ImageProcessor, PngProcessor},
    optimizer::task_optimizer::TaskOptimizer,
    progress::{OptimizationStats, Reporter},
};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Orchestratore principale
pub struct PngOptimizer {
    config: Config,
    task_optimizer: TaskOptimizer,
}

impl PngOptimizer {
    /// Crea nuova istanza con il processore PNG di default
    pub fn new(config: Config) -> Result<Self, OptimizeError> {
        Self::with_processor(config, Arc::new(PngProcessor::new()))
    }

    pub fn with_processor(
        config: Config,
        processor: Arc<dyn ImageProcessor>,
    ) -> Result<Self, OptimizeError> {
        config.validate()?;

        Ok(Self {
            config,
            task_optimizer: TaskOptimizer::new(processor),
        })
    }

    /// Esegue il processo di ottimizzazione
    ///
    /// Only a failure to write to `reporter` ends the run early.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<OptimizationStats> {
        let start_time = Instant::now();
        info!("Starting PNG optimization in: {}", self.config.root.display());

        let mut stats = OptimizationStats::new();
        let files = FileManager::find_png_files(&self.config.root, self.config.follow_links);

        for file_path in files {
            reporter.start(&file_path)?;

            match self.task_optimizer.process_single_file(file_path.clone()).await {
                Ok(processed) => {
                    stats.add_optimized(processed.original_size, processed.optimized_size);
                }
                Err(e) => {
                    debug!("Failed to optimize {}: {:?}", file_path.display(), e);
                    reporter.error(&file_path, &e)?;
                    stats.add_error();
                }
            }
        }

        reporter.complete()?;
        self.print_final_stats(&stats, start_time.elapsed().as_secs_f64());

        Ok(stats)
    }

    /// Stampa statistiche finali
    fn print_final_stats(&self, stats: &OptimizationStats, duration: f64) {
        if stats.files_processed == 0 {
            info!("No PNG files found to process");
            return;
        }

        info!("{}", stats.format_summary());
        info!("Finished in {:.2}s", duration);
    }
}
