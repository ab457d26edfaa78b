//! # PNG Optimizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//!
//! ## Architettura dei moduli:
//! - `config`: Configurazione e validazione della directory radice
//! - `error`: Tipi di errore custom
//! - `file_manager`: Discovery ricorsiva dei PNG e utilità sulle dimensioni
//! - `image_processor`: Ri-codifica lossless in place
//! - `optimizer`: Orchestratore sequenziale del processo
//! - `progress`: Righe di progresso per l'utente e statistiche
//!
//! ## Utilizzo:
//! ```rust,no_run
//! use png_optimizer::{Config, PngOptimizer, Reporter};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let optimizer = PngOptimizer::new(Config::new("/path/to/images"))?;
//! optimizer.run(&mut Reporter::stdout()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod image_processor;
pub mod optimizer;
pub mod progress;

pub use config::Config;
pub use error::OptimizeError;
pub use image_processor::{ImageProcessor, PngProcessor, ProcessedFile};
pub use optimizer::PngOptimizer;
pub use progress::{OptimizationStats, Reporter};
