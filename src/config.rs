//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri della scansione
//! - Valida la directory radice prima di qualsiasi modifica su disco
//!
//! ## Parametri di configurazione:
//! - `root`: Directory da scansionare ricorsivamente
//! - `follow_links`: Segue i symlink verso directory (default: false)
//!
//! Il livello di compressione non è configurabile: ogni PNG viene
//! ricodificato con la compressione massima.
//!
//! ## Esempio:
//! ```rust
//! use png_optimizer::Config;
//!
//! let config = Config::new("/path/to/images");
//! assert!(!config.follow_links);
//! ```

use crate::error::OptimizeError;
use std::path::PathBuf;

/// Configuration for a PNG optimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory walked recursively for PNG files
    pub root: PathBuf,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if !self.root.is_dir() {
            return Err(OptimizeError::InvalidInput(format!(
                "The directory {} does not exist.",
                self.root.display()
            )));
        }

        Ok(())
    }
}
