//! # Progress Reporting and Statistics Module
//!
//! Questo modulo gestisce i messaggi per l'utente e le statistiche del run.
//!
//! ## Responsabilità:
//! - `Reporter`: scrive su stdout (o qualsiasi `Write`) le righe di progresso
//! - `OptimizationStats`: conta file processati, ottimizzati, errori e byte risparmiati
//!
//! ## Formato delle righe:
//! ```text
//! Optimizing images/logo.png...
//! Error optimizing images/broken.png: Image processing error: ...
//! Optimization complete.
//! ```
//!
//! Le statistiche non finiscono su stdout: vengono loggate con `tracing`.

use crate::file_manager::FileManager;
use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Writes the per-file progress lines seen by the user
pub struct Reporter<W: Write = Stdout> {
    out: W,
}

impl Reporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Announce an attempt, before the file is opened
    pub fn start(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Optimizing {}...", path.display())?;
        self.out.flush()
    }

    pub fn error(&mut self, path: &Path, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "Error optimizing {}: {}", path.display(), error)?;
        self.out.flush()
    }

    pub fn complete(&mut self) -> io::Result<()> {
        writeln!(self.out, "Optimization complete.")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Statistics tracker for optimization results
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptimizationStats {
    pub files_processed: usize,
    pub files_optimized: usize,
    pub total_bytes_saved: u64,
    pub total_original_size: u64,
    pub errors: usize,
}

impl OptimizationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_optimized(&mut self, original_size: u64, new_size: u64) {
        self.files_processed += 1;
        self.files_optimized += 1;
        self.total_original_size += original_size;
        self.total_bytes_saved += original_size.saturating_sub(new_size);
    }

    pub fn add_error(&mut self) {
        self.files_processed += 1;
        self.errors += 1;
    }

    pub fn overall_reduction_percent(&self) -> f64 {
        if self.total_original_size > 0 {
            (self.total_bytes_saved as f64 / self.total_original_size as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Optimized: {} | Errors: {} | Total saved: {} ({:.2}%)",
            self.files_processed,
            self.files_optimized,
            self.errors,
            FileManager::format_size(self.total_bytes_saved),
            self.overall_reduction_percent()
        )
    }
}
