//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `OptimizeError` enum per categorizzare gli errori possibili
//! - Integra con `thiserror` per automatic error conversion
//! - Distingue errori fatali di avvio da errori recuperabili per singolo file
//!
//! ## Categorie di errori:
//! - `InvalidInput`: Directory mancante o non valida (fatale, exit 1)
//! - `Io`: Errori di I/O (file non trovati, permessi, etc.)
//! - `Image`: Errori di decodifica/codifica PNG (file corrotti, etc.)
//! - `Persist`: Sostituzione atomica del file fallita
//! - `Task`: Il worker bloccante è andato in panic
//!
//! Tutti tranne `InvalidInput` vengono riportati per file e la scansione
//! continua.
//!
//! ## Esempio:
//! ```rust
//! use png_optimizer::OptimizeError;
//!
//! let err = OptimizeError::InvalidInput("The directory missing does not exist.".to_string());
//! assert_eq!(err.to_string(), "Invalid input: The directory missing does not exist.");
//! ```

/// Custom error types for PNG optimization
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to replace file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Optimization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
