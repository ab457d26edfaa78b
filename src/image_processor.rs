//! # Image Processing Module
//!
//! Questo modulo gestisce la ri-codifica lossless dei file PNG usando la
//! libreria `image`, senza tool esterni.
//!
//! ## Pipeline di Ottimizzazione
//!
//! 1. **Risoluzione path**: Canonicalizza il path (i symlink puntano al file reale)
//! 2. **Snapshot**: Legge dimensione e permessi originali
//! 3. **Decodifica**: Rileva il formato dal contenuto (un `.png` che contiene
//!    JPEG o WebP viene comunque decodificato), legge il profilo ICC e chiude
//!    il file letto
//! 4. **Codifica**: PNG con compressione massima e filtro adattivo, su un file
//!    temporaneo nella stessa directory. Il profilo ICC viene riscritto come
//!    `iCCP`; i chunk `gAMA`, `cHRM`, `sRGB` e quelli testuali vanno persi
//! 5. **Sostituzione**: Ripristina i permessi e rinomina atomicamente sopra
//!    l'originale
//!
//! ## Error Handling
//!
//! - **File corrotto**: `OptimizeError::Image`, originale intatto
//! - **Permessi / I/O**: `OptimizeError::Io`, originale intatto
//! - **Rename fallito**: `OptimizeError::Persist`, il temporaneo viene rimosso
//!
//! Non esiste backup: se la ri-codifica riesce i byte originali sono persi.
//!
//! ## Esempio
//!
//! ```rust,no_run
//! use png_optimizer::image_processor::{ImageProcessor, PngProcessor};
//! use std::path::Path;
//!
//! let processed = PngProcessor::new().optimize(Path::new("logo.png"))?;
//! println!("{} -> {} bytes", processed.original_size, processed.optimized_size);
//! # Ok::<(), png_optimizer::OptimizeError>(())
//! ```

use crate::error::OptimizeError;
use crate::file_manager::FileManager;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageDecoder, ImageEncoder, ImageError, ImageReader};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a successful re-encode
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    pub path: PathBuf,
    pub original_size: u64,
    pub optimized_size: u64,
}

impl ProcessedFile {
    pub fn reduction_percent(&self) -> f64 {
        FileManager::calculate_reduction(self.original_size, self.optimized_size)
    }
}

/// Rewrites an image file in place with an optimized encoding.
///
/// Implementations are invoked once per selected file, on a blocking thread.
pub trait ImageProcessor: Send + Sync {
    /// Re-encodes `path` in place.
    ///
    /// # Errors
    /// Any failure to open, decode, encode or replace the file. The file on
    /// disk must be left untouched when an error is returned.
    fn optimize(&self, path: &Path) -> Result<ProcessedFile, OptimizeError>;
}

/// Lossless PNG re-encoder backed by the `image` crate.
///
/// Every file is written with [`CompressionType::Best`] and
/// [`FilterType::Adaptive`]; neither is configurable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngProcessor;

impl PngProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `image` as PNG next to `target` and renames it over `target`.
    ///
    /// # Arguments
    /// * `image` - Decoded pixels of the original file
    /// * `icc_profile` - Embedded colour profile of the original, written back as `iCCP`
    /// * `target` - Canonical path of the file being replaced
    /// * `permissions` - Permissions of the original file, restored on the new one
    ///
    /// # Returns
    /// * `Result<(), OptimizeError>` - The temporary file is removed on any error
    fn write_replacement(
        image: &DynamicImage,
        icc_profile: Option<Vec<u8>>,
        target: &Path,
        permissions: std::fs::Permissions,
    ) -> Result<(), OptimizeError> {
        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::Builder::new()
            .prefix(".png-optimizer-")
            .suffix(".tmp")
            .tempfile_in(parent)?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            let mut encoder = PngEncoder::new_with_quality(
                &mut writer,
                CompressionType::Best,
                FilterType::Adaptive,
            );
            if let Some(profile) = icc_profile {
                encoder.set_icc_profile(profile).map_err(ImageError::Unsupported)?;
            }
            encoder.write_image(
                image.as_bytes(),
                image.width(),
                image.height(),
                image.color().into(),
            )?;
            writer.flush()?;
        }

        temp.as_file().set_permissions(permissions)?;
        temp.persist(target)?;
        Ok(())
    }
}

impl ImageProcessor for PngProcessor {
    /// Optimizes a single PNG file in place.
    ///
    /// This method performs the following steps:
    /// 1. Canonicalizes the path so symlinks rewrite their target, not the link
    /// 2. Records the original size and permissions
    /// 3. Decodes the image and its ICC profile, sniffing the real format from its content
    /// 4. Writes the best-compression PNG encoding to a sibling temporary file
    /// 5. Atomically renames the temporary file over the original
    ///
    /// # Arguments
    /// * `path` - Path of the image to rewrite
    ///
    /// # Returns
    /// * `Result<ProcessedFile, OptimizeError>` - Sizes before and after
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or its metadata read
    /// - The content is not a decodable image
    /// - The temporary file cannot be created, written or renamed
    fn optimize(&self, path: &Path) -> Result<ProcessedFile, OptimizeError> {
        let target = path.canonicalize()?;
        let metadata = std::fs::metadata(&target)?;
        let original_size = metadata.len();

        let mut decoder = ImageReader::open(&target)?.with_guessed_format()?.into_decoder()?;
        let icc_profile = decoder.icc_profile()?;
        let image = DynamicImage::from_decoder(decoder)?;
        debug!(
            "Decoded {} ({}x{}, {:?}, icc: {})",
            target.display(),
            image.width(),
            image.height(),
            image.color(),
            icc_profile.is_some()
        );

        Self::write_replacement(&image, icc_profile, &target, metadata.permissions())?;

        let optimized_size = FileManager::get_file_size(&target)?;
        debug!(
            "Rewrote {}: {} -> {}",
            target.display(),
            FileManager::format_size(original_size),
            FileManager::format_size(optimized_size)
        );

        Ok(ProcessedFile {
            path: path.to_path_buf(),
            original_size,
            optimized_size,
        })
    }
}
