//! # File Management Module
//!
//! Questo modulo gestisce la discovery dei file PNG e le utilità sulle dimensioni.
//!
//! ## Responsabilità:
//! - Discovery ricorsiva e lazy dei file PNG in una directory
//! - Filtro case-insensitive sul suffisso `.png` del nome file
//! - Formattazione human-readable delle dimensioni
//! - Calcolo percentuali di riduzione
//!
//! ## Ordine di visita:
//! Le entry di ogni directory sono ordinate per nome, quindi l'ordine è
//! deterministico per un dato albero. Le entry illeggibili (permessi su una
//! sottodirectory, loop di symlink) vengono loggate e saltate.
//!
//! ## Esempio:
//! ```rust,no_run
//! use png_optimizer::file_manager::FileManager;
//! use std::path::Path;
//!
//! for file in FileManager::find_png_files(Path::new("/path/to/images"), false) {
//!     println!("{}", file.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};
use tracing::{debug, warn};

/// Manages file discovery and size bookkeeping
pub struct FileManager;

impl FileManager {
    /// Lazily walk `root` and yield every PNG file beneath it
    pub fn find_png_files(root: &Path, follow_links: bool) -> impl Iterator<Item = PathBuf> {
        WalkDir::new(root)
            .follow_links(follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| Self::is_png(entry.path()) && Self::is_file_entry(entry))
            .map(DirEntry::into_path)
            .inspect(|path| debug!("Selected {}", path.display()))
    }

    /// Regular files, plus symlinks that do not resolve to a directory.
    ///
    /// Dangling links are kept so the failed attempt gets reported.
    fn is_file_entry(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
    }

    /// Check if a file name ends in `.png`, ignoring case
    pub fn is_png(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(".png"))
            .unwrap_or(false)
    }

    /// Get the size of a file in bytes
    pub fn get_file_size(path: &Path) -> std::io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Calculate percentage reduction; negative when the file grew
    pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
        if original_size == 0 {
            0.0
        } else {
            ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_png_ignores_case() {
        assert!(FileManager::is_png(Path::new("a/A.PNG")));
        assert!(FileManager::is_png(Path::new("b.Png")));
        assert!(FileManager::is_png(Path::new("c.png")));
        assert!(FileManager::is_png(Path::new(".png")));

        assert!(!FileManager::is_png(Path::new("image.png.bak")));
        assert!(!FileManager::is_png(Path::new("photo.jpg")));
        assert!(!FileManager::is_png(Path::new("png")));
        assert!(!FileManager::is_png(Path::new("/")));
    }

    #[test]
    fn test_find_png_files_recurses_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("A.PNG"));
        touch(&root.join("notes.txt"));
        touch(&root.join("nested/deeper/b.Png"));
        touch(&root.join("nested/image.png.bak"));
        touch(&root.join("nested/c.png"));
        fs::create_dir_all(root.join("folder.png")).unwrap();

        let found: Vec<PathBuf> = FileManager::find_png_files(root, false).collect();

        assert_eq!(
            found,
            vec![
                root.join("A.PNG"),
                root.join("nested/c.png"),
                root.join("nested/deeper/b.Png"),
            ]
        );
    }

    #[test]
    fn test_find_png_files_is_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["z.png", "m.png", "a.png", "sub/q.png"] {
            touch(&temp_dir.path().join(name));
        }

        let first: Vec<PathBuf> = FileManager::find_png_files(temp_dir.path(), false).collect();
        let second: Vec<PathBuf> = FileManager::find_png_files(temp_dir.path(), false).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_find_png_files_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("readme.md"));
        touch(&temp_dir.path().join("photo.jpeg"));

        assert_eq!(FileManager::find_png_files(temp_dir.path(), false).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        let outside = temp_dir.path().join("outside");
        touch(&outside.join("linked_dir_file.png"));
        touch(&outside.join("target.png"));
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(outside.join("target.png"), root.join("link.png")).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("dir_link")).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("dir_link.png")).unwrap();
        std::os::unix::fs::symlink(outside.join("gone.png"), root.join("dangling.png")).unwrap();

        let found: Vec<PathBuf> = FileManager::find_png_files(&root, false).collect();
        assert_eq!(found, vec![root.join("dangling.png"), root.join("link.png")]);

        let followed: Vec<PathBuf> = FileManager::find_png_files(&root, true).collect();
        assert!(followed.contains(&root.join("dir_link/target.png")));
        assert!(followed.contains(&root.join("dir_link.png/linked_dir_file.png")));
        assert!(followed.contains(&root.join("link.png")));
        assert!(!followed.contains(&root.join("dir_link.png")));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(FileManager::format_size(512), "512 B");
        assert_eq!(FileManager::format_size(2048), "2.00 KB");
        assert_eq!(FileManager::format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_calculate_reduction() {
        assert_eq!(FileManager::calculate_reduction(0, 10), 0.0);
        assert_eq!(FileManager::calculate_reduction(200, 150), 25.0);
        assert!(FileManager::calculate_reduction(100, 120) < 0.0);
    }
}
