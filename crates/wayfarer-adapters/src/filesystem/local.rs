//! Local filesystem adapter using std::fs.
//!
//! All relative paths are resolved against the project root the adapter was
//! built with, so the application layer can stay in project-relative terms.

use std::io;
use std::path::{Path, PathBuf};

use wayfarer_core::{application::ports::Filesystem, error::WayfarerResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a local filesystem adapter rooted at the project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WayfarerResult<()> {
        let full = self.resolve(path);
        std::fs::create_dir_all(&full).map_err(|e| map_io_error(&full, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WayfarerResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(&full, content).map_err(|e| map_io_error(&full, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> WayfarerResult<String> {
        let full = self.resolve(path);
        std::fs::read_to_string(&full).map_err(|e| map_io_error(&full, e, "read file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> WayfarerResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let full = self.resolve(path);
                let metadata =
                    std::fs::metadata(&full).map_err(|e| map_io_error(&full, e, "get metadata"))?;
                let mut perms = metadata.permissions();
                let mode = perms.mode();
                perms.set_mode(mode | 0o111);
                std::fs::set_permissions(&full, perms)
                    .map_err(|e| map_io_error(&full, e, "set permissions"))?;
            }
        }
        #[cfg(windows)]
        {
            // Windows doesn't have an executable bit in the same way
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn remove_dir_all(&self, path: &Path) -> WayfarerResult<()> {
        let full = self.resolve(path);
        std::fs::remove_dir_all(&full).map_err(|e| map_io_error(&full, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> wayfarer_core::error::WayfarerError {
    use wayfarer_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
