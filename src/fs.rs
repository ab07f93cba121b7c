//! Filesystem access used by [`DataFile`](crate::DataFile).
//!
//! Everything that touches the disk goes through [`FileSystem`], so the
//! rest of the crate can be exercised against an in-memory fake.

use std::fs;
use std::io;
use std::path::Path;

/// Minimal filesystem surface needed to read and write data files.
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file that can be opened for reading.
    fn readable(&self, path: &Path) -> bool;

    /// Whether `path` can be created or overwritten.
    fn writable(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file and write `data` to it.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn readable(&self, path: &Path) -> bool {
        path.is_file() && fs::File::open(path).is_ok()
    }

    fn writable(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) => meta.is_file() && !meta.permissions().readonly(),
            Err(_) => {
                let parent = match path.parent() {
                    Some(p) if p.as_os_str().is_empty() => Path::new("."),
                    Some(p) => p,
                    None => return false,
                };
                fs::metadata(parent)
                    .map(|meta| meta.is_dir() && !meta.permissions().readonly())
                    .unwrap_or(false)
            }
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }
}
