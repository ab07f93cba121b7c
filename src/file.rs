//! Data file handle: path, extension, and content access.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFileSystem};

/// A data file identified by its path.
///
/// Construction and [`extension`](Self::extension) never touch the
/// filesystem; only [`content`](Self::content) and
/// [`put_content`](Self::put_content) do.
#[derive(Clone)]
pub struct DataFile {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl DataFile {
    /// Create a handle on the local filesystem.
    ///
    /// Fails with [`Error::InvalidArgument`] when `path` is empty.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_file_system(path, Arc::new(LocalFileSystem))
    }

    /// Create a handle that performs I/O through `fs`.
    pub fn with_file_system(path: impl AsRef<Path>, fs: Arc<dyn FileSystem>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("file path must not be empty"));
        }
        Ok(Self {
            path: path.to_path_buf(),
            fs,
        })
    }

    /// Create a handle from a path that may be absent.
    ///
    /// `None` fails the same way an empty path does.
    pub fn from_optional(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::new(path),
            None => Err(Error::invalid_argument("file path is required")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text after the last `.` of the final path segment, or `""`.
    ///
    /// The rule works on the raw path bytes, so non UTF-8 names split the
    /// same way; an extension that is itself not UTF-8 reads as `""`.
    pub fn extension(&self) -> &str {
        let ext = extension_of(self.path.as_os_str().as_encoded_bytes());
        std::str::from_utf8(ext).unwrap_or("")
    }

    /// Read the file's raw content.
    ///
    /// Missing and unreadable files both fail with
    /// [`Error::NonexistentFile`]; the attached `io::Error` tells them apart.
    pub fn content(&self) -> Result<Vec<u8>> {
        if !self.fs.exists(&self.path) {
            return Err(Error::nonexistent_file(
                &self.path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            ));
        }
        if !self.fs.readable(&self.path) {
            return Err(Error::nonexistent_file(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "file is not readable"),
            ));
        }

        let bytes = self
            .fs
            .read(&self.path)
            .map_err(|e| Error::nonexistent_file(&self.path, e))?;
        trace!(path = %self.path.display(), bytes = bytes.len(), "read data file");
        Ok(bytes)
    }

    /// Write `data`, replacing any previous content.
    pub fn put_content(&self, data: &[u8]) -> Result<()> {
        if !self.fs.writable(&self.path) {
            return Err(Error::file_write(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "file is not writable"),
            ));
        }

        self.fs
            .write(&self.path, data)
            .map_err(|e| Error::file_write(&self.path, e))?;
        trace!(path = %self.path.display(), bytes = data.len(), "wrote data file");
        Ok(())
    }
}

impl std::fmt::Debug for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Extension of the final segment of `path`.
fn extension_of(path: &[u8]) -> &[u8] {
    let separator = std::path::MAIN_SEPARATOR as u8;
    let name = path
        .rsplit(|b: &u8| *b == b'/' || *b == separator)
        .next()
        .unwrap_or(path);
    match name.iter().rposition(|b| *b == b'.') {
        Some(dot) => &name[dot + 1..],
        None => &[],
    }
}
