//! Error types for data file decoding and encoding.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by [`DataCoder`](crate::DataCoder) and [`DataFile`](crate::DataFile).
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied argument is unusable (empty path).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File is missing or cannot be read.
    ///
    /// The `source` keeps the underlying reason (`NotFound`,
    /// `PermissionDenied`, ...) for diagnostics.
    #[error("File '{}' does not exist or is not readable", .path.display())]
    NonexistentFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unsupported format, malformed content, or data the format cannot hold.
    #[error("Invalid data format{}: {source}", path_suffix(.path))]
    DataFormatInvalid {
        path: Option<PathBuf>,
        #[source]
        source: FormatError,
    },

    /// Target file cannot be written.
    #[error("Cannot write file '{}'", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised at the codec and registry boundary.
///
/// Every error of the underlying format library is folded into one of
/// these variants, keeping the library's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No codec is registered for the identifier.
    #[error("unsupported format '{0}'")]
    Unsupported(String),

    /// Input holds no document at all.
    #[error("empty {format} content")]
    Empty { format: &'static str },

    /// Input is not valid for the format.
    #[error("{format} syntax error: {message}")]
    Syntax {
        format: &'static str,
        message: String,
    },

    /// Value has no representation in the format.
    #[error("{format} cannot represent {message}")]
    Unrepresentable {
        format: &'static str,
        message: String,
    },
}

/// Coarse classification of [`Error`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NonexistentFile,
    DataFormatInvalid,
    FileWrite,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NonexistentFile { .. } => ErrorKind::NonexistentFile,
            Self::DataFormatInvalid { .. } => ErrorKind::DataFormatInvalid,
            Self::FileWrite { .. } => ErrorKind::FileWrite,
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a nonexistent file error.
    pub fn nonexistent_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NonexistentFile {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Wrap a format error raised while handling `path`.
    pub fn data_format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Self::DataFormatInvalid {
            path: Some(path.into()),
            source,
        }
    }

    /// The format error behind a `DataFormatInvalid`, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::DataFormatInvalid { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The path this error refers to, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::NonexistentFile { path, .. } | Self::FileWrite { path, .. } => Some(path.as_path()),
            Self::DataFormatInvalid { path, .. } => path.as_deref(),
        }
    }
}

impl From<FormatError> for Error {
    fn from(source: FormatError) -> Self {
        Self::DataFormatInvalid { path: None, source }
    }
}

impl FormatError {
    /// Create an unsupported format error.
    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::Unsupported(format.into())
    }

    /// Create a syntax error.
    pub fn syntax(format: &'static str, message: impl Into<String>) -> Self {
        Self::Syntax {
            format,
            message: message.into(),
        }
    }

    /// Create an unrepresentable value error.
    pub fn unrepresentable(format: &'static str, message: impl Into<String>) -> Self {
        Self::Unrepresentable {
            format,
            message: message.into(),
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in '{}'", path.display()),
        None => String::new(),
    }
}
