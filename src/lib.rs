//! # datacoder
//!
//! Format-agnostic decoding and encoding of data files.
//!
//! The format of a file is picked from its extension, its content is read
//! and decoded into a generic [`Value`] (ordered mappings, sequences, and
//! scalars), and a [`Value`] can be encoded back into any registered format.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! coder     → DataCoder: decode/encode pipeline over files and bytes
//!   ↓
//! registry  → FormatRegistry: format identifier → Decoder/Encoder
//!   ↓
//! format    → Decoder/Encoder contract, JSON and YAML codecs
//!   ↓
//! file, fs  → DataFile (path, extension, content), FileSystem access
//!   ↓
//! value     → Value, the generic data structure
//! ```
//!
//! ## Features
//!
//! - `json` - JSON support through `serde_json` (enabled by default)
//! - `yaml` - YAML support through `serde_yaml`, registered as `yaml` and
//!   `yml` (enabled by default)

/// Generic data structure shared by all formats
pub mod value;

/// Error taxonomy: InvalidArgument, NonexistentFile, DataFormatInvalid, FileWrite
pub mod error;

/// Filesystem access behind a trait
pub mod fs;

/// Data file handle
pub mod file;

/// Decoder/encoder contract and built-in codecs
pub mod format;

/// Format identifier → codec registry
pub mod registry;

/// Decode/encode pipeline
pub mod coder;

pub use coder::{DataCoder, decode_file, encode_file};
pub use error::{Error, ErrorKind, FormatError, Result};
pub use file::DataFile;
pub use format::{Codec, Decoder, Encoder};
#[cfg(feature = "json")]
pub use format::Json;
#[cfg(feature = "yaml")]
pub use format::Yaml;
pub use fs::{FileSystem, LocalFileSystem};
pub use registry::FormatRegistry;
pub use value::{Mapping, Value};
