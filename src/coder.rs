//! Entry point for decoding and encoding data files.
//!
//! `DataCoder` runs a fixed pipeline for every call and stops at the first
//! failing stage:
//!
//! ```text
//! decode:  path ─► DataFile ─► content ─► extension ─► registry ─► Decoder ─► Value
//! encode:  path ─► DataFile ─► extension ─► registry ─► Encoder ─► bytes ─► file
//! ```
//!
//! Encoding happens fully in memory before the target file is opened, so a
//! failed encode never leaves a partially written file behind.
//!
//! ## Quick start
//!
//! ```no_run
//! use datacoder::DataCoder;
//!
//! let coder = DataCoder::new();
//! let value = coder.decode_file("config.json")?;
//! coder.encode_file("config.yaml", &value)?;
//! # Ok::<(), datacoder::Error>(())
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::file::DataFile;
use crate::format::{Decoder, Encoder};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::registry::FormatRegistry;
use crate::value::Value;

/// Decodes and encodes data files, picking the format from the extension.
///
/// A `DataCoder` is `Send + Sync`; one instance can serve many threads.
/// Registration needs `&mut self`, so formats are set up before sharing.
#[derive(Clone)]
pub struct DataCoder {
    registry: FormatRegistry,
    fs: Arc<dyn FileSystem>,
}

impl DataCoder {
    /// Built-in formats on the local filesystem.
    pub fn new() -> Self {
        Self::with_registry(FormatRegistry::with_defaults())
    }

    /// Use `registry` instead of the built-in formats.
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self {
            registry,
            fs: Arc::new(LocalFileSystem),
        }
    }

    /// Route file access through `fs`.
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Add or replace a format.
    pub fn register_format(
        &mut self,
        format: impl Into<String>,
        decoder: Arc<dyn Decoder>,
        encoder: Arc<dyn Encoder>,
    ) {
        self.registry.register(format, decoder, encoder);
    }

    // ── Files ───────────────────────────────────────────────────────

    /// Decode the file at `path` using the format named by its extension.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let file = self.open(path)?;
        let content = file.content()?;
        self.decode_content(&file, &content, file.extension())
    }

    /// Decode the file at `path` as `format`, ignoring its extension.
    pub fn decode_file_as(&self, path: impl AsRef<Path>, format: &str) -> Result<Value> {
        let file = self.open(path)?;
        let content = file.content()?;
        self.decode_content(&file, &content, format)
    }

    /// Encode `value` into the file at `path` using the format named by its
    /// extension. Existing content is replaced.
    pub fn encode_file(&self, path: impl AsRef<Path>, value: &Value) -> Result<()> {
        let file = self.open(path)?;
        self.encode_content(&file, value, file.extension())
    }

    /// Encode `value` into the file at `path` as `format`.
    pub fn encode_file_as(&self, path: impl AsRef<Path>, value: &Value, format: &str) -> Result<()> {
        let file = self.open(path)?;
        self.encode_content(&file, value, format)
    }

    // ── In memory ───────────────────────────────────────────────────

    /// Decode raw `input` as `format`.
    pub fn decode_data(&self, input: &[u8], format: &str) -> Result<Value> {
        let decoder = self.registry.resolve_decoder(format)?;
        Ok(decoder.decode(input)?)
    }

    /// Encode `value` as `format`.
    pub fn encode_data(&self, value: &Value, format: &str) -> Result<Vec<u8>> {
        let encoder = self.registry.resolve_encoder(format)?;
        Ok(encoder.encode(value)?)
    }

    // ── Pipeline ────────────────────────────────────────────────────

    fn open(&self, path: impl AsRef<Path>) -> Result<DataFile> {
        DataFile::with_file_system(path, Arc::clone(&self.fs))
    }

    fn decode_content(&self, file: &DataFile, content: &[u8], format: &str) -> Result<Value> {
        debug!(path = %file.path().display(), format, "decoding data file");
        let decoder = self
            .registry
            .resolve_decoder(format)
            .map_err(|e| Error::data_format(file.path(), e))?;
        let value = decoder
            .decode(content)
            .map_err(|e| Error::data_format(file.path(), e))?;
        debug!(
            path = %file.path().display(),
            decoder = decoder.name(),
            root = value.type_name(),
            "decoded data file"
        );
        Ok(value)
    }

    fn encode_content(&self, file: &DataFile, value: &Value, format: &str) -> Result<()> {
        debug!(path = %file.path().display(), format, "encoding data file");
        let encoder = self
            .registry
            .resolve_encoder(format)
            .map_err(|e| Error::data_format(file.path(), e))?;
        let bytes = encoder
            .encode(value)
            .map_err(|e| Error::data_format(file.path(), e))?;
        file.put_content(&bytes)?;
        debug!(
            path = %file.path().display(),
            encoder = encoder.name(),
            bytes = bytes.len(),
            "encoded data file"
        );
        Ok(())
    }
}

impl Default for DataCoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DataCoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataCoder")
            .field("formats", &self.registry.formats().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Decode the file at `path` with the built-in formats.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Value> {
    DataCoder::new().decode_file(path)
}

/// Encode `value` into the file at `path` with the built-in formats.
pub fn encode_file(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    DataCoder::new().encode_file(path, value)
}
