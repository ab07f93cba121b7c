//! Format identifier → decoder/encoder lookup.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::FormatError;
use crate::format::{Codec, Decoder, Encoder};

/// Identifiers registered by [`FormatRegistry::with_defaults`].
pub fn default_formats() -> &'static [&'static str] {
    &[
        #[cfg(feature = "json")]
        "json",
        #[cfg(feature = "yaml")]
        "yaml",
        #[cfg(feature = "yaml")]
        "yml",
    ]
}

#[derive(Clone)]
struct FormatEntry {
    decoder: Arc<dyn Decoder>,
    encoder: Arc<dyn Encoder>,
}

/// Maps format identifiers (file extensions) to codecs.
///
/// Identifiers are compared by exact equality; `"json"` and `"JSON"` are
/// different formats. Registering an identifier twice replaces the first
/// association.
#[derive(Clone, Default)]
pub struct FormatRegistry {
    entries: IndexMap<String, FormatEntry>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in formats.
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "json")]
        registry.register_codec("json", crate::format::Json::default());
        #[cfg(feature = "yaml")]
        {
            registry.register_codec("yaml", crate::format::Yaml);
            registry.register_codec("yml", crate::format::Yaml);
        }
        registry
    }

    /// Associate `format` with a decoder and an encoder.
    pub fn register(
        &mut self,
        format: impl Into<String>,
        decoder: Arc<dyn Decoder>,
        encoder: Arc<dyn Encoder>,
    ) {
        let format = format.into();
        debug!(
            format = %format,
            decoder = decoder.name(),
            encoder = encoder.name(),
            "registering data format"
        );
        if let Some(previous) = self
            .entries
            .insert(format.clone(), FormatEntry { decoder, encoder })
        {
            debug!(
                format = %format,
                previous = previous.decoder.name(),
                "replaced existing data format"
            );
        }
    }

    /// Associate `format` with a type that both decodes and encodes.
    pub fn register_codec<C: Codec + 'static>(&mut self, format: impl Into<String>, codec: C) {
        let codec = Arc::new(codec);
        self.register(format, codec.clone(), codec);
    }

    /// Remove a format; returns whether it was registered.
    pub fn unregister(&mut self, format: &str) -> bool {
        self.entries.shift_remove(format).is_some()
    }

    pub fn contains(&self, format: &str) -> bool {
        self.entries.contains_key(format)
    }

    /// Registered identifiers, in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decoder for `format`, or [`FormatError::Unsupported`].
    pub fn resolve_decoder(&self, format: &str) -> Result<Arc<dyn Decoder>, FormatError> {
        self.entries
            .get(format)
            .map(|entry| Arc::clone(&entry.decoder))
            .ok_or_else(|| FormatError::unsupported(format))
    }

    /// Encoder for `format`, or [`FormatError::Unsupported`].
    pub fn resolve_encoder(&self, format: &str) -> Result<Arc<dyn Encoder>, FormatError> {
        self.entries
            .get(format)
            .map(|entry| Arc::clone(&entry.encoder))
            .ok_or_else(|| FormatError::unsupported(format))
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(id, entry)| (id, (entry.decoder.name(), entry.encoder.name()))),
            )
            .finish()
    }
}
