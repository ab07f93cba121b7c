//! Decoder/encoder contract and the built-in formats.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  JSON bytes  │     │  YAML bytes  │     │  custom ...  │
//! └──────┬───────┘     └──────┬───────┘     └──────┬───────┘
//!        ▼                    ▼                    ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │              Decoder / Encoder traits                    │
//! │  - decode(&[u8]) -> Result<Value, FormatError>           │
//! │  - encode(&Value) -> Result<Vec<u8>, FormatError>        │
//! └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Value                            │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "yaml")]
mod yaml;

#[cfg(feature = "json")]
pub use json::Json;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

use crate::error::FormatError;
use crate::value::Value;

/// Turns raw file content into a [`Value`].
pub trait Decoder: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// Decode `input`.
    ///
    /// Every failure of the underlying parser must come back as a
    /// [`FormatError`]; empty input is an error, not an empty value.
    fn decode(&self, input: &[u8]) -> Result<Value, FormatError>;
}

/// Turns a [`Value`] into raw file content.
pub trait Encoder: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// Encode `value`.
    ///
    /// Fails only when the format cannot represent part of `value`.
    fn encode(&self, value: &Value) -> Result<Vec<u8>, FormatError>;
}

/// A decoder and encoder for the same format.
pub trait Codec: Decoder + Encoder {}

impl<T: Decoder + Encoder> Codec for T {}

/// Checks shared by text formats before handing input to a parser.
///
/// Rejects non UTF-8 input and input that is empty or only whitespace.
pub fn text_input<'a>(format: &'static str, input: &'a [u8]) -> Result<&'a str, FormatError> {
    let content = std::str::from_utf8(input)
        .map_err(|e| FormatError::syntax(format, format!("invalid UTF-8: {e}")))?;
    if content.trim().is_empty() {
        return Err(FormatError::Empty { format });
    }
    Ok(content)
}
