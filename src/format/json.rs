//! JSON format support, delegating the grammar to `serde_json`.

use serde_json::Value as JsonValue;

use super::{Decoder, Encoder, text_input};
use crate::error::FormatError;
use crate::value::{Mapping, Value};

const NAME: &str = "JSON";

/// JSON codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json {
    pretty: bool,
}

impl Json {
    /// Indented output (the default).
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Single-line output.
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for Json {
    fn default() -> Self {
        Self::pretty()
    }
}

impl Decoder for Json {
    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, input: &[u8]) -> Result<Value, FormatError> {
        let content = text_input(NAME, input)?;
        let parsed: JsonValue = serde_json::from_str(content)
            .map_err(|e| FormatError::syntax(NAME, e.to_string()))?;
        Ok(from_json(parsed))
    }
}

impl Encoder for Json {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        if let Some((at, f)) = value.find_non_finite() {
            return Err(FormatError::unrepresentable(
                NAME,
                format!("non-finite number {f} at {at}"),
            ));
        }
        let json = to_json(value);
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        }
        .map_err(|e| FormatError::unrepresentable(NAME, e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

fn from_json(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 above i64::MAX and all fractional numbers
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Sequence(items.into_iter().map(from_json).collect()),
        JsonValue::Object(obj) => Value::Mapping(
            obj.into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<Mapping>(),
        ),
    }
}

/// Callers must have rejected non-finite floats already.
fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Sequence(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Mapping(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
    }
}
