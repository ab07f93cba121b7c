//! YAML format support, delegating the grammar to `serde_yaml`.
//!
//! YAML carries more than the generic data model: tags, non-string
//! mapping keys, and multiple documents per stream. Decoding keeps the
//! value under a tag, stringifies scalar keys, and rejects the rest.

use serde_yaml::Value as YamlValue;

use super::{Decoder, Encoder, text_input};
use crate::error::FormatError;
use crate::value::{Mapping, Value};

const NAME: &str = "YAML";

/// YAML codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yaml;

impl Decoder for Yaml {
    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, input: &[u8]) -> Result<Value, FormatError> {
        let content = text_input(NAME, input)?;
        if !has_document(content) {
            return Err(FormatError::Empty { format: NAME });
        }
        let parsed: YamlValue = serde_yaml::from_str(content)
            .map_err(|e| FormatError::syntax(NAME, e.to_string()))?;
        from_yaml(parsed)
    }
}

impl Encoder for Yaml {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        let text = serde_yaml::to_string(&to_yaml(value))
            .map_err(|e| FormatError::unrepresentable(NAME, e.to_string()))?;
        Ok(text.into_bytes())
    }
}

fn from_yaml(value: YamlValue) -> Result<Value, FormatError> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (k, v) in map {
                let key = mapping_key(k)?;
                if out.contains_key(&key) {
                    return Err(FormatError::syntax(
                        NAME,
                        format!("duplicate mapping key '{key}' after conversion"),
                    ));
                }
                out.insert(key, from_yaml(v)?);
            }
            Value::Mapping(out)
        }
        YamlValue::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

/// Whether the stream holds anything besides comments, directives, and
/// document markers.
fn has_document(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            return false;
        }
        match line.strip_prefix("---").or_else(|| line.strip_prefix("...")) {
            Some(rest) => {
                let rest = rest.trim_start();
                !(rest.is_empty() || rest.starts_with('#'))
            }
            None => true,
        }
    })
}

fn mapping_key(key: YamlValue) -> Result<String, FormatError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        YamlValue::Null => Err(FormatError::syntax(NAME, "null mapping key is not supported")),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(FormatError::syntax(
            NAME,
            "collection used as mapping key is not supported",
        )),
    }
}

fn to_yaml(value: &Value) -> YamlValue {
    match value {
        Value::Null => YamlValue::Null,
        Value::Bool(b) => YamlValue::Bool(*b),
        Value::Integer(i) => YamlValue::Number((*i).into()),
        Value::Float(f) => YamlValue::Number((*f).into()),
        Value::String(s) => YamlValue::String(s.clone()),
        Value::Sequence(items) => YamlValue::Sequence(items.iter().map(to_yaml).collect()),
        Value::Mapping(map) => YamlValue::Mapping(
            map.iter()
                .map(|(k, v)| (YamlValue::String(k.clone()), to_yaml(v)))
                .collect(),
        ),
    }
}
