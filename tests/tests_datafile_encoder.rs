//! Encoding data files through DataCoder, and decode/encode round trips.

#![cfg(all(feature = "json", feature = "yaml"))]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use std::sync::Arc;

use datacoder::{DataCoder, Decoder, Encoder, ErrorKind, FormatError, Json, Value};
use helpers::{data_fixture, expected_data};
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case("out.json")]
#[case("out.yaml")]
#[case("out.yml")]
fn test_encode_then_decode_roundtrip(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    let coder = DataCoder::new();

    coder.encode_file(&path, &expected_data()).unwrap();
    assert_eq!(coder.decode_file(&path).unwrap(), expected_data());
}

#[rstest]
#[case("data.json", "copy.yaml")]
#[case("data.yaml", "copy.json")]
fn test_convert_between_formats(#[case] source: &str, #[case] target: &str) {
    let dir = TempDir::new().unwrap();
    let coder = DataCoder::new();

    let value = coder.decode_file(data_fixture(source)).unwrap();
    coder.encode_file(dir.path().join(target), &value).unwrap();
    assert_eq!(
        coder.decode_file(dir.path().join(target)).unwrap(),
        expected_data()
    );
}

#[test]
fn test_encode_replaces_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    std::fs::write(&path, "stale content that is much longer than the new document").unwrap();

    datacoder::encode_file(&path, &Value::from(vec![1, 2])).unwrap();
    assert_eq!(datacoder::decode_file(&path).unwrap(), Value::from(vec![1, 2]));
}

#[test]
fn test_encode_with_empty_path() {
    let err = DataCoder::new().encode_file("", &expected_data()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_encode_unsupported_extension_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.toml");

    let err = DataCoder::new().encode_file(&path, &expected_data()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataFormatInvalid);
    assert_eq!(
        err.format_error(),
        Some(&FormatError::Unsupported("toml".to_string()))
    );
    assert!(!path.exists());
}

#[test]
fn test_encode_non_finite_to_json_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    let value: Value = [("limit", Value::Float(f64::INFINITY))].into_iter().collect();

    let err = DataCoder::new().encode_file(&path, &value).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataFormatInvalid);
    assert!(matches!(
        err.format_error(),
        Some(FormatError::Unrepresentable { format: "JSON", .. })
    ));
    assert!(!path.exists());

    // YAML has a spelling for infinity.
    let yaml_path = dir.path().join("out.yaml");
    DataCoder::new().encode_file(&yaml_path, &value).unwrap();
    assert_eq!(DataCoder::new().decode_file(&yaml_path).unwrap(), value);
}

#[test]
fn test_encode_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let err = DataCoder::new().encode_file(&path, &expected_data()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileWrite);
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_encode_file_as_compact_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.data");
    let mut coder = DataCoder::new();
    let compact = Arc::new(Json::compact());
    coder.register_format("data", compact.clone(), compact);

    coder.encode_file(&path, &Value::from(vec!["a"])).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\"a\"]\n");

    coder.encode_file_as(&path, &Value::from(vec!["a"]), "yaml").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "- a\n");
}

/// Line-oriented toy format: one `key=value` string pair per line.
struct KeyValue;

impl Decoder for KeyValue {
    fn name(&self) -> &'static str {
        "key-value"
    }

    fn decode(&self, input: &[u8]) -> Result<Value, FormatError> {
        let text = std::str::from_utf8(input)
            .map_err(|e| FormatError::syntax("key-value", e.to_string()))?;
        if text.trim().is_empty() {
            return Err(FormatError::Empty {
                format: "key-value",
            });
        }
        text.lines()
            .map(|line| {
                line.split_once('=')
                    .map(|(k, v)| (k.to_string(), Value::from(v)))
                    .ok_or_else(|| FormatError::syntax("key-value", format!("no '=' in {line:?}")))
            })
            .collect()
    }
}

impl Encoder for KeyValue {
    fn name(&self) -> &'static str {
        "key-value"
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        let map = value.as_mapping().ok_or_else(|| {
            FormatError::unrepresentable("key-value", format!("a {}", value.type_name()))
        })?;
        let mut out = String::new();
        for (k, v) in map {
            let v = v.as_str().ok_or_else(|| {
                FormatError::unrepresentable("key-value", format!("non-string value at {k}"))
            })?;
            out.push_str(&format!("{k}={v}\n"));
        }
        Ok(out.into_bytes())
    }
}

#[test]
fn test_registered_custom_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.kv");
    let mut coder = DataCoder::new();
    coder.register_format("kv", Arc::new(KeyValue), Arc::new(KeyValue));

    let value: Value = [("host", "localhost"), ("port", "8080")].into_iter().collect();
    coder.encode_file(&path, &value).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "host=localhost\nport=8080\n"
    );
    assert_eq!(coder.decode_file(&path).unwrap(), value);

    let err = coder.encode_file(&path, &expected_data()).unwrap_err();
    assert!(matches!(
        err.format_error(),
        Some(FormatError::Unrepresentable { .. })
    ));
    assert_eq!(coder.decode_file(&path).unwrap(), value, "failed encode must not touch the file");
}
