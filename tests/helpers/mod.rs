//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use datacoder::{Mapping, Value};

/// Directory holding plain file fixtures.
pub fn file_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("files")
        .join(name)
}

/// Directory holding encoded data fixtures.
pub fn data_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("data")
        .join(name)
}

/// The value every `data.*` fixture decodes to.
pub fn expected_data() -> Value {
    let mut limits = Mapping::new();
    limits.insert("min".into(), Value::Integer(-1));
    limits.insert("max".into(), Value::Integer(10));

    let mut root = Mapping::new();
    root.insert("name".into(), Value::from("Example"));
    root.insert("version".into(), Value::Integer(2));
    root.insert("enabled".into(), Value::Bool(true));
    root.insert("ratio".into(), Value::Float(0.75));
    root.insert("owner".into(), Value::Null);
    root.insert("tags".into(), Value::from(vec!["alpha", "beta"]));
    root.insert("limits".into(), Value::Mapping(limits));
    Value::Mapping(root)
}

/// Top-level keys of a mapping, in order.
pub fn keys(value: &Value) -> Vec<&str> {
    value
        .as_mapping()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
