//! Generic data structure shared by every format.
//!
//! All codecs decode into and encode from [`Value`]: nested ordered
//! mappings and sequences with scalar leaves.

use indexmap::IndexMap;

/// Ordered mapping with string keys; insertion order is preserved.
pub type Mapping = IndexMap<String, Value>;

/// A decoded data document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Ordered mapping of string keys to values.
    Mapping(Mapping),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as `f64`; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(key)
    }

    /// Look up a position when this value is a sequence.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_sequence()?.get(index)
    }

    /// First non-finite float found in this value, with its location.
    ///
    /// Location is a dotted path of keys and indices, `$` for the root.
    pub fn find_non_finite(&self) -> Option<(String, f64)> {
        fn walk(value: &Value, at: &mut String) -> Option<(String, f64)> {
            match value {
                Value::Float(f) if !f.is_finite() => Some((at.clone(), *f)),
                Value::Sequence(seq) => seq.iter().enumerate().find_map(|(i, item)| {
                    let len = at.len();
                    at.push_str(&format!("[{i}]"));
                    let found = walk(item, at);
                    at.truncate(len);
                    found
                }),
                Value::Mapping(map) => map.iter().find_map(|(key, item)| {
                    let len = at.len();
                    at.push('.');
                    at.push_str(key);
                    let found = walk(item, at);
                    at.truncate(len);
                    found
                }),
                _ => None,
            }
        }

        walk(self, &mut String::from("$"))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        [
            ("name", Value::from("widget")),
            ("count", Value::from(3)),
            ("tags", Value::from(vec!["a", "b"])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let value = sample();
        let keys: Vec<&str> = value
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["name", "count", "tags"]);
    }

    #[test]
    fn test_accessors() {
        let value = sample();
        assert_eq!(value.get("name").and_then(Value::as_str), Some("widget"));
        assert_eq!(value.get("count").and_then(Value::as_i64), Some(3));
        assert_eq!(value.get("count").and_then(Value::as_f64), Some(3.0));
        assert_eq!(
            value.get("tags").and_then(|t| t.get_index(1)),
            Some(&Value::from("b"))
        );
        assert!(value.get("missing").is_none());
        assert!(Value::from(1).get("x").is_none());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn test_find_non_finite_reports_location() {
        let value: Value = [(
            "outer",
            Value::Sequence(vec![Value::Float(1.5), Value::Float(f64::INFINITY)]),
        )]
        .into_iter()
        .collect();

        let (at, found) = value.find_non_finite().expect("should find infinity");
        assert_eq!(at, "$.outer[1]");
        assert!(found.is_infinite());
        assert!(sample().find_non_finite().is_none());
    }
}
