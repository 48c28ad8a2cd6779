//! The generic value model every parsed document is normalized into.
//!
//! JSON and YAML documents are deserialized by their own crates and then
//! converted into [`GenericValue`], so the rest of the pipeline only ever
//! matches over one closed set of shapes.

use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// A mapping of property names to values. Keys iterate in sorted order.
pub type Mapping = BTreeMap<String, GenericValue>;

/// One value of a parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericValue {
    Null,
    Bool(bool),
    /// Integers and floats keep their own textual form (`50` vs `1.5`).
    Number(Number),
    String(String),
    Mapping(Mapping),
    Sequence(Vec<GenericValue>),
}

/// The default textual form. Leaf equality in the diff engine builds on this
/// rendering (null aside), so `50` and `"50"` print and compare the same.
impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Null => f.write_str("null"),
            GenericValue::Bool(b) => write!(f, "{}", b),
            GenericValue::Number(n) => write!(f, "{}", n),
            GenericValue::String(s) => f.write_str(s),
            composite => write!(f, "{}", serde_json::Value::from(composite)),
        }
    }
}

impl From<bool> for GenericValue {
    fn from(b: bool) -> Self {
        GenericValue::Bool(b)
    }
}

impl From<i32> for GenericValue {
    fn from(n: i32) -> Self {
        GenericValue::Number(Number::from(n))
    }
}

impl From<i64> for GenericValue {
    fn from(n: i64) -> Self {
        GenericValue::Number(Number::from(n))
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        GenericValue::String(s.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        GenericValue::String(s)
    }
}

impl From<Mapping> for GenericValue {
    fn from(map: Mapping) -> Self {
        GenericValue::Mapping(map)
    }
}

impl From<serde_json::Value> for GenericValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => GenericValue::Null,
            serde_json::Value::Bool(b) => GenericValue::Bool(b),
            serde_json::Value::Number(n) => GenericValue::Number(n),
            serde_json::Value::String(s) => GenericValue::String(s),
            serde_json::Value::Array(items) => {
                GenericValue::Sequence(items.into_iter().map(GenericValue::from).collect())
            }
            serde_json::Value::Object(map) => GenericValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, GenericValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// YAML allows non-string keys (`1: one`, `true: yes`); they are stringified
/// through the key's own textual form. Tags (`!custom value`) are dropped.
impl From<serde_yaml::Value> for GenericValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => GenericValue::Null,
            serde_yaml::Value::Bool(b) => GenericValue::Bool(b),
            serde_yaml::Value::Number(n) => yaml_number(&n),
            serde_yaml::Value::String(s) => GenericValue::String(s),
            serde_yaml::Value::Sequence(items) => {
                GenericValue::Sequence(items.into_iter().map(GenericValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => GenericValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), GenericValue::from(v)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => GenericValue::from(tagged.value),
        }
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => GenericValue::from(other).to_string(),
    }
}

/// `.nan` and `.inf` have no JSON number form and are kept as their YAML text.
fn yaml_number(n: &serde_yaml::Number) -> GenericValue {
    if let Some(i) = n.as_i64() {
        GenericValue::Number(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        GenericValue::Number(Number::from(u))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(GenericValue::Number)
            .unwrap_or_else(|| GenericValue::String(n.to_string()))
    }
}

impl From<&GenericValue> for serde_json::Value {
    fn from(value: &GenericValue) -> Self {
        match value {
            GenericValue::Null => serde_json::Value::Null,
            GenericValue::Bool(b) => serde_json::Value::Bool(*b),
            GenericValue::Number(n) => serde_json::Value::Number(n.clone()),
            GenericValue::String(s) => serde_json::Value::String(s.clone()),
            GenericValue::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            GenericValue::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}
