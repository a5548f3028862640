//! Caller-supplied option bags.
//!
//! # Design
//! The remote API accepts the same option in several shapes (a bare integer,
//! a list, a comma-separated string), so `OptionValue` keeps whatever the
//! caller gave and leaves the decision to the validator. `Options` is an
//! ordered list rather than a map because the query string preserves
//! insertion order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single option value, as supplied by the caller.
///
/// Deserializing from JSON picks the first matching shape; anything that is
/// not a boolean, integer, integer list or string lands in `Json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    IntList(Vec<i64>),
    Str(String),
    Json(serde_json::Value),
}

impl OptionValue {
    /// Short description of the shape, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Int(_) => "integer",
            OptionValue::IntList(_) => "integer list",
            OptionValue::Str(_) => "string",
            OptionValue::Json(_) => "json",
        }
    }

    /// Query-string values for an option that passes through unvalidated.
    /// Lists expand to one value per element, so the key repeats; an empty
    /// list drops the key.
    pub(crate) fn render(&self) -> Vec<String> {
        match self {
            OptionValue::Bool(b) => vec![b.to_string()],
            OptionValue::Int(n) => vec![n.to_string()],
            OptionValue::IntList(ns) => ns.iter().map(i64::to_string).collect(),
            OptionValue::Str(s) => vec![s.clone()],
            OptionValue::Json(serde_json::Value::Array(items)) => {
                items.iter().map(render_json_scalar).collect()
            }
            OptionValue::Json(v) => vec![render_json_scalar(v)],
        }
    }
}

/// Strings verbatim, numbers and booleans in their JSON text, anything else
/// (null, objects, nested arrays) as an empty value.
fn render_json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn join_ints(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<Vec<i64>> for OptionValue {
    fn from(value: Vec<i64>) -> Self {
        OptionValue::IntList(value)
    }
}

impl From<&[i64]> for OptionValue {
    fn from(value: &[i64]) -> Self {
        OptionValue::IntList(value.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for OptionValue {
    fn from(value: [i64; N]) -> Self {
        OptionValue::IntList(value.to_vec())
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(OptionValue::Json(value))
    }
}

/// An ordered option bag for one request.
///
/// ```
/// use wikia_core::Options;
///
/// let options = Options::new().with("limit", 10).with("namespaces", [0, 14]);
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Options::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace an option. Replacing keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.set(k, v);
        }
        options
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = Options;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of option names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Options, A::Error> {
                let mut options = Options::new();
                while let Some((key, value)) = map.next_entry::<String, OptionValue>()? {
                    options.set(key, value);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}
