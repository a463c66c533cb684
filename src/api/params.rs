//! Request parameters
//!
//! Ordered parameter maps with nullable scalar values, query string
//! building, strict parameter schemas and field allow-lists.

use super::error::{ApiError, Result};
use serde::Serialize;
use std::fmt;

/// Scalar value of a query or form parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Ordered parameter map.
///
/// A key can be present with a null value: it counts as present for
/// [`ParamSpec`] validation but is never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value in place
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    /// Set a key only when the value is present
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(key, Some(value.into()));
        }
        self
    }

    /// Set a key to an explicit null
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.set(key, None);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<ParamValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// `None` when the key is absent, `Some(None)` when it is present but null
    pub fn get(&self, key: &str) -> Option<Option<&ParamValue>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` on top of `self`; keys in `other` win
    pub fn merged(mut self, other: Params) -> Self {
        for (key, value) in other.entries {
            self.set(key, value);
        }
        self
    }

    /// Non-null entries rendered as strings, in insertion order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.to_string())))
            .collect()
    }

    /// URL-encoded `k=v&k2=v2` without a leading `?`; empty when nothing is set
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Params::new(), |params, (k, v)| params.with(k, v))
    }
}

/// Builds `?k=v&...` for the given params, or an empty string when no
/// parameter has a value
pub fn build_uri_params(params: &Params) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        query
    } else {
        format!("?{}", query)
    }
}

/// Strict schema for an options map: required keys, optional keys, and
/// nothing else.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

impl ParamSpec {
    pub const fn new(required: &'static [&'static str], optional: &'static [&'static str]) -> Self {
        Self { required, optional }
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn optional(&self) -> &'static [&'static str] {
        self.optional
    }

    fn accepts(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }

    /// Validate `params` and return them in schema order
    pub fn resolve(&self, params: Params) -> Result<Params> {
        if let Some(unknown) = params.keys().find(|key| !self.accepts(key)) {
            return Err(ApiError::invalid_options(format!(
                "The option \"{}\" does not exist. Defined options are: {}",
                unknown,
                self.defined().join(", ")
            )));
        }

        let missing: Vec<&str> = self
            .required
            .iter()
            .copied()
            .filter(|key| !params.contains_key(key))
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::invalid_options(format!(
                "The required options {} are missing",
                missing.join(", ")
            )));
        }

        let mut resolved = Params::new();
        for key in self.required.iter().chain(self.optional.iter()) {
            if let Some(value) = params.get(key) {
                resolved.set(*key, value.cloned());
            }
        }
        Ok(resolved)
    }

    fn defined(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.required.iter().chain(self.optional.iter()).copied().collect();
        keys.sort_unstable();
        keys
    }
}

/// Fixed set of field names accepted by a single-field update
#[derive(Debug, Clone, Copy)]
pub struct AllowList(&'static [&'static str]);

impl AllowList {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(&value)
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.0
    }
}

/// Fails with [`ApiError::InvalidField`] unless `value` is in `allowed`
pub fn ensure_allowed(value: &str, allowed: &AllowList) -> Result<()> {
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(ApiError::InvalidField {
            field: value.to_string(),
            allowed: allowed.fields().iter().map(|f| f.to_string()).collect(),
        })
    }
}
