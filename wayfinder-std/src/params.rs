//! A general-purpose [`Parameters`] implementation.

use std::collections::HashMap;
use url::Url;
use wayfinder_core::Parameters;

/// String parameters, optionally tied to the URI they came from.
///
/// `from_uri` copies the query string into the value map; deep-link path
/// captures are added on top by [`Navigator::handle`](crate::Navigator::handle).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    uri: Option<Url>,
    values: HashMap<String, String>,
}

impl Params {
    /// Empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Look a value up.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The URI these parameters were built from.
    pub fn uri(&self) -> Option<&Url> {
        self.uri.as_ref()
    }

    /// All values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            uri: None,
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Parameters for Params {
    fn from_uri(uri: &Url) -> Self {
        Self {
            values: uri.query_pairs().into_owned().collect(),
            uri: Some(uri.clone()),
        }
    }

    fn user_info(&self) -> Option<&HashMap<String, String>> {
        Some(&self.values)
    }

    fn with_value(self, key: &str, value: &str) -> Self {
        self.with(key, value)
    }
}
