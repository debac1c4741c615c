//! Submitted values.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;

/// Raw values sent with one request, keyed by field or button name.
///
/// A name missing from the submission means nothing was sent for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` body or query string.
    ///
    /// When a name repeats, the last value wins.
    pub fn from_urlencoded(body: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;
        Ok(pairs.into_iter().collect())
    }

    /// Inserts a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Inserts a value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value sent for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns whether a value was sent for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing was sent.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Submission {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_urlencoded() {
        let s = Submission::from_urlencoded("test=%3Cb%3Ex%3C%2Fb%3E&edit=OK&name=a+b").unwrap();
        assert_eq!(s.get("test"), Some("<b>x</b>"));
        assert_eq!(s.get("name"), Some("a b"));
        assert!(s.contains("edit"));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_from_urlencoded_last_value_wins() {
        let s = Submission::from_urlencoded("a=1&a=2").unwrap();
        assert_eq!(s.get("a"), Some("2"));
    }

    #[test]
    fn test_empty() {
        let s = Submission::from_urlencoded("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.get("edit"), None);
    }

    #[test]
    fn test_from_json_object() {
        let s: Submission = serde_json::from_str(r#"{"edit": "OK", "test": ""}"#).unwrap();
        assert_eq!(s.get("test"), Some(""));
        assert!(s.contains("edit"));
    }

    #[test]
    fn test_collect_pairs() {
        let s: Submission = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(s.get("b"), Some("2"));
    }
}
