// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Query parameter set

use url::form_urlencoded;

/// Ordered query parameter set
///
/// Keeps insertion order; duplicate names are allowed, matching how
/// repeated query keys travel on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Append every entry of another set
    pub fn merge(&mut self, other: &QueryParams) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.entries.iter()
    }

    /// Serialize to an urlencoded query string, no leading `?`
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl From<&[(&str, &str)]> for QueryParams {
    fn from(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let mut params = QueryParams::new();
        params.append("id", "2");
        params.append("name", "test");
        assert_eq!(params.to_query_string(), "id=2&name=test");
    }

    #[test]
    fn test_query_string_encoding() {
        let mut params = QueryParams::new();
        params.append("q", "a b&c");
        assert_eq!(params.to_query_string(), "q=a+b%26c");
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut params = QueryParams::new();
        params.append("a", "1");
        let other = QueryParams::from(&[("b", "2"), ("c", "3")][..]);
        params.merge(&other);
        assert_eq!(params.len(), 3);
        assert_eq!(params.to_query_string(), "a=1&b=2&c=3");
    }

    #[test]
    fn test_empty() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }
}
