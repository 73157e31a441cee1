// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Uniform access over the three header representations

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Header container
///
/// Callers may hand the pipeline ordered key/value pairs, a native
/// [`HeaderMap`], or a plain dictionary; every component reads and writes
/// through this type so none of them depends on the concrete shape. Key
/// comparison is case-insensitive in all three representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Headers {
    /// Ordered list of key/value pairs
    Pairs(Vec<(String, String)>),
    /// Native header map
    Map(HeaderMap),
    /// Plain key-keyed dictionary
    Dict(HashMap<String, String>),
}

impl Headers {
    /// Create an empty pair-list container
    pub fn new() -> Self {
        Headers::Pairs(Vec::new())
    }

    /// Get a header value, case-insensitively
    pub fn get(&self, name: &str) -> Option<String> {
        match self {
            Headers::Pairs(pairs) => pairs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.clone()),
            Headers::Map(map) => map
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
            Headers::Dict(dict) => dict
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.clone()),
        }
    }

    /// Set a header value; `None` removes the entry
    ///
    /// An existing key of any case is reused, otherwise the key is added
    /// in the representation's natural form. Names a `HeaderMap` cannot
    /// represent are dropped silently.
    pub fn set(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.insert(name, value),
            None => self.remove(name),
        }
    }

    /// Insert or overwrite a header value
    pub fn insert(&mut self, name: &str, value: &str) {
        match self {
            Headers::Pairs(pairs) => {
                if let Some(entry) = pairs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
                    entry.1 = value.to_string();
                } else {
                    pairs.push((name.to_string(), value.to_string()));
                }
            }
            Headers::Map(map) => {
                if let (Ok(name), Ok(value)) =
                    (HeaderName::try_from(name), HeaderValue::try_from(value))
                {
                    map.insert(name, value);
                }
            }
            Headers::Dict(dict) => {
                let existing = dict
                    .keys()
                    .find(|k| k.eq_ignore_ascii_case(name))
                    .cloned();
                match existing {
                    Some(key) => {
                        dict.insert(key, value.to_string());
                    }
                    None => {
                        dict.insert(name.to_string(), value.to_string());
                    }
                }
            }
        }
    }

    /// Remove a header, case-insensitively
    pub fn remove(&mut self, name: &str) {
        match self {
            Headers::Pairs(pairs) => pairs.retain(|(k, _)| !k.eq_ignore_ascii_case(name)),
            Headers::Map(map) => {
                map.remove(name);
            }
            Headers::Dict(dict) => {
                let existing = dict
                    .keys()
                    .find(|k| k.eq_ignore_ascii_case(name))
                    .cloned();
                if let Some(key) = existing {
                    dict.remove(&key);
                }
            }
        }
    }

    /// Check for a header, case-insensitively
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            Headers::Pairs(pairs) => pairs.len(),
            Headers::Map(map) => map.len(),
            Headers::Dict(dict) => dict.len(),
        }
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the entries as key/value pairs
    pub fn iter(&self) -> Vec<(String, String)> {
        match self {
            Headers::Pairs(pairs) => pairs.clone(),
            Headers::Map(map) => map
                .iter()
                .filter_map(|(k, v)| {
                    v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string()))
                })
                .collect(),
            Headers::Dict(dict) => dict.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    /// Overlay every entry of `other` onto this container
    pub fn merge_from(&mut self, other: &Headers) {
        for (name, value) in other.iter() {
            self.insert(&name, &value);
        }
    }
}

impl Default for Headers {
    fn default() -> Self {
        Headers::new()
    }
}

impl From<HeaderMap> for Headers {
    fn from(map: HeaderMap) -> Self {
        Headers::Map(map)
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(dict: HashMap<String, String>) -> Self {
        Headers::Dict(dict)
    }
}

impl From<Vec<(String, String)>> for Headers {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Headers::Pairs(pairs)
    }
}

impl From<&[(&str, &str)]> for Headers {
    fn from(pairs: &[(&str, &str)]) -> Self {
        Headers::Pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
