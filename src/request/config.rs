// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Call configuration and merging

use serde_json::{Map, Value};

use crate::headers::Headers;

/// Call configuration
///
/// An open map of named options plus a headers container. A client holds
/// a default configuration; each call may supply an override that is
/// merged against it with [`Config::merge`]. The options map travels to
/// the transport adapter untouched by the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Header container for the call
    pub headers: Headers,
    /// Named options forwarded to the transport
    pub options: Map<String, Value>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the header container
    pub fn with_headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Set a named option
    pub fn with_option(mut self, name: impl Into<String>, value: Value) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Read a named option
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Merge a default configuration with a per-call override
    ///
    /// Pure: neither input is modified. Two levels deep on the options
    /// map: for every non-null default key, an object value is
    /// shallow-merged under a copy of the default object, a scalar value
    /// is copied when the override lacks the key. Keys only the override
    /// defines pass through unchanged. Headers merge by case-insensitive
    /// key identity with the override winning; an empty default keeps
    /// the override's container as-is.
    pub fn merge(default: &Config, overrides: &Config) -> Config {
        let mut options = overrides.options.clone();

        for (key, default_value) in &default.options {
            if default_value.is_null() {
                continue;
            }
            match default_value {
                Value::Object(default_object) => {
                    let mut merged = default_object.clone();
                    if let Some(Value::Object(override_object)) = overrides.options.get(key) {
                        for (k, v) in override_object {
                            merged.insert(k.clone(), v.clone());
                        }
                    }
                    options.insert(key.clone(), Value::Object(merged));
                }
                scalar => {
                    if !options.contains_key(key) {
                        options.insert(key.clone(), scalar.clone());
                    }
                }
            }
        }

        let headers = if default.headers.is_empty() {
            overrides.headers.clone()
        } else {
            let mut headers = default.headers.clone();
            headers.merge_from(&overrides.headers);
            headers
        };

        Config { headers, options }
    }
}
