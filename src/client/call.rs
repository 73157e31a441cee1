// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-call working state and options

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use super::hooks::{ErrorHook, Parser};
use crate::error::ErrorStage;
use crate::headers::Headers;
use crate::request::{Body, Config, Method, Payload, QueryParams};
use crate::response::ResponseType;

/// Live working state of one request
///
/// Created when `request` starts, threaded through the pipeline, and
/// snapshotted into the error when a stage fails. Discarded afterwards.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Request method
    pub method: Method,
    /// Requested path, replaced by the assembled URL before dispatch
    pub url: String,
    /// Effective headers for the call
    pub headers: Headers,
    /// Assembled query parameters
    pub query: QueryParams,
    /// Formatted wire body, when one was produced
    pub body: Option<Body>,
    /// Requested response decoding
    pub response_type: Option<ResponseType>,
    /// Stage that failed, when the call did
    pub failed_stage: Option<ErrorStage>,
}

impl CallContext {
    /// Create the working state for a request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            query: QueryParams::new(),
            body: None,
            response_type: None,
            failed_stage: None,
        }
    }

    /// Numeric marker of the failing stage, when the call failed
    pub fn depth(&self) -> Option<u8> {
        self.failed_stage.map(|stage| stage.depth())
    }
}

/// Per-call options
///
/// Everything a single call may override or declare: configuration,
/// query entries, decoding, date fields, the empty-payload default, and
/// the side-channel hooks.
#[derive(Clone, Default)]
pub struct RequestOptions {
    /// Configuration merged over the client default
    pub config: Option<Config>,
    /// Query entries assembled into the URL
    pub query: QueryParams,
    /// Requested response decoding; detected from the content type when
    /// absent
    pub response_type: Option<ResponseType>,
    /// Content type written before body formatting runs
    pub content_type: Option<String>,
    /// JSON field names hydrated as dates during decoding
    pub date_fields: Vec<String>,
    /// Returned when the call succeeds with an empty payload
    pub default_value: Option<Value>,
    /// Skip base-URL prefixing for this call
    pub local: bool,
    /// Keep the unified response in the client's last-response slot
    pub keep_response: bool,
    /// Per-call timeout forwarded to the transport
    pub timeout: Option<Duration>,
    /// Caller-supplied result parser
    pub parser: Option<Parser>,
    /// Per-call error hook
    pub on_error: Option<ErrorHook>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge this configuration over the client default
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Add a query entry
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.append(name, value);
        self
    }

    /// Request a response decoding
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Override the request content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Declare JSON fields to hydrate as dates
    pub fn date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Value returned when the call succeeds with an empty payload
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Skip base-URL prefixing
    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }

    /// Keep the unified response on the client
    pub fn keep_response(mut self) -> Self {
        self.keep_response = true;
        self
    }

    /// Set a per-call timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Install a result parser
    pub fn parser(mut self, parser: Parser) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Install a per-call error hook
    pub fn on_error(mut self, hook: ErrorHook) -> Self {
        self.on_error = Some(hook);
        self
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("config", &self.config)
            .field("query", &self.query)
            .field("response_type", &self.response_type)
            .field("content_type", &self.content_type)
            .field("date_fields", &self.date_fields)
            .field("default_value", &self.default_value)
            .field("local", &self.local)
            .field("keep_response", &self.keep_response)
            .field("timeout", &self.timeout)
            .field("parser", &self.parser.as_ref().map(|_| "…"))
            .field("on_error", &self.on_error.as_ref().map(|_| "…"))
            .finish()
    }
}

/// Payload shorthand accepted by the verb methods
pub trait IntoPayload {
    fn into_payload(self) -> Option<Payload>;
}

impl IntoPayload for Option<Payload> {
    fn into_payload(self) -> Option<Payload> {
        self
    }
}

impl IntoPayload for Payload {
    fn into_payload(self) -> Option<Payload> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_context_depth() {
        let mut call = CallContext::new(Method::Get, "/x");
        assert_eq!(call.depth(), None);
        call.failed_stage = Some(ErrorStage::Parser);
        assert_eq!(call.depth(), Some(2));
    }

    #[test]
    fn test_options_builder() {
        let options = RequestOptions::new()
            .query("id", "2")
            .response_type(ResponseType::Json)
            .date_fields(["creation"])
            .default_value(json!([]))
            .local();
        assert_eq!(options.query.len(), 1);
        assert_eq!(options.response_type, Some(ResponseType::Json));
        assert_eq!(options.date_fields, vec!["creation".to_string()]);
        assert!(options.local);
        assert!(!options.keep_response);
    }
}
