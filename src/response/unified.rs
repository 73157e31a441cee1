// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport-independent response view

use serde_json::Value;

use crate::headers::Headers;

/// Unified response
///
/// The single cross-transport shape every classification and decoding
/// step operates on. Adapters produce it from their native response via
/// `Transport::transform_response`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Response headers
    pub headers: Headers,
    /// True iff status is in [200, 299]
    pub ok: bool,
    /// Status code
    pub status: u16,
    /// Status reason phrase; may be empty
    pub status_text: String,
}

impl Response {
    /// Create a response view; `ok` is derived from the status
    pub fn new(status: u16, status_text: impl Into<String>, headers: Headers) -> Self {
        Self {
            headers,
            ok: (200..=299).contains(&status),
            status,
            status_text: status_text.into(),
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.ok
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status)
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name)
    }
}

/// Derive a failure message for a non-2xx response
///
/// Probes the body as JSON for a `message` or `title` field (problem
/// details style); falls back to the status text, then to "Unknown".
/// Probe failures are swallowed.
pub fn failure_message(response: &Response, body: &[u8]) -> String {
    let extracted = serde_json::from_slice::<Value>(body).ok().and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("title"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    });

    extracted
        .filter(|m| !m.is_empty())
        .or_else(|| {
            let text = response.status_text.trim();
            if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            }
        })
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_range() {
        assert!(Response::new(200, "OK", Headers::new()).ok);
        assert!(Response::new(204, "No Content", Headers::new()).ok);
        assert!(Response::new(299, "", Headers::new()).ok);
        assert!(!Response::new(199, "", Headers::new()).ok);
        assert!(!Response::new(301, "Moved", Headers::new()).ok);
        assert!(!Response::new(404, "Not Found", Headers::new()).ok);
    }

    #[test]
    fn test_failure_message_from_title() {
        let response = Response::new(404, "", Headers::new());
        let message = failure_message(&response, br#"{"title":"Not Found"}"#);
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn test_failure_message_prefers_body_message() {
        let response = Response::new(400, "Bad Request", Headers::new());
        let message = failure_message(&response, br#"{"message":"name is required"}"#);
        assert_eq!(message, "name is required");
    }

    #[test]
    fn test_failure_message_falls_back_to_status_text() {
        let response = Response::new(500, "Internal Server Error", Headers::new());
        let message = failure_message(&response, b"<html>oops</html>");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn test_failure_message_unknown() {
        let response = Response::new(502, "", Headers::new());
        assert_eq!(failure_message(&response, b""), "Unknown");
    }
}
