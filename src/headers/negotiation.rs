// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content-type negotiation helpers

use super::names;
use super::Headers;

/// Charset appended to content types that do not carry one
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Get the content-type header value
pub fn content_type(headers: &Headers) -> Option<String> {
    headers.get(names::CONTENT_TYPE)
}

/// Split the content type into mime type and charset parameter
///
/// Returns `("", None)` when the header is absent; both parts are
/// trimmed. The charset part keeps its `charset=` prefix.
pub fn content_type_and_charset(headers: &Headers) -> (String, Option<String>) {
    match content_type(headers) {
        Some(value) => {
            let mut parts = value.splitn(2, ';');
            let mime = parts.next().unwrap_or("").trim().to_string();
            let charset = parts
                .next()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty());
            (mime, charset)
        }
        None => (String::new(), None),
    }
}

/// Write the content-type header, appending a charset when missing
pub fn set_content_type(headers: &mut Headers, value: &str, charset: &str) {
    let full = if value.contains("charset=") {
        value.to_string()
    } else {
        format!("{}; charset={}", value, charset)
    };
    headers.insert(names::CONTENT_TYPE, &full);
}

/// Check if a content type carries JSON
///
/// Covers suffixed types such as `application/problem+json` and
/// `application/vnd.api+json`, plus `application/javascript`.
pub fn is_json_content_type(content_type: &str) -> bool {
    let lower = content_type.to_ascii_lowercase();
    lower.contains("json") || lower.starts_with("application/javascript")
}

/// Parse the content-length header, if present and numeric
pub fn content_length(headers: &Headers) -> Option<u64> {
    headers
        .get(names::CONTENT_LENGTH)
        .and_then(|v| v.trim().parse().ok())
}
