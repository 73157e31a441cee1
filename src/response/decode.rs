// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response body decoding

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dates::hydrate_date_fields;
use super::document::Document;
use super::unified::Response;
use crate::error::{Error, Result};
use crate::headers::{content_length, content_type_and_charset, is_json_content_type};

/// Requested decoding of the response body
///
/// `None` at the call site means: detect from the content type
/// (JSON-like parses as JSON, everything else decodes as text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// Parse as JSON, with optional date-field hydration
    Json,
    /// Raw body bytes
    Bytes,
    /// Parse as a DOM document
    Document,
    /// Raw byte stream, produced by the transport before body collection
    Stream,
    /// Decoded text
    Text,
}

/// Raw byte-stream handle over a response body
pub struct ByteStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
}

impl ByteStream {
    /// Wrap a transport's body stream
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for ByteStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteStream")
    }
}

/// Decoded response payload
#[derive(Debug)]
pub enum Decoded {
    /// 204, content-length 0, or an empty wire body
    Empty,
    /// Decoded text
    Text(String),
    /// Parsed JSON, dates hydrated
    Json(Value),
    /// Raw bytes
    Bytes(Bytes),
    /// Parsed document
    Document(Document),
    /// Raw byte stream
    Stream(ByteStream),
}

impl Decoded {
    /// Check if the payload is empty (maps to the caller's default value)
    pub fn is_empty_payload(&self) -> bool {
        match self {
            Decoded::Empty => true,
            Decoded::Text(text) => text.is_empty(),
            Decoded::Json(value) => value.is_null(),
            _ => false,
        }
    }

    /// Deserialize a JSON payload into a typed value
    ///
    /// An empty payload yields `None`; non-JSON payloads are a decode
    /// error.
    pub fn json<T: DeserializeOwned>(self) -> Result<Option<T>> {
        match self {
            Decoded::Empty => Ok(None),
            Decoded::Json(Value::Null) => Ok(None),
            Decoded::Json(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| Error::decode(e.to_string())),
            Decoded::Text(text) if text.is_empty() => Ok(None),
            Decoded::Text(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| Error::decode(e.to_string())),
            other => Err(Error::decode(format!(
                "payload is not JSON: {:?}",
                DecodedKind::of(&other)
            ))),
        }
    }

    /// The parsed JSON value, when this is a JSON payload
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Decoded::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The decoded text, when this is a text payload
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum DecodedKind {
    Bytes,
    Document,
    Stream,
}

impl DecodedKind {
    fn of(decoded: &Decoded) -> DecodedKind {
        match decoded {
            Decoded::Bytes(_) => DecodedKind::Bytes,
            Decoded::Document(_) => DecodedKind::Document,
            _ => DecodedKind::Stream,
        }
    }
}

/// Decode a collected response body
///
/// Status 204 and content-length 0 short-circuit to [`Decoded::Empty`];
/// the orchestrator maps empty payloads to the caller's default value.
/// Streamed bodies never reach this function; adapters hand those out
/// before collecting.
pub fn decode_body(
    response: &Response,
    body: Bytes,
    response_type: Option<ResponseType>,
    date_fields: &[String],
) -> Result<Decoded> {
    if response.status == 204 || content_length(&response.headers) == Some(0) {
        return Ok(Decoded::Empty);
    }

    let (mime, _) = content_type_and_charset(&response.headers);
    let effective = response_type.unwrap_or(if is_json_content_type(&mime) {
        ResponseType::Json
    } else {
        ResponseType::Text
    });

    match effective {
        ResponseType::Json => {
            if body.is_empty() {
                return Ok(Decoded::Empty);
            }
            let mut value: Value =
                serde_json::from_slice(&body).map_err(|e| Error::decode(e.to_string()))?;
            hydrate_date_fields(&mut value, date_fields);
            Ok(Decoded::Json(value))
        }
        ResponseType::Bytes => Ok(Decoded::Bytes(body)),
        ResponseType::Document => {
            let text = String::from_utf8_lossy(&body);
            Ok(Decoded::Document(Document::parse(&text)?))
        }
        ResponseType::Stream => Err(Error::decode(
            "streamed bodies are produced by the transport adapter",
        )),
        ResponseType::Text => Ok(Decoded::Text(String::from_utf8_lossy(&body).into_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::Headers;
    use serde_json::json;

    fn response_with(content_type: &str, status: u16) -> Response {
        let mut headers = Headers::new();
        if !content_type.is_empty() {
            headers.insert("content-type", content_type);
        }
        Response::new(status, "", headers)
    }

    #[test]
    fn test_204_is_empty() {
        let response = response_with("application/json", 204);
        let decoded = decode_body(&response, Bytes::from_static(b"ignored"), None, &[]).unwrap();
        assert!(decoded.is_empty_payload());
    }

    #[test]
    fn test_content_length_zero_is_empty() {
        let mut headers = Headers::new();
        headers.insert("content-length", "0");
        let response = Response::new(200, "OK", headers);
        let decoded = decode_body(&response, Bytes::new(), None, &[]).unwrap();
        assert!(matches!(decoded, Decoded::Empty));
    }

    #[test]
    fn test_detects_json_from_content_type() {
        let response = response_with("application/json; charset=utf-8", 200);
        let decoded =
            decode_body(&response, Bytes::from_static(br#"{"id": 7}"#), None, &[]).unwrap();
        assert_eq!(decoded.as_value(), Some(&json!({"id": 7})));
    }

    #[test]
    fn test_defaults_to_text() {
        let response = response_with("text/plain", 200);
        let decoded = decode_body(&response, Bytes::from_static(b"hello"), None, &[]).unwrap();
        assert_eq!(decoded.as_text(), Some("hello"));
    }

    #[test]
    fn test_requested_json_with_date_fields() {
        let response = response_with("application/json", 200);
        let decoded = decode_body(
            &response,
            Bytes::from_static(br#"[{"creation": "1949-10-1"}]"#),
            Some(ResponseType::Json),
            &["creation".to_string()],
        )
        .unwrap();
        let value = decoded.as_value().unwrap();
        let expected = super::super::dates::parse_date("1949-10-1")
            .unwrap()
            .to_rfc3339();
        assert_eq!(value[0]["creation"], json!(expected));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let response = response_with("application/json", 200);
        let err = decode_body(&response, Bytes::from_static(b"{nope"), None, &[]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_bytes_shape() {
        let response = response_with("application/octet-stream", 200);
        let decoded = decode_body(
            &response,
            Bytes::from_static(b"\x00\x01"),
            Some(ResponseType::Bytes),
            &[],
        )
        .unwrap();
        assert!(matches!(decoded, Decoded::Bytes(b) if b.len() == 2));
    }

    #[test]
    fn test_document_shape() {
        let response = response_with("text/html", 200);
        let decoded = decode_body(
            &response,
            Bytes::from_static(b"<p>hi</p>"),
            Some(ResponseType::Document),
            &[],
        )
        .unwrap();
        match decoded {
            Decoded::Document(doc) => assert_eq!(doc.find("p").unwrap().text_content(), "hi"),
            other => panic!("expected document, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_json() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: u32,
        }
        let decoded = Decoded::Json(json!({"id": 3}));
        let item: Option<Item> = decoded.json().unwrap();
        assert_eq!(item.unwrap().id, 3);
    }

    #[test]
    fn test_typed_json_empty_is_none() {
        let decoded = Decoded::Empty;
        let value: Option<Value> = decoded.json().unwrap();
        assert!(value.is_none());
    }
}
