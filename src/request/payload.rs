// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request payload and wire body types

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use super::QueryParams;
use crate::error::{Error, Result};

/// Application payload handed to the pipeline
///
/// A closed union of every shape the body formatter understands; the
/// formatter matches it exhaustively, so no call site needs to inspect a
/// dynamic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Pre-rendered text body; JSON/XML content type is inferred from
    /// its wrapping when none is set
    Text(String),
    /// Raw binary view
    Binary(Bytes),
    /// Multipart form container, passed through unchanged
    Form(FormData),
    /// File list, wrapped into a multipart form under field name `files`
    Files(Vec<FilePart>),
    /// Structured data, serialized as JSON
    Data(Value),
    /// Query-parameter container, merged into the query set for
    /// non-body methods
    Query(QueryParams),
}

impl Payload {
    /// Serialize any `Serialize` value into a structured payload
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::format(format!("unserializable payload: {}", e)))?;
        Ok(Payload::Data(value))
    }

    /// Short shape name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Binary(_) => "binary",
            Payload::Form(_) => "form",
            Payload::Files(_) => "files",
            Payload::Data(_) => "data",
            Payload::Query(_) => "query",
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<Bytes> for Payload {
    fn from(b: Bytes) -> Self {
        Payload::Binary(b)
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Data(v)
    }
}

impl From<QueryParams> for Payload {
    fn from(q: QueryParams) -> Self {
        Payload::Query(q)
    }
}

impl From<FormData> for Payload {
    fn from(f: FormData) -> Self {
        Payload::Form(f)
    }
}

/// Wire-ready request body produced by the formatter
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Text body (JSON, XML, urlencoded, plain)
    Text(String),
    /// Binary body
    Binary(Bytes),
    /// Multipart form; the transport encodes it and sets the boundary
    Form(FormData),
}

impl Body {
    /// Text content, when this is a text body
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Multipart form container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    /// Append a file field
    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::File(file),
        });
        self
    }

    /// The form fields in insertion order
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Check if the form has no fields
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// One multipart form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// Value of a multipart form field
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FilePart),
}

/// File destined for a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FilePart {
    /// Create a file part
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Set the file's content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
