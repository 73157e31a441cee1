// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body formatting
//!
//! Turns an application payload plus method into a wire-ready body, or
//! merges it into the query set for methods without a body. All failures
//! are returned as format errors; nothing here reaches the network.

use serde_json::Value;

use super::payload::{Body, FormData, Payload};
use super::{Method, QueryParams};
use crate::error::{Error, Result};
use crate::headers::{content_type_and_charset, set_content_type, Headers};

const JSON: &str = "application/json";
const XML: &str = "application/xml";
const URLENCODED: &str = "application/x-www-form-urlencoded";

/// Format a payload for the given method
///
/// Body-carrying methods produce a wire body and may set the content
/// type; the other methods merge the payload into `query` and produce no
/// body. The explicit `content_type` override, when given, is written
/// before any inference runs.
pub fn format_body(
    method: Method,
    headers: &mut Headers,
    query: &mut QueryParams,
    payload: Option<Payload>,
    content_type: Option<&str>,
    charset: &str,
) -> Result<Option<Body>> {
    if let Some(content_type) = content_type {
        set_content_type(headers, content_type, charset);
    }

    let payload = match payload {
        Some(payload) => payload,
        None => return Ok(None),
    };

    if method.allows_body() {
        format_wire_body(headers, payload, charset).map(Some)
    } else {
        merge_into_query(query, payload)?;
        Ok(None)
    }
}

fn format_wire_body(headers: &mut Headers, payload: Payload, charset: &str) -> Result<Body> {
    let (current, _) = content_type_and_charset(headers);

    match payload {
        Payload::Text(text) => {
            if current.is_empty() {
                let trimmed = text.trim();
                if trimmed.starts_with('{') && trimmed.ends_with('}') {
                    set_content_type(headers, JSON, charset);
                } else if trimmed.starts_with('<') && trimmed.ends_with('>') {
                    set_content_type(headers, XML, charset);
                }
            }
            Ok(Body::Text(text))
        }
        Payload::Form(form) => Ok(Body::Form(form)),
        Payload::Data(value) => {
            if current.is_empty() {
                set_content_type(headers, JSON, charset);
            }
            let text = serde_json::to_string(&value)
                .map_err(|e| Error::format(format!("unserializable payload: {}", e)))?;
            Ok(Body::Text(text))
        }
        Payload::Files(files) => {
            let mut form = FormData::new();
            for file in files {
                form = form.file("files", file);
            }
            Ok(Body::Form(form))
        }
        Payload::Binary(bytes) => {
            if current.is_empty() {
                set_content_type(headers, URLENCODED, charset);
            }
            Ok(Body::Binary(bytes))
        }
        Payload::Query(params) => {
            if crate::headers::is_json_content_type(&current) {
                let object: serde_json::Map<String, Value> = params
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                let text = serde_json::to_string(&Value::Object(object))
                    .map_err(|e| Error::format(e.to_string()))?;
                Ok(Body::Text(text))
            } else {
                if current.is_empty() {
                    set_content_type(headers, URLENCODED, charset);
                }
                Ok(Body::Text(params.to_query_string()))
            }
        }
    }
}

fn merge_into_query(query: &mut QueryParams, payload: Payload) -> Result<()> {
    if !query.is_empty() {
        return Err(Error::format("params should not be combined with data"));
    }

    match payload {
        Payload::Query(params) => {
            query.merge(&params);
            Ok(())
        }
        Payload::Data(Value::Object(fields)) => {
            for (name, value) in fields {
                match value {
                    Value::Null => {}
                    Value::String(s) => query.append(name, s),
                    Value::Number(n) => query.append(name, n.to_string()),
                    Value::Bool(b) => query.append(name, b.to_string()),
                    other => {
                        return Err(Error::format(format!(
                            "cannot convert field '{}' ({}) into a query parameter",
                            name,
                            kind_of(&other)
                        )))
                    }
                }
            }
            Ok(())
        }
        other => Err(Error::format(format!(
            "cannot convert {} payload into query parameters",
            other.kind()
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::DEFAULT_CHARSET;
    use bytes::Bytes;
    use serde_json::json;

    fn format(
        method: Method,
        payload: Option<Payload>,
        content_type: Option<&str>,
    ) -> (Result<Option<Body>>, Headers, QueryParams) {
        let mut headers = Headers::new();
        let mut query = QueryParams::new();
        let body = format_body(
            method,
            &mut headers,
            &mut query,
            payload,
            content_type,
            DEFAULT_CHARSET,
        );
        (body, headers, query)
    }

    #[test]
    fn test_post_object_sets_json() {
        let (body, headers, _) = format(
            Method::Post,
            Some(Payload::Data(json!({"name": "Acme", "id": 7}))),
            None,
        );
        let body = body.unwrap().unwrap();
        let text = body.as_text().unwrap();
        assert!(text.contains("\"name\":"));
        assert!(text.contains("\"id\":"));
        assert_eq!(
            headers.get("content-type").as_deref(),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_post_array_with_preset_json_type() {
        let (body, _, _) = format(
            Method::Post,
            Some(Payload::Data(json!([1, 2, 3]))),
            Some("application/json"),
        );
        let body = body.unwrap().unwrap();
        let parsed: Value = serde_json::from_str(body.as_text().unwrap()).unwrap();
        assert_eq!(parsed, json!([1, 2, 3]));
    }

    #[test]
    fn test_post_text_infers_json() {
        let (body, headers, _) = format(
            Method::Put,
            Some(Payload::Text("{\"a\": 1}".to_string())),
            None,
        );
        assert_eq!(body.unwrap().unwrap().as_text(), Some("{\"a\": 1}"));
        assert_eq!(
            headers.get("content-type").as_deref(),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_post_text_infers_xml() {
        let (body, headers, _) = format(
            Method::Post,
            Some(Payload::Text("<company/>".to_string())),
            None,
        );
        assert!(body.unwrap().is_some());
        assert_eq!(
            headers.get("content-type").as_deref(),
            Some("application/xml; charset=utf-8")
        );
    }

    #[test]
    fn test_post_text_keeps_preset_type() {
        let (_, headers, _) = format(
            Method::Post,
            Some(Payload::Text("{\"a\": 1}".to_string())),
            Some("text/plain"),
        );
        assert_eq!(
            headers.get("content-type").as_deref(),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_post_binary_sets_urlencoded() {
        let (body, headers, _) = format(
            Method::Post,
            Some(Payload::Binary(Bytes::from_static(b"\x01\x02"))),
            None,
        );
        assert!(matches!(body.unwrap(), Some(Body::Binary(_))));
        assert_eq!(
            headers.get("content-type").as_deref(),
            Some("application/x-www-form-urlencoded; charset=utf-8")
        );
    }

    #[test]
    fn test_post_files_wrap_into_form() {
        use crate::request::FilePart;
        let files = vec![
            FilePart::new("a.bin", vec![1u8]),
            FilePart::new("b.bin", vec![2u8]),
        ];
        let (body, _, _) = format(Method::Post, Some(Payload::Files(files)), None);
        match body.unwrap().unwrap() {
            Body::Form(form) => {
                assert_eq!(form.parts().len(), 2);
                assert!(form.parts().iter().all(|p| p.name == "files"));
            }
            other => panic!("expected form body, got {:?}", other),
        }
    }

    #[test]
    fn test_get_query_payload_merges() {
        let (body, _, query) = format(
            Method::Get,
            Some(Payload::Query(QueryParams::from(
                &[("id", "2"), ("name", "test")][..],
            ))),
            None,
        );
        assert_eq!(body.unwrap(), None);
        assert_eq!(query.to_query_string(), "id=2&name=test");
    }

    #[test]
    fn test_get_data_object_merges_scalars() {
        let (body, _, query) = format(
            Method::Get,
            Some(Payload::Data(
                json!({"id": 2, "name": "test", "active": true, "gone": null}),
            )),
            None,
        );
        assert_eq!(body.unwrap(), None);
        let serialized = query.to_query_string();
        assert!(serialized.contains("id=2"));
        assert!(serialized.contains("name=test"));
        assert!(serialized.contains("active=true"));
        assert!(!serialized.contains("gone"));
    }

    #[test]
    fn test_get_rejects_payload_with_existing_params() {
        let mut headers = Headers::new();
        let mut query = QueryParams::from(&[("page", "1")][..]);
        let result = format_body(
            Method::Get,
            &mut headers,
            &mut query,
            Some(Payload::Data(json!({"id": 2}))),
            None,
            DEFAULT_CHARSET,
        );
        let err = result.unwrap_err();
        assert!(err.is_format());
        assert!(err.message().contains("params should not be combined"));
    }

    #[test]
    fn test_get_rejects_nested_field() {
        let (result, _, _) = format(
            Method::Get,
            Some(Payload::Data(json!({"filter": {"a": 1}}))),
            None,
        );
        assert!(result.unwrap_err().is_format());
    }

    #[test]
    fn test_get_rejects_binary_payload() {
        let (result, _, _) = format(
            Method::Delete,
            Some(Payload::Binary(Bytes::from_static(b"x"))),
            None,
        );
        let err = result.unwrap_err();
        assert!(err.message().contains("binary"));
    }

    #[test]
    fn test_no_payload_no_body() {
        let (body, headers, query) = format(Method::Get, None, None);
        assert_eq!(body.unwrap(), None);
        assert!(headers.is_empty());
        assert!(query.is_empty());
    }
}
