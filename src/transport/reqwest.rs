// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqwest-backed transport adapter

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::multipart;
use reqwest::Client;
use serde_json::Value;

use super::{Transport, TransportOptions};
use crate::error::{Error, Result};
use crate::headers::{names, Headers};
use crate::request::{Body, FormValue, Method};
use crate::response::{decode_body, ByteStream, Decoded, Response, ResponseType};

/// Transport adapter over [`reqwest`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create an adapter with a default client
    pub fn new() -> std::result::Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    /// Create an adapter over an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn to_reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Delete => reqwest::Method::DELETE,
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Patch => reqwest::Method::PATCH,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }

    fn to_multipart(form: crate::request::FormData) -> Result<multipart::Form> {
        let mut out = multipart::Form::new();
        for part in form.parts() {
            match &part.value {
                FormValue::Text(text) => {
                    out = out.text(part.name.clone(), text.clone());
                }
                FormValue::File(file) => {
                    let mut wire = multipart::Part::bytes(file.data.to_vec())
                        .file_name(file.filename.clone());
                    if let Some(content_type) = &file.content_type {
                        wire = wire
                            .mime_str(content_type)
                            .map_err(|e| Error::format(e.to_string()))?;
                    }
                    out = out.part(part.name.clone(), wire);
                }
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Raw = reqwest::Response;

    async fn create_response(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        body: Option<Body>,
        _response_type: Option<ResponseType>,
        options: &TransportOptions,
    ) -> Result<Self::Raw> {
        let mut builder = self.client.request(Self::to_reqwest_method(method), url);

        // A multipart body owns the content type; reqwest sets the boundary
        let multipart_body = matches!(body, Some(Body::Form(_)));
        for (name, value) in headers.iter() {
            if multipart_body && name.eq_ignore_ascii_case(names::CONTENT_TYPE) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        match body {
            Some(Body::Text(text)) => builder = builder.body(text),
            Some(Body::Binary(bytes)) => builder = builder.body(bytes),
            Some(Body::Form(form)) => builder = builder.multipart(Self::to_multipart(form)?),
            None => {}
        }

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))
    }

    fn transform_response(&self, raw: &Self::Raw) -> Response {
        let status = raw.status();
        Response::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            Headers::Map(raw.headers().clone()),
        )
    }

    async fn response_data(
        &self,
        raw: Self::Raw,
        response_type: Option<ResponseType>,
        date_fields: &[String],
    ) -> Result<Decoded> {
        if response_type == Some(ResponseType::Stream) {
            let stream = raw
                .bytes_stream()
                .map(|item| item.map_err(|e| Error::decode(e.to_string())));
            return Ok(Decoded::Stream(ByteStream::new(stream)));
        }

        let response = self.transform_response(&raw);
        let body = raw
            .bytes()
            .await
            .map_err(|e| Error::decode(e.to_string()))?;
        decode_body(&response, body, response_type, date_fields)
    }

    async fn get_json(&self, url: &str) -> Result<Option<Value>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(response.json::<Value>().await.ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_and_decode_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let raw = transport
            .create_response(
                Method::Get,
                &format!("{}/ping", server.uri()),
                &Headers::new(),
                None,
                None,
                &TransportOptions::default(),
            )
            .await
            .unwrap();

        let response = transport.transform_response(&raw);
        assert!(response.ok);
        assert_eq!(response.status, 200);

        let decoded = transport.response_data(raw, None, &[]).await.unwrap();
        assert_eq!(decoded.as_value(), Some(&json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_http_error_resolves() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let raw = transport
            .create_response(
                Method::Get,
                &format!("{}/missing", server.uri()),
                &Headers::new(),
                None,
                None,
                &TransportOptions::default(),
            )
            .await
            .unwrap();
        assert!(!transport.transform_response(&raw).ok);
    }

    #[tokio::test]
    async fn test_network_failure_is_error() {
        let transport = ReqwestTransport::new().unwrap();
        let result = transport
            .create_response(
                Method::Get,
                "http://127.0.0.1:1/unreachable",
                &Headers::new(),
                None,
                None,
                &TransportOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_post_text_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/companies"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(body_string_contains("\"name\""))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let mut headers = Headers::new();
        headers.insert("content-type", "application/json; charset=utf-8");

        let transport = ReqwestTransport::new().unwrap();
        let raw = transport
            .create_response(
                Method::Post,
                &format!("{}/companies", server.uri()),
                &headers,
                Some(Body::Text("{\"name\": \"Acme\"}".to_string())),
                None,
                &TransportOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(transport.transform_response(&raw).status, 201);
    }

    #[tokio::test]
    async fn test_stream_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blob"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64]))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let raw = transport
            .create_response(
                Method::Get,
                &format!("{}/blob", server.uri()),
                &Headers::new(),
                None,
                Some(ResponseType::Stream),
                &TransportOptions::default(),
            )
            .await
            .unwrap();

        let decoded = transport
            .response_data(raw, Some(ResponseType::Stream), &[])
            .await
            .unwrap();
        let mut stream = match decoded {
            Decoded::Stream(stream) => stream,
            other => panic!("expected stream, got {:?}", other),
        };

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(collected.len(), 64);
    }

    #[tokio::test]
    async fn test_get_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"country": "FI"})))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let value = transport
            .get_json(&format!("{}/lookup", server.uri()))
            .await
            .unwrap();
        assert_eq!(value, Some(json!({"country": "FI"})));

        let missing = transport
            .get_json(&format!("{}/nope", server.uri()))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }
}
