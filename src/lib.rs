// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Remora - Transport-Agnostic HTTP Request Pipeline
//!
//! One typed request/response core over any HTTP transport. The
//! pipeline handles header normalization, content negotiation, body
//! formatting, configuration merging, URL assembly, response
//! classification and typed decoding; a transport adapter only performs
//! the network call.
//!
//! ## Features
//!
//! - Transport adapters: small contract, reqwest adapter included
//! - Headers: ordered pairs, `HeaderMap`, or plain dictionary - all
//!   case-insensitive
//! - Payloads: text, binary, multipart form, file list, structured
//!   data, query container
//! - Decoding: JSON with date hydration, bytes, DOM document, byte
//!   stream, text
//! - Errors: stage-tagged, with call snapshot and response attached
//! - Hooks: request/response/complete/error observers, notification
//!   only
//!
//! ## Example
//!
//! ```rust,no_run
//! use remora::{ApiClient, Payload, RequestOptions, ReqwestTransport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::builder(ReqwestTransport::new()?)
//!         .base_url("https://api.example.com")
//!         .build();
//!
//!     let decoded = client
//!         .post(
//!             "/companies",
//!             Payload::Data(json!({"name": "Acme"})),
//!             RequestOptions::new(),
//!         )
//!         .await?;
//!     println!("{:?}", decoded.json::<serde_json::Value>()?);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod headers;
pub mod request;
pub mod response;
pub mod transport;

// Re-exports for convenience

// Client
pub use client::{ApiClient, ApiClientBuilder, CallContext, IntoPayload, RequestOptions};
pub use client::{CompleteObserver, ErrorHook, Parser, RequestObserver, ResponseObserver};

// Errors
pub use error::{ApiError, ApiResult, Error, ErrorStage, Result};

// Headers
pub use headers::Headers;

// Request
pub use request::{Body, Config, FilePart, FormData, Method, Payload, QueryParams};

// Response
pub use response::{ByteStream, Decoded, Document, Response, ResponseType};

// Transport
pub use transport::{ReqwestTransport, Transport, TransportOptions};

/// Remora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
