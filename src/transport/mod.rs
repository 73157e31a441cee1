// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport adapter contract
//!
//! The pipeline issues network calls through this trait only; an adapter
//! wraps one concrete HTTP stack. Ships with [`ReqwestTransport`].

mod reqwest;

pub use self::reqwest::ReqwestTransport;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::headers::Headers;
use crate::request::{Body, Method};
use crate::response::{Decoded, Response, ResponseType};

/// Options forwarded opaquely to the transport
///
/// The pipeline never interprets `extra`; it is the merged open options
/// map of the call configuration (abort handles, proxy hints, whatever
/// the adapter understands).
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Per-call timeout, when the adapter supports one
    pub timeout: Option<Duration>,
    /// Adapter-defined options
    pub extra: Map<String, Value>,
}

/// One concrete network stack
///
/// `create_response` must only fail for true transport failures; an HTTP
/// response with any status resolves successfully and is classified by
/// the pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The adapter's native response type
    type Raw: Send;

    /// Perform the network call
    async fn create_response(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        body: Option<Body>,
        response_type: Option<ResponseType>,
        options: &TransportOptions,
    ) -> Result<Self::Raw>;

    /// Normalize the native response to the unified view
    fn transform_response(&self, raw: &Self::Raw) -> Response;

    /// Decode the native response body
    ///
    /// A `Stream` response type hands out the raw byte stream without
    /// collecting the body.
    async fn response_data(
        &self,
        raw: Self::Raw,
        response_type: Option<ResponseType>,
        date_fields: &[String],
    ) -> Result<Decoded>;

    /// One-shot JSON GET bypassing the pipeline, for auxiliary lookups
    ///
    /// Best-effort: non-2xx statuses and unparsable bodies yield `None`.
    async fn get_json(&self, url: &str) -> Result<Option<Value>>;
}
