// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request orchestration
//!
//! [`ApiClient`] sequences the pipeline for one call: merge
//! configuration, format the body, assemble the URL, delegate to the
//! transport, classify, decode, and map empty payloads to the declared
//! default. Every failure is returned as an [`ApiError`] and recorded in
//! the client's last-error slot; observer hooks are notified out of
//! band.

mod call;
mod hooks;

pub use call::{CallContext, IntoPayload, RequestOptions};
pub use hooks::{CompleteObserver, ErrorHook, Parser, RequestObserver, ResponseObserver};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult, Error};
use crate::headers::{names, Headers, DEFAULT_CHARSET};
use crate::request::{append_query, build_url, format_body, Config, Method};
use crate::response::{failure_message, Decoded, Response, ResponseType};
use crate::transport::{Transport, TransportOptions};

/// HTTP pipeline client over one transport
///
/// Concurrent calls against one client are independent; the default
/// configuration and the last-error/last-response slots are the only
/// shared state, last write wins.
pub struct ApiClient<T: Transport> {
    transport: T,
    base_url: Option<String>,
    charset: String,
    defaults: RwLock<Config>,
    last_error: RwLock<Option<ApiError>>,
    last_response: RwLock<Option<Response>>,
    on_request: Option<RequestObserver>,
    on_response: Option<ResponseObserver>,
    on_complete: Option<CompleteObserver>,
    on_error: Option<ErrorHook>,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client with default settings
    pub fn new(transport: T) -> Self {
        Self::builder(transport).build()
    }

    /// Start building a client
    pub fn builder(transport: T) -> ApiClientBuilder<T> {
        ApiClientBuilder {
            transport,
            base_url: None,
            charset: DEFAULT_CHARSET.to_string(),
            defaults: Config::new(),
            on_request: None,
            on_response: None,
            on_complete: None,
            on_error: None,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Snapshot of the default configuration
    pub fn defaults(&self) -> Config {
        self.defaults.read().clone()
    }

    /// Replace the default configuration
    pub fn set_defaults(&self, config: Config) {
        *self.defaults.write() = config;
    }

    /// Reset the default configuration to empty
    pub fn reset_defaults(&self) {
        *self.defaults.write() = Config::new();
    }

    /// Error of the most recent call, when it failed
    pub fn last_error(&self) -> Option<ApiError> {
        self.last_error.read().clone()
    }

    /// Response kept by the most recent call that asked for it
    pub fn last_response(&self) -> Option<Response> {
        self.last_response.read().clone()
    }

    /// Write or remove an authorization header
    ///
    /// An empty token removes the header. Targets the given container,
    /// or the client's persistent default headers; writes to the
    /// defaults are visible to every following call.
    pub fn authorize(&self, scheme: &str, token: &str, headers: Option<&mut Headers>) {
        let value = if token.is_empty() {
            None
        } else {
            Some(format!("{} {}", scheme, token))
        };
        match headers {
            Some(headers) => headers.set(names::AUTHORIZATION, value.as_deref()),
            None => self
                .defaults
                .write()
                .headers
                .set(names::AUTHORIZATION, value.as_deref()),
        }
    }

    /// Write a basic authorization header
    pub fn authorize_basic(&self, username: &str, password: &str, headers: Option<&mut Headers>) {
        let encoded = BASE64.encode(format!("{}:{}", username, password));
        self.authorize("Basic", &encoded, headers);
    }

    /// Issue a request through the pipeline
    ///
    /// Exactly one of three things comes back: the decoded payload, the
    /// declared default value (as a JSON payload) for an empty success,
    /// or an [`ApiError`]. A format failure returns before any network
    /// activity.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        *self.last_error.write() = None;

        let defaults = self.defaults.read().clone();
        let effective = Config::merge(&defaults, options.config.as_ref().unwrap_or(&Config::new()));

        let mut call = CallContext::new(method, url);
        call.headers = effective.headers;
        call.query = options.query.clone();
        call.response_type = options.response_type;

        tracing::debug!(%method, url, "dispatching request");

        match format_body(
            method,
            &mut call.headers,
            &mut call.query,
            payload.into_payload(),
            options.content_type.as_deref(),
            &self.charset,
        ) {
            Ok(body) => call.body = body,
            Err(error) => return Err(self.fail(call, error, None, options.on_error.as_ref())),
        }

        if let Some(observer) = &self.on_request {
            observer(&call);
        }

        let target = if options.local {
            url.to_string()
        } else {
            build_url(self.base_url.as_deref(), url)
        };
        call.url = append_query(&target, &call.query);

        let transport_options = TransportOptions {
            timeout: options.timeout,
            extra: effective.options,
        };

        let raw = match self
            .transport
            .create_response(
                method,
                &call.url,
                &call.headers,
                call.body.clone(),
                options.response_type,
                &transport_options,
            )
            .await
        {
            Ok(raw) => raw,
            Err(error) => {
                if let Some(observer) = &self.on_complete {
                    observer(None);
                }
                return Err(self.fail(call, error, None, options.on_error.as_ref()));
            }
        };

        let response = self.transport.transform_response(&raw);
        if let Some(observer) = &self.on_complete {
            observer(Some(&response));
        }

        if !response.ok {
            let probed = match self
                .transport
                .response_data(raw, Some(ResponseType::Text), &[])
                .await
            {
                Ok(decoded) => decoded.as_text().unwrap_or("").to_string(),
                Err(_) => String::new(),
            };
            let message = failure_message(&response, probed.as_bytes());
            let error = Error::http(response.status, message);
            return Err(self.fail(call, error, Some(response), options.on_error.as_ref()));
        }

        if options.keep_response {
            *self.last_response.write() = Some(response.clone());
        }
        if let Some(observer) = &self.on_response {
            observer(&response);
        }

        let decoded = match self
            .transport
            .response_data(raw, options.response_type, &options.date_fields)
            .await
        {
            Ok(decoded) => decoded,
            Err(error) => {
                return Err(self.fail(call, error, Some(response), options.on_error.as_ref()))
            }
        };

        if decoded.is_empty_payload() {
            return Ok(default_result(&options));
        }

        if let Some(parser) = &options.parser {
            return match parser(&decoded) {
                Err(message) => Err(self.fail(
                    call,
                    Error::parse(message),
                    Some(response),
                    options.on_error.as_ref(),
                )),
                Ok(Some(value)) => Ok(Decoded::Json(value)),
                Ok(None) => Ok(default_result(&options)),
            };
        }

        Ok(decoded)
    }

    /// Issue a DELETE request
    pub async fn delete(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Delete, url, payload, options).await
    }

    /// Issue a GET request
    pub async fn get(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Get, url, payload, options).await
    }

    /// Issue a HEAD request
    pub async fn head(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Head, url, payload, options).await
    }

    /// Issue an OPTIONS request
    pub async fn options(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Options, url, payload, options).await
    }

    /// Issue a PATCH request
    pub async fn patch(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Patch, url, payload, options).await
    }

    /// Issue a POST request
    pub async fn post(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Post, url, payload, options).await
    }

    /// Issue a PUT request
    pub async fn put(
        &self,
        url: &str,
        payload: impl IntoPayload,
        options: RequestOptions,
    ) -> ApiResult<Decoded> {
        self.request(Method::Put, url, payload, options).await
    }

    /// One-shot typed JSON GET bypassing the pipeline
    ///
    /// No configuration merge, no observers, no last-error bookkeeping;
    /// the base URL still applies.
    pub async fn get_json<R: DeserializeOwned>(&self, url: &str) -> ApiResult<Option<R>> {
        let full = build_url(self.base_url.as_deref(), url);
        let call = CallContext::new(Method::Get, full.clone());
        match self.transport.get_json(&full).await {
            Ok(Some(value)) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::new(Error::decode(e.to_string()), call, None)),
            Ok(None) => Ok(None),
            Err(error) => Err(ApiError::new(error, call, None)),
        }
    }

    fn fail(
        &self,
        mut call: CallContext,
        error: Error,
        response: Option<Response>,
        per_call: Option<&ErrorHook>,
    ) -> ApiError {
        call.failed_stage = Some(error.stage());
        tracing::warn!(stage = %error.stage(), url = %call.url, %error, "request failed");

        let api_error = ApiError::new(error, call, response);
        *self.last_error.write() = Some(api_error.clone());

        let notify_global = match per_call {
            Some(hook) => hook(&api_error),
            None => true,
        };
        if notify_global {
            if let Some(hook) = &self.on_error {
                hook(&api_error);
            }
        }
        api_error
    }
}

fn default_result(options: &RequestOptions) -> Decoded {
    match &options.default_value {
        Some(value) => Decoded::Json(value.clone()),
        None => Decoded::Empty,
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder<T: Transport> {
    transport: T,
    base_url: Option<String>,
    charset: String,
    defaults: Config,
    on_request: Option<RequestObserver>,
    on_response: Option<ResponseObserver>,
    on_complete: Option<CompleteObserver>,
    on_error: Option<ErrorHook>,
}

impl<T: Transport> ApiClientBuilder<T> {
    /// Base URL prefixed onto relative request paths
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Charset appended to content types the formatter writes
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Default configuration merged under every call
    pub fn defaults(mut self, defaults: Config) -> Self {
        self.defaults = defaults;
        self
    }

    /// Observe calls before dispatch
    pub fn on_request<F>(mut self, observer: F) -> Self
    where
        F: Fn(&CallContext) + Send + Sync + 'static,
    {
        self.on_request = Some(std::sync::Arc::new(observer));
        self
    }

    /// Observe classified-successful responses
    pub fn on_response<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Response) + Send + Sync + 'static,
    {
        self.on_response = Some(std::sync::Arc::new(observer));
        self
    }

    /// Observe every round trip, success or failure
    pub fn on_complete<F>(mut self, observer: F) -> Self
    where
        F: Fn(Option<&Response>) + Send + Sync + 'static,
    {
        self.on_complete = Some(std::sync::Arc::new(observer));
        self
    }

    /// Client-global error hook
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ApiError) -> bool + Send + Sync + 'static,
    {
        self.on_error = Some(std::sync::Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> ApiClient<T> {
        ApiClient {
            transport: self.transport,
            base_url: self.base_url,
            charset: self.charset,
            defaults: RwLock::new(self.defaults),
            last_error: RwLock::new(None),
            last_response: RwLock::new(None),
            on_request: self.on_request,
            on_response: self.on_response,
            on_complete: self.on_complete,
            on_error: self.on_error,
        }
    }
}
