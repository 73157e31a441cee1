// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Remora request pipeline
//!
//! Failures carry the pipeline stage that produced them, the call
//! snapshot, and the response when one was obtained.

use std::fmt;

use thiserror::Error;

use crate::client::CallContext;
use crate::response::Response;

/// Result type alias for component-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for client-level operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStage {
    /// Body/query construction failed before any network activity
    Format,
    /// Transport rejected, or the response status was outside 2xx
    Transport,
    /// Caller-supplied parser rejected the decoded payload
    Parser,
    /// Decoding the response body itself failed
    Decode,
}

impl ErrorStage {
    /// Numeric stage marker (0=format, 1=transport, 2=parser, 3=decode)
    pub fn depth(&self) -> u8 {
        match self {
            ErrorStage::Format => 0,
            ErrorStage::Transport => 1,
            ErrorStage::Parser => 2,
            ErrorStage::Decode => 3,
        }
    }
}

impl fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorStage::Format => "format",
            ErrorStage::Transport => "transport",
            ErrorStage::Parser => "parser",
            ErrorStage::Decode => "decode",
        };
        write!(f, "{}", name)
    }
}

/// Pipeline failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Body or query construction failed
    #[error("Format error: {0}")]
    Format(String),

    /// Transport failed before a response was obtained
    #[error("Network error: {0}")]
    Network(String),

    /// Response obtained with a status outside [200, 299]
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Caller-supplied parser rejected the payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response body decoding failed
    #[error("Decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Error::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode(msg.into())
    }

    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> ErrorStage {
        match self {
            Error::Format(_) => ErrorStage::Format,
            Error::Network(_) | Error::Http { .. } => ErrorStage::Transport,
            Error::Parse(_) => ErrorStage::Parser,
            Error::Decode(_) => ErrorStage::Decode,
        }
    }

    /// Check if this is a network error (no response obtained)
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Check if this is an HTTP-level error (non-2xx response)
    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// The failure message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Error::Format(m)
            | Error::Network(m)
            | Error::Parse(m)
            | Error::Decode(m) => m,
            Error::Http { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

/// Error produced by a client call
///
/// Wraps the triggering [`Error`] together with the call snapshot and the
/// response, when one was obtained. Stored in the client's last-error slot
/// after every failing call.
#[derive(Error, Debug, Clone)]
#[error("{error}")]
pub struct ApiError {
    /// The triggering pipeline failure
    pub error: Error,
    /// Snapshot of the call working state at the time of failure
    pub call: CallContext,
    /// The unified response, when one was obtained
    pub response: Option<Response>,
}

impl ApiError {
    /// Create a new call error
    pub fn new(error: Error, call: CallContext, response: Option<Response>) -> Self {
        Self {
            error,
            call,
            response,
        }
    }

    /// The pipeline stage that failed
    pub fn stage(&self) -> ErrorStage {
        self.error.stage()
    }

    /// Numeric stage marker (0=format, 1=transport, 2=parser, 3=decode)
    pub fn depth(&self) -> u8 {
        self.stage().depth()
    }

    /// HTTP status of the call, or -1 when no response was obtained
    pub fn status_code(&self) -> i32 {
        match (&self.error, &self.response) {
            (Error::Http { status, .. }, _) => i32::from(*status),
            (_, Some(response)) => i32::from(response.status),
            (_, None) => -1,
        }
    }

    /// URL the failing call was issued against
    pub fn url(&self) -> &str {
        &self.call.url
    }

    /// The failure message
    pub fn message(&self) -> &str {
        self.error.message()
    }

    /// Check if the failure happened before any network activity
    pub fn is_local(&self) -> bool {
        matches!(self.stage(), ErrorStage::Format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn test_stage_depth() {
        assert_eq!(ErrorStage::Format.depth(), 0);
        assert_eq!(ErrorStage::Transport.depth(), 1);
        assert_eq!(ErrorStage::Parser.depth(), 2);
        assert_eq!(ErrorStage::Decode.depth(), 3);
    }

    #[test]
    fn test_error_stage_mapping() {
        assert_eq!(Error::format("x").stage(), ErrorStage::Format);
        assert_eq!(Error::network("x").stage(), ErrorStage::Transport);
        assert_eq!(Error::http(404, "Not Found").stage(), ErrorStage::Transport);
        assert_eq!(Error::parse("x").stage(), ErrorStage::Parser);
        assert_eq!(Error::decode("x").stage(), ErrorStage::Decode);
    }

    #[test]
    fn test_api_error_status() {
        let call = CallContext::new(Method::Get, "/users");

        let network = ApiError::new(Error::network("refused"), call.clone(), None);
        assert_eq!(network.status_code(), -1);
        assert!(network.error.is_network());

        let http = ApiError::new(Error::http(404, "Not Found"), call, None);
        assert_eq!(http.status_code(), 404);
        assert_eq!(http.message(), "Not Found");
    }

    #[test]
    fn test_api_error_url() {
        let call = CallContext::new(Method::Get, "https://api.test/users");
        let err = ApiError::new(Error::format("bad payload"), call, None);
        assert_eq!(err.url(), "https://api.test/users");
        assert!(err.is_local());
    }
}
