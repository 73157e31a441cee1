// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Observer and hook callback types
//!
//! Observers are side-channel notification (logging, telemetry); none of
//! them changes what a call returns. The error hooks are two-tier: the
//! per-call hook runs first and may return `false` to keep the
//! client-global hook from firing.

use std::sync::Arc;

use serde_json::Value;

use super::CallContext;
use crate::error::ApiError;
use crate::response::{Decoded, Response};

/// Invoked before the transport is handed the call
pub type RequestObserver = Arc<dyn Fn(&CallContext) + Send + Sync>;

/// Invoked on a classified-successful response, before decoding
pub type ResponseObserver = Arc<dyn Fn(&Response) + Send + Sync>;

/// Invoked after every transport round trip, success or failure
///
/// Carries the unified response when one was obtained.
pub type CompleteObserver = Arc<dyn Fn(Option<&Response>) + Send + Sync>;

/// Error notification hook
///
/// The per-call hook's return value decides whether the client-global
/// hook also fires; the global hook's return value is ignored.
pub type ErrorHook = Arc<dyn Fn(&ApiError) -> bool + Send + Sync>;

/// Caller-supplied result parser
///
/// Runs over the decoded payload; `Err` fails the call at the parser
/// stage, `Ok(None)` falls back to the call's default value.
pub type Parser =
    Arc<dyn Fn(&Decoded) -> std::result::Result<Option<Value>, String> + Send + Sync>;
