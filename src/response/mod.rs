// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response side of the pipeline
//!
//! The unified cross-transport response view, body decoding into typed
//! payloads, date-field hydration, and document parsing.

mod dates;
mod decode;
mod document;
mod unified;

pub use dates::{hydrate_date_fields, parse_date};
pub use decode::{decode_body, ByteStream, Decoded, ResponseType};
pub use document::{Document, NodeRef};
pub use unified::{failure_message, Response};
