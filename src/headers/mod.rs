// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header layer for the Remora pipeline
//!
//! Normalizes read/write access across the three header representations
//! callers and transports use, and derives content-type information.

mod container;
mod negotiation;

pub use container::Headers;
pub use negotiation::{
    content_length, content_type, content_type_and_charset, is_json_content_type,
    set_content_type, DEFAULT_CHARSET,
};

/// Common HTTP headers
pub mod names {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_DISPOSITION: &str = "content-disposition";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const CONTENT_TYPE: &str = "content-type";
}
