// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request side of the pipeline
//!
//! Method/payload model, body formatting, query and URL assembly, and
//! call configuration with pure merging.

mod config;
mod format;
mod method;
mod payload;
mod query;
mod url;

pub use config::Config;
pub use format::format_body;
pub use method::Method;
pub use payload::{Body, FilePart, FormData, FormPart, FormValue, Payload};
pub use query::QueryParams;
pub use self::url::{append_query, build_url};
