// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! URL assembly

use super::QueryParams;

/// Join a base URL with a path
///
/// A path that already carries a scheme, or a missing base, passes
/// through unchanged.
pub fn build_url(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) if !path.contains("://") => format!("{}{}", base, path),
        _ => path.to_string(),
    }
}

/// Append a serialized query set to a URL
///
/// Uses `?` as the separator, or `&` when the URL already carries a
/// query string. An empty set leaves the URL untouched.
pub fn append_query(url: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query.to_query_string())
}
