// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request methods

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// HTTP request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
}

impl Method {
    /// Uppercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Delete => "DELETE",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }

    /// Check if the method carries a request body
    ///
    /// For the other methods a payload is merged into query parameters
    /// instead.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Patch | Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DELETE" => Ok(Method::Delete),
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            "PATCH" => Ok(Method::Patch),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            other => Err(Error::format(format!("unknown method: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_body() {
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
        assert!(Method::Patch.allows_body());
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
        assert!(!Method::Head.allows_body());
        assert!(!Method::Options.allows_body());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
        assert!("TRACE".parse::<Method>().is_err());
    }
}
