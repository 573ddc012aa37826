//! Endpoint descriptor

use crate::types::Method;
use std::borrow::Cow;
use std::fmt;

/// One REST endpoint: an HTTP method and a path template
///
/// Paths may contain `:name` placeholders that are filled from
/// [`crate::Payload::path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method
    pub method: Method,
    /// Path template, relative to the configured base URL
    pub path: Cow<'static, str>,
}

impl Endpoint {
    /// Endpoint with a static path template
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path: Cow::Borrowed(path),
        }
    }

    /// Endpoint built at runtime, e.g. from CLI arguments
    pub fn custom(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: Cow::Owned(path.into()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
