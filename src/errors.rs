// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error taxonomy for backend calls
//!
//! Transport failures, non-2xx responses, undecodable bodies and
//! backend-reported `success: false` envelopes are kept as distinct variants
//! so callers (and tests) can tell them apart.

use crate::constants::limits::BODY_SNIPPET_CHARS;

/// Error returned by the HTTP client, services and repositories
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or other transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body could not be decoded into the expected model
    #[error("Failed to decode response: {source} (body: {body})")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend returned `success: false`
    #[error("Backend rejected request: {0}")]
    Backend(String),

    /// Endpoint path could not be joined onto the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            body: snippet(body),
        }
    }

    pub fn decode(source: serde_json::Error, body: &str) -> Self {
        ApiError::Decode {
            source,
            body: snippet(body),
        }
    }

    /// HTTP status code for `Status` errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Transport, decode or envelope failure, the only kinds a read may
    /// degrade to a default value on. A non-2xx status never qualifies.
    pub fn allows_soft_fallback(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Decode { .. } | ApiError::Backend(_)
        )
    }

    /// Short label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::Encode(_) => "encode",
            ApiError::Backend(_) => "backend",
            ApiError::InvalidUrl(_) => "url",
        }
    }
}

/// Truncate a body for error values and logs
pub(crate) fn snippet(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_CHARS {
        body.to_string()
    } else {
        let cut: String = body.chars().take(BODY_SNIPPET_CHARS).collect();
        format!("{}...", cut)
    }
}
