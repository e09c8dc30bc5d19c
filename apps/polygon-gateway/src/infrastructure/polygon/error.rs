//! Polygon Client Errors
//!
//! Error taxonomy for upstream REST calls: transport failures, non-JSON
//! bodies, HTTP status failures, and errors Polygon reports inside its
//! response envelope. Upstream `error`/`message` text is preserved
//! verbatim inside the error value instead of being matched sentence by
//! sentence.
//!
//! Variants carry owned strings so errors stay `Clone` for test doubles.

use thiserror::Error;

/// An upstream REST call failed.
#[derive(Debug, Clone, Error)]
pub enum PolygonError {
    /// The HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Init(String),

    /// The request never produced a response (DNS, TLS, timeout).
    #[error("error connecting to endpoint ({endpoint}): {message}")]
    Transport {
        /// Request path, without credentials.
        endpoint: String,
        /// Underlying client error text.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("unexpected non-JSON response from endpoint ({endpoint})")]
    Decode {
        /// Request path, without credentials.
        endpoint: String,
    },

    /// The response carried a failing HTTP status with no error envelope.
    #[error("endpoint ({endpoint}) returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Request path, without credentials.
        endpoint: String,
    },

    /// Polygon reported a non-OK status in the response envelope.
    #[error("{status} status received from endpoint ({endpoint}): {message}")]
    Api {
        /// Envelope `status` field, e.g. `ERROR` or `NOT_AUTHORIZED`.
        status: String,
        /// Upstream `error` or `message` text, verbatim.
        message: String,
        /// Request path, without credentials.
        endpoint: String,
    },

    /// Polygon rejected the call for exceeding the per-minute request cap.
    #[error("rate limited by Polygon: {message}")]
    RateLimited {
        /// Upstream rate limit text, verbatim.
        message: String,
    },

    /// The request succeeded but matched no data.
    #[error("{message}")]
    NotFound {
        /// Description of what was missing.
        message: String,
    },
}

impl PolygonError {
    /// Stable machine-readable category, exposed in GraphQL error extensions.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Init(_) | Self::Transport { .. } => "TRANSPORT",
            Self::Decode { .. } => "DECODE",
            Self::Http { .. } | Self::Api { .. } => "UPSTREAM_ERROR",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let api = PolygonError::Api {
            status: "ERROR".to_string(),
            message: "bad".to_string(),
            endpoint: "/v2/x".to_string(),
        };
        assert_eq!(api.code(), "UPSTREAM_ERROR");

        let decode = PolygonError::Decode {
            endpoint: "/v2/x".to_string(),
        };
        assert_eq!(decode.code(), "DECODE");

        let rate = PolygonError::RateLimited {
            message: "slow down".to_string(),
        };
        assert_eq!(rate.code(), "RATE_LIMITED");
    }

    #[test]
    fn display_includes_endpoint_and_upstream_text() {
        let err = PolygonError::Api {
            status: "NOT_AUTHORIZED".to_string(),
            message: "upgrade your plan".to_string(),
            endpoint: "/v2/aggs/ticker/AAPL/prev".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("NOT_AUTHORIZED"));
        assert!(text.contains("/v2/aggs/ticker/AAPL/prev"));
        assert!(text.contains("upgrade your plan"));
    }
}
