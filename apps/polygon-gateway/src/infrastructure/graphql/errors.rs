//! GraphQL Error Mapping
//!
//! Every failure surfaces as a field-level GraphQL error so one failed
//! field never sinks its siblings. Each error carries a stable `code`
//! extension clients can branch on without parsing message text.
//!
//! # Codes
//!
//! - `INVALID_ARGUMENT`: rejected before any network call
//! - `TRANSPORT`: the request never produced a response
//! - `DECODE`: the response body was not usable JSON
//! - `UPSTREAM_ERROR`: Polygon reported a failure
//! - `RATE_LIMITED`: the free-tier per-minute cap was hit
//! - `NOT_FOUND`: the request succeeded but matched no data

use async_graphql::ErrorExtensions;

use crate::domain::InvalidParameter;
use crate::infrastructure::polygon::PolygonError;

impl ErrorExtensions for PolygonError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl ErrorExtensions for InvalidParameter {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", "INVALID_ARGUMENT"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn code_of(err: &async_graphql::Error) -> Option<String> {
        let extensions = err.extensions.as_ref()?;
        match extensions.get("code") {
            Some(Value::String(code)) => Some(code.clone()),
            _ => None,
        }
    }

    #[test]
    fn polygon_errors_carry_code_extension() {
        let err = PolygonError::RateLimited {
            message: "please wait".to_string(),
        }
        .extend();
        assert_eq!(code_of(&err).as_deref(), Some("RATE_LIMITED"));
        assert!(err.message.contains("please wait"));
    }

    #[test]
    fn validation_errors_carry_invalid_argument_code() {
        let err = InvalidParameter::MultiplierTooSmall.extend();
        assert_eq!(code_of(&err).as_deref(), Some("INVALID_ARGUMENT"));
    }
}
