//! Parameter Validation Errors
//!
//! Every rejection a request parameter can produce before the gateway
//! touches the network. Messages mirror the bounds Polygon documents for
//! its free-tier endpoints.

use thiserror::Error;

/// A request parameter failed local validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    /// A required string parameter was empty.
    #[error("'{0}' should be non-empty")]
    Empty(&'static str),

    /// A symbol parameter contained a path-breaking `/`.
    #[error("'{0}' should not include '/'")]
    ContainsSlash(&'static str),

    /// A date string was not of the form `YYYY-MM-DD`.
    #[error("date '{0}' should be of format 'YYYY-MM-DD'")]
    DateFormat(String),

    /// The aggregate window multiplier was below 1.
    #[error("timespan 'multiplier' should be at least 1")]
    MultiplierTooSmall,

    /// The aggregate query limit was outside Polygon's documented bounds.
    #[error("'limit' should be between 1 and 50000, got {0}")]
    LimitOutOfRange(u32),

    /// The aggregate window ends before it starts.
    #[error("'to' should be a date that occurs on or after 'from'")]
    WindowInverted,

    /// An option strike price was outside the encodable OCC range.
    #[error("'strike' price should be between $0 and $99999.999")]
    StrikeOutOfRange,

    /// An option expiration cannot be encoded as a two-digit OCC year.
    #[error("'expiration' date should be in the 21st century")]
    ExpirationCentury,
}
