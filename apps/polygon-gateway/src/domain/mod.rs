//! Domain Layer - Request parameter types and validation.
//!
//! Every parameter a client can send is modeled here as a type whose
//! constructor enforces the upstream contract (date formats, symbol
//! shape, window bounds). A request that fails validation never reaches
//! the network.

/// Calendar date arguments in strict `YYYY-MM-DD` form.
pub mod date;

/// Validation errors for request parameters.
pub mod error;

/// Tickers, currency pairs, option contracts, and aggregate windows.
pub mod params;

pub use date::MarketDate;
pub use error::InvalidParameter;
pub use params::{
    AggregateWindow, CurrencyPair, OptionContract, OptionKind, SortOrder, Ticker, Timespan,
};
