//! Polygon REST Adapter
//!
//! Production adapter for the `MarketDataApi` port: a thin typed client
//! over Polygon's free-tier REST endpoints. One module per market
//! section, mirroring Polygon's own documentation layout, plus shared
//! request plumbing and wire types.

/// Shared request plumbing and the port implementation.
pub mod client;
/// Crypto endpoint methods.
pub mod crypto;
/// Error taxonomy for upstream calls.
pub mod error;
/// Forex endpoint methods.
pub mod forex;
/// Wire format types for Polygon response bodies.
pub mod models;
/// Options endpoint methods.
pub mod options;
/// Stocks endpoint methods.
pub mod stocks;

pub use client::PolygonClient;
pub use error::PolygonError;
