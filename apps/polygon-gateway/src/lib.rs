#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! Polygon Gateway - GraphQL Market Data Facade
//!
//! An HTTP service that fronts Polygon.io's free-tier REST endpoints
//! with a single typed GraphQL schema. One resolver per upstream
//! endpoint across four market sections (stocks, options, forex,
//! crypto); arguments are validated before any network call, and
//! upstream failures surface as field-level GraphQL errors so one bad
//! field never sinks its siblings.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Validated parameter types with no I/O
//!   - `date`: Strict `YYYY-MM-DD` market dates
//!   - `params`: Tickers, currency pairs, option contracts, windows
//!
//! - **Application**: Port definitions
//!   - `ports`: The `MarketDataApi` interface resolvers call
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `polygon`: REST client implementing the port
//!   - `graphql`: Schema, resolvers, and output types
//!   - `http`: Axum server (GraphQL endpoint, playground, health)
//!   - `config`: Environment-variable configuration
//!   - `telemetry`: Structured logging setup
//!
//! # Data Flow
//!
//! ```text
//! GraphQL query ──► Resolvers ──► MarketDataApi ──► Polygon REST
//!                  (validate)      (port)           (one GET per field)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Validated parameter types with no I/O.
pub mod domain;

/// Application layer - Port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::{
    AggregateWindow, CurrencyPair, InvalidParameter, MarketDate, OptionContract, OptionKind,
    SortOrder, Ticker, Timespan,
};

// Application port
pub use application::ports::MarketDataApi;

// Infrastructure config
pub use infrastructure::config::{
    ApiKey, ConfigError, GatewayConfig, ServerSettings, UpstreamSettings,
};

// GraphQL schema
pub use infrastructure::graphql::{build_schema, GatewaySchema, QueryRoot};

// HTTP server
pub use infrastructure::http::{AppState, HttpServer, ServerError};

// Polygon client (and wire types, for integration tests)
pub use infrastructure::polygon::{PolygonClient, PolygonError};

// Telemetry
pub use infrastructure::telemetry::init as init_telemetry;
