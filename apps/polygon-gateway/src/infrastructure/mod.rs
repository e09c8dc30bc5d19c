//! Infrastructure Layer - Adapters and external integrations.
//!
//! - `config`: Environment-variable configuration
//! - `graphql`: GraphQL schema and resolvers
//! - `http`: Axum HTTP server
//! - `polygon`: Polygon REST client adapter
//! - `telemetry`: Structured logging setup

/// Configuration management.
pub mod config;
/// GraphQL schema and resolvers.
pub mod graphql;
/// HTTP server exposing the schema.
pub mod http;
/// Polygon REST client adapter.
pub mod polygon;
/// Structured logging setup.
pub mod telemetry;
