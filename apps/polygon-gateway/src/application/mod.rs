//! Application Layer - Port definitions.
//!
//! This layer contains the port interface between the GraphQL resolvers
//! and the upstream REST client.

/// Port interface for the upstream market data provider.
pub mod ports;
