//! Configuration Management
//!
//! Environment-variable-driven configuration for the gateway.

/// Configuration settings types.
pub mod settings;

pub use settings::{ApiKey, ConfigError, GatewayConfig, ServerSettings, UpstreamSettings};
