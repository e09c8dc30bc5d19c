//! Telemetry Initialization
//!
//! Structured logging via `tracing`. The filter honors `RUST_LOG` and
//! falls back to info-level gateway logs with noisy HTTP internals
//! turned down.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter directives when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "polygon_gateway=info,hyper=warn,reqwest=warn";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before anything logs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
