//! Polygon Gateway Binary
//!
//! Starts the GraphQL market data gateway.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin polygon-gateway
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `POLYGON_API_KEY`: Polygon.io API key
//!
//! ## Optional
//! - `GATEWAY_HTTP_PORT`: HTTP server port (default: 8080)
//! - `POLYGON_BASE_URL`: Upstream base URL (default: <https://api.polygon.io>)
//! - `POLYGON_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use polygon_gateway::infrastructure::telemetry;
use polygon_gateway::{
    build_schema, AppState, GatewayConfig, HttpServer, MarketDataApi, PolygonClient,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    telemetry::init();

    tracing::info!("Starting Polygon Gateway");

    let config = GatewayConfig::from_env()?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    let client = PolygonClient::new(
        config.upstream.base_url.clone(),
        config.api_key.clone(),
        config.upstream.timeout,
    )?;
    let api: Arc<dyn MarketDataApi> = Arc::new(client);

    let schema = build_schema(api);
    let state = Arc::new(AppState::new(
        schema,
        env!("CARGO_PKG_VERSION").to_string(),
    ));

    let server = HttpServer::new(config.server.http_port, state, shutdown_token.clone());
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            tracing::error!(error = %e, "HTTP server error");
        }
    });

    tracing::info!("Gateway ready");

    await_shutdown(shutdown_token).await;
    let _ = server_handle.await;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &GatewayConfig) {
    tracing::info!(
        http_port = config.server.http_port,
        base_url = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout.as_secs(),
        "Configuration loaded"
    );
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();
}
