//! keel-telemetry gateway
//!
//! - `POST /v1/events/resource-checked` records `keel.resource.checked`
//! - `GET /metrics` exposes the in-memory registry
//! - Config path from `KEEL_TELEMETRY_CONFIG` (default `keel-telemetry.yaml`)

use tracing_subscriber::{fmt, EnvFilter};

use keel_telemetry_core::error::{Result, TelemetryError};
use keel_telemetry_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "keel-telemetry.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("KEEL_TELEMETRY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "keel-telemetry-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TelemetryError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TelemetryError::Internal(format!("server failed: {e}")))
}
