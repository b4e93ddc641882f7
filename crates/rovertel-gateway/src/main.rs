//! rovertel gateway
//!
//! - HTTP API on `server.listen` (see `api` module)
//! - Background environment sampler on `sampler.interval_ms`
//! - Config: first CLI argument, or `rovertel.yaml`

use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use rovertel_core::error::{Result, RoverError};
use rovertel_gateway::{app_state, config, hardware::SimulatedDht, router, sampler};

const DEFAULT_CONFIG: &str = "rovertel.yaml";

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("info,rovertel_core=debug,rovertel_gateway=debug")
        } else {
            EnvFilter::new("info")
        }
    });
    fmt().with_env_filter(filter).init();
}

async fn run(cfg: config::DeviceConfig) -> Result<()> {
    let listen = cfg.server.listen_addr()?;

    tracing::info!(
        ssid = %cfg.wifi.ssid,
        mode = cfg.wifi.mode.as_str(),
        "wifi settings (association is handled by the host network stack)"
    );

    let sensor = Box::new(SimulatedDht::from_config(&cfg.sensor));
    let period = Duration::from_millis(cfg.sampler.interval_ms);

    let state = app_state::AppState::new(cfg)?;
    let sampler_task = sampler::spawn(state.metrics_handle(), sensor, period);

    tracing::info!(
        max_clients = state.registry().capacity(),
        door_angle = state.door().angle(),
        "device state ready"
    );

    let app = router::build_router(state);

    tracing::info!(%listen, "rovertel-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RoverError::Internal(format!("bind {listen} failed: {e}")))?;

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| RoverError::Internal(format!("server failed: {e}")));

    sampler_task.abort();
    served
}

#[tokio::main]
async fn main() -> ExitCode {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            fmt().with_env_filter(EnvFilter::new("info")).init();
            tracing::error!(path = %path, error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cfg.server.debug);

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rovertel-gateway stopped");
            ExitCode::FAILURE
        }
    }
}
