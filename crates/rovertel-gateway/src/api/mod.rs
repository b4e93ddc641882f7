//! Device HTTP API.
//!
//! - `/api/getMetrics`         : telemetry snapshot as JSON
//! - `/api/auth`               : register a client by name
//! - `/api/setFuel`            : store fuel level (0..=100)
//! - `/api/setCoords`          : store position
//! - `/api/toggleDoor`         : swing the door, answer the previous angle
//! - `/api/actions/onFuelEnd`  : reserved
//!
//! Logical failures still answer 200; the body carries `OK` or `BAD`.

pub mod params;

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use rovertel_core::error::{RoverError, Status};
use rovertel_core::MetricsView;

use crate::app_state::AppState;
use params::{lenient_int, wrap_to_byte};

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FuelQuery {
    #[serde(default)]
    pub fuel: String,
}

#[derive(Debug, Deserialize)]
pub struct CoordsQuery {
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
}

pub async fn get_metrics(State(app): State<AppState>) -> Json<MetricsView> {
    Json(app.metrics().snapshot())
}

pub async fn auth(
    State(app): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(q): Query<AuthQuery>,
) -> &'static str {
    let res = match q.name.as_deref() {
        Some(name) if !name.is_empty() => app.registry().authenticate(name, peer.ip()),
        _ => Err(RoverError::BadRequest("missing client name".into())),
    };
    if let Err(e) = &res {
        tracing::debug!(peer = %peer.ip(), error = %e, "auth rejected");
    }
    Status::from(&res).as_str()
}

pub async fn set_fuel(State(app): State<AppState>, Query(q): Query<FuelQuery>) -> &'static str {
    let res = app.metrics().set_fuel(lenient_int(&q.fuel));
    tracing::debug!(raw = %q.fuel, "set fuel: new value");
    Status::from(&res).as_str()
}

pub async fn set_coords(State(app): State<AppState>, Query(q): Query<CoordsQuery>) -> &'static str {
    let x = wrap_to_byte(lenient_int(&q.x));
    let y = wrap_to_byte(lenient_int(&q.y));
    app.metrics().set_position(x, y);
    Status::Ok.as_str()
}

pub async fn toggle_door(State(app): State<AppState>) -> String {
    app.door().toggle().to_string()
}

// TODO: drive the machine back to its last known coordinates once the
// return-to-base command exists on the rover side.
pub async fn on_fuel_end() -> StatusCode {
    tracing::debug!("onFuelEnd requested; no action bound");
    StatusCode::NOT_IMPLEMENTED
}
