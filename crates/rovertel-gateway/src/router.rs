//! Axum router wiring.
//!
//! All device endpoints are plain GETs under `/api`.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/getMetrics", get(api::get_metrics))
        .route("/api/auth", get(api::auth))
        .route("/api/setFuel", get(api::set_fuel))
        .route("/api/setCoords", get(api::set_coords))
        .route("/api/toggleDoor", get(api::toggle_door))
        .route("/api/actions/onFuelEnd", get(api::on_fuel_end))
        .with_state(state)
}
