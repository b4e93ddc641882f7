//! Handler behaviour, driven through the axum handler functions directly.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::extract::{ConnectInfo, Query, State};
use axum::http::StatusCode;

use rovertel_gateway::api::{self, AuthQuery, CoordsQuery, FuelQuery};
use rovertel_gateway::app_state::AppState;
use rovertel_gateway::config;

fn state(max_clients: usize) -> AppState {
    let cfg = config::load_from_str(&format!(
        "version: 1\nwifi: {{ ssid: \"test\" }}\nregistry: {{ max_clients: {max_clients} }}\n"
    ))
    .unwrap();
    AppState::new(cfg).unwrap()
}

fn peer(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 4, last)), 50000))
}

async fn auth(app: &AppState, name: Option<&str>, last: u8) -> &'static str {
    api::auth(
        State(app.clone()),
        peer(last),
        Query(AuthQuery { name: name.map(str::to_string) }),
    )
    .await
}

async fn fuel(app: &AppState, raw: &str) -> &'static str {
    api::set_fuel(State(app.clone()), Query(FuelQuery { fuel: raw.into() })).await
}

async fn coords(app: &AppState, x: &str, y: &str) -> &'static str {
    api::set_coords(
        State(app.clone()),
        Query(CoordsQuery { x: x.into(), y: y.into() }),
    )
    .await
}

#[tokio::test]
async fn auth_registers_with_peer_ip() {
    let app = state(5);
    assert_eq!(auth(&app, Some("panel"), 7).await, "OK");

    let entry = app.registry().find_by_name("panel").unwrap();
    assert_eq!(entry.ip, IpAddr::V4(Ipv4Addr::new(192, 168, 4, 7)));
}

#[tokio::test]
async fn auth_duplicate_and_full_both_answer_bad() {
    let app = state(2);
    assert_eq!(auth(&app, Some("a"), 2).await, "OK");
    assert_eq!(auth(&app, Some("a"), 3).await, "BAD");
    assert_eq!(auth(&app, Some("b"), 4).await, "OK");
    assert_eq!(auth(&app, Some("c"), 5).await, "BAD");
    assert_eq!(app.registry().len(), 2);
}

#[tokio::test]
async fn auth_without_name_is_bad() {
    let app = state(5);
    assert_eq!(auth(&app, None, 2).await, "BAD");
    assert_eq!(auth(&app, Some(""), 2).await, "BAD");
    assert!(app.registry().is_empty());
}

#[tokio::test]
async fn fuel_scenario_through_handlers() {
    let app = state(5);

    assert_eq!(fuel(&app, "150").await, "BAD");
    assert_eq!(app.metrics().snapshot().fuel, 0);

    assert_eq!(fuel(&app, "42").await, "OK");
    let axum::Json(view) = api_metrics(&app).await;
    assert_eq!(view.fuel, 42);
}

#[tokio::test]
async fn fuel_out_of_range_is_bad() {
    let app = state(5);
    fuel(&app, "10").await;

    for raw in ["-1", "101", "-50abc", "1000"] {
        assert_eq!(fuel(&app, raw).await, "BAD", "raw={raw:?}");
    }
    assert_eq!(app.metrics().snapshot().fuel, 10);
}

#[tokio::test]
async fn fuel_reads_leading_integer() {
    let app = state(5);

    for (raw, stored) in [("42abc", 42), ("4.5", 4), (" 007", 7), ("abc", 0), ("", 0)] {
        fuel(&app, "55").await;
        assert_eq!(fuel(&app, raw).await, "OK", "raw={raw:?}");
        assert_eq!(app.metrics().snapshot().fuel, stored, "raw={raw:?}");
    }
}

#[tokio::test]
async fn coords_never_fail() {
    let app = state(5);

    assert_eq!(coords(&app, "12", "200").await, "OK");
    let m = app.metrics().snapshot();
    assert_eq!((m.coords_x, m.coords_y), (12, 200));

    // non-numeric reads as 0, wide values keep their low byte
    assert_eq!(coords(&app, "abc", "300").await, "OK");
    let m = app.metrics().snapshot();
    assert_eq!((m.coords_x, m.coords_y), (0, 44));

    assert_eq!(coords(&app, "", "").await, "OK");
    let m = app.metrics().snapshot();
    assert_eq!((m.coords_x, m.coords_y), (0, 0));
}

#[tokio::test]
async fn toggle_door_answers_previous_angle() {
    let app = state(5);
    assert_eq!(api::toggle_door(State(app.clone())).await, "20");
    assert_eq!(app.door().angle(), 180);
    assert_eq!(api::toggle_door(State(app.clone())).await, "180");
    assert_eq!(app.door().angle(), 20);
}

#[tokio::test]
async fn on_fuel_end_is_reserved() {
    assert_eq!(api::on_fuel_end().await, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn metrics_json_shape() {
    let app = state(5);
    coords(&app, "3", "4").await;
    app.metrics().sample_environment(22.0, 51.0);

    let axum::Json(view) = api_metrics(&app).await;
    let v = serde_json::to_value(view).unwrap();
    assert_eq!(v["coords_x"], 3);
    assert_eq!(v["coords_y"], 4);
    assert_eq!(v["count_charges"], 0);
    assert_eq!(v["count_missions"], 0);
    assert_eq!(v["temperature"].as_f64().unwrap(), 22.0);
    assert_eq!(v["humidity"].as_f64().unwrap(), 51.0);
}

async fn api_metrics(app: &AppState) -> axum::Json<rovertel_core::MetricsView> {
    api::get_metrics(State(app.clone())).await
}
