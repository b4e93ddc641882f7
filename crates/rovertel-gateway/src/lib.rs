//! rovertel gateway library entry.
//!
//! This crate wires the HTTP API, config loading, host hardware stand-ins,
//! and the background sampler around the state kept in `rovertel-core`. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod hardware;
pub mod router;
pub mod sampler;
