//! rovertel core: device state, validation rules, and hardware seams.
//!
//! This crate owns the client registry, the telemetry record, and the door
//! controller shared by every HTTP handler. It carries no transport or
//! runtime dependencies so the state logic can be tested without a server or
//! real hardware.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Validation failures surface as `RoverError`; poisoned locks are recovered
//! because the guarded records are plain values.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod hardware;
pub mod metrics;
pub mod registry;

/// Shared result type.
pub use error::{Result, RoverError, Status};
pub use hardware::{Actuator, DoorController, SensorReading, TemperatureHumiditySensor};
pub use metrics::{MetricsStore, MetricsView};
pub use registry::{ClientEntry, ClientRegistry};
