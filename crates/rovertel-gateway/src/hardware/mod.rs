//! Host stand-ins for the device hardware.
//!
//! - `SimulatedDht`  : temperature/humidity with slow drift and optional dropouts
//! - `SimulatedServo`: remembers the last commanded angle

mod dht;
mod servo;

pub use dht::SimulatedDht;
pub use servo::SimulatedServo;
