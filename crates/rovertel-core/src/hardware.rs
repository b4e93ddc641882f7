//! Hardware seams: environment sensor and door servo.
//!
//! The core only talks to these traits; the gateway supplies host
//! implementations and real boards can supply drivers.

use std::sync::{Mutex, PoisonError};

/// One sensor sample. A channel that failed to read is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub temperature: f32,
    pub humidity: f32,
}

impl SensorReading {
    pub fn invalid() -> Self {
        Self {
            temperature: f32::NAN,
            humidity: f32::NAN,
        }
    }
}

/// DHT-style combined temperature/humidity sensor.
pub trait TemperatureHumiditySensor: Send {
    fn read(&mut self) -> SensorReading;
}

/// Positional actuator (hobby servo), angle in degrees.
pub trait Actuator: Send {
    fn set_angle(&mut self, angle: u8);
    fn angle(&self) -> u8;
}

/// Door driven by a servo that swings between two angles.
pub struct DoorController {
    servo: Mutex<Box<dyn Actuator>>,
    closed_angle: u8,
    open_angle: u8,
}

impl DoorController {
    /// Wrap `servo` and park it at `closed_angle`.
    pub fn new(mut servo: Box<dyn Actuator>, closed_angle: u8, open_angle: u8) -> Self {
        servo.set_angle(closed_angle);
        Self {
            servo: Mutex::new(servo),
            closed_angle,
            open_angle,
        }
    }

    pub fn angle(&self) -> u8 {
        self.servo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .angle()
    }

    /// Swing the door and return the angle it had before.
    ///
    /// From the closed angle the door opens; from any other angle it closes.
    pub fn toggle(&self) -> u8 {
        let mut servo = self.servo.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = servo.angle();
        let next = if previous == self.closed_angle {
            self.open_angle
        } else {
            self.closed_angle
        };
        servo.set_angle(next);
        tracing::debug!(previous, next, "door toggled");
        previous
    }
}
