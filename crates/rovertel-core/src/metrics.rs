//! Device telemetry record.
//!
//! One `MetricsStore` lives for the whole device session. Command handlers
//! and the sampling task write into it; `/api/getMetrics` reads a snapshot.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::error::{Result, RoverError};

/// Accepted fuel range, in percent.
pub const FUEL_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Machine position on the field grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Metrics {
    position: Position,
    fuel: u8,
    // Nothing updates the two counters yet; they are reported as-is.
    charge_count: u8,
    mission_count: u8,
    temperature: f32,
    humidity: f32,
}

/// Read-only copy of the record, laid out the way the dashboard expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsView {
    pub temperature: f32,
    pub humidity: f32,
    pub fuel: u8,
    pub coords_x: u8,
    pub coords_y: u8,
    pub count_charges: u8,
    pub count_missions: u8,
}

impl From<&Metrics> for MetricsView {
    fn from(m: &Metrics) -> Self {
        Self {
            temperature: m.temperature,
            humidity: m.humidity,
            fuel: m.fuel,
            coords_x: m.position.x,
            coords_y: m.position.y,
            count_charges: m.charge_count,
            count_missions: m.mission_count,
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricsStore {
    inner: RwLock<Metrics>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<R>(&self, f: impl FnOnce(&Metrics) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Metrics) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Consistent copy of all fields.
    pub fn snapshot(&self) -> MetricsView {
        self.read(|m| MetricsView::from(m))
    }

    /// Store a fuel level in percent. Out-of-range values leave the record untouched.
    pub fn set_fuel(&self, value: i64) -> Result<()> {
        if !FUEL_RANGE.contains(&value) {
            tracing::debug!(value, "fuel out of range");
            return Err(RoverError::FuelOutOfRange(value));
        }
        let fuel = u8::try_from(value).map_err(|_| RoverError::FuelOutOfRange(value))?;
        self.write(|m| m.fuel = fuel);
        Ok(())
    }

    pub fn set_position(&self, x: u8, y: u8) {
        self.write(|m| m.position = Position { x, y });
        tracing::debug!(x, y, "set coords");
    }

    /// Apply one sensor sample. A NaN channel keeps its previous value.
    pub fn sample_environment(&self, temperature: f32, humidity: f32) {
        self.write(|m| {
            if temperature.is_nan() {
                tracing::debug!("temperature reading invalid, keeping {}", m.temperature);
            } else {
                m.temperature = temperature;
            }
            if humidity.is_nan() {
                tracing::debug!("humidity reading invalid, keeping {}", m.humidity);
            } else {
                m.humidity = humidity;
            }
        });
    }
}
