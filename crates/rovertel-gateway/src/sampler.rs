//! Periodic environment sampling.
//!
//! One sensor read per tick on a fixed-delay cycle; each result is handed to
//! `MetricsStore::sample_environment`, which drops NaN channels.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use rovertel_core::{MetricsStore, TemperatureHumiditySensor};

/// Take one reading and store it.
pub fn sample_once(metrics: &MetricsStore, sensor: &mut dyn TemperatureHumiditySensor) {
    let reading = sensor.read();
    tracing::debug!(
        temperature = reading.temperature,
        humidity = reading.humidity,
        "environment sampled"
    );
    metrics.sample_environment(reading.temperature, reading.humidity);
}

/// Spawn the sampling loop. Runs until the returned handle is aborted.
pub fn spawn(
    metrics: Arc<MetricsStore>,
    mut sensor: Box<dyn TemperatureHumiditySensor>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = time::interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tick.tick().await;
            sample_once(&metrics, sensor.as_mut());
        }
    })
}
