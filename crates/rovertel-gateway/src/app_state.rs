//! Shared application state for the rovertel gateway.
//!
//! Owns the three pieces of device state (client registry, telemetry record,
//! door) and hands them to handlers through axum `State`. Nothing here is a
//! global; tests build their own `AppState` with stub hardware.

use std::sync::Arc;

use rovertel_core::error::Result;
use rovertel_core::{Actuator, ClientRegistry, DoorController, MetricsStore};

use crate::config::DeviceConfig;
use crate::hardware::SimulatedServo;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsStore>,
}

struct AppStateInner {
    cfg: DeviceConfig,
    registry: ClientRegistry,
    door: DoorController,
}

impl AppState {
    /// Build application state with the host servo stand-in.
    pub fn new(cfg: DeviceConfig) -> Result<Self> {
        Self::with_servo(cfg, Box::new(SimulatedServo::new()))
    }

    /// Build application state around a specific door actuator.
    pub fn with_servo(cfg: DeviceConfig, servo: Box<dyn Actuator>) -> Result<Self> {
        cfg.validate()?;

        let registry = ClientRegistry::new(cfg.registry.max_clients);
        let door = DoorController::new(servo, cfg.door.closed_angle, cfg.door.open_angle);

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry, door }),
            metrics: Arc::new(MetricsStore::new()),
        })
    }

    pub fn cfg(&self) -> &DeviceConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.inner.registry
    }

    pub fn door(&self) -> &DoorController {
        &self.inner.door
    }

    pub fn metrics(&self) -> &MetricsStore {
        &self.metrics
    }

    /// Shared handle for background writers (the sampler).
    pub fn metrics_handle(&self) -> Arc<MetricsStore> {
        Arc::clone(&self.metrics)
    }
}
