use rovertel_core::{SensorReading, TemperatureHumiditySensor};

use crate::config::SensorSection;

/// Deterministic DHT stand-in.
///
/// Readings oscillate around the configured base values. With
/// `dropout_every = n`, every nth read fails on both channels.
#[derive(Debug)]
pub struct SimulatedDht {
    temperature: f32,
    humidity: f32,
    dropout_every: u32,
    reads: u32,
}

impl SimulatedDht {
    pub fn new(temperature: f32, humidity: f32, dropout_every: u32) -> Self {
        Self {
            temperature,
            humidity,
            dropout_every,
            reads: 0,
        }
    }

    pub fn from_config(cfg: &SensorSection) -> Self {
        Self::new(cfg.temperature, cfg.humidity, cfg.dropout_every)
    }
}

impl TemperatureHumiditySensor for SimulatedDht {
    fn read(&mut self) -> SensorReading {
        self.reads = self.reads.wrapping_add(1);
        if self.dropout_every != 0 && self.reads % self.dropout_every == 0 {
            return SensorReading::invalid();
        }

        let phase = self.reads as f32 * 0.1;
        SensorReading {
            temperature: self.temperature + 0.5 * phase.sin(),
            humidity: (self.humidity + 2.0 * phase.cos()).clamp(0.0, 100.0),
        }
    }
}
