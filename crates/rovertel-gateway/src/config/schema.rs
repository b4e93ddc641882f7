use std::net::SocketAddr;

use serde::Deserialize;
use rovertel_core::error::{Result, RoverError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub wifi: WifiSection,

    #[serde(default)]
    pub registry: RegistrySection,

    #[serde(default)]
    pub door: DoorSection,

    #[serde(default)]
    pub sampler: SamplerSection,

    #[serde(default)]
    pub sensor: SensorSection,
}

impl DeviceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RoverError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.wifi.validate()?;
        self.registry.validate()?;
        self.door.validate()?;
        self.sampler.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Verbose request logging when `RUST_LOG` is not set.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            debug: default_debug(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            RoverError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:80".into()
}
fn default_debug() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiMode {
    /// The device hosts its own network.
    AccessPoint,
    /// The device joins an existing network.
    Station,
}

impl WifiMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WifiMode::AccessPoint => "access_point",
            WifiMode::Station => "station",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WifiSection {
    pub ssid: String,

    #[serde(default)]
    pub passphrase: String,

    #[serde(default = "default_wifi_mode")]
    pub mode: WifiMode,
}

impl WifiSection {
    pub fn validate(&self) -> Result<()> {
        if self.ssid.is_empty() || self.ssid.len() > 32 {
            return Err(RoverError::BadRequest(
                "wifi.ssid must be between 1 and 32 bytes".into(),
            ));
        }
        // WPA2 passphrase; empty means an open network
        if !self.passphrase.is_empty() && !(8..=63).contains(&self.passphrase.len()) {
            return Err(RoverError::BadRequest(
                "wifi.passphrase must be empty or between 8 and 63 characters".into(),
            ));
        }
        Ok(())
    }
}

fn default_wifi_mode() -> WifiMode {
    WifiMode::AccessPoint
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    #[serde(default = "default_max_clients")]
    pub max_clients: usize,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            max_clients: default_max_clients(),
        }
    }
}

impl RegistrySection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.max_clients) {
            return Err(RoverError::BadRequest(
                "registry.max_clients must be between 1 and 64".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_clients() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoorSection {
    #[serde(default = "default_closed_angle")]
    pub closed_angle: u8,

    #[serde(default = "default_open_angle")]
    pub open_angle: u8,
}

impl Default for DoorSection {
    fn default() -> Self {
        Self {
            closed_angle: default_closed_angle(),
            open_angle: default_open_angle(),
        }
    }
}

impl DoorSection {
    pub fn validate(&self) -> Result<()> {
        if self.closed_angle > 180 || self.open_angle > 180 {
            return Err(RoverError::BadRequest(
                "door angles must be between 0 and 180".into(),
            ));
        }
        if self.closed_angle == self.open_angle {
            return Err(RoverError::BadRequest(
                "door.open_angle must differ from door.closed_angle".into(),
            ));
        }
        Ok(())
    }
}

fn default_closed_angle() -> u8 {
    20
}
fn default_open_angle() -> u8 {
    180
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for SamplerSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl SamplerSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=3_600_000).contains(&self.interval_ms) {
            return Err(RoverError::BadRequest(
                "sampler.interval_ms must be between 100 and 3600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    2000
}

/// Host-side simulated sensor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorSection {
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_humidity")]
    pub humidity: f32,

    /// Every Nth read fails (0 disables).
    #[serde(default)]
    pub dropout_every: u32,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            humidity: default_humidity(),
            dropout_every: 0,
        }
    }
}

fn default_temperature() -> f32 {
    21.5
}
fn default_humidity() -> f32 {
    40.0
}
