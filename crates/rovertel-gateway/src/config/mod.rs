//! Device config loader (strict parsing).

pub mod schema;

use std::fs;

use rovertel_core::error::{Result, RoverError};

pub use schema::{
    DeviceConfig, DoorSection, RegistrySection, SamplerSection, SensorSection, ServerSection,
    WifiMode, WifiSection,
};

pub fn load_from_file(path: &str) -> Result<DeviceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RoverError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DeviceConfig> {
    let cfg: DeviceConfig = serde_yaml::from_str(s)
        .map_err(|e| RoverError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
