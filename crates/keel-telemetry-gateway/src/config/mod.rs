//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use keel_telemetry_core::error::{Result, TelemetryError};

pub use schema::{ServerSection, TelemetryConfig};

pub fn load_from_file(path: &str) -> Result<TelemetryConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TelemetryError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TelemetryConfig> {
    let cfg: TelemetryConfig = serde_yaml::from_str(s)
        .map_err(|e| TelemetryError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
