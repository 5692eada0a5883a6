//! Run configuration.
//!
//! Stored as a JSON object on disk; every field is optional:
//! ```json
//! {
//!   "grid": { "width": 10, "height": 20, "buckets_per_hour": 4 },
//!   "thresholds": { "min_duration_s": 59, "max_speed_mps": 36.0, "min_displacement_m": 100.0 },
//!   "projection": { "min_lon": -74.02, "min_lat": 40.70, "max_lon": -73.93, "max_lat": 40.88 }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::BoundingBoxProjector;
use crate::validity::ValidityThresholds;

/// Grid extent and time resolution, shared by every month of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub buckets_per_hour: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
            buckets_per_hour: 4,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::EmptyGrid { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::EmptyGrid { axis: "height" });
        }
        if !(1..=60).contains(&self.buckets_per_hour) {
            return Err(ConfigError::Resolution(self.buckets_per_hour));
        }
        Ok(())
    }

    /// Minutes covered by one time bucket.
    pub fn bucket_minutes(&self) -> u32 {
        60 / self.buckets_per_hour
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridConfig,
    pub thresholds: ValidityThresholds,
    pub projection: BoundingBoxProjector,
}

impl RunConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading config '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("parsing config '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: RunConfig = serde_json::from_str(content)?;
        config.grid.validate()?;
        Ok(config)
    }
}
