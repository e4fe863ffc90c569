//! Run configuration loading and validation
//!
//! The run configuration maps regions to their source workbooks and carries
//! the geocoding toggle. It is deliberately small: cleaning rules and sheet
//! layout are part of the source contract (see [`crate::constants`]), not
//! configurable.

use crate::constants::DEFAULT_GEOCODE_DELAY_SECS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One region's source mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Region label, used for logging only
    pub name: String,
    /// Country code stamped on every record extracted from this region
    pub country: String,
    /// Path to the region's grid export workbook
    pub workbook: PathBuf,
}

/// Full run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Regions to process, in output order
    pub regions: Vec<RegionConfig>,

    /// Whether buses are geocoded at all (disable for offline runs)
    #[serde(default = "default_geocode")]
    pub geocode: bool,

    /// Minimum delay between geocoding provider calls, in seconds
    #[serde(default = "default_geocode_delay_secs")]
    pub geocode_delay_secs: f64,
}

fn default_geocode() -> bool {
    true
}

fn default_geocode_delay_secs() -> f64 {
    DEFAULT_GEOCODE_DELAY_SECS
}

impl RunConfig {
    /// Load and validate a YAML run configuration
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("failed to read run configuration '{}'", path.display()),
                e,
            )
        })?;

        let config: RunConfig = serde_yaml::from_str(&text).map_err(|e| {
            Error::configuration(format!(
                "invalid run configuration '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded run configuration: {:?}", config);
        Ok(config)
    }

    /// Validate configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(Error::configuration(
                "run configuration lists no regions".to_string(),
            ));
        }
        for region in &self.regions {
            if region.country.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "region '{}' has an empty country code",
                    region.name
                )));
            }
        }
        if self.geocode_delay_secs < 0.0 {
            return Err(Error::configuration(format!(
                "geocode_delay_secs must be non-negative, got {}",
                self.geocode_delay_secs
            )));
        }
        Ok(())
    }
}
