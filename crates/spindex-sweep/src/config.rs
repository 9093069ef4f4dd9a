//! Sweep configuration, loading, and validation.
//!
//! [`SweepConfig`] carries the user-facing settings of a sweep: which
//! domain to index, its extent or layer count, and the sphere radius.
//! [`validate()`](SweepConfig::validate) checks them and builds the engine.
//!
//! ```toml
//! domain = "Corner3D"
//! extent = [13, 19, 15]
//! layers = 15
//! radius = 5.0
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use spindex_core::Extent3;
use spindex_space::{Domain, DomainIndex};
use std::fs;
use std::path::Path;

/// Settings for one sweep over a domain.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Which node space to index. Default: `Center2D`.
    pub domain: Domain,
    /// Cells per axis for the box domains. Default: `[5, 5, 5]`.
    pub extent: Extent3,
    /// Latitude rings for `Polar`. Default: 15.
    pub layers: u32,
    /// Sphere radius applied to `Polar` nodes. Default: 5.0.
    pub radius: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            domain: Domain::Center2D,
            extent: Extent3::cube(5),
            layers: 15,
            radius: 5.0,
        }
    }
}

/// On-disk shape of [`SweepConfig`]; the domain stays a string until
/// conversion so an unknown tag surfaces as `UnsupportedDomain`.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    domain: String,
    extent: [u32; 3],
    layers: u32,
    radius: f64,
}

impl Default for RawConfig {
    fn default() -> Self {
        let cfg = SweepConfig::default();
        Self {
            domain: cfg.domain.to_string(),
            extent: cfg.extent.to_array(),
            layers: cfg.layers,
            radius: cfg.radius,
        }
    }
}

impl TryFrom<RawConfig> for SweepConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            domain: raw.domain.parse()?,
            extent: Extent3::from(raw.extent),
            layers: raw.layers,
            radius: raw.radius,
        })
    }
}

impl SweepConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        Self::try_from(raw)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            domain = %config.domain,
            "loaded sweep config"
        );
        Ok(config)
    }

    /// Check the settings and build the engine they describe.
    pub fn validate(&self) -> Result<DomainIndex, ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius { value: self.radius });
        }
        let index = DomainIndex::new(self.domain, self.extent, self.layers)?;
        tracing::debug!(
            domain = %self.domain,
            extent = %self.extent,
            layers = self.layers,
            total = index.total(),
            "validated sweep config"
        );
        Ok(index)
    }
}
