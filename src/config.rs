//! Tunables for bond-order inference and MD conversion.
//!
//! Both configs deserialize from TOML with every field optional:
//!
//! ```
//! use bondcrab::ConvertConfig;
//!
//! let config = ConvertConfig::from_toml_str(
//!     r#"
//!     bond_radius_factor = 0.6
//!
//!     [infer]
//!     max_passes = 4
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.infer.max_passes, 4);
//! assert!(config.infer_bond_orders);
//! ```

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MAX_PASSES: usize = 8;
pub const DEFAULT_BOND_RADIUS_FACTOR: f64 = 0.55;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InferConfig {
    /// Upper bound on bond-raising passes. Atoms still deficient when it is
    /// reached are reported unresolved.
    pub max_passes: usize,
    /// Relocate double bonds along alternating paths when the greedy passes
    /// leave two deficient atoms that are not adjacent.
    pub repair: bool,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            repair: true,
        }
    }
}

impl InferConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_passes",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Run bond-order and charge inference on the converted molecule.
    pub infer_bond_orders: bool,
    /// Two atoms are bonded when closer than the sum of their van der Waals
    /// radii times this factor. Used only when the group carries no bonds.
    pub bond_radius_factor: f64,
    pub infer: InferConfig,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            infer_bond_orders: true,
            bond_radius_factor: DEFAULT_BOND_RADIUS_FACTOR,
            infer: InferConfig::default(),
        }
    }
}

impl ConvertConfig {
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bond_radius_factor.is_finite() && self.bond_radius_factor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "bond_radius_factor",
                reason: format!("must be a positive number, got {}", self.bond_radius_factor),
            });
        }
        self.infer.validate()
    }
}

#[derive(Default)]
pub struct ConvertConfigBuilder {
    infer_bond_orders: Option<bool>,
    bond_radius_factor: Option<f64>,
    max_passes: Option<usize>,
    repair: Option<bool>,
}

impl ConvertConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infer_bond_orders(mut self, enabled: bool) -> Self {
        self.infer_bond_orders = Some(enabled);
        self
    }

    pub fn bond_radius_factor(mut self, factor: f64) -> Self {
        self.bond_radius_factor = Some(factor);
        self
    }

    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    pub fn repair(mut self, enabled: bool) -> Self {
        self.repair = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ConvertConfig, ConfigError> {
        let defaults = ConvertConfig::default();
        let config = ConvertConfig {
            infer_bond_orders: self.infer_bond_orders.unwrap_or(defaults.infer_bond_orders),
            bond_radius_factor: self
                .bond_radius_factor
                .unwrap_or(defaults.bond_radius_factor),
            infer: InferConfig {
                max_passes: self.max_passes.unwrap_or(defaults.infer.max_passes),
                repair: self.repair.unwrap_or(defaults.infer.repair),
            },
        };
        config.validate()?;
        Ok(config)
    }
}
