//! Rules configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::entities::TimelineTable;
use crate::error::{Result, RulesError};

/// Top-level rules configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub fear: FearConfig,

    #[serde(default)]
    pub timelines: TimelineTable,
}

impl RulesConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.fear.validate()
    }
}

/// Fear gauge bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearConfig {
    /// Starting fear; the game opens at 40% rather than empty.
    #[serde(default = "default_initial_fear")]
    pub initial: f32,

    #[serde(default = "default_max_fear")]
    pub max: f32,
}

impl Default for FearConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_fear(),
            max: default_max_fear(),
        }
    }
}

impl FearConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.max.is_finite() || self.max <= 0.0 {
            return Err(RulesError::InvalidFearMax { max: self.max });
        }
        if !self.initial.is_finite() {
            return Err(RulesError::InvalidFearInitial {
                initial: self.initial,
            });
        }
        Ok(())
    }
}

fn default_initial_fear() -> f32 {
    40.0
}

fn default_max_fear() -> f32 {
    100.0
}
