//! Narrative configuration, loadable from TOML.
//!
//! ```toml
//! control_key = "show_end_report"
//!
//! [rules.fear]
//! initial = 40.0
//! max = 100.0
//!
//! [signals]
//! ayadi_cool = "Ayadi : ..."
//! ```
//!
//! Without a `[signals]` table the built-in catalog is used.

use audit_rules::RulesConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{NarrativeError, Result};
use crate::signals::{SignalCatalog, SignalKey, END_REPORT_KEY};

/// Top-level narrative configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Signal that ends the session and opens the report screen.
    #[serde(default = "default_control_key")]
    pub control_key: String,

    #[serde(default)]
    pub rules: RulesConfig,

    /// Catalog override; `None` keeps the built-in texts.
    #[serde(default)]
    pub signals: Option<BTreeMap<String, String>>,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            control_key: default_control_key(),
            rules: RulesConfig::default(),
            signals: None,
        }
    }
}

impl NarrativeConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.rules.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The normalized control key.
    pub fn control_key(&self) -> Result<SignalKey> {
        let key = SignalKey::parse(&self.control_key);
        if key.is_empty() {
            return Err(NarrativeError::EmptyControlKey);
        }
        Ok(key)
    }

    /// Build the signal catalog this configuration describes.
    pub fn catalog(&self) -> Result<SignalCatalog> {
        match &self.signals {
            Some(entries) => SignalCatalog::from_entries(entries),
            None => Ok(SignalCatalog::builtin()),
        }
    }
}

fn default_control_key() -> String {
    END_REPORT_KEY.to_string()
}
