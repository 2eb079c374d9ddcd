use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::unit::converter::{UnitConverter, DEFAULT_UNIT};
use crate::unit::error::Result;

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cssunit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Unit appended to numeric values without an override
    #[serde(default = "default_unit")]
    pub default_unit: String,

    // Per-property unit overrides, e.g. line-height = "" for unitless
    #[serde(default)]
    pub units: HashMap<String, String>,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&content)?;
        log::debug!(
            "Loaded config from {} (default unit '{}', {} overrides)",
            path.display(),
            config.default_unit,
            config.units.len()
        );
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            default_unit: default_unit(),
            units: HashMap::new(),
        }
    }

    /// Unit for a property: its override if configured, else the default
    pub fn unit_for(&self, property: &str) -> &str {
        self.units
            .get(property)
            .map(String::as_str)
            .unwrap_or(self.default_unit.as_str())
    }

    pub fn converter(&self) -> UnitConverter {
        UnitConverter::new(self.default_unit.clone())
    }
}
