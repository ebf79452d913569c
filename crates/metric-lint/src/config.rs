//! Unit table configuration
//!
//! The built-in table covers the usual SI units. Projects with other house
//! rules can load a TOML file that replaces parts of it:
//!
//! ```toml
//! [units]
//! abbreviations = ["ms", "sec"]
//!
//! [[units.units]]
//! unit = "hours"
//! base = "seconds"
//! ```
//!
//! Sources are merged with Figment: built-in defaults first, then the file.
//! Lists in the file replace the default lists whole. Nothing is read from the
//! environment and no file is looked up implicitly.

use crate::error::{LintError, Result};
use crate::linter::Linter;
use crate::units::UnitTable;
use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Top-level lint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub units: UnitTable,
}

impl LintConfig {
    /// Build a linter sharing this configuration's unit table
    pub fn into_linter(self) -> Linter {
        Linter::new(Arc::new(self.units))
    }
}

/// Loads a [`LintConfig`] from defaults and an optional TOML source
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    inline_toml: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a TOML file over the defaults
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Merge a TOML string over the defaults (and over the file, if any)
    pub fn with_toml<S: Into<String>>(mut self, toml: S) -> Self {
        self.inline_toml = Some(toml.into());
        self
    }

    /// Load and validate the configuration.
    ///
    /// Fails with [`LintError::Config`] when a config path is set but the
    /// file does not exist.
    pub fn load(&self) -> Result<LintConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LintConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                return Err(LintError::Config(format!(
                    "configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            info!(path = %config_path.display(), "loaded metric lint configuration");
        }

        if let Some(inline) = &self.inline_toml {
            figment = figment.merge(Toml::string(inline));
        }

        let config: LintConfig = figment.extract()?;
        config.units.validate()?;
        Ok(config)
    }

    /// Load the configuration and build a linter from it
    pub fn load_linter(&self) -> Result<Linter> {
        Ok(self.load()?.into_linter())
    }
}
