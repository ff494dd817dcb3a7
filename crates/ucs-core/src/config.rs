//! Configuration for ucs (stored in ~/.config/ucs/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UcsError};
use crate::graph::algos::SearchOptions;

pub use types::{OutputConfig, SearchConfig, UcsConfig};

const CONFIG_DIR: &str = "ucs";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "UCS_CONFIG_DIR";

impl UcsConfig {
    /// Default config location, honoring the `UCS_CONFIG_DIR` override
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| UcsError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: UcsConfig = toml::from_str(&content)?;
        if config.search.max_expansions == Some(0) {
            crate::bail_invalid!("search.max_expansions", 0);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the default config file, falling back to defaults when it is absent
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load `explicit` when given, otherwise the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }
}

impl SearchConfig {
    /// Search options derived from this configuration (no interrupt flag)
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            cost_policy: self.cost_policy,
            max_expansions: self.max_expansions,
            interrupt: None,
        }
    }
}
