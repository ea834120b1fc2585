//! Configuration types for TradeScout.
//!
//! ## Load Order (later overrides earlier)
//! 1. Default values (see [`crate::constants`])
//! 2. TOML config file, if given and present
//! 3. Environment variables
//!
//! The result is validated before use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, TradescoutError, constants};

/// Settings of the want-to-sell query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Quantity reported for a constraint that is effectively unlimited.
    #[serde(default = "default_sentinel")]
    pub unlimited_sentinel: u64,
}

fn default_sentinel() -> u64 {
    constants::DEFAULT_UNLIMITED_SENTINEL
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            unlimited_sentinel: default_sentinel(),
        }
    }
}

/// Settings of the command surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    #[serde(default)]
    pub query: QueryConfig,
    /// Category of the panel opened for a want-to-sell report.
    #[serde(default = "default_panel_category")]
    pub panel_category: String,
    /// Optional prefix accepted in front of sub-commands.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

fn default_panel_category() -> String {
    constants::DEFAULT_PANEL_CATEGORY.to_string()
}

fn default_command_prefix() -> String {
    constants::DEFAULT_COMMAND_PREFIX.to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            query: QueryConfig::default(),
            panel_category: default_panel_category(),
            command_prefix: default_command_prefix(),
        }
    }
}

impl CommandConfig {
    /// Load configuration: defaults, then the TOML file at `path` (if it
    /// exists), then environment overrides. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                tracing::info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(path)?;
                config = Self::from_toml(&contents)?;
            } else {
                tracing::debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `TRADESCOUT_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        let raw = std::env::var(constants::ENV_UNLIMITED_SENTINEL).ok();
        self.apply_sentinel_override(raw.as_deref())
    }

    /// Replace the sentinel with `raw` when present. `None` leaves it as is.
    pub fn apply_sentinel_override(&mut self, raw: Option<&str>) -> Result<()> {
        let Some(raw) = raw else {
            return Ok(());
        };
        self.query.unlimited_sentinel = raw.trim().parse().map_err(|_| {
            TradescoutError::Configuration(format!(
                "{} must be a positive integer, got {raw:?}",
                constants::ENV_UNLIMITED_SENTINEL
            ))
        })?;
        tracing::debug!(sentinel = self.query.unlimited_sentinel, "Sentinel overridden");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.unlimited_sentinel == 0 {
            return Err(TradescoutError::Configuration(
                "unlimited_sentinel must be greater than zero".into(),
            ));
        }
        if self.panel_category.trim().is_empty() {
            return Err(TradescoutError::Configuration(
                "panel_category must not be empty".into(),
            ));
        }
        Ok(())
    }
}
