//! Tunable dashboard constants and their optional TOML override.
//!
//! Defaults are the built-in values; a `dashboard.toml` in the working
//! directory may override any subset of them.

use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_MOVE_STEP: i32 = 15;

/// Full width of the uniform random step applied per tick; the reading moves
/// by at most half of this in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerturbationSpreads {
    pub pressure: f64,
    pub turgidity: f64,
    pub humidity: f64,
    pub gas: f64,
}

impl Default for PerturbationSpreads {
    fn default() -> Self {
        Self {
            pressure: 10.0,
            turgidity: 5.0,
            humidity: 3.0,
            gas: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DashboardConfig {
    /// Period of the simulation ticker.
    pub tick_interval_ms: u64,
    /// Distance moved per movement intent.
    pub move_step: i32,
    pub spreads: PerturbationSpreads,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            move_step: DEFAULT_MOVE_STEP,
            spreads: PerturbationSpreads::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the `dashboard.toml` file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if the file was read, parsed and validated
    /// * `Err` with the file path in its context otherwise
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path).with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", config_path.display()))
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but cannot be used is an error; the caller decides
    /// whether to fall back.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    /// Reject values the dashboard cannot run with: a zero tick interval, a
    /// non-positive move step, or a negative or non-finite spread.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tick_interval_ms == 0 {
            bail!("tick-interval-ms must be greater than zero");
        }
        if self.move_step <= 0 {
            bail!("move-step must be greater than zero, got {}", self.move_step);
        }
        let spreads = [
            ("pressure", self.spreads.pressure),
            ("turgidity", self.spreads.turgidity),
            ("humidity", self.spreads.humidity),
            ("gas", self.spreads.gas),
        ];
        for (name, spread) in spreads {
            if !spread.is_finite() || spread < 0.0 {
                bail!("spreads.{name} must be a finite non-negative number, got {spread}");
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> embassy_time::Duration {
        embassy_time::Duration::from_millis(self.tick_interval_ms)
    }
}
