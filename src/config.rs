// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Analysis configuration

use crate::geometry::DEGENERATE_TOLERANCE;
use crate::mass::ZERO_VOLUME_TOLERANCE;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "polymass.toml";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("Unsupported output format: {} (expected text or json)", other),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Density used when neither mass nor density is given
    pub density: f64,
    /// Relative tolerance for rejecting degenerate face normals
    pub degenerate_tolerance: f64,
    /// Relative tolerance below which the volume counts as zero
    pub zero_volume_tolerance: f64,
    /// Run the edge-pairing closedness check before integrating
    pub check_closed: bool,
    /// Report output format
    pub output: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            degenerate_tolerance: DEGENERATE_TOLERANCE,
            zero_volume_tolerance: ZERO_VOLUME_TOLERANCE,
            check_closed: false,
            output: OutputFormat::Text,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: AnalysisConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `POLYMASS_*` overrides from a variable lookup
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(density) = var("POLYMASS_DENSITY") {
            self.density = density
                .parse()
                .with_context(|| format!("Invalid POLYMASS_DENSITY: {}", density))?;
        }

        if let Some(check) = var("POLYMASS_CHECK_CLOSED") {
            self.check_closed = check
                .parse()
                .with_context(|| format!("Invalid POLYMASS_CHECK_CLOSED: {}", check))?;
        }

        if let Some(output) = var("POLYMASS_OUTPUT") {
            self.output = output.parse()?;
        }

        self.validate()
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            bail!("density must be positive and finite, got {}", self.density);
        }
        if !(self.degenerate_tolerance >= 0.0) || !(self.zero_volume_tolerance >= 0.0) {
            bail!("tolerances must be non-negative");
        }
        Ok(())
    }
}
