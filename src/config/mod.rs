// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration for aiseobot

use crate::error::{AiseoError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Identifying client header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "AISEOReadinessChecker/1.0 (https://aiseoscan.dev)";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for the homepage request
    #[serde(default = "default_homepage_timeout")]
    pub homepage_timeout_secs: u64,
    /// Timeout for robots.txt and sitemap.xml
    #[serde(default = "default_auxiliary_timeout")]
    pub auxiliary_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Homepage responses faster than this count as "fast"
    #[serde(default = "default_fast_threshold")]
    pub fast_threshold_secs: f64,
}

fn default_homepage_timeout() -> u64 {
    12
}

fn default_auxiliary_timeout() -> u64 {
    8
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_fast_threshold() -> f64 {
    2.0
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            homepage_timeout_secs: default_homepage_timeout(),
            auxiliary_timeout_secs: default_auxiliary_timeout(),
            user_agent: default_user_agent(),
            fast_threshold_secs: default_fast_threshold(),
        }
    }
}

impl FetchConfig {
    pub fn homepage_timeout(&self) -> Duration {
        Duration::from_secs(self.homepage_timeout_secs)
    }

    pub fn auxiliary_timeout(&self) -> Duration {
        Duration::from_secs(self.auxiliary_timeout_secs)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aiseobot")
        .join("config.yml")
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)
            .map_err(|e| AiseoError::Config(format!("TOML parse error: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AiseoError::Config(format!("YAML parse error: {}", e)))?
    };

    if config.fetch.homepage_timeout_secs == 0 || config.fetch.auxiliary_timeout_secs == 0 {
        return Err(AiseoError::Config(
            "timeouts must be at least one second".to_string(),
        ));
    }

    Ok(config)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::to_string_pretty(&config)
            .map_err(|e| AiseoError::Config(format!("TOML serialize error: {}", e)))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
