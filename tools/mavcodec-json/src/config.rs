// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Tool configuration.
//!
//! Values come from an optional TOML file; command-line flags override them.

use mavcodec::MavlinkVersion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Frame version as written in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WireVersion {
    V1,
    #[default]
    V2,
}

impl From<WireVersion> for MavlinkVersion {
    fn from(v: WireVersion) -> Self {
        match v {
            WireVersion::V1 => MavlinkVersion::V1,
            WireVersion::V2 => MavlinkVersion::V2,
        }
    }
}

/// mavcodec-json configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// JSON dialect definition table; the built-in `common` subset when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<PathBuf>,

    /// Frame version used to encode and decode payloads.
    #[serde(default)]
    pub version: WireVersion,

    /// Prefix of generated JSON Schema ids and titles.
    #[serde(default = "default_schema_prefix")]
    pub schema_prefix: String,

    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_schema_prefix() -> String {
    "mavlink".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dialect: None,
            version: WireVersion::V2,
            schema_prefix: default_schema_prefix(),
            log_level: default_log_level(),
            pretty: true,
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("schema_prefix must not be empty".into()));
        }
        if self.schema_prefix.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "schema_prefix '{}' must not end with '/'",
                self.schema_prefix
            )));
        }
        if let Some(ref dialect) = self.dialect {
            if dialect.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("dialect path is empty".into()));
            }
        }
        Ok(())
    }
}
