// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::observability::messages::pipeline::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use crate::pipeline::CipherRequest;

/// Defaults for a run, typically loaded from a YAML or TOML file.
///
/// Every field is optional; command-line flags take precedence over
/// whatever is configured here.
///
/// # Example
/// ```yaml
/// cipher:
///   mode: encrypt
///   key: 3
/// input: plain.txt
/// output: secret.txt
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cipher: Option<CipherRequest>,
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// On-disk format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Parse config text in the given format. `path` is only used in errors.
pub fn parse_config(content: &str, format: ConfigFormat, path: &Path) -> Result<Config, ConfigError> {
    match format {
        ConfigFormat::Yaml => {
            // an empty YAML document is null, not an empty mapping
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
        ConfigFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a config from a YAML or TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content, format, path)?;

    ConfigLoaded {
        path,
        format: format.as_str(),
    }
    .log();

    Ok(cfg)
}
