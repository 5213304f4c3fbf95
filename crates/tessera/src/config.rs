//! Configuration file loading for tessera.
//!
//! Reads `tessera.config.json` from the current working directory, or the
//! file passed with `--config`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tessera_rend::RootOptions;

pub const CONFIG_FILE: &str = "tessera.config.json";

/// Top-level tessera configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TesseraConfig {
    /// Session root counters.
    #[serde(default)]
    pub root: RootOptions,

    /// Defaults for the `render` command.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration for the `render` command.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Steps to render when `--steps` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

/// Load the config from `path`, or `tessera.config.json` in the CWD.
///
/// A missing default file yields the defaults silently; unreadable or
/// invalid files yield the defaults with a warning.
pub fn load_config(path: Option<&Path>) -> TesseraConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = std::env::current_dir()
                .unwrap_or_default()
                .join(CONFIG_FILE);
            if !path.exists() {
                return TesseraConfig::default();
            }
            path
        }
    };
    read_config(&config_path)
}

fn read_config(config_path: &Path) -> TesseraConfig {
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                TesseraConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            TesseraConfig::default()
        }
    }
}
