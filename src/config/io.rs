use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from disk, falling back to defaults on any error.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    "Failed to parse config; using defaults: {err:#}"
                );
                AppConfig::default()
            }
        },
        Err(err) => {
            debug!(
                path = %path.display(),
                "No readable config; using defaults: {err}"
            );
            AppConfig::default()
        }
    }
}

/// Parse a config document in either the tabled or the flat layout.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let raw: toml::Table = toml::from_str(contents).context("config is not valid TOML")?;
    if ConfigTables::is_table_layout(&raw) {
        let tables: ConfigTables = toml::from_str(contents).context("invalid config tables")?;
        Ok(tables.into())
    } else {
        toml::from_str(contents).context("invalid flat config")
    }
}
