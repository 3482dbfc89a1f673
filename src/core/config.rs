//! Project configuration read from `.bestiary/config.toml`.
//!
//! Resolution order for the data file: explicit override (CLI flag) >
//! `BESTIARY_DATA_FILE` > config file > default.

use crate::core::error::BestiaryError;
use crate::core::store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_REL_PATH: &str = ".bestiary/config.toml";
pub const DEFAULT_DATA_FILE: &str = ".bestiary/creatures.json";
pub const DATA_FILE_ENV: &str = "BESTIARY_DATA_FILE";

const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestiaryConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSection {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_pretty() -> bool {
    true
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: default_pretty(),
        }
    }
}

impl Default for BestiaryConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            store: StoreSection::default(),
        }
    }
}

pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_REL_PATH)
}

/// Load `.bestiary/config.toml` under `project_root`. No file means defaults.
pub fn load_config(project_root: &Path) -> Result<BestiaryConfig, BestiaryError> {
    let path = config_path(project_root);
    if !path.exists() {
        return Ok(BestiaryConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(BestiaryError::IoError)?;
    toml::from_str(&content)
        .map_err(|e| BestiaryError::ConfigError(format!("{}: {}", path.display(), e)))
}

/// Turn the loaded config plus overrides into the store's configuration.
///
/// Relative data file paths are anchored at `project_root`.
pub fn resolve_store_config(
    project_root: &Path,
    config: &BestiaryConfig,
    flag_override: Option<&Path>,
    env_override: Option<&str>,
) -> StoreConfig {
    let chosen = flag_override
        .map(Path::to_path_buf)
        .or_else(|| {
            env_override
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| config.store.data_file.clone());

    let data_file = if chosen.is_absolute() {
        chosen
    } else {
        project_root.join(chosen)
    };

    StoreConfig {
        data_file,
        pretty: config.store.pretty,
    }
}
