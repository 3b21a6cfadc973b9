use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::app_dirs;

/// Build a [`Config`] instance by combining default locations, an optional
/// explicit file and environment overrides.
pub(super) fn build_config(explicit: Option<&Path>) -> Result<Config> {
    let mut builder = Config::builder();

    match explicit {
        Some(path) => {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        None => {
            for path in default_config_files() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("weft")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default configuration file locations that should be
/// consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".weft.toml"));
        files.push(current_dir.join("weft.toml"));
    }

    files
}
