use std::path::Path;

use anyhow::{Result, anyhow};
use config::Config;

use crate::logging;

use super::raw::RawConfig;
use super::resolved::StyleConfig;
use super::sources::build_config;

/// Load configuration by combining the default file locations with
/// environment overrides.
pub fn load() -> Result<StyleConfig> {
    resolve_from(build_config(None)?)
}

/// Load configuration from an explicit file, still honoring environment
/// overrides.
pub fn load_file(path: impl AsRef<Path>) -> Result<StyleConfig> {
    resolve_from(build_config(Some(path.as_ref()))?)
}

fn resolve_from(config: Config) -> Result<StyleConfig> {
    let raw: RawConfig = config
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    let resolved = raw.resolve()?;
    logging::initialize(resolved.engine.logging_enabled);
    Ok(resolved)
}
