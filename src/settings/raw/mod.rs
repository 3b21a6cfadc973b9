use std::collections::BTreeMap;
use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

use super::resolved::{ConfigSources, SettingSource, StyleConfig};
use super::util::sanitize_names;

mod content;
mod dark_mode;
mod engine;

use content::ContentSection;
use dark_mode::DarkModeSection;
use engine::EngineSection;

/// Mirror of the configuration file representation before defaults and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    content: ContentSection,
    dark_mode: DarkModeSection,
    themes: Option<Vec<String>>,
    engine: EngineSection,
    extend: BTreeMap<String, BTreeMap<String, Value>>,
    plugins: Option<Vec<String>>,
}

impl RawConfig {
    /// Convert the raw configuration into a [`StyleConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<StyleConfig> {
        let sources = ConfigSources {
            content_globs: detect_source(
                self.content.globs.is_some(),
                "WEFT__CONTENT__GLOBS",
                "content.globs",
            ),
            themes: detect_source(self.themes.is_some(), "WEFT__THEMES", "themes"),
            engine_class_prefix: detect_source(
                self.engine.class_prefix.is_some(),
                "WEFT__ENGINE__CLASS_PREFIX",
                "engine.class_prefix",
            ),
        };

        let defaults = StyleConfig::default();

        let config = StyleConfig {
            content: self.content.resolve(),
            dark_mode: self.dark_mode.resolve()?,
            themes: match self.themes {
                Some(themes) => sanitize_names(themes),
                None => defaults.themes,
            },
            engine: self.engine.resolve(),
            extensions: self.extend,
            plugins: match self.plugins {
                Some(plugins) => sanitize_names(plugins),
                None => defaults.plugins,
            },
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    value_present: bool,
    env_var: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
