use std::collections::HashSet;

use ignore::overrides::OverrideBuilder;

use super::{ConfigError, ConfigSources, StyleConfig};

pub(super) fn validate(config: &StyleConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
    if let Some(bad) = config
        .engine
        .class_prefix
        .chars()
        .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-' && *ch != '_')
    {
        return Err(ConfigError::invalid(
            "engine.class_prefix",
            config.engine.class_prefix.clone(),
            sources.source_for_class_prefix(),
            format!("character '{bad}' is not allowed in generated class names"),
        ));
    }

    if config.themes.is_empty() {
        return Err(ConfigError::invalid(
            "themes",
            "[]",
            sources.source_for_themes(),
            "at least one theme must be declared",
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.themes {
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(ConfigError::invalid(
                "themes",
                name.clone(),
                sources.source_for_themes(),
                "theme names must be unique",
            ));
        }
    }

    // Malformed patterns fail the build here, at load time, rather than
    // when the file set is first expanded.
    let mut builder = OverrideBuilder::new(".");
    for glob in &config.content.globs {
        if let Err(err) = builder.add(glob.trim_start_matches("./")) {
            return Err(ConfigError::invalid(
                "content.globs",
                glob.clone(),
                sources.source_for_globs(),
                err.to_string(),
            ));
        }
    }

    Ok(())
}
