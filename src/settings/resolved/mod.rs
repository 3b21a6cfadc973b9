use weft_plugin_api::{DarkMode, EngineOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

use crate::resolver::{ContentOptions, ExtensionMap};
use crate::theme;

/// Build-ready style configuration derived from the declaration source and
/// sensible defaults.
///
/// A configuration is constructed once per build invocation, stays
/// immutable for the duration of that build and is rebuilt, not diffed,
/// when the declaration source changes.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Source files considered for utility-class scanning.
    pub content: ContentOptions,
    /// How the dark variant of the active theme is selected.
    pub dark_mode: DarkMode,
    /// Declared theme names; the first entry is the default theme.
    pub themes: Vec<String>,
    /// Flat generation toggles.
    pub engine: EngineOptions,
    /// Additive definition overrides merged onto the built-in defaults.
    pub extensions: ExtensionMap,
    /// Plugin identifiers in cascade order.
    pub plugins: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            content: ContentOptions::default(),
            dark_mode: DarkMode::default(),
            themes: theme::names(),
            engine: EngineOptions::default(),
            extensions: ExtensionMap::new(),
            plugins: vec![
                weft_plugins_typography::PLUGIN_ID.to_string(),
                weft_plugins_components::PLUGIN_ID.to_string(),
            ],
        }
    }
}

impl StyleConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
