use serde::Deserialize;

use weft_plugin_api::EngineOptions;

/// Engine toggles as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct EngineSection {
    pub(super) style_injection: Option<bool>,
    pub(super) base_reset: Option<bool>,
    pub(super) utility_helpers: Option<bool>,
    pub(super) logging_enabled: Option<bool>,
    pub(super) rtl: Option<bool>,
    pub(super) class_prefix: Option<String>,
}

impl EngineSection {
    pub(super) fn resolve(self) -> EngineOptions {
        let defaults = EngineOptions::default();
        EngineOptions {
            style_injection: self.style_injection.unwrap_or(defaults.style_injection),
            base_reset: self.base_reset.unwrap_or(defaults.base_reset),
            utility_helpers: self.utility_helpers.unwrap_or(defaults.utility_helpers),
            logging_enabled: self.logging_enabled.unwrap_or(defaults.logging_enabled),
            rtl: self.rtl.unwrap_or(defaults.rtl),
            class_prefix: self
                .class_prefix
                .map(|prefix| prefix.trim().to_string())
                .unwrap_or(defaults.class_prefix),
        }
    }
}
