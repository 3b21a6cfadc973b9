use crate::types::{DarkMode, EngineOptions, ThemeTable};

/// Everything a plugin may consult while contributing rules.
///
/// Contexts borrow from the build's resolved configuration and are handed to
/// each plugin in turn; plugins never observe each other's output.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    engine: &'a EngineOptions,
    dark_mode: &'a DarkMode,
    themes: &'a ThemeTable,
}

impl<'a> PluginContext<'a> {
    pub fn new(engine: &'a EngineOptions, dark_mode: &'a DarkMode, themes: &'a ThemeTable) -> Self {
        Self {
            engine,
            dark_mode,
            themes,
        }
    }

    pub fn engine(&self) -> &'a EngineOptions {
        self.engine
    }

    pub fn dark_mode(&self) -> &'a DarkMode {
        self.dark_mode
    }

    pub fn themes(&self) -> &'a ThemeTable {
        self.themes
    }

    /// Apply the configured class prefix and leading dot to a class name.
    pub fn class_selector(&self, class: &str) -> String {
        format!(".{}", self.engine.prefixed(class))
    }
}
