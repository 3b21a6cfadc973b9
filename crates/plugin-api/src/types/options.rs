use serde::{Deserialize, Serialize};

/// Default selector used to detect an active dark theme in the markup.
pub const DEFAULT_DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// How the dark variant of the active theme is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DarkMode {
    /// No dark variant is emitted.
    Disabled,
    /// Dark tokens are scoped to a class or attribute selector present in
    /// the markup.
    ClassBased { selector: String },
    /// Dark tokens are wrapped in a `prefers-color-scheme: dark` media query.
    MediaQuery,
}

impl DarkMode {
    /// Dark variant triggered by the default theme attribute selector.
    pub fn class_based() -> Self {
        Self::ClassBased {
            selector: DEFAULT_DARK_SELECTOR.to_string(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl Default for DarkMode {
    fn default() -> Self {
        Self::class_based()
    }
}

/// Flat generation toggles consumed by the resolver and the built-in
/// plugins. Every field acts independently; none of them changes the
/// meaning of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Emit styled component rules rather than variable tables alone.
    pub style_injection: bool,
    /// Emit the CSS reset layer ahead of generated rules.
    pub base_reset: bool,
    /// Emit helper utility classes referencing theme variables.
    pub utility_helpers: bool,
    /// Print build-time diagnostics while resolving.
    pub logging_enabled: bool,
    /// Generate right-to-left aware output.
    pub rtl: bool,
    /// Prefix applied to every generated class name.
    pub class_prefix: String,
}

impl EngineOptions {
    /// Apply the configured class prefix to a bare class name.
    pub fn prefixed(&self, class: &str) -> String {
        format!("{}{class}", self.class_prefix)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            style_injection: true,
            base_reset: true,
            utility_helpers: true,
            logging_enabled: true,
            rtl: false,
            class_prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dark_mode_uses_theme_attribute() {
        match DarkMode::default() {
            DarkMode::ClassBased { selector } => assert_eq!(selector, DEFAULT_DARK_SELECTOR),
            other => panic!("unexpected default strategy: {other:?}"),
        }
    }

    #[test]
    fn prefix_is_applied_verbatim() {
        let options = EngineOptions {
            class_prefix: "wf-".into(),
            ..EngineOptions::default()
        };
        assert_eq!(options.prefixed("btn"), "wf-btn");

        let bare = EngineOptions::default();
        assert_eq!(bare.prefixed("btn"), "btn");
    }
}
