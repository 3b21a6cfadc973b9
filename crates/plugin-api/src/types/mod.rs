mod options;
mod rule;
mod theme;

pub use options::{DEFAULT_DARK_SELECTOR, DarkMode, EngineOptions};
pub use rule::{Declaration, Rule, RuleSet};
pub use theme::{ColorScheme, ThemeTable, ThemeTokens, ThemeVariant};
