use serde::Serialize;

use super::rule::Declaration;

/// Whether a palette is designed for a light or dark base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A named set of visual tokens making up one theme.
///
/// Token tables are static data: built-in palettes are `const` definitions
/// and custom palettes are registered from `'static` declarations, so the
/// whole table stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub scheme: ColorScheme,
    pub primary: &'static str,
    pub primary_content: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub neutral: &'static str,
    pub base_100: &'static str,
    pub base_200: &'static str,
    pub base_300: &'static str,
    pub base_content: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl ThemeTokens {
    /// Render the palette as custom-property declarations, in a stable
    /// order, ready to be placed inside a theme-scoped rule.
    pub fn variables(&self) -> Vec<Declaration> {
        let scheme = match self.scheme {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        };
        vec![
            Declaration::new("color-scheme", scheme),
            Declaration::new("--color-primary", self.primary),
            Declaration::new("--color-primary-content", self.primary_content),
            Declaration::new("--color-secondary", self.secondary),
            Declaration::new("--color-accent", self.accent),
            Declaration::new("--color-neutral", self.neutral),
            Declaration::new("--color-base-100", self.base_100),
            Declaration::new("--color-base-200", self.base_200),
            Declaration::new("--color-base-300", self.base_300),
            Declaration::new("--color-base-content", self.base_content),
            Declaration::new("--color-info", self.info),
            Declaration::new("--color-success", self.success),
            Declaration::new("--color-warning", self.warning),
            Declaration::new("--color-error", self.error),
        ]
    }
}

/// One declared theme together with its resolved token table.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeVariant {
    pub name: String,
    pub tokens: ThemeTokens,
}

/// The outcome of theme resolution: the active theme for this build pass
/// plus every declared theme, in declaration order. All declared themes are
/// still emitted as selectable variants even though only one is active.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeTable {
    pub active: String,
    pub tokens: ThemeTokens,
    pub declared: Vec<ThemeVariant>,
}

impl ThemeTable {
    /// First declared theme carrying a dark palette, if any. The dark-mode
    /// strategy sources its token block from this variant.
    pub fn dark_variant(&self) -> Option<&ThemeVariant> {
        self.declared
            .iter()
            .find(|variant| variant.tokens.scheme == ColorScheme::Dark)
    }

    /// Names of every declared theme, in declaration order.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(|variant| variant.name.as_str())
    }
}
