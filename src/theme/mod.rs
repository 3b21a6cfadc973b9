//! Named token palettes bundled with the resolver.
//!
//! The palette set is fixed at compile time: a configuration selects themes
//! by name out of [`BUILT_IN_DEFINITIONS`], and the table is immutable data
//! shared freely between concurrent builds. Nothing here mutates after
//! startup; each build pass simply reads the palettes its declared theme
//! names point at.

mod builtins;

pub use builtins::BUILT_IN_DEFINITIONS;

use weft_plugin_api::ThemeTokens;

/// A named token palette compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    /// Canonical theme name, as a configuration declares it.
    pub name: &'static str,
    /// The token palette.
    pub tokens: ThemeTokens,
}

/// Lookup a token palette by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<ThemeTokens> {
    let name = name.trim();
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name))
        .map(|definition| definition.tokens)
}

/// Names of every bundled theme, in declaration order. A configuration
/// that does not declare its own theme list gets exactly this one.
#[must_use]
pub fn names() -> Vec<String> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name.to_string())
        .collect()
}

/// Token table used when nothing else is configured: the first bundled
/// palette.
#[must_use]
pub fn default_theme() -> ThemeTokens {
    BUILT_IN_DEFINITIONS[0].tokens
}
