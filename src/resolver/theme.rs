use tracing::debug;
use weft_plugin_api::{ThemeTable, ThemeVariant};

use crate::settings::StyleConfig;
use crate::theme;

use super::error::ResolveError;

/// Determine the active theme and collect the token table for every
/// declared theme.
///
/// The active theme is the caller-supplied override when present in the
/// declared set, otherwise the first declared theme. Names match
/// case-insensitively, the same way palette lookup does. The full declared
/// list is returned alongside the active tokens because every declared
/// theme is still emitted as a selectable variant.
pub fn resolve_theme_table(
    config: &StyleConfig,
    requested: Option<&str>,
) -> Result<ThemeTable, ResolveError> {
    let declared = &config.themes;
    if declared.is_empty() {
        return Err(ResolveError::EmptyThemeSet);
    }

    let active_index = match requested {
        Some(name) => declared
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ResolveError::UnknownTheme {
                requested: name.to_string(),
                available: declared.clone(),
            })?,
        None => 0,
    };

    let mut variants = Vec::with_capacity(declared.len());
    for name in declared {
        let tokens = theme::by_name(name).ok_or_else(|| ResolveError::UnknownTheme {
            requested: name.clone(),
            available: theme::names(),
        })?;
        variants.push(ThemeVariant {
            name: name.clone(),
            tokens,
        });
    }

    let active = &variants[active_index];
    debug!(active = %active.name, declared = variants.len(), "resolved theme table");

    Ok(ThemeTable {
        active: active.name.clone(),
        tokens: active.tokens,
        declared: variants,
    })
}
