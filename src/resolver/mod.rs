//! Turn a [`StyleConfig`] into the artifacts the generator consumes: the
//! scanned file set, the active theme table, the merged definition table and
//! the ordered rule-generation plan.
//!
//! Every operation is a pure single-pass function over an immutable
//! configuration snapshot; concurrent builds can resolve independently.

mod content;
mod error;
mod extend;
mod plan;
mod theme;

pub use content::{ContentOptions, DEFAULT_CONTENT_GLOBS, resolve_content_files};
pub use error::ResolveError;
pub use extend::{ExtensionMap, base_definitions, merge_extensions};
pub use plan::{PlanEntry, StylesheetPlan, compose_plugin_plan};
pub use theme::resolve_theme_table;

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use weft_plugin_api::{StylePluginRegistry, ThemeTable};

use crate::settings::StyleConfig;

/// Everything a single build pass resolves out of one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Deduplicated set of files to scan for utility-class usage.
    pub files: BTreeSet<PathBuf>,
    /// Active theme plus every declared variant.
    pub themes: ThemeTable,
    /// Built-in definitions overlaid with the configured extensions.
    pub definitions: ExtensionMap,
    /// Plugin rules in cascade order.
    pub plan: StylesheetPlan,
}

/// Run every resolver operation for one build pass.
pub fn resolve(
    config: &StyleConfig,
    registry: &StylePluginRegistry,
    roots: &[PathBuf],
    requested_theme: Option<&str>,
) -> Result<Resolution, ResolveError> {
    let files = resolve_content_files(&config.content, roots)?;
    let themes = resolve_theme_table(config, requested_theme)?;
    let definitions = merge_extensions(&base_definitions(), &config.extensions);
    let plan = compose_plugin_plan(config, &themes, registry)?;

    Ok(Resolution {
        files,
        themes,
        definitions,
        plan,
    })
}
