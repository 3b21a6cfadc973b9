//! Build-time style configuration resolver for a utility CSS generator.
//!
//! The root module primarily re-exports the configuration surface and the
//! resolver operations so that build tools can drive a whole build pass
//! without digging through the module hierarchy: load a [`StyleConfig`],
//! obtain a plugin registry via [`default_registry`], then call
//! [`resolver::resolve`] (or the individual operations) to produce the
//! artifacts the generator consumes.

pub mod app_dirs;
pub mod logging;
pub mod plugins;
pub mod resolver;
pub mod settings;
pub mod theme;

pub use plugins::default_registry;
pub use resolver::{
    ContentOptions, ExtensionMap, PlanEntry, Resolution, ResolveError, StylesheetPlan,
    base_definitions, compose_plugin_plan, merge_extensions, resolve, resolve_content_files,
    resolve_theme_table,
};
pub use settings::{ConfigError, StyleConfig};

pub use weft_plugin_api::{
    ColorScheme, DarkMode, Declaration, EngineOptions, PluginContext, Rule, RuleSet, StylePlugin,
    StylePluginDescriptor, StylePluginRegistry, ThemeTable, ThemeTokens, ThemeVariant,
};
