pub mod context;
pub mod descriptors;
pub mod error;
pub mod registry;
pub mod types;

pub use context::PluginContext;
pub use descriptors::StylePluginDescriptor;
pub use error::PluginRegistryError;
pub use registry::{RegisteredPlugin, StylePlugin, StylePluginRegistry};
pub use types::{
    ColorScheme, DEFAULT_DARK_SELECTOR, DarkMode, Declaration, EngineOptions, Rule, RuleSet,
    ThemeTable, ThemeTokens, ThemeVariant,
};
