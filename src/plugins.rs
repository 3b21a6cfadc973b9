//! Built-in plugin wiring.

use weft_plugin_api::StylePluginRegistry;

pub use weft_plugins_components::ComponentsPlugin;
pub use weft_plugins_typography::TypographyPlugin;

/// Create a registry populated with the built-in plugins, in their default
/// cascade order: typography first, then the themed component layer.
#[must_use]
pub fn default_registry() -> StylePluginRegistry {
    let mut registry = StylePluginRegistry::empty();
    register_builtin_plugins(&mut registry);
    registry
}

/// Register the built-in plugins into an existing registry.
pub fn register_builtin_plugins(registry: &mut StylePluginRegistry) {
    registry.register(TypographyPlugin);
    registry.register(ComponentsPlugin);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_contains_builtins_in_order() {
        let registry = default_registry();
        let ids: Vec<_> = registry.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, vec!["typography", "components"]);
    }
}
