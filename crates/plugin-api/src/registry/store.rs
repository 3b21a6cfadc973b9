use std::sync::Arc;

use indexmap::IndexMap;

use crate::descriptors::StylePluginDescriptor;
use crate::error::PluginRegistryError;

use super::{RegisteredPlugin, StylePlugin};

/// Registry of all style plugins available to a build.
///
/// Registration order is preserved and is the order plugins are looked up
/// and invoked in when a configuration references them, so it doubles as
/// the default cascade order.
#[derive(Clone, Default)]
pub struct StylePluginRegistry {
    plugins: IndexMap<&'static str, RegisteredPlugin>,
}

impl StylePluginRegistry {
    /// Create an empty registry without any plugins registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            plugins: IndexMap::new(),
        }
    }

    /// Register or replace a plugin implementation under its declared id.
    ///
    /// Replacing keeps the original cascade position of the id.
    pub fn register<P>(&mut self, plugin: P)
    where
        P: StylePlugin + 'static,
    {
        let descriptor = plugin.descriptor();
        let plugin = Arc::new(plugin) as Arc<dyn StylePlugin>;
        self.plugins
            .insert(descriptor.id, RegisteredPlugin::new(descriptor, plugin));
    }

    /// Register a plugin, failing when its id is already taken.
    pub fn try_register<P>(&mut self, plugin: P) -> Result<(), PluginRegistryError>
    where
        P: StylePlugin + 'static,
    {
        let id = plugin.descriptor().id;
        if self.plugins.contains_key(id) {
            return Err(PluginRegistryError::DuplicateId { id });
        }
        self.register(plugin);
        Ok(())
    }

    /// Lookup a plugin implementation by its identifier.
    pub fn plugin_by_id(&self, id: &str) -> Option<Arc<dyn StylePlugin>> {
        self.plugins.get(id).map(|entry| entry.plugin())
    }

    /// Lookup the stored registration entry for an identifier.
    pub fn get(&self, id: &str) -> Option<&RegisteredPlugin> {
        self.plugins.get(id)
    }

    /// Iterate over all registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins.values()
    }

    /// Iterate over registered plugin descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static StylePluginDescriptor> + '_ {
        self.plugins.values().map(|entry| entry.descriptor())
    }

    /// Remove the plugin registered under the provided identifier,
    /// preserving the relative order of the remaining plugins.
    pub fn deregister_by_id(&mut self, id: &str) -> Option<RegisteredPlugin> {
        self.plugins.shift_remove(id)
    }

    /// Return the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` when no plugins have been registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Returns `true` if a plugin has been registered for the provided id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }
}
