use std::sync::Arc;

use crate::descriptors::StylePluginDescriptor;

use super::StylePlugin;

/// Metadata and implementation pair stored by the registry.
#[derive(Clone)]
pub struct RegisteredPlugin {
    descriptor: &'static StylePluginDescriptor,
    plugin: Arc<dyn StylePlugin>,
}

impl RegisteredPlugin {
    pub fn new(descriptor: &'static StylePluginDescriptor, plugin: Arc<dyn StylePlugin>) -> Self {
        Self { descriptor, plugin }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    pub fn descriptor(&self) -> &'static StylePluginDescriptor {
        self.descriptor
    }

    pub fn plugin(&self) -> Arc<dyn StylePlugin> {
        Arc::clone(&self.plugin)
    }
}
