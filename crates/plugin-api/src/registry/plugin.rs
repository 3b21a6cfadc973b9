use crate::context::PluginContext;
use crate::descriptors::StylePluginDescriptor;
use crate::types::RuleSet;

/// An external contributor of style rules, composed into the final output
/// in declared order.
///
/// A plugin is invoked exactly once per build pass. Its contributed rules
/// are concatenated after the rules of every plugin declared before it, so
/// later plugins win on specificity ties.
pub trait StylePlugin: Send + Sync {
    /// Static descriptor advertising plugin metadata.
    fn descriptor(&self) -> &'static StylePluginDescriptor;

    /// Identifier used to reference this plugin from a configuration.
    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    /// Produce the rules this plugin contributes for the resolved build
    /// context.
    fn contribute(&self, context: PluginContext<'_>) -> RuleSet;
}
