use serde::Serialize;
use tracing::debug;
use weft_plugin_api::{PluginContext, Rule, RuleSet, StylePluginRegistry, ThemeTable};

use crate::settings::StyleConfig;

use super::error::ResolveError;

/// Rules contributed by one plugin, tagged with its identifier.
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub id: &'static str,
    pub rules: RuleSet,
}

/// The ordered rule-generation plan for one build pass.
///
/// Entries appear in configuration order; the generator writes them to the
/// stylesheet in this order, so later entries win on specificity ties.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StylesheetPlan {
    entries: Vec<PlanEntry>,
}

impl StylesheetPlan {
    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter()
    }

    /// Flatten the plan into its rules, preserving cascade order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.entries.iter().flat_map(|entry| entry.rules.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Invoke every configured plugin in declared order and concatenate their
/// contributed rules.
///
/// A plugin identifier the registry cannot resolve fails the whole build:
/// no partial plan is returned.
pub fn compose_plugin_plan(
    config: &StyleConfig,
    themes: &ThemeTable,
    registry: &StylePluginRegistry,
) -> Result<StylesheetPlan, ResolveError> {
    let mut entries = Vec::with_capacity(config.plugins.len());

    for id in &config.plugins {
        let entry = registry
            .get(id)
            .ok_or_else(|| ResolveError::PluginResolution { id: id.clone() })?;
        let context = PluginContext::new(&config.engine, &config.dark_mode, themes);
        let rules = entry.plugin().contribute(context);
        debug!(plugin = entry.id(), rules = rules.len(), "collected plugin rules");
        entries.push(PlanEntry {
            id: entry.id(),
            rules,
        });
    }

    Ok(StylesheetPlan { entries })
}
