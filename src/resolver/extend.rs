use std::collections::BTreeMap;

use serde_json::{Value, json};

/// Two-level definition table: category (e.g. `keyframes`, `animation`)
/// mapped to named definitions. A definition value is atomic; overlays
/// replace it wholesale rather than merging into it.
pub type ExtensionMap = BTreeMap<String, BTreeMap<String, Value>>;

/// The definition table a build starts from before configured extensions
/// are overlaid: the standard keyframes and their animation shorthands.
pub fn base_definitions() -> ExtensionMap {
    let mut definitions = ExtensionMap::new();

    definitions.insert(
        "keyframes".to_string(),
        BTreeMap::from([
            (
                "spin".to_string(),
                json!({ "to": { "transform": "rotate(360deg)" } }),
            ),
            (
                "ping".to_string(),
                json!({ "75%, 100%": { "transform": "scale(2)", "opacity": "0" } }),
            ),
            (
                "pulse".to_string(),
                json!({ "50%": { "opacity": ".5" } }),
            ),
            (
                "bounce".to_string(),
                json!({
                    "0%, 100%": {
                        "transform": "translateY(-25%)",
                        "animation-timing-function": "cubic-bezier(0.8, 0, 1, 1)"
                    },
                    "50%": {
                        "transform": "none",
                        "animation-timing-function": "cubic-bezier(0, 0, 0.2, 1)"
                    }
                }),
            ),
        ]),
    );

    definitions.insert(
        "animation".to_string(),
        BTreeMap::from([
            ("spin".to_string(), json!("spin 1s linear infinite")),
            (
                "ping".to_string(),
                json!("ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
            ),
            (
                "pulse".to_string(),
                json!("pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
            ),
            ("bounce".to_string(), json!("bounce 1s infinite")),
        ]),
    );

    definitions
}

/// Overlay configured extensions onto a base definition table.
///
/// Same-named entries replace the base definition, absent entries retain
/// it, and categories the extensions never mention pass through unchanged.
/// Categories the generator does not understand are preserved as data but
/// produce no output downstream.
pub fn merge_extensions(base: &ExtensionMap, extensions: &ExtensionMap) -> ExtensionMap {
    let mut merged = base.clone();
    for (category, entries) in extensions {
        let slot = merged.entry(category.clone()).or_default();
        for (name, definition) in entries {
            slot.insert(name.clone(), definition.clone());
        }
    }
    merged
}
