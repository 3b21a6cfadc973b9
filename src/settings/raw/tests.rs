use config::FileFormat;
use serde_json::json;

use weft_plugin_api::DarkMode;

use super::RawConfig;
use crate::resolver::DEFAULT_CONTENT_GLOBS;

fn raw_from_toml(input: &str) -> RawConfig {
    config::Config::builder()
        .add_source(config::File::from_str(input, FileFormat::Toml))
        .build()
        .expect("builder should accept the inline source")
        .try_deserialize()
        .expect("raw configuration should deserialize")
}

#[test]
fn full_document_resolves_to_the_declared_values() {
    let raw = raw_from_toml(
        r#"
themes = ["light", "dark", "synthwave", "dracula", "retro", "dim", "corporate"]
plugins = ["typography", "components"]

[content]
globs = ["./src/**/*.{rs,html,css}", "./dist/**/*.html"]

[dark_mode]
strategy = "class"
selector = '[data-theme="dark"]'

[engine]
style_injection = true
base_reset = true
utility_helpers = true
logging_enabled = true
rtl = false
class_prefix = ""

[extend.keyframes.gradient]
to = { background-position = "200% center" }

[extend.animation]
gradient = "gradient 8s linear infinite"
"#,
    );

    let config = raw.resolve().unwrap();

    assert_eq!(config.content.globs, DEFAULT_CONTENT_GLOBS);
    assert_eq!(
        config.dark_mode,
        DarkMode::ClassBased {
            selector: "[data-theme=\"dark\"]".into()
        }
    );
    assert_eq!(config.themes.len(), 7);
    assert_eq!(config.themes[0], "light");
    assert!(config.engine.style_injection);
    assert!(!config.engine.rtl);
    assert!(config.engine.class_prefix.is_empty());
    assert_eq!(
        config.extensions["animation"]["gradient"],
        json!("gradient 8s linear infinite")
    );
    assert_eq!(
        config.extensions["keyframes"]["gradient"],
        json!({ "to": { "background-position": "200% center" } })
    );
    assert_eq!(config.plugins, vec!["typography", "components"]);
}

#[test]
fn empty_document_resolves_to_defaults() {
    let config = raw_from_toml("").resolve().unwrap();

    assert_eq!(config.content.globs, DEFAULT_CONTENT_GLOBS);
    assert_eq!(config.themes, crate::theme::names());
    assert_eq!(config.plugins, vec!["typography", "components"]);
    assert!(config.extensions.is_empty());
    assert!(config.engine.logging_enabled);
}

#[test]
fn explicitly_empty_globs_stay_empty() {
    let config = raw_from_toml("[content]\nglobs = []\n").resolve().unwrap();
    assert!(config.content.globs.is_empty());
}

#[test]
fn illegal_class_prefix_fails_resolution() {
    let err = raw_from_toml("[engine]\nclass_prefix = \"wf prefix\"\n")
        .resolve()
        .unwrap_err();
    assert!(err.to_string().contains("engine.class_prefix"));
}

#[test]
fn duplicate_theme_names_fail_resolution() {
    let err = raw_from_toml("themes = [\"light\", \"LIGHT\"]\n")
        .resolve()
        .unwrap_err();
    assert!(err.to_string().contains("unique"));
}

#[test]
fn unknown_dark_mode_strategy_fails_resolution() {
    let err = raw_from_toml("[dark_mode]\nstrategy = \"auto\"\n")
        .resolve()
        .unwrap_err();
    assert!(err.to_string().contains("dark_mode.strategy"));
}

#[test]
fn media_strategy_resolves_without_a_selector() {
    let config = raw_from_toml("[dark_mode]\nstrategy = \"media\"\n")
        .resolve()
        .unwrap();
    assert_eq!(config.dark_mode, DarkMode::MediaQuery);
}
