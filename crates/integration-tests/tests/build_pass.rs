use std::fs;
use std::path::Path;

use tempfile::tempdir;

use weft::{DarkMode, default_registry, resolver, settings};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

const CONFIG: &str = r#"
themes = ["light", "dark"]
plugins = ["typography", "components"]

[content]
globs = ["./src/**/*.{html,css}"]

[dark_mode]
strategy = "class"
selector = '[data-theme="dark"]'

[extend.keyframes.gradient]
to = { background-position = "200% center" }

[extend.animation]
gradient = "gradient 8s linear infinite"
"#;

#[test]
fn a_full_build_pass_resolves_every_artifact() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("weft.toml"), CONFIG);
    write(&root.join("src/index.html"), "<div class=\"btn\"></div>");
    write(&root.join("src/site.css"), ".custom {}");
    write(&root.join("src/notes.txt"), "ignored");

    let config = settings::load_file(root.join("weft.toml")).unwrap();
    let registry = default_registry();

    let resolution = resolver::resolve(&config, &registry, &[root.to_path_buf()], None).unwrap();

    assert_eq!(resolution.files.len(), 2);
    assert!(resolution.files.contains(&root.join("src/index.html")));
    assert!(resolution.files.contains(&root.join("src/site.css")));

    assert_eq!(resolution.themes.active, "light");
    let declared: Vec<_> = resolution.themes.declared_names().collect();
    assert_eq!(declared, vec!["light", "dark"]);

    assert_eq!(
        resolution.definitions["animation"]["gradient"],
        serde_json::json!("gradient 8s linear infinite")
    );
    assert!(resolution.definitions["animation"].contains_key("spin"));

    let plugin_ids: Vec<_> = resolution.plan.iter().map(|entry| entry.id).collect();
    assert_eq!(plugin_ids, vec!["typography", "components"]);

    let dark_block = resolution
        .plan
        .rules()
        .find(|rule| rule.selector == "[data-theme=\"dark\"]" && rule.media.is_none());
    assert!(dark_block.is_some(), "components should emit the dark theme table");
}

#[test]
fn a_requested_theme_overrides_the_default_for_the_pass() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("weft.toml"), CONFIG);

    let config = settings::load_file(root.join("weft.toml")).unwrap();
    assert_eq!(
        config.dark_mode,
        DarkMode::ClassBased {
            selector: "[data-theme=\"dark\"]".into()
        }
    );

    let registry = default_registry();
    let resolution =
        resolver::resolve(&config, &registry, &[root.to_path_buf()], Some("dark")).unwrap();

    assert_eq!(resolution.themes.active, "dark");
}

#[test]
fn an_unknown_requested_theme_fails_the_build() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("weft.toml"), CONFIG);

    let config = settings::load_file(root.join("weft.toml")).unwrap();
    let registry = default_registry();

    let err = resolver::resolve(&config, &registry, &[root.to_path_buf()], Some("retro"))
        .unwrap_err();
    assert!(matches!(err, resolver::ResolveError::UnknownTheme { .. }));
}
