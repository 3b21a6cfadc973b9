use weft_plugin_api::DarkMode;

use super::StyleConfig;

pub(super) fn print_summary(config: &StyleConfig) {
    println!("Effective configuration:");
    println!("  Content globs: {}", config.content.globs.join(", "));
    match &config.dark_mode {
        DarkMode::Disabled => println!("  Dark mode: disabled"),
        DarkMode::ClassBased { selector } => println!("  Dark mode: class ({selector})"),
        DarkMode::MediaQuery => println!("  Dark mode: media query"),
    }
    println!("  Themes: {}", config.themes.join(", "));
    println!(
        "  Style injection: {}",
        bool_to_word(config.engine.style_injection)
    );
    println!("  Base reset: {}", bool_to_word(config.engine.base_reset));
    println!(
        "  Utility helpers: {}",
        bool_to_word(config.engine.utility_helpers)
    );
    println!(
        "  Build logs: {}",
        bool_to_word(config.engine.logging_enabled)
    );
    println!("  RTL: {}", bool_to_word(config.engine.rtl));
    if config.engine.class_prefix.is_empty() {
        println!("  Class prefix: (none)");
    } else {
        println!("  Class prefix: {}", config.engine.class_prefix);
    }
    if !config.extensions.is_empty() {
        let counts: Vec<String> = config
            .extensions
            .iter()
            .map(|(category, entries)| format!("{category} ({})", entries.len()))
            .collect();
        println!("  Extensions: {}", counts.join(", "));
    }
    println!("  Plugins: {}", config.plugins.join(", "));
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
