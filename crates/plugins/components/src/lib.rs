use weft_plugin_api::{DarkMode, PluginContext, Rule, RuleSet, StylePlugin, StylePluginDescriptor};

pub const PLUGIN_ID: &str = "components";

pub fn descriptor() -> &'static StylePluginDescriptor {
    &COMPONENTS_DESCRIPTOR
}

pub static COMPONENTS_DESCRIPTOR: StylePluginDescriptor = StylePluginDescriptor {
    id: PLUGIN_ID,
    about: "Themed component classes and per-theme variable tables",
};

/// Contributes the themed layer of the stylesheet: a CSS variable block per
/// declared theme, the dark-variant block selected by the configured
/// dark-mode strategy, and (when enabled) styled component classes plus
/// helper utilities referencing those variables.
#[derive(Debug, Default)]
pub struct ComponentsPlugin;

impl StylePlugin for ComponentsPlugin {
    fn descriptor(&self) -> &'static StylePluginDescriptor {
        &COMPONENTS_DESCRIPTOR
    }

    fn contribute(&self, context: PluginContext<'_>) -> RuleSet {
        let mut rules = RuleSet::new();
        theme_tables(&mut rules, context);
        dark_variant(&mut rules, context);
        if context.engine().style_injection {
            component_classes(&mut rules, context);
        }
        if context.engine().utility_helpers {
            helper_utilities(&mut rules, context);
        }
        rules
    }
}

/// One variable table per declared theme. The first declared theme also
/// lands on `:root` so unthemed markup renders with the default palette.
fn theme_tables(rules: &mut RuleSet, context: PluginContext<'_>) {
    for (index, variant) in context.themes().declared.iter().enumerate() {
        if index == 0 {
            let mut root = Rule::new(":root").decls(variant.tokens.variables());
            if context.engine().rtl {
                root = root.decl("direction", "rtl");
            }
            rules.push(root);
        }
        rules.push(
            Rule::new(format!("[data-theme=\"{}\"]", variant.name))
                .decls(variant.tokens.variables()),
        );
    }
}

/// Token block for the dark variant, scoped according to the configured
/// strategy. Skipped entirely when no declared theme carries a dark palette.
fn dark_variant(rules: &mut RuleSet, context: PluginContext<'_>) {
    let Some(dark) = context.themes().dark_variant() else {
        return;
    };

    match context.dark_mode() {
        DarkMode::Disabled => {}
        DarkMode::ClassBased { selector } => {
            rules.push(Rule::new(selector.clone()).decls(dark.tokens.variables()));
        }
        DarkMode::MediaQuery => {
            rules.push(
                Rule::new(":root")
                    .media("(prefers-color-scheme: dark)")
                    .decls(dark.tokens.variables()),
            );
        }
    }
}

fn component_classes(rules: &mut RuleSet, context: PluginContext<'_>) {
    rules.push(
        Rule::new(context.class_selector("btn"))
            .decl("display", "inline-flex")
            .decl("align-items", "center")
            .decl("justify-content", "center")
            .decl("padding-inline", "1rem")
            .decl("block-size", "3rem")
            .decl("border-radius", "0.5rem")
            .decl("background-color", "var(--color-primary)")
            .decl("color", "var(--color-primary-content)")
            .decl("cursor", "pointer"),
    );
    rules.push(
        Rule::new(context.class_selector("card"))
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("border-radius", "1rem")
            .decl("padding", "1.5rem")
            .decl("background-color", "var(--color-base-200)")
            .decl("color", "var(--color-base-content)"),
    );
    rules.push(
        Rule::new(context.class_selector("badge"))
            .decl("display", "inline-flex")
            .decl("align-items", "center")
            .decl("padding-inline", "0.5rem")
            .decl("border-radius", "9999px")
            .decl("font-size", "0.75rem")
            .decl("background-color", "var(--color-neutral)")
            .decl("color", "var(--color-base-100)"),
    );
}

fn helper_utilities(rules: &mut RuleSet, context: PluginContext<'_>) {
    let helpers = [
        ("text-primary", "color", "var(--color-primary)"),
        ("text-base-content", "color", "var(--color-base-content)"),
        ("bg-primary", "background-color", "var(--color-primary)"),
        ("bg-base-100", "background-color", "var(--color-base-100)"),
        ("bg-base-200", "background-color", "var(--color-base-200)"),
    ];
    for (class, property, value) in helpers {
        rules.push(Rule::new(context.class_selector(class)).decl(property, value));
    }
}

#[cfg(test)]
mod tests {
    use weft_plugin_api::{
        ColorScheme, EngineOptions, ThemeTable, ThemeTokens, ThemeVariant,
    };

    use super::*;

    const LIGHT: ThemeTokens = ThemeTokens {
        scheme: ColorScheme::Light,
        primary: "#570df8",
        primary_content: "#ffffff",
        secondary: "#f000b8",
        accent: "#37cdbe",
        neutral: "#3d4451",
        base_100: "#ffffff",
        base_200: "#f2f2f2",
        base_300: "#e5e6e6",
        base_content: "#1f2937",
        info: "#3abff8",
        success: "#36d399",
        warning: "#fbbd23",
        error: "#f87272",
    };

    const DARK: ThemeTokens = ThemeTokens {
        scheme: ColorScheme::Dark,
        primary: "#661ae6",
        primary_content: "#ffffff",
        secondary: "#d926aa",
        accent: "#1fb2a5",
        neutral: "#191d24",
        base_100: "#2a303c",
        base_200: "#242933",
        base_300: "#20252e",
        base_content: "#a6adbb",
        info: "#3abff8",
        success: "#36d399",
        warning: "#fbbd23",
        error: "#f87272",
    };

    fn table(themes: &[(&str, ThemeTokens)]) -> ThemeTable {
        let declared: Vec<_> = themes
            .iter()
            .map(|(name, tokens)| ThemeVariant {
                name: (*name).to_string(),
                tokens: *tokens,
            })
            .collect();
        ThemeTable {
            active: declared[0].name.clone(),
            tokens: declared[0].tokens,
            declared,
        }
    }

    fn contribute(engine: EngineOptions, dark_mode: DarkMode, themes: ThemeTable) -> Vec<Rule> {
        let context = PluginContext::new(&engine, &dark_mode, &themes);
        ComponentsPlugin.contribute(context).into_iter().collect()
    }

    #[test]
    fn every_declared_theme_gets_a_variable_block() {
        let rules = contribute(
            EngineOptions::default(),
            DarkMode::Disabled,
            table(&[("light", LIGHT), ("dark", DARK)]),
        );

        assert!(rules.iter().any(|rule| rule.selector == ":root"));
        assert!(rules.iter().any(|rule| rule.selector == "[data-theme=\"light\"]"));
        assert!(rules.iter().any(|rule| rule.selector == "[data-theme=\"dark\"]"));
    }

    #[test]
    fn media_strategy_scopes_dark_tokens_to_a_query() {
        let rules = contribute(
            EngineOptions::default(),
            DarkMode::MediaQuery,
            table(&[("light", LIGHT), ("dark", DARK)]),
        );

        let media_rule = rules
            .iter()
            .find(|rule| rule.media.is_some())
            .expect("dark media block");
        assert_eq!(
            media_rule.media.as_deref(),
            Some("(prefers-color-scheme: dark)")
        );
        assert!(
            media_rule
                .declarations
                .iter()
                .any(|decl| decl.property == "--color-base-100" && decl.value == "#2a303c")
        );
    }

    #[test]
    fn class_strategy_uses_the_configured_selector() {
        let rules = contribute(
            EngineOptions::default(),
            DarkMode::ClassBased {
                selector: ".theme-dark".into(),
            },
            table(&[("light", LIGHT), ("dark", DARK)]),
        );

        assert!(rules.iter().any(|rule| rule.selector == ".theme-dark"));
    }

    #[test]
    fn no_dark_palette_means_no_dark_block() {
        let rules = contribute(
            EngineOptions::default(),
            DarkMode::MediaQuery,
            table(&[("light", LIGHT)]),
        );

        assert!(rules.iter().all(|rule| rule.media.is_none()));
    }

    #[test]
    fn disabling_style_injection_drops_component_classes() {
        let engine = EngineOptions {
            style_injection: false,
            ..EngineOptions::default()
        };
        let rules = contribute(engine, DarkMode::Disabled, table(&[("light", LIGHT)]));

        assert!(rules.iter().all(|rule| rule.selector != ".btn"));
        assert!(rules.iter().any(|rule| rule.selector == ".text-primary"));
    }

    #[test]
    fn prefix_lands_on_components_and_helpers() {
        let engine = EngineOptions {
            class_prefix: "wf-".into(),
            ..EngineOptions::default()
        };
        let rules = contribute(engine, DarkMode::Disabled, table(&[("light", LIGHT)]));

        assert!(rules.iter().any(|rule| rule.selector == ".wf-btn"));
        assert!(rules.iter().any(|rule| rule.selector == ".wf-text-primary"));
    }

    #[test]
    fn rtl_marks_the_root_block() {
        let engine = EngineOptions {
            rtl: true,
            ..EngineOptions::default()
        };
        let rules = contribute(engine, DarkMode::Disabled, table(&[("light", LIGHT)]));

        let root = rules.iter().find(|rule| rule.selector == ":root").unwrap();
        assert!(
            root.declarations
                .iter()
                .any(|decl| decl.property == "direction" && decl.value == "rtl")
        );
    }
}
