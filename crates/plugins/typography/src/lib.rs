use weft_plugin_api::{PluginContext, Rule, RuleSet, StylePlugin, StylePluginDescriptor};

pub const PLUGIN_ID: &str = "typography";

pub fn descriptor() -> &'static StylePluginDescriptor {
    &TYPOGRAPHY_DESCRIPTOR
}

pub static TYPOGRAPHY_DESCRIPTOR: StylePluginDescriptor = StylePluginDescriptor {
    id: PLUGIN_ID,
    about: "Long-form prose styling for rendered markup",
};

/// Contributes a `prose` class family for long-form content: body copy,
/// headings, links, inline code and quotes, colored from the active theme's
/// token table.
#[derive(Debug, Default)]
pub struct TypographyPlugin;

impl StylePlugin for TypographyPlugin {
    fn descriptor(&self) -> &'static StylePluginDescriptor {
        &TYPOGRAPHY_DESCRIPTOR
    }

    fn contribute(&self, context: PluginContext<'_>) -> RuleSet {
        let tokens = context.themes().tokens;
        let prose = context.class_selector("prose");

        let mut rules = RuleSet::new();
        rules.push(
            Rule::new(prose.clone())
                .decl("--prose-body", tokens.base_content)
                .decl("--prose-headings", tokens.base_content)
                .decl("--prose-links", tokens.primary)
                .decl("--prose-code-bg", tokens.base_200)
                .decl("--prose-quote-border", tokens.base_300)
                .decl("color", "var(--prose-body)")
                .decl("max-width", "65ch"),
        );
        rules.push(
            Rule::new(format!("{prose} :where(h1, h2, h3, h4)"))
                .decl("color", "var(--prose-headings)")
                .decl("font-weight", "700")
                .decl("line-height", "1.25"),
        );
        rules.push(
            Rule::new(format!("{prose} :where(p)")).decl("margin-block", "1.25em"),
        );
        rules.push(
            Rule::new(format!("{prose} :where(a)"))
                .decl("color", "var(--prose-links)")
                .decl("text-decoration", "underline"),
        );
        rules.push(
            Rule::new(format!("{prose} :where(code)"))
                .decl("background-color", "var(--prose-code-bg)")
                .decl("border-radius", "0.25rem")
                .decl("padding", "0.125em 0.25em")
                .decl("font-size", "0.875em"),
        );
        rules.push(
            Rule::new(format!("{prose} :where(blockquote)"))
                .decl("border-inline-start", "4px solid var(--prose-quote-border)")
                .decl("padding-inline-start", "1em")
                .decl("font-style", "italic"),
        );
        rules
    }
}
