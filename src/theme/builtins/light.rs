use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const LIGHT: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Light,
    primary: "#570df8",
    primary_content: "#e0d2fe",
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
