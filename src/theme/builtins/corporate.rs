use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const CORPORATE: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Light,
    primary: "#4b6bfb",
    primary_content: "#ffffff",
    secondary: "#7b92b2",
    accent: "#67cba0",
    neutral: "#181a2a",
    base_100: "#ffffff",
    base_200: "#f1f3f9",
    base_300: "#e3e9f4",
    base_content: "#181a2a",
    info: "#3abff8",
    success: "#36d399",
    warning: "#fbbd23",
    error: "#f87272",
};
