use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const RETRO: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Light,
    primary: "#ef9995",
    primary_content: "#282425",
    secondary: "#a4cbb4",
    accent: "#ebdc99",
    neutral: "#7d7259",
    base_100: "#ece3ca",
    base_200: "#e4d8b4",
    base_300: "#d2c59d",
    base_content: "#282425",
    info: "#2563eb",
    success: "#16a34a",
    warning: "#d97706",
    error: "#dc2626",
};
