use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const DARK: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Dark,
    primary: "#661ae6",
    primary_content: "#ffffff",
    secondary: "#d926aa",
    accent: "#1fb2a5",
    neutral: "#191d24",
    base_100: "#2a303c",
    base_200: "#242933",
    base_300: "#20252b",
    base_content: "#a6adbb",
    info: "#3abff8",
    success: "#36d399",
    warning: "#fbbd23",
    error: "#f87272",
};
