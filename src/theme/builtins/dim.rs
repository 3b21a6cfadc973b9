use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const DIM: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Dark,
    primary: "#9fe88d",
    primary_content: "#0a2e12",
    secondary: "#ff7d5c",
    accent: "#c792e9",
    neutral: "#1c212b",
    base_100: "#2a303c",
    base_200: "#242933",
    base_300: "#20252e",
    base_content: "#b2ccd6",
    info: "#28ebff",
    success: "#62efbd",
    warning: "#efd057",
    error: "#ffae9b",
};
