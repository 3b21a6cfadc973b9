use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const DRACULA: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Dark,
    primary: "#ff79c6",
    primary_content: "#2b1220",
    secondary: "#bd93f9",
    accent: "#ffb86c",
    neutral: "#414558",
    base_100: "#282a36",
    base_200: "#232530",
    base_300: "#1e2029",
    base_content: "#f8f8f2",
    info: "#8be9fd",
    success: "#50fa7b",
    warning: "#f1fa8c",
    error: "#ff5555",
};
