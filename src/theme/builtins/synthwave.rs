use weft_plugin_api::{ColorScheme, ThemeTokens};

pub const SYNTHWAVE: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Dark,
    primary: "#e779c1",
    primary_content: "#201047",
    secondary: "#58c7f3",
    accent: "#f3cc30",
    neutral: "#221551",
    base_100: "#2d1b69",
    base_200: "#24135f",
    base_300: "#1c0f52",
    base_content: "#f9f7fd",
    info: "#53c0f3",
    success: "#71ead2",
    warning: "#f3cc30",
    error: "#e24056",
};
