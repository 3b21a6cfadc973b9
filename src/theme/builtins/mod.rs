mod corporate;
mod dark;
mod dim;
mod dracula;
mod light;
mod retro;
mod synthwave;

use super::ThemeDefinition;

/// Built-in palettes, in the order a default configuration declares them.
pub const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        name: "light",
        tokens: light::LIGHT,
    },
    ThemeDefinition {
        name: "dark",
        tokens: dark::DARK,
    },
    ThemeDefinition {
        name: "synthwave",
        tokens: synthwave::SYNTHWAVE,
    },
    ThemeDefinition {
        name: "dracula",
        tokens: dracula::DRACULA,
    },
    ThemeDefinition {
        name: "retro",
        tokens: retro::RETRO,
    },
    ThemeDefinition {
        name: "dim",
        tokens: dim::DIM,
    },
    ThemeDefinition {
        name: "corporate",
        tokens: corporate::CORPORATE,
    },
];
