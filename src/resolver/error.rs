use thiserror::Error;

/// Errors surfaced while resolving a configuration.
///
/// Every variant is fatal for the build and deterministic: retrying without
/// changing the configuration reproduces the same failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A content pattern cannot be parsed.
    #[error("malformed content glob '{pattern}'")]
    MalformedGlob {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    /// A requested or declared theme has no known token table.
    #[error("unknown theme '{}' (known themes: {})", .requested, .available.join(", "))]
    UnknownTheme {
        requested: String,
        available: Vec<String>,
    },

    /// The configuration declares no themes at all.
    #[error("the configuration declares no themes")]
    EmptyThemeSet,

    /// A declared plugin cannot be located in the registry.
    #[error("style plugin '{id}' is not registered")]
    PluginResolution { id: String },
}
