use thiserror::Error;

/// Errors that can occur when mutating the
/// [`StylePluginRegistry`](crate::StylePluginRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginRegistryError {
    /// A plugin attempted to register an identifier that already exists in
    /// the registry.
    #[error("style plugin id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}
