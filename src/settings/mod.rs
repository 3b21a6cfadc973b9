//! Configuration loading and validation.
//!
//! The declarative surface (`weft.toml`, environment overrides) is first
//! deserialized into a raw mirror, then resolved into a validated
//! [`StyleConfig`]. All validation happens at construction time; the
//! resolver operations never re-check what the settings layer guarantees.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::{load, load_file};
pub use resolved::{ConfigError, StyleConfig};
