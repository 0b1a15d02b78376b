//! Orphans core library: mapping types, manifest loading, errors.
//!
//! Public API surface:
//! - [`types`]: [`MappingEntry`] and [`Manifest`]
//! - [`error`]: [`ConfigError`]
//! - [`config`]: load / discover / save / validate

pub mod config;
pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{Manifest, MappingEntry};
