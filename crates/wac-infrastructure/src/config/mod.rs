//! Configuration management
//!
//! Layered configuration in the figment stack: defaults, then a TOML file,
//! then `WAC_`-prefixed environment variables.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
