//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;

/// Top-level application configuration
///
/// Every section has working defaults; a missing config file is not an
/// error. Sections map to TOML tables, so `[logging]` configures
/// [`LoggingConfig`] and `WAC_LOGGING_LEVEL=debug` overrides its level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
