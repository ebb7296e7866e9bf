//! Configuration types

/// Main application configuration
pub mod app;
/// Logging configuration types
pub mod logging;

pub use app::AppConfig;
pub use logging::LoggingConfig;
