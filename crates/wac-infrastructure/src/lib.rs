//! Infrastructure layer for the web admin console.
//!
//! Implementations of the application-layer ports plus the cross-cutting
//! concerns the console needs at startup: configuration loading, logging
//! initialization, and the DI composition root.

/// Configuration loading and types
pub mod config;
/// Infrastructure layer constants
pub mod constants;
/// Composition root (explicit constructor injection, no container)
pub mod di;
/// Error context extension utilities
pub mod error_ext;
/// Structured logging with tracing
pub mod logging;
/// In-memory settings menu registry
pub mod settings_menu;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use di::bootstrap::{AppContext, init_app};
pub use settings_menu::SettingsMenuService;
