//! # Web Admin Console
//!
//! Settings menu registration core of a web administration console for a
//! cloud database manager. Plugins contribute menu entries at startup; the
//! first of them is the administration plugin, which registers a hidden
//! "Administration" entry other components can reference by token.
//!
//! This crate provides the main public API: it re-exports the layer crates
//! and hosts the `wac` binary.
//!
//! ## Example
//!
//! ```ignore
//! use wac::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default())?;
//! let menu = context.settings_menu();
//! assert!(menu.find_menu_item("settingsMenu").is_some());
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - Menu value objects, constants, and the error type
//! - `application` - Port traits, the registrar registry, and use cases
//! - `infrastructure` - Registry implementation, config, logging, DI root

/// Domain layer - menu value objects and core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wac_domain::*;
}

/// Application layer - ports, registrars, and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use wac_application::*;
}

/// Infrastructure layer - DI, config, and infrastructure services
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wac_infrastructure::*;
}
