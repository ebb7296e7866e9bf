//! Application layer for the web admin console.
//!
//! Use cases and port contracts for settings menu registration. Services in
//! this crate hold their collaborators as `Arc<dyn Trait>` supplied by the
//! composition root in `wac-infrastructure`; nothing here constructs its own
//! dependencies.

/// Port contracts consumed and exposed by the application layer
pub mod ports;
/// Application use cases
pub mod use_cases;

// Re-export commonly used types
pub use ports::registry::{
    MENU_REGISTRARS, MenuRegistrarEntry, list_menu_registrars, run_menu_registrars,
};
pub use ports::settings_menu::SettingsMenuInterface;
pub use use_cases::administration_menu::AdministrationMenuService;
