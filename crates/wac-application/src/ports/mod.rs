//! Application Layer Ports
//!
//! Trait seams between the application layer and the infrastructure that
//! implements them. Implementations live in `wac-infrastructure` and are
//! injected by the composition root.

/// Menu registrar auto-registration registry
pub mod registry;
/// Settings menu collaborator port
pub mod settings_menu;

pub use registry::{MENU_REGISTRARS, MenuRegistrarEntry};
pub use settings_menu::SettingsMenuInterface;
