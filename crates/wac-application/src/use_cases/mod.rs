//! Application Use Cases
//!
//! One service per use case, each holding its collaborators as
//! `Arc<dyn Trait>` injected through the constructor.

/// Administration plugin menu registration
pub mod administration_menu;

pub use administration_menu::AdministrationMenuService;
