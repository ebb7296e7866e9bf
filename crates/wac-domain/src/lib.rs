//! Domain layer for the web admin console.
//!
//! Core menu types shared by every other layer: the menu item descriptor
//! value object, the constants that identify well-known menu entries, and
//! the error type used across the workspace. This crate performs no I/O and
//! holds no infrastructure concerns.

/// Domain-level constants (menu tokens, default ordering)
pub mod constants;
/// Error handling types
pub mod error;
/// Immutable domain value objects
pub mod value_objects;

// Re-export commonly used types
pub use constants::{
    ADMINISTRATION_MENU_ORDER, ADMINISTRATION_MENU_TITLE, ADMINISTRATION_MENU_TOKEN,
};
pub use error::{Error, Result};
pub use value_objects::{MenuItemDescriptor, MenuItemSnapshot, MenuVisibility};
