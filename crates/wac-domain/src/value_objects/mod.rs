//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`MenuItemDescriptor`] | One entry of an administrative menu |
//! | [`MenuVisibility`] | Hidden-predicate attached to a menu entry |
//! | [`MenuItemSnapshot`] | Serializable read-model of a stored entry |

/// Settings menu value objects
pub mod menu;

// Re-export commonly used value objects
pub use menu::{MenuItemDescriptor, MenuItemSnapshot, MenuVisibility};
