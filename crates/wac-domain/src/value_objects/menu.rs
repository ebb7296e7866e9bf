//! Settings Menu Value Objects
//!
//! Value objects describing entries of the settings menu. A descriptor is
//! built by the component that contributes the entry and handed by value to
//! the menu registry, which owns it thereafter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_MENU_ORDER;

/// Visibility rule of a menu entry.
///
/// The rule is a zero-argument hidden-predicate: it answers "is this entry
/// hidden right now", not "is it visible". Rendering surfaces evaluate the
/// rule each time they snapshot the menu.
#[derive(Clone, Default)]
pub enum MenuVisibility {
    /// Entry is always rendered
    #[default]
    Visible,
    /// Entry is registered but never rendered
    Hidden,
    /// Entry visibility is decided by the predicate (true means hidden)
    Dynamic(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl MenuVisibility {
    /// Evaluate the hidden-predicate
    pub fn is_hidden(&self) -> bool {
        match self {
            Self::Visible => false,
            Self::Hidden => true,
            Self::Dynamic(rule) => rule(),
        }
    }
}

impl fmt::Debug for MenuVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => f.write_str("Visible"),
            Self::Hidden => f.write_str("Hidden"),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Value Object: Settings Menu Entry Descriptor
///
/// Describes one entry in the settings menu: a stable identifier used as
/// lookup key, a sort priority, a visibility rule, and a display title.
///
/// ## Business Rules
///
/// - `id` is the stable lookup key; display titles are not keys
/// - Entries render in ascending `order`, insertion order among equals
/// - The visibility rule is evaluated at render time, not at registration
///
/// ## Example
///
/// ```rust
/// use wac_domain::value_objects::{MenuItemDescriptor, MenuVisibility};
///
/// let item = MenuItemDescriptor::new("settingsMenu", "Administration")
///     .with_order(0)
///     .with_visibility(MenuVisibility::Hidden);
/// assert!(item.is_hidden());
/// ```
#[derive(Debug, Clone)]
pub struct MenuItemDescriptor {
    /// Stable lookup key of the entry
    pub id: String,
    /// Sort priority (lower renders first)
    pub order: i32,
    /// Visibility rule evaluated at render time
    pub visibility: MenuVisibility,
    /// Display title of the entry
    pub title: String,
}

impl MenuItemDescriptor {
    /// Create a new descriptor with default order and visibility
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order: DEFAULT_MENU_ORDER,
            visibility: MenuVisibility::default(),
            title: title.into(),
        }
    }

    /// Set the sort priority
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the visibility rule
    pub fn with_visibility(mut self, visibility: MenuVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Evaluate the entry's hidden-predicate
    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// Capture a serializable snapshot, evaluating the hidden-predicate now
    pub fn snapshot(&self) -> MenuItemSnapshot {
        MenuItemSnapshot {
            id: self.id.clone(),
            order: self.order,
            title: self.title.clone(),
            hidden: self.is_hidden(),
        }
    }
}

/// Value Object: Menu Entry Snapshot
///
/// Serializable read-model of a stored menu entry. The visibility rule
/// itself cannot be serialized, so the snapshot carries its value at
/// capture time instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemSnapshot {
    /// Stable lookup key of the entry
    pub id: String,
    /// Sort priority (lower renders first)
    pub order: i32,
    /// Display title of the entry
    pub title: String,
    /// Result of the hidden-predicate at capture time
    pub hidden: bool,
}
