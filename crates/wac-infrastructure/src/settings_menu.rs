//! In-memory settings menu registry
//!
//! The production implementation of [`SettingsMenuInterface`]. Stores every
//! submitted descriptor as received and serves ordered snapshots to
//! rendering surfaces.

use std::sync::{PoisonError, RwLock};

use tracing::debug;
use wac_application::ports::settings_menu::SettingsMenuInterface;
use wac_domain::error::Result;
use wac_domain::value_objects::{MenuItemDescriptor, MenuItemSnapshot};

/// Settings menu registry backed by an in-process list.
///
/// Submissions are kept in insertion order; render order is ascending
/// `order` with insertion order among equals (stable sort). Duplicate ids
/// are stored as submitted, and id lookup answers with the first
/// submission, which in practice is the one made earliest in the startup
/// sequence.
#[derive(Default)]
pub struct SettingsMenuService {
    items: RwLock<Vec<MenuItemDescriptor>>,
}

impl SettingsMenuService {
    /// Create an empty settings menu registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored submissions
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when no entry has been submitted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsMenuInterface for SettingsMenuService {
    fn add_menu_item(&self, item: MenuItemDescriptor) -> Result<()> {
        debug!(id = %item.id, order = item.order, "settings menu entry submitted");
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
        Ok(())
    }

    fn menu_items(&self) -> Vec<MenuItemSnapshot> {
        let mut snapshots: Vec<MenuItemSnapshot> = self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(MenuItemDescriptor::snapshot)
            .collect();
        // sort_by_key is stable, so insertion order breaks ties
        snapshots.sort_by_key(|s| s.order);
        snapshots
    }

    fn find_menu_item(&self, id: &str) -> Option<MenuItemSnapshot> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.id == id)
            .map(MenuItemDescriptor::snapshot)
    }

    fn visible_items(&self) -> Vec<MenuItemSnapshot> {
        self.menu_items().into_iter().filter(|s| !s.hidden).collect()
    }
}
