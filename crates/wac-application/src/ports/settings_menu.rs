//! Settings Menu Port
//!
//! Defines the contract for the settings menu registry collaborator. The
//! registry stores every submitted descriptor and answers ordered snapshot
//! queries for rendering surfaces.

use wac_domain::error::Result;
use wac_domain::value_objects::{MenuItemDescriptor, MenuItemSnapshot};

/// Settings menu registry interface
///
/// Submission order is preserved: entries render in ascending `order`,
/// insertion order among equal orders. Submissions are stored as received;
/// duplicate ids are not collapsed, and `find_menu_item` answers with the
/// first submission for an id.
pub trait SettingsMenuInterface: Send + Sync {
    /// Submit a menu entry descriptor. The registry owns the descriptor
    /// after this call returns.
    fn add_menu_item(&self, item: MenuItemDescriptor) -> Result<()>;

    /// Snapshot every stored entry in render order
    fn menu_items(&self) -> Vec<MenuItemSnapshot>;

    /// Snapshot the first stored entry with the given id
    fn find_menu_item(&self, id: &str) -> Option<MenuItemSnapshot>;

    /// Snapshot the entries whose hidden-predicate currently evaluates false,
    /// in render order
    fn visible_items(&self) -> Vec<MenuItemSnapshot>;
}
