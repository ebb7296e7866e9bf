//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `wac-infrastructure/src/constants.rs`.

// ============================================================================
// SETTINGS MENU DOMAIN CONSTANTS
// ============================================================================

/// Stable identifier of the administration entry in the settings menu.
///
/// Other components reference the administration entry by this token rather
/// than by display title, which is localizable and may change.
pub const ADMINISTRATION_MENU_TOKEN: &str = "settingsMenu";

/// Display title of the administration menu entry
pub const ADMINISTRATION_MENU_TITLE: &str = "Administration";

/// Sort priority of the administration menu entry (lower renders first)
pub const ADMINISTRATION_MENU_ORDER: i32 = 0;

/// Sort priority assigned to entries that do not specify one
pub const DEFAULT_MENU_ORDER: i32 = 0;
