//! Menu Registrar Registry
//!
//! Auto-registration system for menu-contributing plugins using linkme
//! distributed slices. Plugins register themselves via
//! `#[linkme::distributed_slice]` and are discovered at startup by the
//! composition root, which replaces the host application's
//! plugin-initialization sequence.

use std::sync::Arc;

use tracing::{debug, warn};
use wac_domain::error::Result;

use crate::ports::settings_menu::SettingsMenuInterface;

/// Registry entry for menu registrars
///
/// Each plugin that contributes settings menu entries registers itself with
/// this entry using `#[linkme::distributed_slice(MENU_REGISTRARS)]`. The
/// entry contains metadata and the registration function invoked once at
/// startup.
pub struct MenuRegistrarEntry {
    /// Unique registrar name (e.g., "administration")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registration function invoked once with the settings menu registry
    pub register: fn(&Arc<dyn SettingsMenuInterface>) -> Result<()>,
}

// Auto-collection via linkme distributed slices - plugins submit entries at compile time
#[linkme::distributed_slice]
pub static MENU_REGISTRARS: [MenuRegistrarEntry] = [..];

/// Run every registered menu registrar against the given registry
///
/// Registrars run in slice order, each exactly once. A failing registrar is
/// logged and skipped so one broken plugin cannot keep the rest of the menu
/// from registering.
///
/// # Returns
/// The number of registrars that completed successfully.
pub fn run_menu_registrars(menu: &Arc<dyn SettingsMenuInterface>) -> usize {
    let mut registered = 0;

    for entry in MENU_REGISTRARS {
        match (entry.register)(menu) {
            Ok(()) => {
                debug!(registrar = entry.name, "menu registrar completed");
                registered += 1;
            }
            Err(err) => {
                warn!(registrar = entry.name, error = %err, "menu registrar failed");
            }
        }
    }

    registered
}

/// List all registered menu registrars
///
/// Returns a list of (name, description) tuples for all registered menu
/// registrars. Useful for CLI help and admin UI.
pub fn list_menu_registrars() -> Vec<(&'static str, &'static str)> {
    MENU_REGISTRARS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
