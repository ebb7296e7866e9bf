//! Administration Menu Registration
//!
//! Use case of the administration plugin: contribute one hidden entry to the
//! settings menu. The entry is registered at startup but stays hidden until
//! the administration surfaces ship; other components can already reference
//! it by [`ADMINISTRATION_MENU_TOKEN`].

use std::sync::Arc;

use linkme::distributed_slice;
use tracing::debug;
use wac_domain::constants::{
    ADMINISTRATION_MENU_ORDER, ADMINISTRATION_MENU_TITLE, ADMINISTRATION_MENU_TOKEN,
};
use wac_domain::error::Result;
use wac_domain::value_objects::{MenuItemDescriptor, MenuVisibility};

use crate::ports::registry::{MENU_REGISTRARS, MenuRegistrarEntry};
use crate::ports::settings_menu::SettingsMenuInterface;

/// Registers the administration entry with the settings menu.
///
/// The service keeps no state beyond the injected collaborator and performs
/// no deduplication: each `register()` call submits a fresh descriptor, and
/// whether repeated submissions collapse is the collaborator's business.
pub struct AdministrationMenuService {
    settings_menu: Arc<dyn SettingsMenuInterface>,
}

impl AdministrationMenuService {
    /// Create the service with its settings menu collaborator
    pub fn new(settings_menu: Arc<dyn SettingsMenuInterface>) -> Self {
        Self { settings_menu }
    }

    /// Submit the administration menu entry to the settings menu.
    ///
    /// Builds the descriptor fresh and calls `add_menu_item` exactly once.
    /// Collaborator errors propagate unchanged.
    pub fn register(&self) -> Result<()> {
        debug!(token = ADMINISTRATION_MENU_TOKEN, "registering administration menu entry");

        self.settings_menu.add_menu_item(
            MenuItemDescriptor::new(ADMINISTRATION_MENU_TOKEN, ADMINISTRATION_MENU_TITLE)
                .with_order(ADMINISTRATION_MENU_ORDER)
                .with_visibility(MenuVisibility::Hidden),
        )
    }
}

fn register_administration_menu(settings_menu: &Arc<dyn SettingsMenuInterface>) -> Result<()> {
    AdministrationMenuService::new(Arc::clone(settings_menu)).register()
}

// Startup registration hook picked up by run_menu_registrars
#[distributed_slice(MENU_REGISTRARS)]
static ADMINISTRATION_MENU_REGISTRAR: MenuRegistrarEntry = MenuRegistrarEntry {
    name: "administration",
    description: "Hidden Administration entry in the settings menu",
    register: register_administration_menu,
};
