//! Tests for the menu registrar registry
//!
//! Tests the linkme auto-registration system by actually running registrars
//! against a recording registry, not just inspecting metadata. This test
//! binary contributes one deliberately failing registrar to verify that a
//! broken plugin does not keep the rest of the menu from registering.

use std::sync::{Arc, Mutex};

use linkme::distributed_slice;
use wac_application::ports::registry::{
    MENU_REGISTRARS, MenuRegistrarEntry, list_menu_registrars, run_menu_registrars,
};
use wac_application::ports::settings_menu::SettingsMenuInterface;
use wac_domain::constants::ADMINISTRATION_MENU_TOKEN;
use wac_domain::error::Result;
use wac_domain::value_objects::{MenuItemDescriptor, MenuItemSnapshot};

/// Recording registry shared by the tests in this binary
#[derive(Default)]
struct RecordingMenu {
    items: Mutex<Vec<MenuItemDescriptor>>,
}

impl SettingsMenuInterface for RecordingMenu {
    fn add_menu_item(&self, item: MenuItemDescriptor) -> Result<()> {
        self.items.lock().unwrap().push(item);
        Ok(())
    }

    fn menu_items(&self) -> Vec<MenuItemSnapshot> {
        self.items.lock().unwrap().iter().map(|i| i.snapshot()).collect()
    }

    fn find_menu_item(&self, id: &str) -> Option<MenuItemSnapshot> {
        self.menu_items().into_iter().find(|i| i.id == id)
    }

    fn visible_items(&self) -> Vec<MenuItemSnapshot> {
        self.menu_items().into_iter().filter(|i| !i.hidden).collect()
    }
}

fn register_broken(_menu: &Arc<dyn SettingsMenuInterface>) -> Result<()> {
    Err(wac_domain::Error::menu_registration("fixture failure"))
}

// A broken plugin: always fails to register
#[distributed_slice(MENU_REGISTRARS)]
static BROKEN_REGISTRAR: MenuRegistrarEntry = MenuRegistrarEntry {
    name: "broken-test-plugin",
    description: "Registrar that always fails (test fixture)",
    register: register_broken,
};

#[test]
fn test_administration_registrar_is_registered() {
    let registrars = list_menu_registrars();
    let names: Vec<&str> = registrars.iter().map(|(name, _)| *name).collect();

    assert!(
        names.contains(&"administration"),
        "Administration registrar should be registered. Available: {:?}",
        names
    );
}

#[test]
fn test_run_registrars_populates_settings_menu() {
    let menu: Arc<dyn SettingsMenuInterface> = Arc::new(RecordingMenu::default());

    run_menu_registrars(&menu);

    let entry = menu
        .find_menu_item(ADMINISTRATION_MENU_TOKEN)
        .expect("administration entry should be registered");
    assert_eq!(entry.title, "Administration");
    assert_eq!(entry.order, 0);
    assert!(entry.hidden, "administration entry must be hidden");
}

#[test]
fn test_failing_registrar_does_not_block_others() {
    let menu: Arc<dyn SettingsMenuInterface> = Arc::new(RecordingMenu::default());

    let registered = run_menu_registrars(&menu);

    // Every registrar except the broken fixture completes
    assert_eq!(registered, MENU_REGISTRARS.len() - 1);
    assert!(menu.find_menu_item(ADMINISTRATION_MENU_TOKEN).is_some());
}

#[test]
fn test_registrar_descriptions_are_present() {
    for (name, description) in list_menu_registrars() {
        assert!(!name.is_empty());
        assert!(!description.is_empty(), "registrar {} lacks a description", name);
    }
}
