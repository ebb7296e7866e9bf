//! End-to-end console integration tests
//!
//! Exercises the facade path: real registry implementation, real
//! registration service, wired the way the binary wires them.

use std::sync::Arc;

use wac::application::ports::settings_menu::SettingsMenuInterface;
use wac::application::use_cases::administration_menu::AdministrationMenuService;
use wac::domain::constants::ADMINISTRATION_MENU_TOKEN;
use wac::infrastructure::settings_menu::SettingsMenuService;
use wac::infrastructure::{AppConfig, init_app};

#[test]
fn test_booted_console_exposes_hidden_administration_entry() {
    let context = init_app(AppConfig::default()).expect("bootstrap succeeds");
    let menu = context.settings_menu();

    let entry = menu
        .find_menu_item(ADMINISTRATION_MENU_TOKEN)
        .expect("administration entry present after boot");
    assert!(entry.hidden);
    assert_eq!(entry.title, "Administration");
}

#[test]
fn test_duplicate_registration_against_real_registry() {
    let menu: Arc<dyn SettingsMenuInterface> = Arc::new(SettingsMenuService::new());
    let service = AdministrationMenuService::new(Arc::clone(&menu));

    service.register().expect("first registration");
    service.register().expect("second registration");

    // The registry stores both submissions; it does not deduplicate by id
    assert_eq!(menu.menu_items().len(), 2);
    let first = menu
        .find_menu_item(ADMINISTRATION_MENU_TOKEN)
        .expect("entry found");
    assert_eq!(first.order, 0);
}

#[test]
fn test_menu_snapshot_serializes_for_admin_api() {
    let context = init_app(AppConfig::default()).expect("bootstrap succeeds");
    let items = context.settings_menu().menu_items();

    let json = serde_json::to_string(&items).expect("snapshots serialize");
    assert!(json.contains("settingsMenu"));
}
