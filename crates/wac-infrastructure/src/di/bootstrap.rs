//! DI Container Bootstrap - Settings Menu Composition Root
//!
//! Builds the settings menu registry, runs every registered menu registrar
//! once, and hands the wired context to the caller.
//!
//! ```text
//! AppConfig → SettingsMenuService → run_menu_registrars → AppContext
//!                                         ↑
//!                                  linkme MENU_REGISTRARS
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let menu = context.settings_menu();
//! assert!(menu.find_menu_item("settingsMenu").is_some());
//! ```

use std::sync::Arc;

use tracing::info;
use wac_application::ports::registry::{MENU_REGISTRARS, run_menu_registrars};
use wac_application::ports::settings_menu::SettingsMenuInterface;
use wac_domain::error::Result;

use crate::config::AppConfig;
use crate::settings_menu::SettingsMenuService;

/// Application context holding the wired console services
///
/// This is the composition root output: configuration plus the settings
/// menu registry every plugin has registered into.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    settings_menu: Arc<dyn SettingsMenuInterface>,
}

impl AppContext {
    /// The settings menu registry
    pub fn settings_menu(&self) -> Arc<dyn SettingsMenuInterface> {
        Arc::clone(&self.settings_menu)
    }
}

/// Initialize the application context
///
/// Constructs the settings menu registry and runs the startup menu
/// registration sequence. Registrar failures are logged and skipped inside
/// `run_menu_registrars`; an empty registrar slice is not an error.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let settings_menu: Arc<dyn SettingsMenuInterface> = Arc::new(SettingsMenuService::new());

    let registered = run_menu_registrars(&settings_menu);
    info!(
        registered,
        total = MENU_REGISTRARS.len(),
        "menu registration sequence completed"
    );

    Ok(AppContext {
        config: Arc::new(config),
        settings_menu,
    })
}
