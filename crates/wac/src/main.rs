//! Web Admin Console - Entry Point
//!
//! Boots the console core: loads configuration, initializes logging, runs
//! the startup menu registration sequence, and prints the resulting
//! settings menu (or the registrar list) as JSON.

use clap::Parser;
use wac_application::ports::registry::list_menu_registrars;
use wac_infrastructure::config::ConfigLoader;
use wac_infrastructure::di::bootstrap::init_app;
use wac_infrastructure::logging::init_logging;

/// Command line interface for the web admin console
#[derive(Parser, Debug)]
#[command(name = "wac")]
#[command(about = "Web Admin Console - Settings Menu Core")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// List registered menu registrars instead of the menu itself
    #[arg(long)]
    pub registrars: bool,

    /// Include hidden entries in the menu listing
    #[arg(long)]
    pub all: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    if cli.registrars {
        let registrars: Vec<serde_json::Value> = list_menu_registrars()
            .into_iter()
            .map(|(name, description)| {
                serde_json::json!({ "name": name, "description": description })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&registrars)?);
        return Ok(());
    }

    let context = init_app(config)?;
    let menu = context.settings_menu();
    let items = if cli.all {
        menu.menu_items()
    } else {
        menu.visible_items()
    };
    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
