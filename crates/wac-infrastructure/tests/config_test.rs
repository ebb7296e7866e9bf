//! Configuration layering tests
//!
//! Uses figment's Jail so file and environment sources are isolated per
//! test and cannot race with the rest of the suite.

use wac_infrastructure::config::ConfigLoader;

#[test]
fn test_env_overrides_toml_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("wac.toml", "[logging]\nlevel = \"debug\"\n")?;
        jail.set_env("WAC_LOGGING_LEVEL", "error");

        let config = ConfigLoader::new()
            .with_config_path("wac.toml")
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.logging.level, "error");
        Ok(())
    });
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.clear_env();

        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file_output.is_none());
        Ok(())
    });
}

#[test]
fn test_reload_picks_up_file_changes() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("wac.toml", "[logging]\nlevel = \"debug\"\n")?;

        let loader = ConfigLoader::new().with_config_path("wac.toml");
        let config = loader
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_eq!(config.logging.level, "debug");

        // Same loader, updated file: reload sees the new contents
        jail.create_file("wac.toml", "[logging]\nlevel = \"warn\"\n")?;
        let config = loader
            .reload()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("CONSOLE_LOGGING_LEVEL", "warn");

        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .with_env_prefix("CONSOLE")
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}
