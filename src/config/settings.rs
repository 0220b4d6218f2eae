use anyhow::Result;
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

const APP_NAME: &str = "ContentShield";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("io", "devsam", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
fn resolve_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_directory()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Loads the application configuration from the config file.
/// If the file doesn't exist, it creates a default one.
/// If the file is corrupted or cannot be parsed, it logs a warning
/// and falls back to the default configuration to prevent a crash.
///
/// `override_path` bypasses the platform config directory; tests use it to
/// stay out of the real user profile.
pub fn load_config(override_path: Option<&Path>) -> Result<AppConfig> {
    let config_path = resolve_config_path(override_path)?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default config at {:?}",
            config_path
        );
        let default_config = AppConfig::default();
        save_config(&default_config, Some(&config_path))?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path)?;

    // Attempt to parse the config. If it fails, log a warning and fall back
    // to defaults. This makes the application more resilient.
    match serde_json::from_str::<AppConfig>(&config_content) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse config file at {:?}: {}. Falling back to default config.",
                config_path,
                e
            );
            // Attempt to migrate legacy config as a fallback before using default.
            migrate_legacy_config(&config_content).or_else(|_| Ok(AppConfig::default()))
        }
    }
}

/// Persists the configuration as pretty-printed JSON.
pub fn save_config(config: &AppConfig, override_path: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(override_path)?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, content)?;
    Ok(())
}

/// Attempts to migrate a configuration from an older format to the current
/// `AppConfig` struct by filling in missing or null fields with defaults.
fn migrate_legacy_config(config_content: &str) -> Result<AppConfig> {
    let mut value: Value = serde_json::from_str(config_content)?;
    let obj = value
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Config is not a JSON object"))?;

    let defaults = AppConfig::default();

    // Helper to insert a default value if the key is missing or its value is null.
    let ensure_field = |obj: &mut serde_json::Map<String, Value>, key: &str, default_val: Value| {
        if !obj.contains_key(key) || obj.get(key) == Some(&Value::Null) {
            obj.insert(key.to_string(), default_val);
        }
    };

    ensure_field(
        obj,
        "protect_on_launch",
        serde_json::to_value(defaults.protect_on_launch)?,
    );
    ensure_field(
        obj,
        "window_size",
        serde_json::to_value(defaults.window_size)?,
    );
    ensure_field(
        obj,
        "window_position",
        serde_json::to_value(defaults.window_position)?,
    );

    let migrated: AppConfig = serde_json::from_value(value)?;
    tracing::info!("Migrated legacy config to the current format.");
    Ok(migrated)
}
