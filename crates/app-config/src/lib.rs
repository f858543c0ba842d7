// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, RulesFile, ServerSettings, Settings};

/// The directory settings are read from when none is given.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Loads the application settings from the default `config` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(DEFAULT_CONFIG_DIR)
}

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
///
/// The rule thresholds are validated before the settings are returned.
pub fn load_settings_from(config_dir: impl AsRef<Path>) -> Result<Settings> {
    let config_dir = config_dir.as_ref();
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        // 1. Load the base configuration file.
        .add_source(File::from(config_dir.join("base")))
        // 2. Load the environment-specific configuration file.
        .add_source(File::from(config_dir.join(&environment)).required(false))
        // 3. Load settings from environment variables (e.g., `APP__RULES__MIN_RR=2.0`).
        // The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.rules.validate()?;

    tracing::debug!(
        environment = %environment,
        max_risk_pct = settings.rules.max_risk_pct,
        min_rr = settings.rules.min_rr,
        "Settings loaded."
    );

    Ok(settings)
}

/// Loads a standalone rules file, such as one passed on the command line.
pub fn load_rules_file(path: impl AsRef<Path>) -> Result<risk::RuleSettings> {
    let content = std::fs::read_to_string(path)?;

    let file: RulesFile = toml::from_str(&content)?;
    file.rules.validate()?;
    Ok(file.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BASE: &str = r#"
[app]
environment = "development"
log_level = "info"

[server]
host = "127.0.0.1"
port = 8000
"#;

    #[test]
    fn base_file_alone_uses_default_rules() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.toml"), BASE).unwrap();

        let settings = load_settings_from(dir.path()).unwrap();

        assert_eq!(settings.server.address(), "127.0.0.1:8000");
        assert_eq!(settings.app.log_level, "info");
        assert_eq!(settings.rules, risk::RuleSettings::default());
    }

    #[test]
    fn rules_section_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let base = format!("{BASE}\n[rules]\nmax_risk_pct = 2.0\n");
        fs::write(dir.path().join("base.toml"), base).unwrap();

        let settings = load_settings_from(dir.path()).unwrap();

        assert_eq!(settings.rules.max_risk_pct, 2.0);
        assert_eq!(settings.rules.min_rr, 1.5);
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = format!("{BASE}\n[rules]\nmin_rr = -1.0\n");
        fs::write(dir.path().join("base.toml"), base).unwrap();

        let result = load_settings_from(dir.path());

        assert!(matches!(result, Err(Error::InvalidRules(_))));
    }

    #[test]
    fn missing_base_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(load_settings_from(dir.path()), Err(Error::LoadError(_))));
    }

    #[test]
    fn rules_file_is_read_with_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "[rules]\nmax_risk_pct = 0.5\nmin_rr = 2.0\n").unwrap();

        let rules = load_rules_file(&path).unwrap();

        assert_eq!(rules.max_risk_pct, 0.5);
        assert_eq!(rules.min_rr, 2.0);
    }

    #[test]
    fn unreadable_rules_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_rules_file(dir.path().join("missing.toml"));

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
