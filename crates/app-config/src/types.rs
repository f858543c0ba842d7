// In crates/app-config/src/types.rs

use risk::RuleSettings;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// The `host:port` string the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    pub server: ServerSettings,
    /// Thresholds for the trade discipline rules. Optional, defaults apply.
    #[serde(default)]
    pub rules: RuleSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log filter for the application (e.g., "info" or "info,tower_http=debug").
    pub log_level: String,
}

/// A standalone rules file (e.g. `config/rules.toml`).
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: RuleSettings,
}
