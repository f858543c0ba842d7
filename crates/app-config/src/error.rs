// In crates/app-config/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid rule settings: {0}")]
    InvalidRules(#[from] risk::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
