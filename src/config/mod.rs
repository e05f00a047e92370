//! Application configuration loading from config.toml and the environment.
//!
//! The config file is optional: a missing `config.toml` yields the built-in
//! defaults, and `DATABASE_URL` in the environment overrides whatever the
//! file says. The Discord bot token is deliberately NOT part of this
//! structure; it is read from the environment directly before use.

/// Database configuration and connection management
pub mod database;

use crate::errors::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SQLite` database URL (overridden by the `DATABASE_URL` env var)
    pub database_url: String,
    /// Per-command safety limits
    pub limits: Limits,
}

/// Caps on command options that could otherwise produce absurd output or
/// hammer the Discord API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of coins a single `/coinflip` may flip
    pub max_coin_flips: u32,
    /// Maximum number of rounds a single `/rps` match may run
    pub max_rps_rounds: u32,
    /// Maximum number of the bot's own messages `/purgeown` may delete
    pub max_purge: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://data/rawrbot.sqlite?mode=rwc".to_string(),
            limits: Limits::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_coin_flips: 200,
            max_rps_rounds: 100,
            max_purge: 100,
        }
    }
}

/// Loads application configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        info!("No config file at {}, using defaults.", path.display());
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }

    Ok(config)
}

/// Loads application configuration from the default location (./config.toml).
pub fn load_app_configuration() -> Result<AppConfig> {
    load_config("config.toml")
}
