//! Unified error type for all fallible operations in the bot.

use thiserror::Error;

/// Crate-wide error enum. Command handlers, the database layer, and the
/// HTTP clients all converge on this type so `?` works everywhere.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem problems (config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variables
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Outbound HTTP failures (weather, comic lookup, avatar fetch)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// User-supplied input that a core routine could not accept
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `config.toml` deserialization failures
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Formatting into in-memory buffers (reply assembly)
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
