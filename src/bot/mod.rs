//! Bot layer - Discord-specific interface, command handlers, and gateway glue.
//!
//! This module wires the poise framework: it owns the shared [`BotData`]
//! context, registers every slash command, routes gateway events to the
//! edit-history recorder, and funnels command errors into tracing.

/// Discord command implementations (text, random, games, info, general, admin, weather)
pub mod commands;
/// Gateway event handlers (message edit recording)
pub mod handlers;

use crate::config::AppConfig;
use crate::core::edits::EditCache;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Shared data available to all bot commands.
/// Holds the database connection and any other global state commands need.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Shared HTTP client for outbound lookups (weather, comics, avatars)
    pub http: reqwest::Client,
    /// In-memory message edit history
    pub edit_cache: EditCache,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for the uptime display
    pub started_at: Instant,
}

/// Convenience alias used by every command signature.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the framework, registers all commands globally, and runs the
/// gateway client until it stops.
pub async fn run_bot(
    token: String,
    config: Arc<AppConfig>,
    database: DatabaseConnection,
) -> Result<()> {
    let options = poise::FrameworkOptions {
        commands: vec![
            commands::general::test(),
            commands::general::help(),
            commands::general::invite(),
            commands::text::reverse(),
            commands::text::length(),
            commands::random::random(),
            commands::random::moviequote(),
            commands::random::garfield(),
            commands::games::coinflip(),
            commands::games::rps(),
            commands::games::minesweeper(),
            commands::info::userinfo(),
            commands::info::userid(),
            commands::info::serverinfo(),
            commands::info::botinfo(),
            commands::info::showicon(),
            commands::info::messageinfo(),
            commands::weather::weather(),
            commands::admin::onlinestatus(),
            commands::admin::activity(),
            commands::admin::status(),
            commands::admin::botpfp(),
            commands::admin::purgeown(),
        ],
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(handlers::handle_event(ctx, event, framework, data))
        },
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData {
                    database,
                    http: reqwest::Client::new(),
                    edit_cache: EditCache::default(),
                    config,
                    started_at: Instant::now(),
                })
            })
        })
        .build();

    // Message content is needed to record edit history
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await?;
    Ok(())
}
