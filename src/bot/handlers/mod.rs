//! Gateway event handlers.
//!
//! The only event the bot watches beyond commands is `MessageUpdate`, which
//! feeds the edit-history store that `/messageinfo` reads back.

use crate::bot::BotData;
use crate::core::edits;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Routes raw gateway events to their handlers.
pub async fn handle_event(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::MessageUpdate {
        old_if_available: Some(old),
        new: Some(new),
        ..
    } = event
    {
        handle_message_update(data, old, new).await?;
    }
    Ok(())
}

/// Records the pre-edit content of a message whenever its text changes.
///
/// Bot-authored messages and embed-only updates (link previews resolving,
/// attachments processing) are skipped so the history only holds edits a
/// user actually made.
async fn handle_message_update(
    data: &BotData,
    old: &serenity::Message,
    new: &serenity::Message,
) -> Result<()> {
    if old.author.bot {
        return Ok(());
    }
    if old.content == new.content {
        return Ok(());
    }
    debug!(
        message_id = %old.id,
        channel_id = %old.channel_id,
        "recording message edit"
    );
    edits::record_edit(
        &data.database,
        &data.edit_cache,
        &old.id.to_string(),
        &old.channel_id.to_string(),
        &old.content,
    )
    .await?;
    Ok(())
}
