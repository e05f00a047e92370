//! Text transformation commands - `/reverse` and `/length`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::core::{length, reverse};
    use crate::errors::Result;
    use poise::serenity_prelude as serenity;

    /// Reverses text while preserving Markdown formatting.
    ///
    /// Code blocks and inline code keep their exact contents, bold and
    /// strikethrough wrappers stay attached to the text they wrapped, and
    /// heading and list markers stay at the front of their lines.
    #[poise::command(slash_command, prefix_command)]
    pub async fn reverse(
        ctx: Context<'_>,
        #[description = "Text to reverse"] text: String,
    ) -> Result<()> {
        let reversed = reverse::reverse_formatted_text(&text);
        if reversed.is_empty() {
            ctx.say("There was nothing to reverse.").await?;
        } else {
            ctx.say(reversed).await?;
        }
        Ok(())
    }

    /// Counts characters in text, or in an existing message.
    ///
    /// Supply `text` directly, or a `messageid` (and optionally the channel
    /// it lives in) to measure someone else's message. Counts are in visible
    /// characters, so an emoji counts once.
    #[poise::command(slash_command, prefix_command)]
    pub async fn length(
        ctx: Context<'_>,
        #[description = "Text to measure"] text: Option<String>,
        #[description = "Channel the message is in (defaults to here)"] channel: Option<
            serenity::GuildChannel,
        >,
        #[description = "ID of a message to measure instead"] messageid: Option<String>,
    ) -> Result<()> {
        let subject = match (text, messageid) {
            (Some(t), _) => t,
            (None, Some(raw_id)) => {
                let Ok(message_id) = raw_id.parse::<u64>() else {
                    ctx.say("That doesn't look like a message ID.").await?;
                    return Ok(());
                };
                let channel_id = channel.map_or(ctx.channel_id(), |c| c.id);
                match channel_id
                    .message(ctx.http(), serenity::MessageId::new(message_id))
                    .await
                {
                    Ok(message) => message.content,
                    Err(_) => {
                        ctx.say("I couldn't find that message.").await?;
                        return Ok(());
                    }
                }
            }
            (None, None) => {
                ctx.say("Give me some text or a message ID to measure.")
                    .await?;
                return Ok(());
            }
        };

        let measurement = length::measure(&subject);
        if measurement.words.is_empty() {
            ctx.say("That message has no text to measure.").await?;
        } else {
            ctx.say(measurement.report()).await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
