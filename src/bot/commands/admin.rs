//! Owner-only commands - presence, profile, and message cleanup.
//! Every command here is gated with `owners_only` so only the application
//! owner can change how the bot presents itself.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::errors::Result;
    use poise::ChoiceParameter;
    use poise::serenity_prelude as serenity;
    use std::time::Duration;

    /// Pause between deletions so the cleanup stays under rate limits.
    const PURGE_PACING: Duration = Duration::from_millis(350);

    /// Slash-command choice wrapper around gateway online statuses.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum StatusChoice {
        #[name = "Online"]
        Online,
        #[name = "Idle"]
        Idle,
        #[name = "Do Not Disturb"]
        DoNotDisturb,
        #[name = "Invisible"]
        Invisible,
    }

    impl StatusChoice {
        fn status(self) -> serenity::OnlineStatus {
            match self {
                Self::Online => serenity::OnlineStatus::Online,
                Self::Idle => serenity::OnlineStatus::Idle,
                Self::DoNotDisturb => serenity::OnlineStatus::DoNotDisturb,
                Self::Invisible => serenity::OnlineStatus::Invisible,
            }
        }
    }

    /// Slash-command choice wrapper around activity types.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum ActivityChoice {
        #[name = "Playing"]
        Playing,
        #[name = "Listening"]
        Listening,
        #[name = "Watching"]
        Watching,
        #[name = "Competing"]
        Competing,
    }

    impl ActivityChoice {
        fn activity(self, text: &str) -> serenity::ActivityData {
            match self {
                Self::Playing => serenity::ActivityData::playing(text),
                Self::Listening => serenity::ActivityData::listening(text),
                Self::Watching => serenity::ActivityData::watching(text),
                Self::Competing => serenity::ActivityData::competing(text),
            }
        }
    }

    /// Sets the bot's online status.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn onlinestatus(
        ctx: Context<'_>,
        #[description = "Status to show"] status: StatusChoice,
    ) -> Result<()> {
        ctx.serenity_context().set_presence(None, status.status());
        ctx.send(
            poise::CreateReply::default()
                .content(format!("Status set to {}.", status.name()))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Sets the bot's activity line ("Playing ...", "Watching ...").
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn activity(
        ctx: Context<'_>,
        #[description = "Kind of activity"]
        #[rename = "type"]
        kind: ActivityChoice,
        #[description = "Activity text"] text: String,
    ) -> Result<()> {
        ctx.serenity_context()
            .set_presence(Some(kind.activity(&text)), serenity::OnlineStatus::Online);
        ctx.send(
            poise::CreateReply::default()
                .content(format!("Activity set: {} {text}", kind.name()))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Sets the bot's custom status text.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn status(
        ctx: Context<'_>,
        #[description = "Custom status text"] text: String,
        #[description = "Emoji to prepend"] emoji: Option<String>,
    ) -> Result<()> {
        let status_text = match emoji {
            Some(emoji) => format!("{emoji} {text}"),
            None => text,
        };
        ctx.serenity_context().set_presence(
            Some(serenity::ActivityData::custom(&status_text)),
            serenity::OnlineStatus::Online,
        );
        ctx.send(
            poise::CreateReply::default()
                .content(format!("Custom status set: {status_text}"))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Changes the bot's avatar from a URL or an uploaded image.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn botpfp(
        ctx: Context<'_>,
        #[description = "URL of the new avatar"] url: Option<String>,
        #[description = "Image to use instead of a URL"] file: Option<serenity::Attachment>,
    ) -> Result<()> {
        let Some(source) = file.map(|f| f.url).or(url) else {
            ctx.say("Give me a URL or an image attachment.").await?;
            return Ok(());
        };

        ctx.defer_ephemeral().await?;
        let avatar = serenity::CreateAttachment::url(ctx.http(), &source).await?;
        let mut profile = ctx.serenity_context().cache.current_user().clone();
        profile
            .edit(ctx.http(), serenity::EditProfile::new().avatar(&avatar))
            .await?;

        ctx.say("New look, who dis? Avatar updated.").await?;
        Ok(())
    }

    /// Deletes the bot's own recent messages in this channel.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn purgeown(
        ctx: Context<'_>,
        #[description = "How many of my messages to delete"]
        #[min = 1]
        amount: u8,
    ) -> Result<()> {
        let limit = ctx.data().config.limits.max_purge;
        if amount > limit {
            ctx.say(format!("❌ I'll only purge up to {limit} at a time."))
                .await?;
            return Ok(());
        }

        ctx.defer_ephemeral().await?;
        let self_id = ctx.serenity_context().cache.current_user().id;
        let recent = ctx
            .channel_id()
            .messages(ctx.http(), serenity::GetMessages::new().limit(100))
            .await?;

        let mut deleted = 0u8;
        for message in recent
            .iter()
            .filter(|m| m.author.id == self_id)
            .take(usize::from(amount))
        {
            message.delete(ctx.http()).await?;
            deleted += 1;
            tokio::time::sleep(PURGE_PACING).await;
        }

        ctx.say(format!("🧹 Deleted {deleted} of my messages."))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
