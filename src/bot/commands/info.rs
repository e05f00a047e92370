//! Lookup commands - `/userinfo`, `/userid`, `/serverinfo`, `/botinfo`,
//! `/showicon`, and `/messageinfo` with its recorded edit history.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::core::edits;
    use crate::errors::Result;
    use poise::serenity_prelude as serenity;
    use regex::Regex;
    use std::fmt::Write as _;
    use std::sync::LazyLock;

    /// Discord snowflakes are 17 to 19 decimal digits.
    static SNOWFLAKE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{17,19}$").expect("valid regex"));

    /// Longest edit-history excerpt shown per entry.
    const EDIT_EXCERPT_LIMIT: usize = 300;

    fn excerpt(text: &str, max: usize) -> String {
        if text.chars().count() <= max {
            text.to_string()
        } else {
            let head: String = text.chars().take(max).collect();
            format!("{head}…")
        }
    }

    fn format_uptime(elapsed: std::time::Duration) -> String {
        let total = elapsed.as_secs();
        let days = total / 86_400;
        let hours = (total % 86_400) / 3_600;
        let minutes = (total % 3_600) / 60;
        let seconds = total % 60;
        if days > 0 {
            format!("{days}d {hours}h {minutes}m {seconds}s")
        } else if hours > 0 {
            format!("{hours}h {minutes}m {seconds}s")
        } else {
            format!("{minutes}m {seconds}s")
        }
    }

    fn user_embed(user: &serenity::User) -> serenity::CreateEmbed {
        let created = user.id.created_at().unix_timestamp();
        serenity::CreateEmbed::new()
            .title(format!("User info: {}", user.name))
            .thumbnail(user.face())
            .field("ID", user.id.to_string(), true)
            .field("Bot", if user.bot { "Yes" } else { "No" }, true)
            .field("Created", format!("<t:{created}:F>"), false)
            .color(0x5A_64_EA)
    }

    /// Shows details about a user.
    #[poise::command(slash_command, prefix_command)]
    pub async fn userinfo(
        ctx: Context<'_>,
        #[description = "User to look up (default: you)"] user: Option<serenity::User>,
    ) -> Result<()> {
        let user = user.unwrap_or_else(|| ctx.author().clone());
        let mut embed = user_embed(&user);

        // Membership details only exist inside a guild
        if let Some(guild_id) = ctx.guild_id() {
            if let Ok(member) = guild_id.member(ctx.serenity_context(), user.id).await {
                if let Some(joined) = member.joined_at {
                    embed = embed.field(
                        "Joined this server",
                        format!("<t:{}:F>", joined.unix_timestamp()),
                        false,
                    );
                }
                if let Some(nick) = member.nick {
                    embed = embed.field("Nickname", nick, true);
                }
                embed = embed.field("Roles", member.roles.len().to_string(), true);
            }
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Looks a user up by their snowflake ID.
    #[poise::command(slash_command, prefix_command)]
    pub async fn userid(
        ctx: Context<'_>,
        #[description = "A Discord user ID (17-19 digits)"] id: String,
    ) -> Result<()> {
        let trimmed = id.trim();
        if !SNOWFLAKE.is_match(trimmed) {
            ctx.say("❌ That's not a valid user ID. IDs are 17 to 19 digits.")
                .await?;
            return Ok(());
        }
        let Ok(raw) = trimmed.parse::<u64>() else {
            ctx.say("❌ That's not a valid user ID.").await?;
            return Ok(());
        };

        match serenity::UserId::new(raw).to_user(ctx.serenity_context()).await {
            Ok(user) => {
                ctx.send(poise::CreateReply::default().embed(user_embed(&user)))
                    .await?;
            }
            Err(_) => {
                ctx.say("❌ I couldn't find a user with that ID.").await?;
            }
        }
        Ok(())
    }

    /// Shows details about the current server.
    #[poise::command(slash_command, prefix_command, guild_only)]
    pub async fn serverinfo(ctx: Context<'_>) -> Result<()> {
        // Clone out of the cache guard before any await
        let Some(guild) = ctx.guild().map(|g| (*g).clone()) else {
            ctx.say("This command only works in a server.").await?;
            return Ok(());
        };

        let created = guild.id.created_at().unix_timestamp();
        let mut embed = serenity::CreateEmbed::new()
            .title(format!("Server info: {}", guild.name))
            .field("ID", guild.id.to_string(), true)
            .field("Members", guild.member_count.to_string(), true)
            .field("Roles", guild.roles.len().to_string(), true)
            .field("Emojis", guild.emojis.len().to_string(), true)
            .field("Channels", guild.channels.len().to_string(), true)
            .field("Owner", format!("<@{}>", guild.owner_id), true)
            .field("Created", format!("<t:{created}:F>"), false)
            .color(0x43_B5_81);
        if let Some(icon) = guild.icon_url() {
            embed = embed.thumbnail(icon);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows details about the bot itself, or another bot account.
    #[poise::command(slash_command, prefix_command)]
    pub async fn botinfo(
        ctx: Context<'_>,
        #[description = "Bot to look up (default: me)"] bot: Option<serenity::User>,
    ) -> Result<()> {
        let self_id = ctx.serenity_context().cache.current_user().id;
        let target = match bot {
            Some(user) => user,
            None => self_id.to_user(ctx.serenity_context()).await?,
        };
        if !target.bot {
            ctx.say("That's not a bot, that's a person!").await?;
            return Ok(());
        }

        let mut embed = user_embed(&target);
        if target.id == self_id {
            let latency = ctx.ping().await;
            embed = embed
                .field(
                    "Uptime",
                    format_uptime(ctx.data().started_at.elapsed()),
                    true,
                )
                .field("Gateway latency", format!("{}ms", latency.as_millis()), true);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows a user's avatar at full size, or the server icon.
    #[poise::command(slash_command, prefix_command)]
    pub async fn showicon(
        ctx: Context<'_>,
        #[description = "User whose avatar to show (default: server icon)"] user: Option<
            serenity::User,
        >,
    ) -> Result<()> {
        let (title, url) = if let Some(user) = user {
            (format!("Avatar of {}", user.name), Some(user.face()))
        } else {
            let icon = ctx.guild().and_then(|g| g.icon_url());
            ("Server icon".to_string(), icon)
        };

        let Some(url) = url else {
            ctx.say("There's no icon to show here.").await?;
            return Ok(());
        };
        let embed = serenity::CreateEmbed::new()
            .title(title)
            .image(url)
            .color(0x5A_64_EA);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows details about a message, including its recorded edit history.
    #[poise::command(slash_command, prefix_command)]
    pub async fn messageinfo(
        ctx: Context<'_>,
        #[description = "ID of the message"] messageid: String,
        #[description = "Channel the message is in (defaults to here)"] channel: Option<
            serenity::GuildChannel,
        >,
    ) -> Result<()> {
        let trimmed = messageid.trim();
        if !SNOWFLAKE.is_match(trimmed) {
            ctx.say("❌ That's not a valid message ID. IDs are 17 to 19 digits.")
                .await?;
            return Ok(());
        }
        let Ok(raw) = trimmed.parse::<u64>() else {
            ctx.say("❌ That's not a valid message ID.").await?;
            return Ok(());
        };
        let channel_id = channel.map_or(ctx.channel_id(), |c| c.id);

        let Ok(message) = channel_id
            .message(ctx.http(), serenity::MessageId::new(raw))
            .await
        else {
            ctx.say("❌ I couldn't find that message.").await?;
            return Ok(());
        };

        let created = message.id.created_at().unix_timestamp();
        let content = if message.content.is_empty() {
            "*(no text content)*".to_string()
        } else {
            excerpt(&message.content, 1000)
        };
        let mut embed = serenity::CreateEmbed::new()
            .title(format!("Message from {}", message.author.name))
            .thumbnail(message.author.face())
            .description(content)
            .field("Channel", format!("<#{channel_id}>"), true)
            .field("Sent", format!("<t:{created}:F>"), true)
            .color(0xD8_A0_37);

        let data = ctx.data();
        let history = edits::get_edits(&data.database, &data.edit_cache, trimmed).await?;
        if history.is_empty() {
            embed = embed.field("Edit history", "No edits recorded.", false);
        } else {
            let mut lines = String::new();
            for entry in history.iter().rev() {
                writeln!(
                    lines,
                    "<t:{}:R>: {}",
                    entry.edited_at.timestamp(),
                    excerpt(&entry.content, EDIT_EXCERPT_LIMIT)
                )?;
            }
            embed = embed.field(
                format!("Edit history ({} recorded)", history.len()),
                excerpt(&lines, 1000),
                false,
            );
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
