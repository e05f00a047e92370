//! General Discord commands - connectivity check, help, and the invite link.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::errors::Result;

    /// Checks that the bot is alive and reports gateway latency.
    #[poise::command(slash_command, prefix_command)]
    pub async fn test(ctx: Context<'_>) -> Result<()> {
        let latency = ctx.ping().await;
        ctx.say(format!(
            "Rawr! I'm awake. Gateway latency: {}ms",
            latency.as_millis()
        ))
        .await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**RawrBot Help**\n\
        Here is a summary of all available commands.\n\n\
        **Text Commands**\n\
        • `/reverse <text>` - Reverses text while keeping Markdown formatting intact.\n\
        • `/length [text] [channel] [messageid]` - Counts characters in text or a message.\n\n\
        **Random Commands**\n\
        • `/random <min> <max>` - Picks a random number (or true/false with `boolean`).\n\
        • `/moviequote` - Quotes a movie, poorly.\n\
        • `/garfield [date]` - Fetches a Garfield comic strip.\n\n\
        **Games**\n\
        • `/coinflip [flips]` - Flips one or more coins.\n\
        • `/rps <moves>` - Rock, paper, scissors, best of up to 100 rounds.\n\
        • `/minesweeper [rows] [columns] [mines]` - Generates a spoiler-tag minefield.\n\n\
        **Info Commands**\n\
        • `/userinfo [user]` - Shows details about a user.\n\
        • `/userid <id>` - Looks a user up by their snowflake ID.\n\
        • `/serverinfo` - Shows details about this server.\n\
        • `/botinfo` - Shows details about the bot itself.\n\
        • `/showicon [user]` - Shows a user's avatar, or the server icon.\n\
        • `/messageinfo <messageid> [channel]` - Shows details and edit history of a message.\n\n\
        **Other**\n\
        • `/weather <location> [unit]` - Current conditions anywhere on Earth.\n\
        • `/test` - Checks if the bot is responsive.\n\
        • `/invite` - Gets a link to invite the bot elsewhere.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Produces an invite link for adding the bot to another server.
    #[poise::command(slash_command, prefix_command)]
    pub async fn invite(ctx: Context<'_>) -> Result<()> {
        let bot_id = ctx.serenity_context().cache.current_user().id;
        let url = format!(
            "https://discord.com/api/oauth2/authorize?client_id={bot_id}&permissions=277025507392&scope=bot%20applications.commands"
        );
        ctx.send(
            poise::CreateReply::default()
                .content(format!("Invite me to your server: {url}"))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
