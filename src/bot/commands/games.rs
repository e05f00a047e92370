//! Game commands - `/coinflip`, `/rps`, and `/minesweeper`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::bot::commands::EngineChoice;
    use crate::core::rng::RngEngine;
    use crate::core::{coinflip, minesweeper, rps};
    use crate::errors::{Error, Result};
    use std::fmt::Write as _;

    /// Rounds below this get a per-round line each unless overridden.
    const DEFAULT_FAST_THRESHOLD: u32 = 10;

    /// Flips one or more coins and tallies the results.
    #[poise::command(slash_command, prefix_command)]
    pub async fn coinflip(
        ctx: Context<'_>,
        #[description = "How many coins to flip (default 1)"]
        #[min = 1]
        flips: Option<u32>,
        #[description = "Random engine to use"] engine: Option<EngineChoice>,
    ) -> Result<()> {
        let limit = ctx.data().config.limits.max_coin_flips;
        let flips = flips.unwrap_or(1);
        if flips > limit {
            ctx.say(format!("❌ I only have {limit} coins!")).await?;
            return Ok(());
        }

        let engine = engine.map(EngineChoice::engine).unwrap_or_default();
        let mut rng = engine.build();
        let summary = coinflip::flip_coins(&mut rng, flips);

        if summary.flips == 1 {
            // shown always holds the single result here
            let side = summary
                .shown
                .first()
                .map_or("🟢 Heads", |s| s.display());
            ctx.say(format!("The coin landed on... {side}!")).await?;
        } else {
            ctx.say(format!(
                "{}\n**{} heads, {} tails** out of {} flips.",
                summary.display_results(),
                summary.heads,
                summary.tails,
                summary.flips
            ))
            .await?;
        }
        Ok(())
    }

    /// Plays rock-paper-scissors against the bot.
    ///
    /// Moves may be given up-front as a comma-separated list; rounds
    /// without one get a random move. Matches longer than the fast
    /// threshold collapse to a square-emoji scoreboard.
    #[poise::command(slash_command, prefix_command)]
    pub async fn rps(
        ctx: Context<'_>,
        #[description = "Rounds to play (default 1)"]
        #[min = 1]
        rounds: Option<u32>,
        #[description = "Show per-round lines up to this many rounds"]
        #[min = 1]
        fast_threshold: Option<u32>,
        #[description = "Random engine to use"] engine: Option<EngineChoice>,
        #[description = "Your moves, comma-separated (rock, paper, scissors)"] moves: Option<
            String,
        >,
    ) -> Result<()> {
        let limit = ctx.data().config.limits.max_rps_rounds;
        let rounds = rounds.unwrap_or(1);
        if rounds > limit {
            ctx.say(format!("❌ Let's keep it under {limit} rounds."))
                .await?;
            return Ok(());
        }

        let engine = engine.map(EngineChoice::engine).unwrap_or_default();
        let mut rng = engine.build();
        let user_moves = moves.as_deref().map(rps::parse_moves).unwrap_or_default();
        let outcome = rps::play_match(&mut rng, rounds, &user_moves);

        let threshold = fast_threshold.unwrap_or(DEFAULT_FAST_THRESHOLD);
        let mut reply = String::new();
        if rounds <= threshold {
            for (i, round) in outcome.rounds.iter().enumerate() {
                writeln!(
                    reply,
                    "Round {}: {} vs {} {}",
                    i + 1,
                    round.user.emoji(),
                    round.bot.emoji(),
                    round.result.symbol()
                )?;
            }
        } else {
            writeln!(reply, "{}", outcome.scoreboard())?;
        }
        write!(reply, "{}", outcome.final_result())?;

        ctx.say(reply).await?;
        Ok(())
    }

    /// Generates a spoiler-tag minesweeper board.
    #[poise::command(slash_command, prefix_command)]
    pub async fn minesweeper(
        ctx: Context<'_>,
        #[description = "Board rows (1-12, default 8)"]
        #[min = 1]
        #[max = 12]
        rows: Option<u8>,
        #[description = "Board columns (1-12, default 8)"]
        #[min = 1]
        #[max = 12]
        columns: Option<u8>,
        #[description = "Number of mines (default 10)"]
        #[min = 1]
        mines: Option<u16>,
        #[description = "Put spaces between cells"] spaces: Option<bool>,
    ) -> Result<()> {
        let rows = rows.unwrap_or(8);
        let columns = columns.unwrap_or(8);
        let mines = mines.unwrap_or(10);

        let mut rng = RngEngine::default().build();
        let board = match minesweeper::generate(&mut rng, rows, columns, mines) {
            Ok(board) => board,
            Err(Error::InvalidInput(message)) => {
                ctx.say(message).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        ctx.say(format!(
            "💣 **Minesweeper** ({rows}×{columns}, {mines} mines)\n{}",
            board.render("💣", spaces.unwrap_or(false))
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
