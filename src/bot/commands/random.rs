//! Random generator commands - `/random`, `/moviequote`, and `/garfield`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::bot::commands::EngineChoice;
    use crate::core::rng::RngEngine;
    use crate::core::{dice::DiceRoll, garfield, quotes};
    use crate::errors::{Error, Result};
    use chrono::{Datelike, Utc};
    use poise::serenity_prelude as serenity;
    use rand::{Rng, RngCore};
    use rand::seq::IndexedRandom;

    /// Picks one reply body from the mutually exclusive `/random` modes.
    /// Checked in order: `boolean`, `choices`, the `min`/`max` range, then
    /// `dice`; no option at all prompts for one.
    pub(crate) fn render_random(
        rng: &mut dyn RngCore,
        min: Option<i64>,
        max: Option<i64>,
        choices: Option<&str>,
        boolean: Option<bool>,
        dice: Option<&str>,
    ) -> String {
        if boolean == Some(true) {
            format!("🎲 {}", rng.random_bool(0.5))
        } else if let Some(raw) = choices {
            let options: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            match options.choose(rng) {
                Some(pick) => format!("🎲 I choose: **{pick}**"),
                None => "Give me at least one choice to pick from.".to_string(),
            }
        } else if min.is_some() || max.is_some() {
            let min = min.unwrap_or(1);
            let max = max.unwrap_or(100);
            if min > max {
                format!("❌ min ({min}) can't be greater than max ({max}).")
            } else {
                format!("🎲 {}", rng.random_range(min..=max))
            }
        } else if let Some(notation) = dice {
            match notation.parse::<DiceRoll>() {
                Ok(roll) => roll.roll(rng).format(),
                Err(Error::InvalidInput(message)) => message,
                Err(e) => e.to_string(),
            }
        } else {
            "Please provide either min/max, choices, boolean, or dice option!".to_string()
        }
    }

    /// Generates something random: a number, a boolean, a pick from a
    /// list, or a dice roll.
    ///
    /// Exactly one mode applies per call, checked in order: `boolean`,
    /// then `choices`, then the `min`/`max` range, then `dice`. The reply
    /// footer names the engine that was used.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn random(
        ctx: Context<'_>,
        #[description = "Random engine to use"] engine: Option<EngineChoice>,
        #[description = "Lower bound (default 1)"] min: Option<i64>,
        #[description = "Upper bound (default 100)"] max: Option<i64>,
        #[description = "Comma-separated options to pick from"] choices: Option<String>,
        #[description = "Flip a true/false instead"] boolean: Option<bool>,
        #[description = "Dice notation, e.g. 3d6+2"] dice: Option<String>,
    ) -> Result<()> {
        let engine = engine.map(EngineChoice::engine).unwrap_or_default();
        let mut rng = engine.build();

        let body = render_random(
            &mut rng,
            min,
            max,
            choices.as_deref(),
            boolean,
            dice.as_deref(),
        );

        ctx.say(format!("{body}\n-# Engine: {} ({})", engine.name(), engine.code()))
            .await?;
        Ok(())
    }

    /// Quotes a movie. Accuracy not guaranteed.
    #[poise::command(slash_command, prefix_command)]
    pub async fn moviequote(
        ctx: Context<'_>,
        #[description = "Random engine to use"] engine: Option<EngineChoice>,
    ) -> Result<()> {
        let engine = engine.map(EngineChoice::engine).unwrap_or_default();
        let mut rng = engine.build();
        ctx.say(format!("🎬 {}", quotes::pick_quote(&mut rng)))
            .await?;
        Ok(())
    }

    /// Fetches a Garfield comic strip by date.
    ///
    /// The date may be `YYYY-MM-DD`, the word `random`, or omitted for
    /// today's strip. Strips before 1978-06-19 do not exist, and neither
    /// do tomorrow's.
    #[poise::command(slash_command, prefix_command)]
    pub async fn garfield(
        ctx: Context<'_>,
        #[description = "YYYY-MM-DD, \"random\", or blank for today"] date: Option<String>,
    ) -> Result<()> {
        ctx.defer().await?;
        let mut rng = RngEngine::default().build();
        let today = Utc::now().date_naive();

        let resolved = match garfield::resolve_date(&mut rng, date.as_deref(), today) {
            Ok(d) => d,
            Err(Error::InvalidInput(message)) => {
                ctx.say(message).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let strip_date = match garfield::classify(resolved, today) {
            garfield::StripDate::BeforeFirst => {
                ctx.say(format!(
                    "❌ Garfield didn't exist yet! The first strip ran on {}.",
                    garfield::first_strip_date()
                ))
                .await?;
                return Ok(());
            }
            garfield::StripDate::Future => {
                ctx.say("❌ That strip hasn't been drawn yet. Check back later!")
                    .await?;
                return Ok(());
            }
            garfield::StripDate::Available(d) => d,
        };

        let url = garfield::comic_url(strip_date);
        let exists = ctx
            .data()
            .http
            .head(&url)
            .send()
            .await
            .map(|resp| resp.status().is_success())
            .unwrap_or(false);
        if !exists {
            ctx.say(format!(
                "❌ I couldn't find the strip for {strip_date}. The archive may be missing it."
            ))
            .await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::new()
            .title(format!("Garfield — {strip_date}"))
            .image(&url)
            .field("Quote", garfield::pick_quote(&mut rng), false)
            .field("Fun fact", garfield::pick_fun_fact(&mut rng), false)
            .footer(serenity::CreateEmbedFooter::new(garfield::copyright_line(
                today.year(),
            )))
            .color(0xE8_7D_1E);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::inner::render_random;
    use crate::core::rng::RngEngine;

    #[test]
    fn test_no_options_prompts_for_one() {
        let mut rng = RngEngine::default().build();
        assert_eq!(
            render_random(&mut rng, None, None, None, None, None),
            "Please provide either min/max, choices, boolean, or dice option!"
        );
    }

    #[test]
    fn test_boolean_takes_precedence_over_dice() {
        let mut rng = RngEngine::default().build();
        let body = render_random(&mut rng, None, None, None, Some(true), Some("1d6"));
        assert!(body == "🎲 true" || body == "🎲 false", "got: {body}");
    }

    #[test]
    fn test_range_takes_precedence_over_dice() {
        let mut rng = RngEngine::default().build();
        let body = render_random(&mut rng, Some(3), Some(3), None, None, Some("1d6"));
        assert_eq!(body, "🎲 3");
    }

    #[test]
    fn test_dice_reached_when_only_dice_given() {
        let mut rng = RngEngine::default().build();
        let body = render_random(&mut rng, None, None, None, None, Some("2d1"));
        assert!(body.contains("Total: 2"), "got: {body}");
    }

    #[test]
    fn test_single_choice_is_picked() {
        let mut rng = RngEngine::default().build();
        let body = render_random(&mut rng, None, None, Some("lasagna"), None, None);
        assert_eq!(body, "🎲 I choose: **lasagna**");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut rng = RngEngine::default().build();
        let body = render_random(&mut rng, Some(9), Some(2), None, None, None);
        assert!(body.starts_with("❌ min"), "got: {body}");
    }
}
