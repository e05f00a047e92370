//! Weather lookup command backed by the Open-Meteo APIs.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::core::weather::{self, Unit};
    use crate::errors::{Error, Result};
    use poise::serenity_prelude as serenity;

    /// Slash-command choice wrapper around the supported temperature units.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum UnitChoice {
        #[name = "Celsius (°C)"]
        Celsius,
        #[name = "Fahrenheit (°F)"]
        Fahrenheit,
        #[name = "Kelvin (K)"]
        Kelvin,
    }

    impl UnitChoice {
        fn unit(self) -> Unit {
            match self {
                Self::Celsius => Unit::Celsius,
                Self::Fahrenheit => Unit::Fahrenheit,
                Self::Kelvin => Unit::Kelvin,
            }
        }
    }

    /// Shows current weather conditions for a location.
    #[poise::command(slash_command, prefix_command)]
    pub async fn weather(
        ctx: Context<'_>,
        #[description = "City or place name"] location: String,
        #[description = "Temperature unit (default Celsius)"] unit: Option<UnitChoice>,
    ) -> Result<()> {
        ctx.defer().await?;
        let unit = unit.map_or(Unit::default(), UnitChoice::unit);

        let report = match weather::fetch_weather(&ctx.data().http, &location, unit).await {
            Ok(report) => report,
            Err(Error::InvalidInput(message)) => {
                ctx.say(message).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let symbol = report.unit.symbol();
        let embed = serenity::CreateEmbed::new()
            .title(format!(
                "{} Weather in {}",
                report.emoji, report.location
            ))
            .description(report.description)
            .field(
                "Temperature",
                format!("{}{symbol}", report.temperature),
                true,
            )
            .field("Feels like", format!("{}{symbol}", report.feels_like), true)
            .field("Humidity", format!("{}%", report.humidity), true)
            .field("Wind", format!("{} km/h", report.wind_speed), true)
            .footer(serenity::CreateEmbedFooter::new("Data from Open-Meteo"))
            .color(0x37_99_D8);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
