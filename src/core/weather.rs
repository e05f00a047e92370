//! Weather lookup via Open-Meteo.
//!
//! Two-step lookup: geocode the location name, then fetch current
//! conditions for the coordinates. Open-Meteo is keyless, so there is no
//! credential plumbing. Temperature unit handling and the WMO weather-code
//! table are pure and tested; only the two fetches touch the network.

use crate::errors::{Error, Result};
use serde::Deserialize;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Requested temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin (derived from Celsius)
    Kelvin,
}

impl Unit {
    /// Unit symbol for display (`°C`, `°F`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// The unit Open-Meteo is asked for. Kelvin is not supported upstream,
    /// so it is requested as Celsius and converted locally.
    const fn api_unit(self) -> &'static str {
        match self {
            Self::Celsius | Self::Kelvin => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Converts a temperature as returned by the API into this unit.
    #[must_use]
    pub fn from_api_temperature(self, value: f64) -> f64 {
        match self {
            Self::Celsius | Self::Fahrenheit => value,
            Self::Kelvin => ((value + 273.15) * 100.0).round() / 100.0,
        }
    }
}

/// A resolved weather report, ready for formatting.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// "City, Region, Country" as resolved by the geocoder
    pub location: String,
    /// Human-readable sky condition
    pub description: &'static str,
    /// Emoji matching the condition
    pub emoji: &'static str,
    /// Temperature in the requested unit
    pub temperature: f64,
    /// Apparent temperature in the requested unit
    pub feels_like: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Wind speed, km/h
    pub wind_speed: f64,
    /// The unit `temperature` and `feels_like` are in
    pub unit: Unit,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u8,
}

/// Fetches current conditions for a free-form location name.
///
/// # Errors
/// Fails when the geocoder finds no match or either request fails.
pub async fn fetch_weather(
    client: &reqwest::Client,
    location: &str,
    unit: Unit,
) -> Result<WeatherReport> {
    let geo: GeocodingResponse = client
        .get(GEOCODING_URL)
        .query(&[("name", location), ("count", "1")])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let place = geo
        .results
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
        .ok_or_else(|| {
            Error::InvalidInput(format!("No weather information found for \"{location}\"."))
        })?;

    let forecast: ForecastResponse = client
        .get(FORECAST_URL)
        .query(&[
            ("latitude", place.latitude.to_string()),
            ("longitude", place.longitude.to_string()),
            (
                "current",
                "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code"
                    .to_string(),
            ),
            ("temperature_unit", unit.api_unit().to_string()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let (description, emoji) = describe_weather_code(forecast.current.weather_code);
    let location = [Some(place.name), place.admin1, place.country]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    Ok(WeatherReport {
        location,
        description,
        emoji,
        temperature: unit.from_api_temperature(forecast.current.temperature_2m),
        feels_like: unit.from_api_temperature(forecast.current.apparent_temperature),
        humidity: forecast.current.relative_humidity_2m,
        wind_speed: forecast.current.wind_speed_10m,
        unit,
    })
}

/// Maps a WMO weather interpretation code to a description and emoji.
/// Unknown codes get a question mark rather than an error.
#[must_use]
pub const fn describe_weather_code(code: u8) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear", "☀️"),
        1 => ("Mainly Clear", "🌤️"),
        2 => ("Partly Cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 | 48 => ("Fog", "🌫️"),
        51 | 53 | 55 => ("Drizzle", "🌦️"),
        56 | 57 => ("Freezing Drizzle", "🌧️"),
        61 | 63 => ("Rain", "🌧️"),
        65 => ("Heavy Rain", "🌧️🌊"),
        66 | 67 => ("Freezing Rain", "🌨️🌧️"),
        71 | 73 => ("Snow", "❄️"),
        75 | 77 => ("Heavy Snow", "🌨️"),
        80 | 81 => ("Rain Showers", "🌦️"),
        82 => ("Violent Rain Showers", "⛈️"),
        85 | 86 => ("Snow Showers", "🌨️"),
        95 => ("Thunderstorm", "⛈️"),
        96 | 99 => ("Thunderstorm with Hail", "🌩️"),
        _ => ("Unknown", "❓"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_kelvin_conversion() {
        assert_eq!(Unit::Kelvin.from_api_temperature(0.0), 273.15);
        assert_eq!(Unit::Kelvin.from_api_temperature(26.849), 300.0);
    }

    #[test]
    fn test_celsius_and_fahrenheit_pass_through() {
        assert_eq!(Unit::Celsius.from_api_temperature(21.5), 21.5);
        assert_eq!(Unit::Fahrenheit.from_api_temperature(70.7), 70.7);
    }

    #[test]
    fn test_kelvin_requests_celsius_upstream() {
        assert_eq!(Unit::Kelvin.api_unit(), "celsius");
        assert_eq!(Unit::Fahrenheit.api_unit(), "fahrenheit");
    }

    #[test]
    fn test_weather_code_table() {
        assert_eq!(describe_weather_code(0), ("Clear", "☀️"));
        assert_eq!(describe_weather_code(95).0, "Thunderstorm");
        assert_eq!(describe_weather_code(200).1, "❓");
    }

    #[test]
    fn test_forecast_response_shape() {
        let json = r#"{
            "current": {
                "temperature_2m": 18.3,
                "apparent_temperature": 17.1,
                "relative_humidity_2m": 64.0,
                "wind_speed_10m": 12.5,
                "weather_code": 2
            }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(json).expect("valid fixture");
        assert_eq!(parsed.current.weather_code, 2);
        assert_eq!(parsed.current.temperature_2m, 18.3);
    }

    #[test]
    fn test_geocoding_response_shape() {
        let json = r#"{
            "results": [{
                "name": "Berlin",
                "latitude": 52.52,
                "longitude": 13.41,
                "admin1": "Berlin",
                "country": "Germany"
            }]
        }"#;
        let parsed: GeocodingResponse = serde_json::from_str(json).expect("valid fixture");
        let results = parsed.results.expect("has results");
        assert_eq!(results[0].name, "Berlin");

        let empty: GeocodingResponse = serde_json::from_str("{}").expect("valid fixture");
        assert!(empty.results.is_none());
    }
}
