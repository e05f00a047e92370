//! Garfield comic strip date handling.
//!
//! Pure date logic for the `/garfield` command: resolving the requested
//! date (explicit, random, or today), classifying it against the strip's
//! publication range, and building the archive URL. The HTTP existence
//! check lives in the command layer.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use rand::{Rng, RngCore};
use rand::seq::IndexedRandom;

/// Publication date of the first Garfield strip.
#[must_use]
pub fn first_strip_date() -> NaiveDate {
    // 1978-06-19 is a valid calendar date
    NaiveDate::from_ymd_opt(1978, 6, 19).unwrap_or(NaiveDate::MIN)
}

/// Footer attribution shown on every reply.
#[must_use]
pub fn copyright_line(current_year: i32) -> String {
    format!("© 1978-{current_year} Jim Davis")
}

/// Garfield one-liners shown alongside every reply.
pub const QUOTES: [&str; 11] = [
    "I hate Mondays!",
    "Love me, feed me, never leave me.",
    "Big naps, bigger lasagna.",
    "I’m not lazy, I’m energy efficient.",
    "Keep calm and eat lasagna.",
    "I'm not overweight, I'm undertall.",
    "Diet is 'die' with a 't'.",
    "Coffee is the gasoline of life.",
    "Some days you just can't get rid of a bomb.",
    "I'm not lazy, I'm just on energy-saving mode.",
    "If you want to sleep, you must dream.",
];

/// Trivia shown alongside every reply.
pub const FUN_FACTS: [&str; 7] = [
    "Garfield was originally a side character in Jim Davis' comic strip Jon.",
    "The first Garfield strip was published on June 19, 1978.",
    "Garfield has a favorite food: lasagna!",
    "The comic has appeared in over 2,500 newspapers worldwide.",
    "Garfield holds Guinness World Records for popularity.",
    "Garfield is famously lazy and loves sleeping.",
    "Jim Davis created Garfield to appeal to newspapers and families.",
];

/// Where a requested date falls relative to the strip's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripDate {
    /// Before the first strip existed
    BeforeFirst,
    /// After today; the strip may exist eventually
    Future,
    /// Within the published range
    Available(NaiveDate),
}

/// Resolves the user's date argument.
///
/// `None` means today, `"random"` picks a uniform date between the first
/// strip and today, anything else must parse as `YYYY-MM-DD`.
pub fn resolve_date(
    rng: &mut dyn RngCore,
    argument: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate> {
    match argument {
        None => Ok(today),
        Some(raw) if raw.eq_ignore_ascii_case("random") => {
            let start = first_strip_date().num_days_from_ce();
            let end = today.num_days_from_ce().max(start);
            let days = rng.random_range(start..=end);
            Ok(NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(today))
        }
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            Error::InvalidInput("❌ Invalid date format! Use YYYY-MM-DD or \"random\".".to_string())
        }),
    }
}

/// Classifies a date against the publication range.
#[must_use]
pub fn classify(date: NaiveDate, today: NaiveDate) -> StripDate {
    if date < first_strip_date() {
        StripDate::BeforeFirst
    } else if date > today {
        StripDate::Future
    } else {
        StripDate::Available(date)
    }
}

/// Archive URL for the strip published on `date`.
#[must_use]
pub fn comic_url(date: NaiveDate) -> String {
    format!(
        "https://picayune.uclick.com/comics/ga/{}/ga{}.gif",
        date.format("%Y"),
        date.format("%y%m%d")
    )
}

/// Random quote for a reply field.
#[must_use]
pub fn pick_quote(rng: &mut dyn RngCore) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

/// Random fun fact for a reply field.
#[must_use]
pub fn pick_fun_fact(rng: &mut dyn RngCore) -> &'static str {
    FUN_FACTS.choose(rng).copied().unwrap_or(FUN_FACTS[0])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_comic_url_format() {
        assert_eq!(
            comic_url(date(2020, 3, 7)),
            "https://picayune.uclick.com/comics/ga/2020/ga200307.gif"
        );
        assert_eq!(
            comic_url(first_strip_date()),
            "https://picayune.uclick.com/comics/ga/1978/ga780619.gif"
        );
    }

    #[test]
    fn test_classify_ranges() {
        let today = date(2024, 1, 15);
        assert_eq!(classify(date(1970, 1, 1), today), StripDate::BeforeFirst);
        assert_eq!(classify(date(2030, 1, 1), today), StripDate::Future);
        assert_eq!(
            classify(date(1999, 9, 9), today),
            StripDate::Available(date(1999, 9, 9))
        );
        assert_eq!(classify(today, today), StripDate::Available(today));
    }

    #[test]
    fn test_resolve_defaults_to_today() {
        let mut rng = rand::rng();
        let today = date(2024, 6, 1);
        assert_eq!(resolve_date(&mut rng, None, today).unwrap(), today);
    }

    #[test]
    fn test_resolve_parses_explicit_date() {
        let mut rng = rand::rng();
        let today = date(2024, 6, 1);
        let resolved = resolve_date(&mut rng, Some("1990-12-24"), today).unwrap();
        assert_eq!(resolved, date(1990, 12, 24));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let mut rng = rand::rng();
        let today = date(2024, 6, 1);
        assert!(resolve_date(&mut rng, Some("24-12-1990"), today).is_err());
        assert!(resolve_date(&mut rng, Some("not a date"), today).is_err());
    }

    #[test]
    fn test_resolve_random_stays_in_range() {
        let mut rng = rand::rng();
        let today = date(2024, 6, 1);
        for _ in 0..50 {
            let resolved = resolve_date(&mut rng, Some("random"), today).unwrap();
            assert!(resolved >= first_strip_date());
            assert!(resolved <= today);
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 1978-2026 Jim Davis");
        assert!(copyright_line(first_strip_date().year()).contains("1978"));
    }
}
