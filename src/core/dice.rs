//! Dice notation parsing and rolling.
//!
//! Accepts the classic `NdM` form with an optional signed modifier, e.g.
//! `3d6+2`. Rolling is separated from formatting so the command layer can
//! decide how to present the outcome.

use crate::errors::{Error, Result};
use rand::{Rng, RngCore};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static DICE_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)d(\d+)([+-]\d+)?$").expect("valid regex"));

/// Most dice a single expression may roll. Each die is materialized in the
/// result, so an unbounded count would let one slash command allocate
/// gigabytes.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice expression: `count` dice of `sides` sides plus `modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    /// Number of dice to roll (at least 1)
    pub count: u32,
    /// Sides per die (at least 1)
    pub sides: u32,
    /// Flat modifier added to the total
    pub modifier: i64,
}

impl FromStr for DiceRoll {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = DICE_NOTATION.captures(s.trim()).ok_or_else(|| {
            Error::InvalidInput("Invalid dice format! Use NdM or NdM±X, e.g., 3d6+2".to_string())
        })?;

        let count: u32 = caps[1]
            .parse()
            .map_err(|_| Error::InvalidInput("Too many dice.".to_string()))?;
        let sides: u32 = caps[2]
            .parse()
            .map_err(|_| Error::InvalidInput("Too many sides.".to_string()))?;
        let modifier: i64 = caps
            .get(3)
            .map_or(Ok(0), |m| m.as_str().parse())
            .map_err(|_| Error::InvalidInput("Modifier out of range.".to_string()))?;

        if count < 1 || sides < 1 {
            return Err(Error::InvalidInput(
                "Number of dice and sides must be at least 1!".to_string(),
            ));
        }
        if count > MAX_DICE {
            return Err(Error::InvalidInput(format!(
                "❌ Too many dice! I can roll at most {MAX_DICE} at once."
            )));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

/// The result of rolling a [`DiceRoll`].
#[derive(Debug, Clone)]
pub struct RollOutcome {
    /// The expression that was rolled
    pub roll: DiceRoll,
    /// Each individual die result
    pub rolls: Vec<u32>,
    /// Sum of the rolls plus the modifier
    pub total: i64,
}

impl DiceRoll {
    /// Rolls the expression with the given generator.
    pub fn roll(self, rng: &mut dyn RngCore) -> RollOutcome {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + self.modifier;

        RollOutcome {
            roll: self,
            rolls,
            total,
        }
    }

    /// Lowest possible total for this expression.
    #[must_use]
    pub const fn min_total(self) -> i64 {
        self.count as i64 + self.modifier
    }

    /// Highest possible total for this expression.
    #[must_use]
    pub const fn max_total(self) -> i64 {
        self.count as i64 * self.sides as i64 + self.modifier
    }
}

impl RollOutcome {
    /// Formats the outcome for display: individual rolls (with d20 crit and
    /// fumble highlights), the modifier, the total, and a note when the
    /// total lands near the extremes of the possible range.
    #[must_use]
    pub fn format(&self) -> String {
        let highlighted: Vec<String> = self
            .rolls
            .iter()
            .map(|&roll| {
                if self.roll.sides == 20 {
                    if roll == 20 {
                        return format!("{roll} 🎉");
                    }
                    if roll == 1 {
                        return format!("{roll} 💀");
                    }
                }
                roll.to_string()
            })
            .collect();

        let modifier_str = match self.roll.modifier {
            0 => String::new(),
            m if m > 0 => format!(" +{m}"),
            m => format!(" {m}"),
        };

        #[allow(clippy::cast_precision_loss)] // totals are far below 2^52
        let total_note = {
            let total = self.total as f64;
            if total >= 0.9 * self.roll.max_total() as f64 {
                " 🌟 Big Success!"
            } else if total <= 1.1 * self.roll.min_total() as f64 {
                " ⚠️ Big Failure!"
            } else {
                ""
            }
        };

        format!(
            "Rolls: [{}]{} → Total: {}{}",
            highlighted.join(", "),
            modifier_str,
            self.total,
            total_note
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_basic() {
        let roll: DiceRoll = "3d6".parse().unwrap();
        assert_eq!(
            roll,
            DiceRoll {
                count: 3,
                sides: 6,
                modifier: 0
            }
        );
    }

    #[test]
    fn test_parse_with_modifiers() {
        let roll: DiceRoll = "2d20+5".parse().unwrap();
        assert_eq!(roll.modifier, 5);

        let roll: DiceRoll = "1d4-2".parse().unwrap();
        assert_eq!(roll.modifier, -2);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let roll: DiceRoll = "  1d6  ".parse().unwrap();
        assert_eq!(roll.count, 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("d6".parse::<DiceRoll>().is_err());
        assert!("3d".parse::<DiceRoll>().is_err());
        assert!("3x6".parse::<DiceRoll>().is_err());
        assert!("3d6+".parse::<DiceRoll>().is_err());
        assert!(String::new().parse::<DiceRoll>().is_err());
    }

    #[test]
    fn test_parse_rejects_zero_dice_and_sides() {
        assert!("0d6".parse::<DiceRoll>().is_err());
        assert!("3d0".parse::<DiceRoll>().is_err());
    }

    #[test]
    fn test_parse_rejects_absurd_dice_counts() {
        assert!("4000000000d6".parse::<DiceRoll>().is_err());
        assert!(format!("{}d6", MAX_DICE + 1).parse::<DiceRoll>().is_err());
        assert!(format!("{MAX_DICE}d6").parse::<DiceRoll>().is_ok());
    }

    #[test]
    fn test_roll_within_bounds() {
        let roll: DiceRoll = "10d6+3".parse().unwrap();
        let mut rng = rand::rng();
        let outcome = roll.roll(&mut rng);

        assert_eq!(outcome.rolls.len(), 10);
        assert!(outcome.rolls.iter().all(|&r| (1..=6).contains(&r)));
        assert!(outcome.total >= roll.min_total());
        assert!(outcome.total <= roll.max_total());
    }

    #[test]
    fn test_format_highlights_d20_extremes() {
        let roll = DiceRoll {
            count: 2,
            sides: 20,
            modifier: 0,
        };
        let outcome = RollOutcome {
            roll,
            rolls: vec![20, 1],
            total: 21,
        };
        let formatted = outcome.format();
        assert!(formatted.contains("20 🎉"));
        assert!(formatted.contains("1 💀"));
    }

    #[test]
    fn test_format_notes_big_success() {
        let roll = DiceRoll {
            count: 1,
            sides: 6,
            modifier: 0,
        };
        let outcome = RollOutcome {
            roll,
            rolls: vec![6],
            total: 6,
        };
        assert!(outcome.format().contains("Big Success"));
    }

    #[test]
    fn test_format_notes_big_failure() {
        let roll = DiceRoll {
            count: 1,
            sides: 6,
            modifier: 0,
        };
        let outcome = RollOutcome {
            roll,
            rolls: vec![1],
            total: 1,
        };
        assert!(outcome.format().contains("Big Failure"));
    }

    #[test]
    fn test_format_shows_modifier() {
        let roll = DiceRoll {
            count: 1,
            sides: 6,
            modifier: -2,
        };
        let outcome = RollOutcome {
            roll,
            rolls: vec![4],
            total: 2,
        };
        assert!(outcome.format().contains(" -2"));
    }
}
