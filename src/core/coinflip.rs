//! Coin flipping.
//!
//! Flips any number of coins, tallies heads and tails, and keeps a bounded
//! prefix of the individual results so the reply cannot grow without limit.

use rand::{Rng, RngCore};

/// How many individual flips are shown before collapsing to a "+N more"
/// suffix.
pub const DISPLAY_LIMIT: usize = 20;

/// One side of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    /// Heads
    Heads,
    /// Tails
    Tails,
}

impl CoinSide {
    /// Emoji + label used in replies.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Heads => "🟢 Heads",
            Self::Tails => "🔴 Tails",
        }
    }
}

/// Aggregated result of a flip session.
#[derive(Debug, Clone)]
pub struct FlipSummary {
    /// Total flips performed
    pub flips: u32,
    /// Number of heads
    pub heads: u32,
    /// Number of tails
    pub tails: u32,
    /// The first [`DISPLAY_LIMIT`] results, in order
    pub shown: Vec<CoinSide>,
}

/// Flips `flips` coins with the given generator.
pub fn flip_coins(rng: &mut dyn RngCore, flips: u32) -> FlipSummary {
    let mut heads = 0;
    let mut tails = 0;
    let mut shown = Vec::with_capacity(DISPLAY_LIMIT.min(flips as usize));

    for i in 0..flips {
        let side = if rng.random_bool(0.5) {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        };
        match side {
            CoinSide::Heads => heads += 1,
            CoinSide::Tails => tails += 1,
        }
        if (i as usize) < DISPLAY_LIMIT {
            shown.push(side);
        }
    }

    FlipSummary {
        flips,
        heads,
        tails,
        shown,
    }
}

impl FlipSummary {
    /// Renders the per-flip line, collapsing everything past the display
    /// limit into a count.
    #[must_use]
    pub fn display_results(&self) -> String {
        let mut line = self
            .shown
            .iter()
            .map(|side| side.display())
            .collect::<Vec<_>>()
            .join(" ");
        let hidden = self.flips as usize - self.shown.len();
        if hidden > 0 {
            line.push_str(&format!(" … (+{hidden} more flips)"));
        }
        line
    }
}
