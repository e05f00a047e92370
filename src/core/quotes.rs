//! Movie quote selection.

use rand::RngCore;
use rand::seq::IndexedRandom;

/// The quote pool.
pub const MOVIE_QUOTES: [&str; 4] = [
    "No, Luke... I am your father.",
    "Reach for the sky!",
    "The Force is strong with this one.",
    "I'll be back!",
];

/// Picks one quote at random.
#[must_use]
pub fn pick_quote(rng: &mut dyn RngCore) -> &'static str {
    MOVIE_QUOTES.choose(rng).copied().unwrap_or(MOVIE_QUOTES[0])
}
