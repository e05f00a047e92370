//! Slash command implementations, grouped by category.

/// Owner-only presence, profile, and cleanup commands
pub mod admin;
/// Chance-based mini games (coinflip, rock-paper-scissors, minesweeper)
pub mod games;
/// Connectivity and help commands
pub mod general;
/// Lookup commands for users, servers, and messages
pub mod info;
/// Random generators (numbers, quotes, comic strips)
pub mod random;
/// Text transformation commands
pub mod text;
/// Weather lookups
pub mod weather;

use crate::core::rng::RngEngine;

/// Slash-command choice wrapper around the available random number engines.
#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum EngineChoice {
    /// Per-thread generator, cheap and automatically seeded
    #[name = "thread (th)"]
    Thread,
    /// Cryptographically strong standard generator
    #[name = "standard (st)"]
    Standard,
    /// Small fast non-cryptographic generator
    #[name = "small (sm)"]
    Small,
}

impl EngineChoice {
    /// Maps the slash choice onto the core engine descriptor.
    pub fn engine(self) -> RngEngine {
        match self {
            Self::Thread => RngEngine::Thread,
            Self::Standard => RngEngine::Standard,
            Self::Small => RngEngine::Small,
        }
    }
}
