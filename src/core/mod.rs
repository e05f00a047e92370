//! Core business logic - framework-agnostic operations behind the commands.
//!
//! Nothing in this module knows about Discord. Every function takes plain
//! values (and a database connection where persistence is involved) and
//! returns structured data for the bot layer to format.

/// Coin flipping with bounded result display
pub mod coinflip;
/// Dice notation (`NdM±X`) parsing and rolling
pub mod dice;
/// Message edit history cache and persistence
pub mod edits;
/// Garfield comic strip date handling
pub mod garfield;
/// Word and string length measurement
pub mod length;
/// Minesweeper board generation
pub mod minesweeper;
/// Movie quote selection
pub mod quotes;
/// Markdown/Unicode-preserving text reversal
pub mod reverse;
/// Named random number engines
pub mod rng;
/// Rock-paper-scissors match logic
pub mod rps;
/// Weather lookup via Open-Meteo
pub mod weather;
