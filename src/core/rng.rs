//! Named random number engines.
//!
//! Several commands let the user pick which generator backs their
//! randomness. Engines are an enumerated variant type resolved through a
//! pure lookup function; there is no global registry to mutate.

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

/// The selectable random engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngEngine {
    /// `StdRng` seeded from the calling thread's local generator; the
    /// default when nothing is specified
    #[default]
    Thread,
    /// `StdRng`, a cryptographically strong generator seeded from the OS
    Standard,
    /// `SmallRng`, a fast non-cryptographic generator seeded from the OS
    Small,
}

impl RngEngine {
    /// Every engine, in display order.
    pub const ALL: [Self; 3] = [Self::Thread, Self::Standard, Self::Small];

    /// Resolves a short engine code to an engine. Unknown codes resolve to
    /// `None`; callers fall back to the default.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "th" => Some(Self::Thread),
            "st" => Some(Self::Standard),
            "sm" => Some(Self::Small),
            _ => None,
        }
    }

    /// The short code used in command options and reply footers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Thread => "th",
            Self::Standard => "st",
            Self::Small => "sm",
        }
    }

    /// Human-readable engine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thread => "ThreadSeeded",
            Self::Standard => "StdRng",
            Self::Small => "SmallRng",
        }
    }

    /// Builds a fresh generator for this engine.
    ///
    /// The result is `Send` so command handlers can hold it across await
    /// points; `ThreadRng` itself is not, so the thread engine hands out a
    /// `StdRng` seeded from the thread-local generator instead.
    #[must_use]
    pub fn build(self) -> Box<dyn RngCore + Send> {
        match self {
            Self::Thread => Box::new(StdRng::from_rng(&mut rand::rng())),
            Self::Standard => Box::new(StdRng::from_os_rng()),
            Self::Small => Box::new(SmallRng::from_os_rng()),
        }
    }
}
