//! Rock-paper-scissors match logic.
//!
//! The user plays against the bot for a configurable number of rounds.
//! User moves may be supplied up-front (comma-separated); any round without
//! a supplied move gets a random one. Matches beyond the fast-mode
//! threshold are summarized as a compact scoreboard instead of per-round
//! lines.

use rand::RngCore;
use rand::seq::IndexedRandom;

/// A rock-paper-scissors move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Rock crushes scissors
    Rock,
    /// Paper covers rock
    Paper,
    /// Scissors cut paper
    Scissors,
}

impl Move {
    /// All moves, used for random selection.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Case-insensitive parse; unknown strings yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Some(Self::Rock),
            "paper" => Some(Self::Paper),
            "scissors" => Some(Self::Scissors),
            _ => None,
        }
    }

    /// Whether `self` beats `other`.
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }

    /// Emoji used in round displays.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }

    fn random(rng: &mut dyn RngCore) -> Self {
        // ALL is non-empty, choose cannot fail
        *Self::ALL.choose(rng).unwrap_or(&Self::Rock)
    }
}

/// Result of a single round, from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// User won the round
    Win,
    /// Bot won the round
    Loss,
    /// Both picked the same move
    Tie,
}

impl RoundResult {
    /// Square-emoji scoreboard symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Win => "🟩",
            Self::Loss => "🟥",
            Self::Tie => "⬛",
        }
    }
}

/// One played round.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    /// The user's move
    pub user: Move,
    /// The bot's move
    pub bot: Move,
    /// Who took the round
    pub result: RoundResult,
}

/// A finished match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Every round in play order
    pub rounds: Vec<Round>,
    /// Rounds the user won
    pub user_wins: u32,
    /// Rounds the bot won
    pub bot_wins: u32,
}

/// Plays a full match. `user_moves` supplies the user's move for round `i`
/// where present; missing or unparseable entries fall back to random.
pub fn play_match(rng: &mut dyn RngCore, rounds: u32, user_moves: &[Option<Move>]) -> MatchOutcome {
    let mut played = Vec::with_capacity(rounds as usize);
    let mut user_wins = 0;
    let mut bot_wins = 0;

    for i in 0..rounds as usize {
        let user = user_moves
            .get(i)
            .copied()
            .flatten()
            .unwrap_or_else(|| Move::random(rng));
        let bot = Move::random(rng);

        let result = if user == bot {
            RoundResult::Tie
        } else if user.beats(bot) {
            user_wins += 1;
            RoundResult::Win
        } else {
            bot_wins += 1;
            RoundResult::Loss
        };

        played.push(Round { user, bot, result });
    }

    MatchOutcome {
        rounds: played,
        user_wins,
        bot_wins,
    }
}

/// Parses a comma-separated move list; entries that are not valid moves are
/// dropped to `None` so they fall back to random picks.
#[must_use]
pub fn parse_moves(raw: &str) -> Vec<Option<Move>> {
    raw.split(',').map(Move::parse).collect()
}

impl MatchOutcome {
    /// Compact scoreboard string for fast mode.
    #[must_use]
    pub fn scoreboard(&self) -> String {
        self.rounds.iter().map(|r| r.result.symbol()).collect()
    }

    /// Final result line with the overall winner.
    #[must_use]
    pub fn final_result(&self) -> String {
        if self.user_wins > self.bot_wins {
            format!("🎉 You won! ({}–{})", self.user_wins, self.bot_wins)
        } else if self.bot_wins > self.user_wins {
            format!("💀 Bot won! ({}–{})", self.bot_wins, self.user_wins)
        } else {
            format!("🤝 It's a tie! ({}–{})", self.user_wins, self.bot_wins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(!Move::Rock.beats(Move::Paper));
        assert!(!Move::Rock.beats(Move::Rock));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Move::parse("Rock"), Some(Move::Rock));
        assert_eq!(Move::parse("  scissors "), Some(Move::Scissors));
        assert_eq!(Move::parse("lizard"), None);
    }

    #[test]
    fn test_parse_moves_keeps_positions() {
        let moves = parse_moves("Rock, spock, Paper");
        assert_eq!(
            moves,
            vec![Some(Move::Rock), None, Some(Move::Paper)]
        );
    }

    #[test]
    fn test_match_accounting() {
        let mut rng = rand::rng();
        let outcome = play_match(&mut rng, 25, &[]);
        assert_eq!(outcome.rounds.len(), 25);
        let ties = outcome
            .rounds
            .iter()
            .filter(|r| r.result == RoundResult::Tie)
            .count() as u32;
        assert_eq!(outcome.user_wins + outcome.bot_wins + ties, 25);
        assert_eq!(outcome.scoreboard().chars().count(), 25);
    }

    #[test]
    fn test_forced_moves_are_used() {
        let mut rng = rand::rng();
        let forced = vec![Some(Move::Rock), Some(Move::Paper)];
        let outcome = play_match(&mut rng, 2, &forced);
        assert_eq!(outcome.rounds[0].user, Move::Rock);
        assert_eq!(outcome.rounds[1].user, Move::Paper);
    }

    #[test]
    fn test_final_result_lines() {
        let outcome = MatchOutcome {
            rounds: Vec::new(),
            user_wins: 2,
            bot_wins: 1,
        };
        assert!(outcome.final_result().contains("You won"));

        let outcome = MatchOutcome {
            rounds: Vec::new(),
            user_wins: 1,
            bot_wins: 1,
        };
        assert!(outcome.final_result().contains("tie"));
    }
}
