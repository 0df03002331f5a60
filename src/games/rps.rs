//! Rock-paper-scissors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Move {
    /// Every move, in prompt order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the lowercase name of the move.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Returns true if this move defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// Picks a move uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Parses a move, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "move",
                    format!("'{}' is not one of rock, paper or scissors", s.trim()),
                )
            })
    }
}

/// The result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The player won.
    Win,
    /// The computer won.
    Lose,
    /// Both chose the same move.
    Tie,
}

impl Outcome {
    /// Returns the console banner for the outcome.
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::Win => "YOU WIN",
            Outcome::Lose => "YOU LOSE",
            Outcome::Tie => "TIE",
        }
    }
}

/// Decides a round.
///
/// # Examples
///
/// ```
/// use payroll_engine::games::{Move, Outcome, play};
///
/// assert_eq!(play(Move::Rock, Move::Scissors), Outcome::Win);
/// assert_eq!(play(Move::Rock, Move::Paper), Outcome::Lose);
/// assert_eq!(play(Move::Rock, Move::Rock), Outcome::Tie);
/// ```
pub fn play(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// A completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The player's move.
    pub user: Move,
    /// The computer's move.
    pub computer: Move,
    /// Who won.
    pub outcome: Outcome,
}

impl RoundResult {
    /// Plays the user's move against a random computer move.
    pub fn against_random<R: Rng + ?Sized>(user: Move, rng: &mut R) -> Self {
        let computer = Move::random(rng);
        Self {
            user,
            computer,
            outcome: play(user, computer),
        }
    }

    /// Returns the console report: the banner, then the computer's move.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            self.outcome.banner().to_string(),
            format!("Computer chose: {}", self.computer),
        ]
    }
}
