//! Console games.
//!
//! Randomness is always passed in as an [`rand::Rng`], so a seeded generator
//! makes every round reproducible.

mod dice;
mod rps;

pub use dice::{DIE_SIDES, DiceOutcome, DiceRound, roll_die};
pub use rps::{Move, Outcome, RoundResult, play};
