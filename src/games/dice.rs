//! Two-player dice roll-off.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of faces on the die.
pub const DIE_SIDES: u8 = 6;

/// Rolls one die.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_SIDES)
}

/// Who won a roll-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceOutcome {
    /// The first player rolled higher.
    PlayerOne,
    /// The second player rolled higher.
    PlayerTwo,
    /// Both rolled the same number.
    Tie,
}

/// One roll-off between two named players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRound {
    /// First player's name.
    pub player_one: String,
    /// Second player's name.
    pub player_two: String,
    /// First player's roll.
    pub roll_one: u8,
    /// Second player's roll.
    pub roll_two: u8,
}

impl DiceRound {
    /// Records a roll-off with known rolls.
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        roll_one: u8,
        roll_two: u8,
    ) -> EngineResult<Self> {
        for (field, roll) in [("roll_one", roll_one), ("roll_two", roll_two)] {
            if !(1..=DIE_SIDES).contains(&roll) {
                return Err(EngineError::invalid_input(
                    field,
                    format!("a die roll must be between 1 and {}, got {}", DIE_SIDES, roll),
                ));
            }
        }
        Ok(Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            roll_one,
            roll_two,
        })
    }

    /// Rolls for both players.
    pub fn roll<R: Rng + ?Sized>(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        let roll_one = roll_die(rng);
        let roll_two = roll_die(rng);
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            roll_one,
            roll_two,
        }
    }

    /// Returns who won.
    pub fn outcome(&self) -> DiceOutcome {
        match self.roll_one.cmp(&self.roll_two) {
            std::cmp::Ordering::Greater => DiceOutcome::PlayerOne,
            std::cmp::Ordering::Less => DiceOutcome::PlayerTwo,
            std::cmp::Ordering::Equal => DiceOutcome::Tie,
        }
    }

    /// Returns the announcement for the round.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::games::DiceRound;
    ///
    /// let round = DiceRound::new("Ann", "Ben", 5, 2).unwrap();
    /// assert_eq!(round.message(), "Ann wins with a roll of 5 against 2!");
    /// ```
    pub fn message(&self) -> String {
        match self.outcome() {
            DiceOutcome::PlayerOne => format!(
                "{} wins with a roll of {} against {}!",
                self.player_one, self.roll_one, self.roll_two
            ),
            DiceOutcome::PlayerTwo => format!(
                "{} wins with a roll of {} against {}!",
                self.player_two, self.roll_two, self.roll_one
            ),
            DiceOutcome::Tie => format!("It's a tie! Both players rolled a {}!", self.roll_one),
        }
    }
}
