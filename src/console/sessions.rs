//! Interactive console sessions.
//!
//! Each session asks its questions through an [`InputSource`] and writes its
//! report to any `io::Write`, then returns the structured result so callers
//! and tests can inspect it.

use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::calculation::simulate_loan;
use crate::error::{EngineError, EngineResult};
use crate::games::{DiceRound, Move, RoundResult};
use crate::glossary::{AcronymEntry, AcronymFile};
use crate::models::{
    AmortizationSchedule, LoanTerms, MAX_ANNUAL_INTEREST_RATE, MAX_LOAN_AMOUNT, MAX_TERM_MONTHS,
};

use super::{InputSource, prompt_amount, prompt_count, prompt_with};

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> EngineResult<()> {
    for line in lines {
        writeln!(out, "{}", line).map_err(|e| EngineError::io("writing output", e))?;
    }
    Ok(())
}

fn non_blank(answer: &str) -> Result<String, String> {
    if answer.is_empty() {
        Err("must not be blank".to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Asks for loan terms, simulates the loan and prints the monthly report.
pub fn run_loan_session<I, W>(input: &mut I, out: &mut W) -> EngineResult<AmortizationSchedule>
where
    I: InputSource + ?Sized,
    W: Write,
{
    let principal = prompt_amount(
        input,
        out,
        "Enter the amount of money owed in dollars: ",
        "money_owed",
        MAX_LOAN_AMOUNT,
    )?;
    let annual_interest_rate = prompt_amount(
        input,
        out,
        "Enter the annual interest rate (as a percentage, e.g., 5 for 5%): ",
        "annual_interest_rate",
        MAX_ANNUAL_INTEREST_RATE,
    )?;
    let monthly_payment = prompt_amount(
        input,
        out,
        "Enter the monthly payment amount in dollars: ",
        "monthly_payment",
        MAX_LOAN_AMOUNT,
    )?;
    let months = prompt_count(
        input,
        out,
        "Enter the number of months to simulate: ",
        "months",
        1,
        MAX_TERM_MONTHS,
    )?;

    let schedule = simulate_loan(&LoanTerms {
        principal,
        annual_interest_rate,
        monthly_payment,
        months,
    })?;
    write_lines(out, &schedule.report_lines())?;

    info!(
        months_simulated = schedule.statements.len(),
        paid_off = schedule.paid_off,
        "Loan session finished"
    );
    Ok(schedule)
}

/// What the user chose to do with the acronym file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcronymChoice {
    /// Start the file over.
    Initialize,
    /// Add to the end of the file.
    Add,
}

impl AcronymChoice {
    /// Parses `i` or `a`, ignoring case and whitespace.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "i" => Some(AcronymChoice::Initialize),
            "a" => Some(AcronymChoice::Add),
            _ => None,
        }
    }
}

/// Repeatedly initializes or extends an acronym file.
///
/// The loop ends on any answer other than `i` or `a`, or when input runs
/// out. Returns the number of entries written.
pub fn run_acronym_session<I, W>(input: &mut I, out: &mut W, file: &AcronymFile) -> EngineResult<usize>
where
    I: InputSource + ?Sized,
    W: Write,
{
    let mut written = 0;

    loop {
        let Some(answer) = input
            .read_line("Do you want to (i)nitialize or (a)dd an acronym definition? (i/a): ")?
        else {
            break;
        };

        let Some(choice) = AcronymChoice::parse(&answer) else {
            writeln!(out, "Invalid choice. Program will exit.")
                .map_err(|e| EngineError::io("writing output", e))?;
            break;
        };

        let acronym_prompt = match choice {
            AcronymChoice::Initialize => "Enter a first acronym you want to add: ",
            AcronymChoice::Add => "Enter an acronym you want to add: ",
        };
        let acronym = prompt_with(input, out, acronym_prompt, "acronym", |answer| {
            let acronym = non_blank(answer)?;
            if acronym.contains(':') {
                return Err("must not contain ':'".to_string());
            }
            Ok(acronym)
        })?;
        let definition = prompt_with(
            input,
            out,
            &format!("Enter the definition for {}: ", acronym),
            "definition",
            non_blank,
        )?;

        let entry = AcronymEntry::new(&acronym, &definition)?;
        match choice {
            AcronymChoice::Initialize => file.initialize(&entry)?,
            AcronymChoice::Add => file.append(&entry)?,
        }
        written += 1;
    }

    Ok(written)
}

/// Plays one round of rock-paper-scissors against a random computer move.
pub fn run_rps_session<I, W, R>(input: &mut I, out: &mut W, rng: &mut R) -> EngineResult<RoundResult>
where
    I: InputSource + ?Sized,
    W: Write,
    R: Rng + ?Sized,
{
    let user = prompt_with(input, out, "Enter rock, paper, or scissors: ", "move", |answer| {
        answer.parse::<Move>().map_err(|e| match e {
            EngineError::InvalidInput { message, .. } => message,
            other => other.to_string(),
        })
    })?;

    let round = RoundResult::against_random(user, rng);
    write_lines(out, &round.report_lines())?;
    Ok(round)
}

/// Asks for two player names and rolls a die for each.
pub fn run_dice_session<I, W, R>(input: &mut I, out: &mut W, rng: &mut R) -> EngineResult<DiceRound>
where
    I: InputSource + ?Sized,
    W: Write,
    R: Rng + ?Sized,
{
    let player_one = prompt_with(input, out, "Enter name for Player 1: ", "player_one", non_blank)?;
    let player_two = prompt_with(input, out, "Enter name for Player 2: ", "player_two", non_blank)?;

    let round = DiceRound::roll(player_one, player_two, rng);
    write_lines(out, &[round.message()])?;
    Ok(round)
}

/// Latest birth year the decade session accepts.
pub const MAX_BIRTH_YEAR: u32 = 9999;

/// A birth year split into its decade and the years past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDecade {
    /// The decade, e.g. 1980.
    pub decade: u32,
    /// Years into the decade, 0 to 9.
    pub years: u32,
}

impl BirthDecade {
    /// Splits a birth year.
    pub fn from_year(year: u32) -> Self {
        Self {
            decade: year / 10 * 10,
            years: year % 10,
        }
    }

    /// Returns the console message for this decade.
    pub fn message(&self) -> String {
        format!(
            "You were born in the {}s and {} years old.",
            self.decade, self.years
        )
    }
}

/// Asks for a birth year and reports the decade it falls in.
pub fn run_decades_session<I, W>(input: &mut I, out: &mut W) -> EngineResult<BirthDecade>
where
    I: InputSource + ?Sized,
    W: Write,
{
    let year = prompt_count(
        input,
        out,
        "Enter your birth year: ",
        "birth_year",
        1,
        MAX_BIRTH_YEAR,
    )?;

    let decade = BirthDecade::from_year(year);
    write_lines(out, &[decade.message()])?;
    Ok(decade)
}
