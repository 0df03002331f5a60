//! Console input port and interactive sessions.
//!
//! Interactive flows never touch stdin directly. They read answers through
//! an [`InputSource`], so the same session code runs against a terminal
//! ([`ConsoleInput::stdio`]) or a scripted list of answers in tests
//! ([`ScriptedInput`]).

mod sessions;

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

pub use sessions::{
    AcronymChoice, BirthDecade, MAX_BIRTH_YEAR, run_acronym_session, run_decades_session,
    run_dice_session, run_loan_session, run_rps_session,
};

/// A source of answers to prompts.
pub trait InputSource {
    /// Shows `prompt` and returns the answer without its line ending.
    ///
    /// Returns `Ok(None)` once the source has no more answers.
    fn read_line(&mut self, prompt: &str) -> EngineResult<Option<String>>;
}

/// Reads answers from a buffered reader, echoing prompts to a writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input that prompts on `prompts` and reads from `reader`.
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on stdout and reads from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> EngineResult<Option<String>> {
        write!(self.prompts, "{}", prompt).map_err(|e| EngineError::io("writing prompt", e))?;
        self.prompts
            .flush()
            .map_err(|e| EngineError::io("writing prompt", e))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| EngineError::io("reading input", e))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// A fixed list of answers, for tests and scripted runs.
///
/// Every prompt shown is recorded and can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates an input that returns `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns the prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns how many answers have not been read.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> EngineResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Prompts until `parse` accepts an answer.
///
/// Each rejected answer is reported on `out` as an `InvalidInput` message and
/// the prompt is shown again. Fails with `InputExhausted` if the source runs
/// out first.
pub fn prompt_with<T, I, W, F>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
    field: &str,
    parse: F,
) -> EngineResult<T>
where
    I: InputSource + ?Sized,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let Some(answer) = input.read_line(prompt)? else {
            return Err(EngineError::InputExhausted {
                field: field.to_string(),
            });
        };

        match parse(answer.trim()) {
            Ok(value) => return Ok(value),
            Err(message) => {
                let error = EngineError::invalid_input(field, message);
                warn!(field, error = %error, "Rejected input");
                writeln!(out, "{}", error).map_err(|e| EngineError::io("writing output", e))?;
            }
        }
    }
}

/// Prompts for any value that implements `FromStr`.
pub fn prompt_parsed<T, I, W>(input: &mut I, out: &mut W, prompt: &str, field: &str) -> EngineResult<T>
where
    T: FromStr,
    T::Err: Display,
    I: InputSource + ?Sized,
    W: Write,
{
    prompt_with(input, out, prompt, field, |answer| {
        answer
            .parse::<T>()
            .map_err(|e| format!("'{}' could not be read: {}", answer, e))
    })
}

/// Prompts for a decimal amount between zero and `max`.
pub fn prompt_amount<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
    field: &str,
    max: Decimal,
) -> EngineResult<Decimal>
where
    I: InputSource + ?Sized,
    W: Write,
{
    prompt_with(input, out, prompt, field, |answer| {
        let value = Decimal::from_str(answer)
            .map_err(|_| format!("'{}' is not a number", answer))?;
        if value < Decimal::ZERO {
            return Err(format!("{} must not be negative", value));
        }
        if value > max {
            return Err(format!("{} must not exceed {}", value, max));
        }
        Ok(value)
    })
}

/// Prompts for a whole number from `min` to `max`.
pub fn prompt_count<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
    field: &str,
    min: u32,
    max: u32,
) -> EngineResult<u32>
where
    I: InputSource + ?Sized,
    W: Write,
{
    prompt_with(input, out, prompt, field, |answer| {
        let value: u32 = answer
            .parse()
            .map_err(|_| format!("'{}' is not a whole number", answer))?;
        if value < min {
            return Err(format!("must be at least {}, got {}", min, value));
        }
        if value > max {
            return Err(format!("must be at most {}, got {}", max, value));
        }
        Ok(value)
    })
}
