//! Loan terms and amortization schedule models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_cents;
use crate::error::{EngineError, EngineResult};

/// Printed after the month in which the balance reaches zero.
pub const PAID_OFF_MESSAGE: &str = "Loan fully paid off!";

/// Largest principal or monthly payment accepted.
pub const MAX_LOAN_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

/// Largest annual interest rate accepted, as a percentage.
pub const MAX_ANNUAL_INTEREST_RATE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Longest term that can be simulated: one hundred years of monthly payments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// The terms of a loan to simulate.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LoanTerms;
/// use rust_decimal::Decimal;
///
/// let terms = LoanTerms {
///     principal: Decimal::from(1200),
///     annual_interest_rate: Decimal::from(12),
///     monthly_payment: Decimal::from(103),
///     months: 12,
/// };
/// assert_eq!(terms.monthly_rate(), Decimal::new(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// The amount owed at the start of the simulation.
    pub principal: Decimal,
    /// Yearly interest as a percentage (5 means 5%).
    pub annual_interest_rate: Decimal,
    /// The amount paid at the end of every month.
    pub monthly_payment: Decimal,
    /// The number of months to simulate.
    pub months: u32,
}

impl LoanTerms {
    /// Returns the interest rate applied each month as a fraction.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_interest_rate / Decimal::ONE_HUNDRED / Decimal::from(12)
    }

    /// Checks that the terms describe a loan that can be simulated.
    ///
    /// Amounts run from zero to [`MAX_LOAN_AMOUNT`], the rate from zero to
    /// [`MAX_ANNUAL_INTEREST_RATE`] and the term from 1 to
    /// [`MAX_TERM_MONTHS`] months.
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("principal", self.principal, MAX_LOAN_AMOUNT),
            (
                "annual_interest_rate",
                self.annual_interest_rate,
                MAX_ANNUAL_INTEREST_RATE,
            ),
            ("monthly_payment", self.monthly_payment, MAX_LOAN_AMOUNT),
        ];
        for (field, value, max) in amounts {
            if value < Decimal::ZERO {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
            if value > max {
                return Err(invalid(field, format!("must not exceed {}, got {}", max, value)));
            }
        }
        if self.months == 0 || self.months > MAX_TERM_MONTHS {
            return Err(invalid(
                "months",
                format!("must be between 1 and {}, got {}", MAX_TERM_MONTHS, self.months),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidLoan {
        field: field.to_string(),
        message,
    }
}

/// One simulated month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatement {
    /// 1-based month number.
    pub month: u32,
    /// Balance before interest.
    pub opening_balance: Decimal,
    /// Interest accrued this month.
    pub interest: Decimal,
    /// The part of the payment that reduced the balance.
    pub payment_applied: Decimal,
    /// The part of the payment left over once the balance hit zero.
    pub unapplied_payment: Decimal,
    /// Balance after interest and payment, never negative.
    pub balance: Decimal,
}

/// The month-by-month result of simulating a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// The simulated terms.
    pub terms: LoanTerms,
    /// One entry per simulated month, in order.
    pub statements: Vec<MonthlyStatement>,
    /// Whether the balance reached zero within the term.
    pub paid_off: bool,
}

impl AmortizationSchedule {
    /// Returns the balance after the last simulated month.
    pub fn final_balance(&self) -> Decimal {
        self.statements
            .last()
            .map(|s| s.balance)
            .unwrap_or(self.terms.principal)
    }

    /// Returns the interest accrued over all simulated months.
    pub fn total_interest(&self) -> Decimal {
        self.statements.iter().map(|s| s.interest).sum()
    }

    /// Returns the console report, one line per month.
    ///
    /// The paid-off line follows the month in which the balance reached zero.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .statements
            .iter()
            .map(|s| {
                format!(
                    "After month {}, remaining balance: {}",
                    s.month,
                    format_cents(s.balance)
                )
            })
            .collect();
        if self.paid_off {
            lines.push(PAID_OFF_MESSAGE.to_string());
        }
        lines
    }
}
