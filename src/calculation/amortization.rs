//! Month-by-month loan amortization.
//!
//! Each month interest accrues on the running balance and then the payment
//! is subtracted. A balance that would go negative is clamped to zero and the
//! simulation stops in that month. Whatever part of the final payment was not
//! needed is recorded as `unapplied_payment` on the last statement; the
//! console report does not mention it.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AmortizationSchedule, LoanTerms, MonthlyStatement};

/// Simulates a loan over its term.
///
/// # Errors
///
/// Returns `InvalidLoan` when the terms fail [`LoanTerms::validate`], or
/// when a balance that outgrows its payments leaves `Decimal`'s range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::simulate_loan;
/// use payroll_engine::models::LoanTerms;
/// use rust_decimal::Decimal;
///
/// let schedule = simulate_loan(&LoanTerms {
///     principal: Decimal::from(1200),
///     annual_interest_rate: Decimal::from(12),
///     monthly_payment: Decimal::from(500),
///     months: 12,
/// })
/// .unwrap();
///
/// assert!(schedule.paid_off);
/// assert_eq!(schedule.statements.len(), 3);
/// assert_eq!(schedule.report_lines().last().unwrap(), "Loan fully paid off!");
/// ```
pub fn simulate_loan(terms: &LoanTerms) -> EngineResult<AmortizationSchedule> {
    terms.validate()?;

    let rate = terms.monthly_rate();
    let payment = terms.monthly_payment;
    let mut balance = terms.principal;
    let mut statements = Vec::new();
    let mut paid_off = false;
    let mut accrued = Decimal::ZERO;

    for month in 1..=terms.months {
        let opening_balance = balance;
        let interest = opening_balance
            .checked_mul(rate)
            .ok_or_else(|| balance_overflow(month))?;
        accrued = accrued
            .checked_add(interest)
            .ok_or_else(|| balance_overflow(month))?;
        let remaining = opening_balance
            .checked_add(interest)
            .and_then(|owed| owed.checked_sub(payment))
            .ok_or_else(|| balance_overflow(month))?;

        let (closing, unapplied_payment) = if remaining < Decimal::ZERO {
            (Decimal::ZERO, -remaining)
        } else {
            (remaining, Decimal::ZERO)
        };

        statements.push(MonthlyStatement {
            month,
            opening_balance,
            interest,
            payment_applied: payment - unapplied_payment,
            unapplied_payment,
            balance: closing,
        });
        balance = closing;

        if balance.is_zero() {
            debug!(month, unapplied = %unapplied_payment, "Loan paid off");
            paid_off = true;
            break;
        }
    }

    debug!(
        months_simulated = statements.len(),
        final_balance = %balance,
        paid_off,
        "Loan simulation finished"
    );

    Ok(AmortizationSchedule {
        terms: terms.clone(),
        statements,
        paid_off,
    })
}

fn balance_overflow(month: u32) -> EngineError {
    EngineError::InvalidLoan {
        field: "principal".to_string(),
        message: format!("balance grows too large to represent in month {}", month),
    }
}
