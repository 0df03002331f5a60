//! Paycheck breakdown calculation.
//!
//! [`calculate_paycheck`] explains how an employee's paycheck amount was
//! reached: which pay basis applied, the base pay, any commission, and a
//! short piece of reasoning that shows the arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PAY_PERIODS_PER_YEAR, PayBasis, Paycheck};

use super::money::{format_currency, round_cents};

/// The result of calculating one employee's paycheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    /// "first last".
    pub employee_name: String,
    /// The pay basis name ("salaried", "hourly" or "commissioned").
    pub kind: String,
    /// Pay before commission.
    pub base_pay: Decimal,
    /// Commission earned, zero for non-commissioned employees.
    pub commission: Decimal,
    /// The unrounded paycheck amount.
    pub amount: Decimal,
    /// The amount rounded to cents.
    pub amount_rounded: Decimal,
    /// The display form of the amount, e.g. `$6,166.67`.
    pub display_amount: String,
    /// The arithmetic behind the amount.
    pub reasoning: String,
}

/// Calculates a paycheck and records how it was derived.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paycheck;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let jane = Employee::hourly("Jane", "Smith", Decimal::from(25), Decimal::from(40)).unwrap();
/// let breakdown = calculate_paycheck(&jane);
/// assert_eq!(breakdown.display_amount, "$1,000.00");
/// assert_eq!(breakdown.reasoning, "$25 x 40 hours = $1000");
/// ```
pub fn calculate_paycheck(employee: &Employee) -> PaycheckBreakdown {
    let (base_pay, commission, reasoning) = match employee.pay() {
        PayBasis::Salaried(pay) => {
            let base = pay.paycheck_amount();
            let reasoning = format!(
                "${} / {} = ${}",
                pay.annual_salary.normalize(),
                PAY_PERIODS_PER_YEAR,
                base.normalize()
            );
            (base, Decimal::ZERO, reasoning)
        }
        PayBasis::Hourly(pay) => {
            let base = pay.paycheck_amount();
            let reasoning = format!(
                "${} x {} hours = ${}",
                pay.hourly_rate.normalize(),
                pay.weekly_hours.normalize(),
                base.normalize()
            );
            (base, Decimal::ZERO, reasoning)
        }
        PayBasis::Commissioned(pay) => {
            let base = pay.base.paycheck_amount();
            let commission = pay.commission();
            let reasoning = format!(
                "${} / {} + {} x ${} = ${}",
                pay.base.annual_salary.normalize(),
                PAY_PERIODS_PER_YEAR,
                pay.commission_rate.normalize(),
                pay.sales_amount.normalize(),
                round_cents(base + commission).normalize()
            );
            (base, commission, reasoning)
        }
    };

    let amount = base_pay + commission;

    PaycheckBreakdown {
        employee_name: employee.full_name(),
        kind: employee.pay().kind().to_string(),
        base_pay,
        commission,
        amount,
        amount_rounded: round_cents(amount),
        display_amount: format_currency(amount),
        reasoning,
    }
}
