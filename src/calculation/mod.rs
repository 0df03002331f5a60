//! Calculation logic for the Payroll Engine.
//!
//! This module contains the paycheck breakdown calculation, month-by-month
//! loan amortization, and the currency rounding and formatting rules shared
//! by every report.

mod amortization;
mod money;
mod paycheck;

pub use amortization::simulate_loan;
pub use money::{format_cents, format_currency, round_cents};
pub use paycheck::{PaycheckBreakdown, calculate_paycheck};
