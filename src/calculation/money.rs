//! Currency rounding and formatting.
//!
//! Amounts are carried at full decimal precision through every calculation
//! and rounded only here, when they are presented. Rounding is half-even
//! (banker's rounding) to cents.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents using round-half-even.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_cents(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.12").unwrap());
/// assert_eq!(round_cents(Decimal::from_str("0.135").unwrap()), Decimal::from_str("0.14").unwrap());
/// ```
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount as dollars with thousands separators, e.g. `$6,166.67`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234567.891").unwrap()), "$1,234,567.89");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    render(amount, true)
}

/// Formats an amount as dollars without separators, e.g. `$6166.67`.
pub fn format_cents(amount: Decimal) -> String {
    render(amount, false)
}

fn render(amount: Decimal, grouped: bool) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());

    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let whole = if grouped {
        group_thousands(whole)
    } else {
        whole.to_string()
    };

    format!("{}${}.{}", sign, whole, cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
