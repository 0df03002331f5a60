//! Core data models for the Payroll Engine.
//!
//! This module contains the domain models used throughout the engine:
//! employees and their pay terms, the company registry, and loan terms with
//! their amortization schedules.

mod company;
mod employee;
mod loan;

pub use company::{Company, EmployeeId, SEPARATOR_WIDTH, separator_line};
pub use employee::{
    CommissionedPay, Employee, EmployeeRecord, HourlyPay, MAX_PAY_AMOUNT, MAX_WEEKLY_HOURS,
    PAY_PERIODS_PER_YEAR, PayBasis, Paycheck, SalariedPay,
};
pub use loan::{
    AmortizationSchedule, LoanTerms, MAX_ANNUAL_INTEREST_RATE, MAX_LOAN_AMOUNT, MAX_TERM_MONTHS,
    MonthlyStatement, PAID_OFF_MESSAGE,
};
