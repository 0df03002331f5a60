//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the closed [`PayBasis`] sum
//! type describing how an employee is paid, and the [`Paycheck`] trait that
//! every pay basis implements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of pay periods in a year for salaried employees.
pub const PAY_PERIODS_PER_YEAR: u32 = 12;

/// Largest salary, hourly rate or sales amount an employee may carry.
pub const MAX_PAY_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

/// Hours in a week.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Anything that can compute the amount of a single paycheck.
///
/// The amount is a pure function of the implementor's fields and is returned
/// unrounded; rounding to cents happens when the amount is presented.
///
/// Amounts are only guaranteed not to overflow for pay terms that pass
/// [`PayBasis::validate`], which every [`Employee`] does.
pub trait Paycheck {
    /// Returns the paycheck amount for one pay period.
    fn paycheck_amount(&self) -> Decimal;
}

/// Pay terms for a salaried employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedPay {
    /// The yearly salary.
    pub annual_salary: Decimal,
}

impl Paycheck for SalariedPay {
    fn paycheck_amount(&self) -> Decimal {
        self.annual_salary / Decimal::from(PAY_PERIODS_PER_YEAR)
    }
}

/// Pay terms for an hourly employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPay {
    /// The rate paid per hour worked.
    pub hourly_rate: Decimal,
    /// Hours worked per pay period.
    pub weekly_hours: Decimal,
}

impl Paycheck for HourlyPay {
    fn paycheck_amount(&self) -> Decimal {
        self.hourly_rate * self.weekly_hours
    }
}

/// Pay terms for a commissioned employee.
///
/// The base pay is a full [`SalariedPay`] value; the commission is added on
/// top of whatever that base computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionedPay {
    /// The salaried base pay.
    #[serde(flatten)]
    pub base: SalariedPay,
    /// Commission as a fraction of sales (e.g., 0.10 for 10%).
    pub commission_rate: Decimal,
    /// Sales made in the pay period.
    pub sales_amount: Decimal,
}

impl CommissionedPay {
    /// Returns the commission earned on the recorded sales.
    pub fn commission(&self) -> Decimal {
        self.commission_rate * self.sales_amount
    }
}

impl Paycheck for CommissionedPay {
    fn paycheck_amount(&self) -> Decimal {
        self.base.paycheck_amount() + self.commission()
    }
}

/// How an employee is paid.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{HourlyPay, PayBasis, Paycheck};
/// use rust_decimal::Decimal;
///
/// let pay = PayBasis::Hourly(HourlyPay {
///     hourly_rate: Decimal::from(25),
///     weekly_hours: Decimal::from(40),
/// });
/// assert_eq!(pay.paycheck_amount(), Decimal::from(1000));
/// assert_eq!(pay.kind(), "hourly");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayBasis {
    /// Paid a twelfth of the annual salary each period.
    Salaried(SalariedPay),
    /// Paid for hours worked.
    Hourly(HourlyPay),
    /// Paid a salaried base plus commission on sales.
    Commissioned(CommissionedPay),
}

impl PayBasis {
    /// Returns the serialized name of this pay basis.
    pub fn kind(&self) -> &'static str {
        match self {
            PayBasis::Salaried(_) => "salaried",
            PayBasis::Hourly(_) => "hourly",
            PayBasis::Commissioned(_) => "commissioned",
        }
    }

    /// Checks that every amount is within its allowed range.
    ///
    /// Amounts run from zero to [`MAX_PAY_AMOUNT`] and weekly hours from zero
    /// to [`MAX_WEEKLY_HOURS`], which keeps every paycheck, and any realistic
    /// payroll total, far inside `Decimal`'s range.
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            PayBasis::Salaried(pay) => {
                within("annual_salary", pay.annual_salary, MAX_PAY_AMOUNT)
            }
            PayBasis::Hourly(pay) => {
                within("hourly_rate", pay.hourly_rate, MAX_PAY_AMOUNT)?;
                within("weekly_hours", pay.weekly_hours, MAX_WEEKLY_HOURS)
            }
            PayBasis::Commissioned(pay) => {
                within("annual_salary", pay.base.annual_salary, MAX_PAY_AMOUNT)?;
                within("sales_amount", pay.sales_amount, MAX_PAY_AMOUNT)?;
                if pay.commission_rate < Decimal::ZERO || pay.commission_rate > Decimal::ONE {
                    return Err(invalid(
                        "commission_rate",
                        format!("must be between 0 and 1, got {}", pay.commission_rate),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl Paycheck for PayBasis {
    fn paycheck_amount(&self) -> Decimal {
        match self {
            PayBasis::Salaried(pay) => pay.paycheck_amount(),
            PayBasis::Hourly(pay) => pay.paycheck_amount(),
            PayBasis::Commissioned(pay) => pay.paycheck_amount(),
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.into(),
    }
}

fn within(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, format!("must not be negative, got {}", value)));
    }
    if value > max {
        return Err(invalid(field, format!("must not exceed {}, got {}", max, value)));
    }
    Ok(())
}

/// Wire and configuration shape of an [`Employee`].
///
/// Deserializing an [`Employee`] goes through this record so that the same
/// validation applies to roster files and API bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// How the employee is paid.
    #[serde(flatten)]
    pub pay: PayBasis,
}

/// Represents an employee on the payroll.
///
/// Names are fixed at construction; only the pay terms can change.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{Employee, Paycheck};
/// use rust_decimal::Decimal;
///
/// let john = Employee::salaried("John", "Doe", Decimal::from(60000)).unwrap();
/// assert_eq!(john.paycheck_amount(), Decimal::from(5000));
/// assert_eq!(john.full_name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord", into = "EmployeeRecord")]
pub struct Employee {
    first_name: String,
    last_name: String,
    pay: PayBasis,
}

impl Employee {
    /// Creates an employee after validating names and pay terms.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        pay: PayBasis,
    ) -> EngineResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(invalid("first_name", "must not be blank"));
        }
        if last_name.trim().is_empty() {
            return Err(invalid("last_name", "must not be blank"));
        }
        pay.validate()?;

        Ok(Self {
            first_name,
            last_name,
            pay,
        })
    }

    /// Creates a salaried employee.
    pub fn salaried(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        annual_salary: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            first_name,
            last_name,
            PayBasis::Salaried(SalariedPay { annual_salary }),
        )
    }

    /// Creates an hourly employee.
    pub fn hourly(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hourly_rate: Decimal,
        weekly_hours: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            first_name,
            last_name,
            PayBasis::Hourly(HourlyPay {
                hourly_rate,
                weekly_hours,
            }),
        )
    }

    /// Creates a commissioned employee.
    pub fn commissioned(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        annual_salary: Decimal,
        commission_rate: Decimal,
        sales_amount: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            first_name,
            last_name,
            PayBasis::Commissioned(CommissionedPay {
                base: SalariedPay { annual_salary },
                commission_rate,
                sales_amount,
            }),
        )
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the pay terms.
    pub fn pay(&self) -> &PayBasis {
        &self.pay
    }

    /// Replaces the pay terms, keeping the old ones if the new ones are invalid.
    pub fn set_pay(&mut self, pay: PayBasis) -> EngineResult<()> {
        pay.validate()?;
        self.pay = pay;
        Ok(())
    }
}

impl Paycheck for Employee {
    fn paycheck_amount(&self) -> Decimal {
        self.pay.paycheck_amount()
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        Employee::new(record.first_name, record.last_name, record.pay)
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        EmployeeRecord {
            first_name: employee.first_name,
            last_name: employee.last_name,
            pay: employee.pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salaried_paycheck_is_twelfth_of_salary() {
        let employee = Employee::salaried("John", "Doe", dec("60000")).unwrap();
        assert_eq!(employee.paycheck_amount(), dec("5000"));
    }

    #[test]
    fn test_hourly_paycheck_is_rate_times_hours() {
        let employee = Employee::hourly("Jane", "Smith", dec("25"), dec("40")).unwrap();
        assert_eq!(employee.paycheck_amount(), dec("1000"));
    }

    #[test]
    fn test_commissioned_paycheck_adds_commission_to_salaried_base() {
        let employee =
            Employee::commissioned("Alice", "Johnson", dec("50000"), dec("0.10"), dec("20000"))
                .unwrap();

        let expected = dec("50000") / dec("12") + dec("2000");
        assert_eq!(employee.paycheck_amount(), expected);
        assert_eq!(employee.paycheck_amount().round_dp(2), dec("6166.67"));
    }

    #[test]
    fn test_commissioned_base_matches_salaried_formula() {
        let pay = CommissionedPay {
            base: SalariedPay {
                annual_salary: dec("48000"),
            },
            commission_rate: dec("0"),
            sales_amount: dec("99999"),
        };
        assert_eq!(pay.paycheck_amount(), pay.base.paycheck_amount());
        assert_eq!(pay.commission(), dec("0"));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let result = Employee::salaried("John", "Doe", dec("-1"));
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "annual_salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let result = Employee::hourly("Jane", "Smith", dec("25"), dec("-40"));
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "weekly_hours"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_commission_rate_above_one_is_rejected() {
        let result =
            Employee::commissioned("Alice", "Johnson", dec("50000"), dec("1.5"), dec("20000"));
        match result {
            Err(EngineError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "commission_rate");
                assert!(message.contains("1.5"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_beyond_decimal_range_is_rejected() {
        let result = Employee::hourly("Jane", "Smith", Decimal::MAX, dec("2"));
        match result {
            Err(EngineError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "hourly_rate");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_hours_above_a_week_are_rejected() {
        let result = Employee::hourly("Jane", "Smith", dec("25"), dec("168.5"));
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "weekly_hours"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_allowed_terms_do_not_overflow() {
        let hourly = Employee::hourly("Jane", "Smith", MAX_PAY_AMOUNT, MAX_WEEKLY_HOURS).unwrap();
        assert_eq!(hourly.paycheck_amount(), MAX_PAY_AMOUNT * MAX_WEEKLY_HOURS);

        let commissioned = Employee::commissioned(
            "Alice",
            "Johnson",
            MAX_PAY_AMOUNT,
            Decimal::ONE,
            MAX_PAY_AMOUNT,
        )
        .unwrap();
        assert!(commissioned.paycheck_amount() > MAX_PAY_AMOUNT);
    }

    #[test]
    fn test_deserialize_rejects_rate_beyond_decimal_range() {
        let json = r#"{
            "first_name": "Jane",
            "last_name": "Smith",
            "kind": "hourly",
            "hourly_rate": "79228162514264337593543950335",
            "weekly_hours": "2"
        }"#;

        let error = serde_json::from_str::<Employee>(json).unwrap_err();
        assert!(error.to_string().contains("hourly_rate"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Employee::salaried("  ", "Doe", dec("60000"));
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "first_name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_amounts_are_allowed() {
        let employee = Employee::hourly("Jane", "Smith", dec("0"), dec("0")).unwrap();
        assert_eq!(employee.paycheck_amount(), dec("0"));
    }

    #[test]
    fn test_set_pay_keeps_old_terms_on_error() {
        let mut employee = Employee::salaried("John", "Doe", dec("60000")).unwrap();
        let result = employee.set_pay(PayBasis::Salaried(SalariedPay {
            annual_salary: dec("-5"),
        }));

        assert!(result.is_err());
        assert_eq!(employee.paycheck_amount(), dec("5000"));
    }

    #[test]
    fn test_deserialize_salaried_employee() {
        let json = r#"{
            "first_name": "John",
            "last_name": "Doe",
            "kind": "salaried",
            "annual_salary": "60000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.first_name(), "John");
        assert_eq!(employee.pay().kind(), "salaried");
        assert_eq!(employee.paycheck_amount(), dec("5000"));
    }

    #[test]
    fn test_deserialize_commissioned_employee() {
        let json = r#"{
            "first_name": "Alice",
            "last_name": "Johnson",
            "kind": "commissioned",
            "annual_salary": "50000",
            "commission_rate": "0.10",
            "sales_amount": "20000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        match employee.pay() {
            PayBasis::Commissioned(pay) => {
                assert_eq!(pay.base.annual_salary, dec("50000"));
                assert_eq!(pay.commission_rate, dec("0.10"));
            }
            other => panic!("Expected commissioned pay, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_rejects_negative_rate() {
        let json = r#"{
            "first_name": "Jane",
            "last_name": "Smith",
            "kind": "hourly",
            "hourly_rate": "-25",
            "weekly_hours": "40"
        }"#;

        let result: Result<Employee, _> = serde_json::from_str(json);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("hourly_rate"), "unexpected error: {}", error);
    }

    #[test]
    fn test_serialize_employee() {
        let employee = Employee::hourly("Jane", "Smith", dec("25"), dec("40")).unwrap();
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["kind"], "hourly");
        assert_eq!(value["first_name"], "Jane");
        assert_eq!(value["hourly_rate"], "25");
    }
}
