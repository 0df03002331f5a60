//! Company registry.
//!
//! A [`Company`] owns its employees in insertion order and hands out
//! sequence-numbered [`EmployeeId`]s as they are added.

use std::fmt;
use std::io::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_currency;
use crate::error::{EngineError, EngineResult};

use super::employee::{Employee, Paycheck};

/// Width of the dashed line printed after the employee listing.
pub const SEPARATOR_WIDTH: usize = 49;

/// Returns the dashed separator line.
pub fn separator_line() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Sequence number assigned to an employee when it joins a company.
///
/// Numbers start at 1 and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered collection of employees.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Company, Employee};
/// use rust_decimal::Decimal;
///
/// let mut company = Company::new("Acme Corp");
/// company.add_employee(Employee::salaried("John", "Doe", Decimal::from(60000)).unwrap());
/// company.add_employee(Employee::hourly("Jane", "Smith", Decimal::from(25), Decimal::from(40)).unwrap());
///
/// let lines = company.display_lines();
/// assert_eq!(lines[0], "John Doe: $5,000.00");
/// assert_eq!(lines[1], "Jane Smith: $1,000.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    name: String,
    employees: Vec<(EmployeeId, Employee)>,
    next_sequence: u32,
}

impl Company {
    /// Creates an empty company.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Returns the company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an employee and returns the id allocated to it.
    pub fn add_employee(&mut self, employee: Employee) -> EmployeeId {
        let id = EmployeeId(self.next_sequence);
        self.next_sequence += 1;
        self.employees.push((id, employee));
        id
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().map(|(_, e)| e)
    }

    /// Returns the employees with their ids, in insertion order.
    pub fn entries(&self) -> &[(EmployeeId, Employee)] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, e)| e)
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the company has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sums every employee's unrounded paycheck amount.
    ///
    /// Validated pay terms cap a single paycheck below 2 x 10^14, so the sum
    /// stays inside `Decimal`'s range for any roster that fits in memory.
    pub fn total_payroll(&self) -> Decimal {
        self.employees().map(Paycheck::paycheck_amount).sum()
    }

    /// Returns one `"{first} {last}: ${amount}"` line per employee.
    pub fn display_lines(&self) -> Vec<String> {
        self.employees()
            .map(|e| {
                format!(
                    "{} {}: {}",
                    e.first_name(),
                    e.last_name(),
                    format_currency(e.paycheck_amount())
                )
            })
            .collect()
    }

    /// Writes the employee listing followed by the separator line.
    pub fn display_employees<W: Write>(&self, out: &mut W) -> EngineResult<()> {
        for line in self.display_lines() {
            writeln!(out, "{}", line)
                .map_err(|e| EngineError::io("writing employee listing", e))?;
        }
        writeln!(out, "{}", separator_line())
            .map_err(|e| EngineError::io("writing employee listing", e))?;
        Ok(())
    }
}

impl Default for Company {
    fn default() -> Self {
        Self::new("")
    }
}

impl Extend<Employee> for Company {
    fn extend<T: IntoIterator<Item = Employee>>(&mut self, iter: T) {
        for employee in iter {
            self.add_employee(employee);
        }
    }
}
