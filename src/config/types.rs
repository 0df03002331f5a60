//! Configuration types for roster files.
//!
//! These structures are deserialized from YAML roster files.

use serde::Deserialize;

use crate::models::{Company, Employee};

/// Metadata about the company a roster describes.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company name.
    pub name: String,
}

/// Roster file structure.
///
/// Employees are validated while they are deserialized, so a parsed roster
/// only ever holds valid pay terms.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Company metadata.
    pub company: CompanyMetadata,
    /// Employees in display order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl RosterConfig {
    /// Builds a company from the roster, allocating ids in file order.
    pub fn to_company(&self) -> Company {
        let mut company = Company::new(self.company.name.clone());
        company.extend(self.employees.iter().cloned());
        company
    }
}
