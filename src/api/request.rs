//! Request types for the Payroll Engine API.
//!
//! Employees and loan terms deserialize straight into their domain types,
//! so request bodies get the same validation as roster files.

use serde::{Deserialize, Serialize};

use crate::models::{Company, Employee};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Name used for the ad hoc company.
    #[serde(default = "default_company_name")]
    pub company: String,
    /// Employees in display order.
    pub employees: Vec<Employee>,
}

fn default_company_name() -> String {
    "Unnamed Company".to_string()
}

impl From<PayrollRequest> for Company {
    fn from(req: PayrollRequest) -> Self {
        let mut company = Company::new(req.company);
        company.extend(req.employees);
        company
    }
}
