//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::Company;

/// Shared application state.
///
/// Holds the company loaded at startup. It is never mutated after the server
/// starts.
#[derive(Clone)]
pub struct AppState {
    company: Arc<Company>,
}

impl AppState {
    /// Creates a new application state around a company.
    pub fn new(company: Company) -> Self {
        Self {
            company: Arc::new(company),
        }
    }

    /// Creates a new application state from a loaded roster.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.company())
    }

    /// Returns the loaded company.
    pub fn company(&self) -> &Company {
        &self.company
    }
}
