//! Configuration loading for the Payroll Engine.
//!
//! This module loads company rosters from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let company = ConfigLoader::load("./config/roster.yaml").unwrap().company();
//! println!("{} employees", company.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyMetadata, RosterConfig};
