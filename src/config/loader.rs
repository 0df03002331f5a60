//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! rosters from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Company;

use super::types::{CompanyMetadata, RosterConfig};

/// Loads and provides access to a company roster.
///
/// # File Format
///
/// ```text
/// company:
///   name: Acme Corp
/// employees:
///   - first_name: John
///     last_name: Doe
///     kind: salaried
///     annual_salary: "60000"
///   - first_name: Jane
///     last_name: Smith
///     kind: hourly
///     hourly_rate: "25"
///     weekly_hours: "40"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
/// println!("Loaded roster for {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: RosterConfig,
}

impl ConfigLoader {
    /// Loads a roster from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid employees (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let roster = Self::load_yaml::<RosterConfig>(path)?;

        debug!(
            path = %path.display(),
            company = %roster.company.name,
            employees = roster.employees.len(),
            "Loaded roster"
        );

        Ok(Self { roster })
    }

    /// Parses a roster from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let roster =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying roster configuration.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Returns the company metadata.
    pub fn metadata(&self) -> &CompanyMetadata {
        &self.roster.company
    }

    /// Builds the company described by the roster.
    pub fn company(&self) -> Company {
        self.roster.to_company()
    }
}
