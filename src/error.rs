//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating pay, simulating
//! loans or talking to the console.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("{} '{field}': {message}", EngineError::INVALID_EMPLOYEE_PREFIX)]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Loan terms were invalid.
    #[error("Invalid loan field '{field}': {message}")]
    InvalidLoan {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A value entered by the user could not be accepted.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The name of the value being read.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The input source ended before a required value was read.
    #[error("Input ended while waiting for '{field}'")]
    InputExhausted {
        /// The name of the value being read.
        field: String,
    },

    /// A file system or console operation failed.
    #[error("I/O error while {context}: {source}")]
    Io {
        /// What the engine was doing when the error occurred.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Leading text of every `InvalidEmployee` message.
    ///
    /// Serde reports validation failures during deserialization only as
    /// text, so the API recognises them by this prefix.
    pub const INVALID_EMPLOYEE_PREFIX: &'static str = "Invalid employee field";

    /// Wraps an I/O error with a short description of the failed operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        EngineError::Io {
            context: context.into(),
            source,
        }
    }

    /// Builds an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "annual_salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'annual_salary': must not be negative"
        );
        assert!(
            error
                .to_string()
                .starts_with(EngineError::INVALID_EMPLOYEE_PREFIX)
        );
    }

    #[test]
    fn test_invalid_loan_displays_field_and_message() {
        let error = EngineError::InvalidLoan {
            field: "months".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid loan field 'months': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_input_helper() {
        let error = EngineError::invalid_input("payment", "'abc' is not a number");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'payment': 'abc' is not a number"
        );
    }

    #[test]
    fn test_input_exhausted_displays_field() {
        let error = EngineError::InputExhausted {
            field: "months".to_string(),
        };
        assert_eq!(error.to_string(), "Input ended while waiting for 'months'");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = EngineError::io("reading acronyms.txt", inner);
        assert_eq!(error.to_string(), "I/O error while reading acronyms.txt: gone");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
