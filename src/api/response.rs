//! Response types for the Payroll Engine API.
//!
//! This module defines the success bodies returned by each endpoint, plus
//! the error response structures and the mapping from [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PaycheckBreakdown;
use crate::error::EngineError;
use crate::models::{AmortizationSchedule, EmployeeId};

/// One employee in a roster listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Sequence number within the company.
    pub id: EmployeeId,
    /// The calculated paycheck.
    pub paycheck: PaycheckBreakdown,
}

/// Body of `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// The company name.
    pub company: String,
    /// Employees in display order.
    pub employees: Vec<RosterEntry>,
    /// The console listing, one line per employee.
    pub lines: Vec<String>,
    /// Sum of every paycheck, rounded to cents.
    pub total_payroll: Decimal,
}

/// Body of `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
    /// One breakdown per employee, in request order.
    pub paychecks: Vec<PaycheckBreakdown>,
    /// The console listing, one line per employee.
    pub lines: Vec<String>,
    /// Sum of every paycheck, rounded to cents.
    pub total_payroll: Decimal,
    /// The total formatted for display.
    pub display_total: String,
}

/// Body of `POST /loan/amortize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResponse {
    /// The month-by-month schedule.
    pub schedule: AmortizationSchedule,
    /// The console report.
    pub report_lines: Vec<String>,
    /// Balance after the last simulated month, rounded to cents.
    pub final_balance: Decimal,
    /// Interest accrued over the simulation, rounded to cents.
    pub total_interest: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            },
            EngineError::InvalidLoan { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LOAN",
                    message,
                    "The loan terms contain invalid information",
                ),
            },
            EngineError::InvalidInput { .. } | EngineError::InputExhausted { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(message),
                }
            }
            EngineError::Io { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("IO_ERROR", "Internal I/O error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_loan_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidLoan {
            field: "months".to_string(),
            message: "must be at least 1".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_LOAN");
        assert!(api_error.error.message.contains("months"));
    }

    #[test]
    fn test_config_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "roster.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert!(api_error.error.details.unwrap().contains("roster.yaml"));
    }
}
