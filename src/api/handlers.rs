//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PaycheckBreakdown, calculate_paycheck, format_currency, round_cents, simulate_loan,
};
use crate::error::EngineError;
use crate::models::{Company, Employee, LoanTerms};

use super::request::PayrollRequest;
use super::response::{
    ApiError, ApiErrorResponse, LoanResponse, PayrollResponse, RosterEntry, RosterResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees", get(employees_handler))
        .route("/paycheck", post(paycheck_handler))
        .route("/payroll", post(payroll_handler))
        .route("/loan/amortize", post(amortize_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a body extraction failure to a 400 response.
///
/// Serde errors raised by domain validation (a negative salary, say) arrive
/// as data errors and are reported as validation failures, like missing
/// fields.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field")
                || body_text.contains(EngineError::INVALID_EMPLOYEE_PREFIX)
            {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(StatusCode::OK, json!({ "status": "ok" }))
}

/// Handler for GET /employees.
///
/// Lists the roster loaded at startup with each employee's paycheck.
async fn employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let company = state.company();
    let employees = company
        .entries()
        .iter()
        .map(|(id, employee)| RosterEntry {
            id: *id,
            paycheck: calculate_paycheck(employee),
        })
        .collect();

    json_response(
        StatusCode::OK,
        RosterResponse {
            company: company.name().to_string(),
            employees,
            lines: company.display_lines(),
            total_payroll: round_cents(company.total_payroll()),
        },
    )
}

/// Handler for POST /paycheck.
///
/// Accepts a single employee and returns the paycheck breakdown.
async fn paycheck_handler(payload: Result<Json<Employee>, JsonRejection>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck request");

    let employee = match payload {
        Ok(Json(employee)) => employee,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let breakdown = calculate_paycheck(&employee);
    info!(
        correlation_id = %correlation_id,
        employee = %breakdown.employee_name,
        kind = %breakdown.kind,
        amount = %breakdown.amount_rounded,
        "Paycheck calculated"
    );
    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /payroll.
///
/// Builds an ad hoc company from the request and returns every paycheck
/// plus the total, in request order.
async fn payroll_handler(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let company: Company = request.into();
    let paychecks: Vec<PaycheckBreakdown> = company.employees().map(calculate_paycheck).collect();
    let total = company.total_payroll();

    info!(
        correlation_id = %correlation_id,
        company = %company.name(),
        employees = company.len(),
        total_payroll = %round_cents(total),
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );

    json_response(
        StatusCode::OK,
        PayrollResponse {
            calculation_id: correlation_id,
            calculated_at: Utc::now(),
            paychecks,
            lines: company.display_lines(),
            total_payroll: round_cents(total),
            display_total: format_currency(total),
        },
    )
}

/// Handler for POST /loan/amortize.
///
/// Simulates the loan and returns the schedule with its console report.
async fn amortize_handler(payload: Result<Json<LoanTerms>, JsonRejection>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing amortization request");

    let terms = match payload {
        Ok(Json(terms)) => terms,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match simulate_loan(&terms) {
        Ok(schedule) => {
            info!(
                correlation_id = %correlation_id,
                months_simulated = schedule.statements.len(),
                paid_off = schedule.paid_off,
                "Amortization completed"
            );
            let report_lines = schedule.report_lines();
            let final_balance = round_cents(schedule.final_balance());
            let total_interest = round_cents(schedule.total_interest());
            json_response(
                StatusCode::OK,
                LoanResponse {
                    schedule,
                    report_lines,
                    final_balance,
                    total_interest,
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let mut company = Company::new("Acme Corp");
        company.add_employee(Employee::salaried("John", "Doe", dec("60000")).unwrap());
        company.add_employee(Employee::hourly("Jane", "Smith", dec("25"), dec("40")).unwrap());
        AppState::new(company)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_employees_lists_loaded_roster() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/employees")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"], "Acme Corp");
        assert_eq!(body["employees"][0]["id"], 1);
        assert_eq!(body["employees"][1]["id"], 2);
        assert_eq!(body["lines"][0], "John Doe: $5,000.00");
        let total = dec(body["total_payroll"].as_str().unwrap());
        assert_eq!(total, dec("6000"));
    }

    #[tokio::test]
    async fn test_paycheck_for_commissioned_employee() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/paycheck",
            r#"{"first_name": "Alice", "last_name": "Johnson", "kind": "commissioned",
                "annual_salary": "50000", "commission_rate": "0.1", "sales_amount": "20000"}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount_rounded"], "6166.67");
        assert_eq!(body["display_amount"], "$6,166.67");
    }

    #[tokio::test]
    async fn test_paycheck_rejects_negative_salary() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/paycheck",
            r#"{"first_name": "John", "last_name": "Doe", "kind": "salaried", "annual_salary": "-1"}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_paycheck_rejects_rate_beyond_decimal_range() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/paycheck",
            r#"{"first_name": "Jane", "last_name": "Smith", "kind": "hourly",
                "hourly_rate": "79228162514264337593543950335", "weekly_hours": "2"}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("hourly_rate"));
    }

    #[tokio::test]
    async fn test_payroll_rejects_negative_salary() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/payroll",
            r#"{"employees": [
                {"first_name": "John", "last_name": "Doe", "kind": "salaried", "annual_salary": "-60000"}
            ]}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains(EngineError::INVALID_EMPLOYEE_PREFIX)
        );
    }

    #[tokio::test]
    async fn test_payroll_malformed_json() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, post_json("/payroll", "{ not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_amortize_rejects_term_beyond_limit() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/loan/amortize",
            r#"{"principal": "1", "annual_interest_rate": "0", "monthly_payment": "0", "months": 4294967295}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_LOAN");
        assert!(body["message"].as_str().unwrap().contains("months"));
    }

    #[tokio::test]
    async fn test_amortize_rejects_principal_beyond_decimal_range() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/loan/amortize",
            r#"{"principal": "79228162514264337593543950335", "annual_interest_rate": "12", "monthly_payment": "0", "months": 2}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_LOAN");
    }

    #[tokio::test]
    async fn test_amortize_invalid_months() {
        let router = create_router(create_test_state());
        let request = post_json(
            "/loan/amortize",
            r#"{"principal": "1200", "annual_interest_rate": "12", "monthly_payment": "103", "months": 0}"#,
        );

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_LOAN");
    }
}
