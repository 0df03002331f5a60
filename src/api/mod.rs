//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for paychecks, company
//! payroll and loan amortization.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{
    ApiError, ApiErrorResponse, LoanResponse, PayrollResponse, RosterEntry, RosterResponse,
};
pub use state::AppState;
