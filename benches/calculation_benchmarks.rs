//! Performance benchmarks for the Payroll Engine.
//!
//! This benchmark suite covers:
//! - Paycheck breakdown for each pay basis
//! - Payroll totals for companies of 10 to 1000 employees
//! - Loan amortization over 12 and 360 months
//! - A payroll request through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{calculate_paycheck, simulate_loan};
use payroll_engine::models::{Company, Employee, LoanTerms};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Builds a company cycling through the three pay bases.
fn create_company(size: usize) -> Company {
    let mut company = Company::new("Bench Corp");
    for i in 0..size {
        let first = format!("Employee{:04}", i);
        let employee = match i % 3 {
            0 => Employee::salaried(first, "Salaried", dec("60000")),
            1 => Employee::hourly(first, "Hourly", dec("25.50"), dec("38")),
            _ => Employee::commissioned(first, "Commissioned", dec("50000"), dec("0.1"), dec("20000")),
        };
        company.add_employee(employee.unwrap());
    }
    company
}

/// Benchmark: Paycheck breakdown per pay basis.
fn bench_paycheck(c: &mut Criterion) {
    let employees = [
        ("salaried", Employee::salaried("John", "Doe", dec("60000")).unwrap()),
        ("hourly", Employee::hourly("Jane", "Smith", dec("25"), dec("40")).unwrap()),
        (
            "commissioned",
            Employee::commissioned("Alice", "Johnson", dec("50000"), dec("0.1"), dec("20000"))
                .unwrap(),
        ),
    ];

    let mut group = c.benchmark_group("paycheck");
    for (kind, employee) in &employees {
        group.bench_with_input(BenchmarkId::from_parameter(kind), employee, |b, employee| {
            b.iter(|| black_box(calculate_paycheck(black_box(employee))))
        });
    }
    group.finish();
}

/// Benchmark: Payroll total and display lines by company size.
fn bench_company_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("company_payroll");
    for size in [10usize, 100, 1000] {
        let company = create_company(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &company, |b, company| {
            b.iter(|| {
                let total = company.total_payroll();
                let lines = company.display_lines();
                black_box((total, lines))
            })
        });
    }
    group.finish();
}

/// Benchmark: Month-by-month loan simulation.
fn bench_amortization(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization");
    for months in [12u32, 360] {
        let terms = LoanTerms {
            principal: dec("250000"),
            annual_interest_rate: dec("6.5"),
            monthly_payment: dec("1580.17"),
            months,
        };
        group.bench_with_input(BenchmarkId::from_parameter(months), &terms, |b, terms| {
            b.iter(|| black_box(simulate_loan(black_box(terms)).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark: POST /payroll through the router.
fn bench_payroll_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(Company::new("Bench Corp")));

    let employees: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "first_name": format!("Employee{:03}", i),
                "last_name": "Hourly",
                "kind": "hourly",
                "hourly_rate": "25.50",
                "weekly_hours": "38"
            })
        })
        .collect();
    let body = serde_json::json!({ "employees": employees }).to_string();

    let mut group = c.benchmark_group("api");
    group.throughput(Throughput::Elements(100));
    group.bench_function("payroll_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_paycheck,
    bench_company_payroll,
    bench_amortization,
    bench_payroll_request
);
criterion_main!(benches);
