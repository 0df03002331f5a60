//! Payroll Engine
//!
//! This crate computes per-period paychecks for salaried, hourly and
//! commissioned employees, keeps an ordered company roster, simulates loan
//! amortization month by month, and bundles a few small console tools: an
//! acronym glossary file, two games and a zip archiver.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod files;
pub mod games;
pub mod glossary;
pub mod models;
