//! household-budget - Calculation engine for a household budgeting application
//!
//! This library provides the budget calculation core for a household
//! budgeting application: it aggregates income and expenses recorded at
//! differing recurrence frequencies, and splits shared household costs
//! across the people in the household under a configurable distribution
//! policy.
//!
//! The engine is deliberately pure: every function maps its explicit
//! inputs (people, expenses, settings) to numeric outputs, with no I/O,
//! no caching, and no shared state. Storage, rendering, and navigation
//! are owned by the surrounding application, which feeds entities in and
//! displays the numbers that come out. Recomputing on every data change
//! is safe and expected.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (people, income sources, expenses, settings)
//! - `engine`: Pure calculation functions (normalization, aggregation, allocation)
//! - `reports`: Monthly/yearly projections built on the engine
//!
//! # Example
//!
//! ```rust,ignore
//! use household_budget::models::TimeUnit;
//! use household_budget::reports::BudgetSummary;
//!
//! let summary = BudgetSummary::generate(&people, &expenses, TimeUnit::Monthly);
//! println!("remaining this month: {}", summary.remaining);
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod reports;

pub use error::{BudgetError, BudgetResult};
