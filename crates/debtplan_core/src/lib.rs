//! Debt payoff simulation library
//!
//! This crate provides a month-by-month payoff engine for paying down several
//! debts from one monthly budget. It supports:
//! - Five prioritisation strategies (snowball, avalanche, highest/lowest payment, balanced)
//! - Per-debt and aggregate payment schedules with interest/principal splits
//! - Explicit incomplete results when a plan does not amortize within 50 years
//! - Warnings when the budget is raised to cover minimum payments
//! - Strategy comparison against a minimum-payments baseline
//! - Fixed-rate loan amortization with extra payments
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic setup:
//!
//! ```ignore
//! use debtplan_core::config::{DebtBuilder, PayoffBuilder};
//! use debtplan_core::simulation::simulate;
//! use debtplan_core::strategy::PayoffStrategy;
//!
//! let (config, metadata) = PayoffBuilder::new()
//!     .start(2025, 1, 1)
//!     .monthly_budget(800.0)
//!     .strategy(PayoffStrategy::Avalanche)
//!     .debt(DebtBuilder::credit_card("Visa").balance(4_200.0).rate(22.9).minimum(110.0))
//!     .debt(DebtBuilder::auto_loan("Car").balance(11_000.0).rate(6.4).minimum(310.0))
//!     .build()?;
//!
//! let result = simulate(&config);
//! assert!(result.is_complete());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod comparison;
pub mod date_math;
pub mod error;
pub mod metrics;
pub mod simulation;
pub mod simulation_state;
pub mod strategy;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DebtBuilder, MAX_MONTHS, PayoffBuilder, PayoffConfig, PayoffMetadata};
pub use simulation::{simulate, try_simulate};
pub use strategy::PayoffStrategy;
