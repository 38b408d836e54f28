//! Integration tests for the payoff simulation engine
//!
//! Tests are organized by topic:
//! - `simulation` - Core loop mechanics, conservation and termination
//! - `strategies` - Where each strategy sends the surplus
//! - `builder_dsl` - Builder DSL for fluent plan setup
//! - `comparison` - Strategy comparison and minimum-payment baseline
//! - `amortization` - Single-loan schedules and extra payments

mod comparison;
mod strategies;

use crate::config::PayoffConfig;
use crate::model::{Debt, DebtId};
use crate::strategy::PayoffStrategy;

/// Fixed reference date so payoff dates are deterministic
pub(crate) fn start_date() -> jiff::civil::Date {
    jiff::civil::date(2025, 1, 15)
}

pub(crate) fn plan(debts: Vec<Debt>, monthly_budget: f64, strategy: PayoffStrategy) -> PayoffConfig {
    PayoffConfig {
        debts,
        monthly_budget,
        strategy,
        start_date: Some(start_date()),
        ..Default::default()
    }
}

pub(crate) fn debt(id: u16, balance: f64, rate: f64, minimum: f64) -> Debt {
    Debt::new(DebtId(id), format!("Debt {id}"), balance, rate, minimum)
}
