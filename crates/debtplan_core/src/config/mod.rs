//! Payoff configuration
//!
//! The main configuration type is `PayoffConfig`, which contains everything
//! needed to run a payoff simulation. Variant helpers support comparing
//! strategies and budgets against the same debts.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to create plans, use the builder DSL:
//!
//! ```ignore
//! use debtplan_core::config::{DebtBuilder, PayoffBuilder};
//! use debtplan_core::strategy::PayoffStrategy;
//!
//! let (config, metadata) = PayoffBuilder::new()
//!     .start(2025, 1, 1)
//!     .monthly_budget(900.0)
//!     .strategy(PayoffStrategy::Avalanche)
//!     .debt(DebtBuilder::credit_card("Visa").balance(4_200.0).rate(22.9).minimum(110.0))
//!     .debt(DebtBuilder::auto_loan("Car").balance(11_000.0).rate(6.4).minimum(310.0))
//!     .build()?;
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Field, Result, ValidationError, non_negative};
use crate::model::Debt;
use crate::strategy::PayoffStrategy;

pub mod builder;
pub mod metadata;

pub use builder::{DebtBuilder, PayoffBuilder};
pub use metadata::PayoffMetadata;

/// Safety valve on the simulation loop: 50 years of monthly payments
pub const MAX_MONTHS: u32 = 600;

fn default_max_months() -> u32 {
    MAX_MONTHS
}

/// Complete payoff configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffConfig {
    /// Debts in caller order; ties between strategies fall back to this order
    #[serde(default)]
    pub debts: Vec<Debt>,

    /// Total amount available for debt payments each month
    #[serde(default)]
    pub monthly_budget: f64,

    #[serde(default)]
    pub strategy: PayoffStrategy,

    /// Reference date payoff dates are counted from; defaults to today
    pub start_date: Option<jiff::civil::Date>,

    /// Month cap after which the run is reported incomplete; must lie in
    /// `1..=MAX_MONTHS`
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            debts: Vec::new(),
            monthly_budget: 0.0,
            strategy: PayoffStrategy::default(),
            start_date: None,
            max_months: default_max_months(),
        }
    }
}

impl PayoffConfig {
    /// Create a new empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of minimum payments across all debts
    pub fn minimum_payments_total(&self) -> f64 {
        self.debts.iter().map(|d| d.minimum_payment).sum()
    }

    /// The budget the simulator actually spends: never below the minimums
    pub fn effective_monthly_budget(&self) -> f64 {
        self.monthly_budget.max(self.minimum_payments_total())
    }

    /// Whether the requested budget fails to cover the minimums
    pub fn is_underfunded(&self) -> bool {
        self.monthly_budget < self.minimum_payments_total()
    }

    /// Sum of starting balances
    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance).sum()
    }

    // === Variant Helpers ===

    /// Create a variant with a different strategy
    #[must_use]
    pub fn with_strategy(&self, strategy: PayoffStrategy) -> Self {
        let mut config = self.clone();
        config.strategy = strategy;
        config
    }

    /// Create a variant with a different monthly budget
    #[must_use]
    pub fn with_monthly_budget(&self, monthly_budget: f64) -> Self {
        let mut config = self.clone();
        config.monthly_budget = monthly_budget;
        config
    }

    /// Create a variant with a fixed start date
    #[must_use]
    pub fn with_start_date(&self, start_date: jiff::civil::Date) -> Self {
        let mut config = self.clone();
        config.start_date = Some(start_date);
        config
    }

    /// Month cap the simulator honours, forced into `1..=MAX_MONTHS`
    pub fn month_cap(&self) -> u32 {
        self.max_months.clamp(1, MAX_MONTHS)
    }

    /// Check that every amount is finite and non-negative, ids are unique and
    /// the month cap is within range
    pub fn validate(&self) -> Result<()> {
        non_negative(None, Field::MonthlyBudget, self.monthly_budget)?;
        if self.max_months == 0 || self.max_months > MAX_MONTHS {
            return Err(ValidationError::MonthCapOutOfRange(self.max_months));
        }

        let mut seen = HashSet::with_capacity(self.debts.len());
        for debt in &self.debts {
            let id = Some(debt.id);
            non_negative(id, Field::Balance, debt.balance)?;
            non_negative(id, Field::InterestRate, debt.interest_rate)?;
            non_negative(id, Field::MinimumPayment, debt.minimum_payment)?;
            if !seen.insert(debt.id) {
                return Err(ValidationError::DuplicateDebtId(debt.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DebtId;

    fn config() -> PayoffConfig {
        PayoffConfig {
            debts: vec![
                Debt::new(DebtId(0), "Visa", 3_000.0, 19.0, 90.0),
                Debt::new(DebtId(1), "Car", 9_000.0, 5.0, 260.0),
            ],
            monthly_budget: 300.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_budget_floor() {
        let config = config();
        assert_eq!(config.minimum_payments_total(), 350.0);
        assert_eq!(config.total_balance(), 12_000.0);
        assert!(config.is_underfunded());
        assert_eq!(config.effective_monthly_budget(), 350.0);

        let funded = config.with_monthly_budget(500.0);
        assert!(!funded.is_underfunded());
        assert_eq!(funded.effective_monthly_budget(), 500.0);
    }

    #[test]
    fn test_defaults() {
        let config = PayoffConfig::new();
        assert_eq!(config.max_months, MAX_MONTHS);
        assert_eq!(config.strategy, PayoffStrategy::Snowball);
        assert!(config.start_date.is_none());
    }

    #[test]
    fn test_month_cap_bounds() {
        let mut config = config();
        config.max_months = 5_000;
        assert_eq!(
            config.validate(),
            Err(ValidationError::MonthCapOutOfRange(5_000))
        );
        assert_eq!(config.month_cap(), MAX_MONTHS);

        config.max_months = 0;
        assert_eq!(config.validate(), Err(ValidationError::MonthCapOutOfRange(0)));
        assert_eq!(config.month_cap(), 1);

        config.max_months = MAX_MONTHS;
        assert!(config.validate().is_ok());
        config.max_months = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(config().validate().is_ok());

        let mut negative = config();
        negative.debts[1].interest_rate = -1.0;
        assert!(matches!(
            negative.validate(),
            Err(ValidationError::Negative {
                field: Field::InterestRate,
                ..
            })
        ));

        let mut duplicate = config();
        duplicate.debts[1].id = DebtId(0);
        assert_eq!(
            duplicate.validate(),
            Err(ValidationError::DuplicateDebtId(DebtId(0)))
        );

        let nan_budget = config().with_monthly_budget(f64::NAN);
        assert!(matches!(
            nan_budget.validate(),
            Err(ValidationError::NotFinite {
                field: Field::MonthlyBudget,
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PayoffConfig = serde_json::from_str(
            r#"{
                "debts": [{"id": 0, "name": "Card", "balance": 500.0, "interest_rate": 18.0, "minimum_payment": 25.0, "type": "credit_card"}],
                "monthly_budget": 100.0,
                "strategy": "avalanche",
                "start_date": "2025-03-01"
            }"#,
        )
        .unwrap();

        assert_eq!(config.strategy, PayoffStrategy::Avalanche);
        assert_eq!(config.max_months, MAX_MONTHS);
        assert_eq!(config.start_date, Some(jiff::civil::date(2025, 3, 1)));
    }
}
