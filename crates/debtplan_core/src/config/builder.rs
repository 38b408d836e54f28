//! Payoff Builder
//!
//! The PayoffBuilder provides a fluent API for creating payoff plans with
//! automatic ID assignment, name-based lookups, and metadata tracking.
//!
//! # Example
//!
//! ```ignore
//! use debtplan_core::config::{DebtBuilder, PayoffBuilder};
//! use debtplan_core::strategy::PayoffStrategy;
//!
//! let (config, metadata) = PayoffBuilder::new()
//!     .start(2025, 1, 1)
//!     .monthly_budget(1_200.0)
//!     .strategy(PayoffStrategy::Snowball)
//!     .debt(DebtBuilder::credit_card("Visa").balance(4_200.0).rate(22.9).minimum(110.0))
//!     .debt(DebtBuilder::medical("Hospital").balance(900.0).minimum(50.0))
//!     .debt(DebtBuilder::student_loan("Federal").balance(18_000.0).rate(4.9).minimum(190.0))
//!     .build()?;
//!
//! let visa = metadata.debt_id("Visa").unwrap();
//! ```

use super::PayoffConfig;
use super::metadata::PayoffMetadata;
use crate::error::{Result, ValidationError};
use crate::model::{Debt, DebtId, DebtType};
use crate::strategy::PayoffStrategy;

/// Fluent definition of a single debt, resolved to a `Debt` by `PayoffBuilder`
#[derive(Debug, Clone)]
pub struct DebtBuilder {
    name: String,
    debt_type: DebtType,
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
    description: Option<String>,
}

impl DebtBuilder {
    /// Create a debt of the given type with zero balance, rate and minimum
    #[must_use]
    pub fn new(name: impl Into<String>, debt_type: DebtType) -> Self {
        Self {
            name: name.into(),
            debt_type,
            balance: 0.0,
            interest_rate: 0.0,
            minimum_payment: 0.0,
            description: None,
        }
    }

    // =========================================================================
    // Presets
    // =========================================================================

    #[must_use]
    pub fn credit_card(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::CreditCard)
    }

    #[must_use]
    pub fn mortgage(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Mortgage)
    }

    #[must_use]
    pub fn auto_loan(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Auto)
    }

    #[must_use]
    pub fn student_loan(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Student)
    }

    #[must_use]
    pub fn medical(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Medical)
    }

    #[must_use]
    pub fn personal_loan(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Personal)
    }

    #[must_use]
    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, DebtType::Other)
    }

    // =========================================================================
    // Amounts
    // =========================================================================

    #[must_use]
    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Annual percentage rate (12.0 = 12% APR)
    #[must_use]
    pub fn rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }

    #[must_use]
    pub fn minimum(mut self, minimum_payment: f64) -> Self {
        self.minimum_payment = minimum_payment;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn into_debt(self, id: DebtId) -> (Debt, String, Option<String>) {
        let debt = Debt {
            id,
            name: self.name.clone(),
            balance: self.balance,
            interest_rate: self.interest_rate,
            minimum_payment: self.minimum_payment,
            debt_type: self.debt_type,
        };
        (debt, self.name, self.description)
    }
}

/// Builder for creating payoff plans with automatic ID assignment and metadata tracking
pub struct PayoffBuilder {
    config: PayoffConfig,
    metadata: PayoffMetadata,
    pending_debts: Vec<DebtBuilder>,
}

impl Default for PayoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoffBuilder {
    /// Create a new payoff builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PayoffConfig::default(),
            metadata: PayoffMetadata::new(),
            pending_debts: Vec::new(),
        }
    }

    // =========================================================================
    // Basic Configuration
    // =========================================================================

    /// Set the reference date payoff dates are counted from
    #[must_use]
    pub fn start_date(mut self, date: jiff::civil::Date) -> Self {
        self.config.start_date = Some(date);
        self
    }

    /// Set the reference date (convenience method)
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.config.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn monthly_budget(mut self, budget: f64) -> Self {
        self.config.monthly_budget = budget;
        self
    }

    /// Alias for monthly_budget
    #[must_use]
    pub fn budget(self, budget: f64) -> Self {
        self.monthly_budget(budget)
    }

    #[must_use]
    pub fn strategy(mut self, strategy: PayoffStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Override the month cap
    #[must_use]
    pub fn max_months(mut self, months: u32) -> Self {
        self.config.max_months = months;
        self
    }

    // =========================================================================
    // Debts
    // =========================================================================

    /// Add a debt; ids are assigned in the order debts are added
    #[must_use]
    pub fn debt(mut self, debt: DebtBuilder) -> Self {
        self.pending_debts.push(debt);
        self
    }

    /// Add several debts at once
    #[must_use]
    pub fn debts(mut self, debts: impl IntoIterator<Item = DebtBuilder>) -> Self {
        self.pending_debts.extend(debts);
        self
    }

    /// Resolve pending debts and return the configuration with its metadata.
    ///
    /// Fails when there are more debts than `DebtId` can number.
    pub fn build(mut self) -> Result<(PayoffConfig, PayoffMetadata)> {
        let pending = std::mem::take(&mut self.pending_debts);
        let count = pending.len();
        self.config.debts.reserve(count);
        for (index, pending) in pending.into_iter().enumerate() {
            let id = u16::try_from(index)
                .map(DebtId)
                .map_err(|_| ValidationError::TooManyDebts { count })?;

            let (debt, name, description) = pending.into_debt(id);
            self.metadata.register_debt(id, name, description);
            self.config.debts.push(debt);
        }

        Ok((self.config, self.metadata))
    }
}
