//! Side-by-side comparison of payoff strategies
//!
//! Runs the same debts and budget through every strategy, plus a baseline that
//! pays only the minimums, so callers can show what each ordering saves.
//!
//! ```ignore
//! use debtplan_core::comparison::compare_strategies;
//!
//! let comparison = compare_strategies(&config);
//! if let Some(best) = comparison.best() {
//!     println!("{} saves {:.2}", best.strategy, comparison.interest_saved(best.strategy).unwrap());
//! }
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PayoffConfig;
use crate::model::{DebtId, PayoffResult};
use crate::simulation::simulate;
use crate::strategy::PayoffStrategy;

/// Headline numbers from one strategy's run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: PayoffStrategy,
    pub months: u32,
    pub total_interest_paid: f64,
    pub total_paid: f64,
    /// False when the month cap cut the run short
    pub complete: bool,
    pub payoff_order: Vec<DebtId>,
}

impl StrategyOutcome {
    fn from_result(strategy: PayoffStrategy, result: &PayoffResult) -> Self {
        Self {
            strategy,
            months: result.summary.months,
            total_interest_paid: result.summary.total_interest_paid,
            total_paid: result.summary.total_paid,
            complete: result.is_complete(),
            payoff_order: result.payoff_order(),
        }
    }
}

/// Outcomes of every strategy plus the minimum-payments baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// One entry per strategy, in `PayoffStrategy::ALL` order
    pub outcomes: Vec<StrategyOutcome>,
    /// Paying only the minimums each month. Freed-up minimums still roll to
    /// the next debt, ordered by the configured strategy.
    pub minimum_only: StrategyOutcome,
}

impl StrategyComparison {
    pub fn outcome(&self, strategy: PayoffStrategy) -> Option<&StrategyOutcome> {
        self.outcomes.iter().find(|o| o.strategy == strategy)
    }

    /// The complete outcome with the least interest; ties go to fewer months,
    /// then to the earlier strategy in `PayoffStrategy::ALL`
    pub fn best(&self) -> Option<&StrategyOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.complete)
            .min_by(|a, b| {
                a.total_interest_paid
                    .total_cmp(&b.total_interest_paid)
                    .then(a.months.cmp(&b.months))
            })
    }

    /// Interest saved relative to paying only the minimums
    pub fn interest_saved(&self, strategy: PayoffStrategy) -> Option<f64> {
        self.outcome(strategy)
            .map(|o| self.minimum_only.total_interest_paid - o.total_interest_paid)
    }

    /// Months saved relative to paying only the minimums
    pub fn months_saved(&self, strategy: PayoffStrategy) -> Option<i64> {
        self.outcome(strategy)
            .map(|o| i64::from(self.minimum_only.months) - i64::from(o.months))
    }
}

/// Run every strategy against `config`, plus the minimum-payments baseline
pub fn compare_strategies(config: &PayoffConfig) -> StrategyComparison {
    #[cfg(feature = "parallel")]
    let outcomes: Vec<StrategyOutcome> = PayoffStrategy::ALL
        .par_iter()
        .map(|&strategy| {
            let result = simulate(&config.with_strategy(strategy));
            StrategyOutcome::from_result(strategy, &result)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<StrategyOutcome> = PayoffStrategy::ALL
        .iter()
        .map(|&strategy| {
            let result = simulate(&config.with_strategy(strategy));
            StrategyOutcome::from_result(strategy, &result)
        })
        .collect();

    let baseline = simulate(&config.with_monthly_budget(config.minimum_payments_total()));
    let minimum_only = StrategyOutcome::from_result(config.strategy, &baseline);

    tracing::debug!(
        strategies = outcomes.len(),
        baseline_months = minimum_only.months,
        "strategy comparison finished"
    );

    StrategyComparison {
        outcomes,
        minimum_only,
    }
}
