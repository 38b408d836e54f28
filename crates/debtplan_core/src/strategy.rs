//! Payoff ordering policies
//!
//! A strategy decides which open debt receives the month's leftover budget.
//! Each variant maps to one comparator; the simulator sorts the open debts with
//! it every month and targets whichever debt lands first. Ties always resolve
//! to the caller's input order, even when the debts only become equal mid-run.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Debt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Smallest balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
    /// Largest minimum payment first
    HighestPaymentFirst,
    /// Smallest minimum payment first
    LowestPaymentFirst,
    /// Largest annual interest cost (rate x balance) first
    Balanced,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 5] = [
        PayoffStrategy::Snowball,
        PayoffStrategy::Avalanche,
        PayoffStrategy::HighestPaymentFirst,
        PayoffStrategy::LowestPaymentFirst,
        PayoffStrategy::Balanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "Snowball",
            PayoffStrategy::Avalanche => "Avalanche",
            PayoffStrategy::HighestPaymentFirst => "Highest Payment First",
            PayoffStrategy::LowestPaymentFirst => "Lowest Payment First",
            PayoffStrategy::Balanced => "Balanced",
        }
    }

    /// Ordering of two debts under this strategy; `Less` means `a` is paid first
    pub fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        match self {
            PayoffStrategy::Snowball => a.balance.total_cmp(&b.balance),
            PayoffStrategy::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
            PayoffStrategy::HighestPaymentFirst => b.minimum_payment.total_cmp(&a.minimum_payment),
            PayoffStrategy::LowestPaymentFirst => a.minimum_payment.total_cmp(&b.minimum_payment),
            PayoffStrategy::Balanced => b
                .annual_interest_cost()
                .total_cmp(&a.annual_interest_cost()),
        }
    }

    /// Stable sort of a debt slice into payoff priority order
    pub fn sort(&self, debts: &mut [Debt]) {
        debts.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort an index list over `debts`; equal debts fall back to index order
    pub(crate) fn sort_indices(&self, indices: &mut [usize], debts: &[Debt]) {
        indices.sort_by(|&a, &b| self.compare(&debts[a], &debts[b]).then(a.cmp(&b)));
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a strategy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown payoff strategy '{}' (expected snowball, avalanche, highest_payment_first, lowest_payment_first or balanced)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for PayoffStrategy {
    type Err = UnknownStrategy;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "highestpaymentfirst" | "highestpayment" => Ok(PayoffStrategy::HighestPaymentFirst),
            "lowestpaymentfirst" | "lowestpayment" => Ok(PayoffStrategy::LowestPaymentFirst),
            "balanced" => Ok(PayoffStrategy::Balanced),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
