//! Payoff results and summaries
//!
//! Contains the output types from running a payoff simulation: the aggregate
//! month-by-month schedule, one schedule per debt, the terminal summary, and
//! the status and warnings the caller needs to interpret them.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use super::schedule::{DebtWithSchedule, PaymentSchedule};

/// Terminal aggregate of a payoff run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoffSummary {
    /// Months elapsed until the last debt closed or the cap was reached
    pub months: u32,
    pub total_interest_paid: f64,
    pub total_paid: f64,
    /// Budget actually spread across the debts each month
    pub effective_monthly_budget: f64,
}

/// How the simulation ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffStatus {
    /// Every debt reached a zero balance
    Complete,
    /// The month cap was reached with debts still open. The schedule is truncated
    /// and does not describe a real payoff date.
    Incomplete {
        remaining_balance: f64,
        unpaid: Vec<DebtId>,
    },
    /// No debts were supplied
    NoDebts,
}

/// Conditions the caller should surface alongside the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationWarning {
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// The requested budget did not cover the minimums and was raised to their sum
    BudgetRaisedToMinimums { requested: f64, effective: f64 },
    /// The minimum payment does not cover the first month's interest
    MinimumBelowInterest {
        debt_id: DebtId,
        minimum_payment: f64,
        monthly_interest: f64,
    },
}

impl std::fmt::Display for SimulationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            WarningKind::BudgetRaisedToMinimums {
                requested,
                effective,
            } => write!(
                f,
                "monthly budget {requested:.2} is below the sum of minimum payments; using {effective:.2}"
            ),
            WarningKind::MinimumBelowInterest {
                debt_id,
                minimum_payment,
                monthly_interest,
            } => write!(
                f,
                "{debt_id}: minimum payment {minimum_payment:.2} does not cover monthly interest {monthly_interest:.2}"
            ),
        }
    }
}

/// Complete results from a single payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    /// Aggregate across all debts, one row per simulated month
    pub per_month_summary: Vec<PaymentSchedule>,
    /// One entry per input debt, in input order
    pub per_debt_schedules: Vec<DebtWithSchedule>,
    pub summary: PayoffSummary,
    pub status: PayoffStatus,
    pub warnings: Vec<SimulationWarning>,
}

impl PayoffResult {
    pub(crate) fn empty() -> Self {
        Self {
            per_month_summary: Vec::new(),
            per_debt_schedules: Vec::new(),
            summary: PayoffSummary::default(),
            status: PayoffStatus::NoDebts,
            warnings: Vec::new(),
        }
    }

    /// True only when every debt was paid off within the month cap
    pub fn is_complete(&self) -> bool {
        matches!(self.status, PayoffStatus::Complete)
    }

    /// True when the month cap truncated the run
    pub fn hit_month_cap(&self) -> bool {
        matches!(self.status, PayoffStatus::Incomplete { .. })
    }

    /// Look up the schedule of a specific debt
    pub fn debt(&self, id: DebtId) -> Option<&DebtWithSchedule> {
        self.per_debt_schedules.iter().find(|d| d.debt.id == id)
    }

    /// Debt ids in the order they were paid off. Debts closed in the same month
    /// keep their input order; unpaid debts are omitted.
    pub fn payoff_order(&self) -> Vec<DebtId> {
        let mut paid: Vec<&DebtWithSchedule> = self
            .per_debt_schedules
            .iter()
            .filter(|d| d.payoff_month.is_some())
            .collect();
        paid.sort_by_key(|d| d.payoff_month);
        paid.into_iter().map(|d| d.debt.id).collect()
    }

    /// Date the final debt closes, only when the plan completes
    pub fn debt_free_date(&self) -> Option<Date> {
        if !self.is_complete() {
            return None;
        }
        self.per_debt_schedules
            .iter()
            .filter_map(|d| d.payoff_date)
            .max()
    }

    /// Balance still owed at the end of the simulation
    pub fn remaining_balance(&self) -> f64 {
        match &self.status {
            PayoffStatus::Incomplete {
                remaining_balance, ..
            } => *remaining_balance,
            _ => 0.0,
        }
    }
}
