use jiff::civil::Date;

use crate::config::PayoffConfig;
use crate::date_math::add_months;
use crate::model::{
    Debt, DebtId, DebtWithSchedule, PaymentSchedule, PayoffResult, PayoffStatus, PayoffSummary,
    RunningTotals, SimulationWarning,
};
use crate::strategy::PayoffStrategy;

/// Runtime state for a payoff run
///
/// Debts are cloned into an index-addressed working set so the caller's data is
/// never touched. `active` holds indices of debts that still carry a balance, in
/// the strategy's priority order; index 0 is the current target.
#[derive(Debug, Clone)]
pub struct PayoffState {
    pub start_date: Date,
    /// Months simulated so far
    pub month: u32,
    pub strategy: PayoffStrategy,
    pub effective_budget: f64,

    /// Working copies; balances are mutated here
    pub debts: Vec<Debt>,
    /// Indices into `debts` still open, in priority order
    pub active: Vec<usize>,

    /// Per-debt output, parallel to `debts`
    pub schedules: Vec<DebtWithSchedule>,
    pub(crate) debt_totals: Vec<RunningTotals>,

    pub per_month_summary: Vec<PaymentSchedule>,
    pub(crate) aggregate_totals: RunningTotals,
}

impl PayoffState {
    pub fn from_config(config: &PayoffConfig, start_date: Date) -> Self {
        let debts = config.debts.clone();
        let mut schedules: Vec<DebtWithSchedule> =
            debts.iter().cloned().map(DebtWithSchedule::new).collect();

        let mut active = Vec::with_capacity(debts.len());
        for (i, debt) in debts.iter().enumerate() {
            if debt.is_paid_off() {
                // Nothing owed at start: closed before month 1
                schedules[i].payoff_month = Some(0);
                schedules[i].payoff_date = Some(start_date);
            } else {
                active.push(i);
            }
        }

        Self {
            start_date,
            month: 0,
            strategy: config.strategy,
            effective_budget: config.effective_monthly_budget(),
            debt_totals: vec![RunningTotals::default(); debts.len()],
            debts,
            active,
            schedules,
            per_month_summary: Vec::new(),
            aggregate_totals: RunningTotals::default(),
        }
    }

    /// Re-order the open debts by the strategy comparator
    pub fn sort_active(&mut self) {
        self.strategy.sort_indices(&mut self.active, &self.debts);
    }

    /// The debt currently receiving the leftover budget
    pub fn target(&self) -> Option<DebtId> {
        self.active.first().map(|&i| self.debts[i].id)
    }

    /// Remove debts whose balance reached zero this month, stamping their payoff
    /// month and date. Returns the ids retired, in priority order.
    pub fn retire_paid_off(&mut self) -> Vec<DebtId> {
        let mut retired = Vec::new();
        let month = self.month;
        let payoff_date = add_months(self.start_date, month);

        let debts = &self.debts;
        let schedules = &mut self.schedules;
        self.active.retain(|&i| {
            if debts[i].balance > 0.0 {
                return true;
            }
            if schedules[i].payoff_month.is_none() {
                schedules[i].payoff_month = Some(month);
                schedules[i].payoff_date = Some(payoff_date);
            }
            retired.push(debts[i].id);
            false
        });

        for id in &retired {
            tracing::debug!(debt = %id, month, %payoff_date, "debt paid off");
        }
        retired
    }

    /// Sum of balances still owed
    pub fn remaining_balance(&self) -> f64 {
        self.active.iter().map(|&i| self.debts[i].balance).sum()
    }

    /// Open debt ids in input order
    pub fn unpaid(&self) -> Vec<DebtId> {
        let mut indices = self.active.clone();
        indices.sort_unstable();
        indices.into_iter().map(|i| self.debts[i].id).collect()
    }

    pub fn into_result(self, warnings: Vec<SimulationWarning>) -> PayoffResult {
        let status = if self.active.is_empty() {
            PayoffStatus::Complete
        } else {
            PayoffStatus::Incomplete {
                remaining_balance: self.remaining_balance(),
                unpaid: self.unpaid(),
            }
        };

        let summary = PayoffSummary {
            months: self.month,
            total_interest_paid: self.aggregate_totals.interest,
            total_paid: self.aggregate_totals.paid,
            effective_monthly_budget: self.effective_budget,
        };

        PayoffResult {
            per_month_summary: self.per_month_summary,
            per_debt_schedules: self.schedules,
            summary,
            status,
            warnings,
        }
    }
}
