//! Month-by-month payment records
//!
//! The same `PaymentSchedule` row type is used for a single debt, for the
//! aggregate across all debts, and for stand-alone loan amortization.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::debt::Debt;

/// One month's payment split for a single debt or for the aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    /// 1-indexed month of the simulation
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance after this month's payment
    pub remaining_balance: f64,
    /// Cumulative payments since month 1
    pub total_paid: f64,
    /// Cumulative interest since month 1
    pub total_interest_paid: f64,
}

/// Running totals used while appending schedule rows
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunningTotals {
    pub paid: f64,
    pub interest: f64,
}

impl RunningTotals {
    pub fn entry(
        &mut self,
        month: u32,
        payment: f64,
        principal: f64,
        interest: f64,
        remaining_balance: f64,
    ) -> PaymentSchedule {
        self.paid += payment;
        self.interest += interest;
        PaymentSchedule {
            month,
            payment,
            principal,
            interest,
            remaining_balance,
            total_paid: self.paid,
            total_interest_paid: self.interest,
        }
    }
}

/// A debt together with its simulated schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtWithSchedule {
    /// The debt as supplied by the caller (starting balance)
    pub debt: Debt,
    pub schedule: Vec<PaymentSchedule>,
    /// Month the balance first reached zero (0 when it started at zero)
    pub payoff_month: Option<u32>,
    /// Calendar month of payoff: start date plus `payoff_month` months
    pub payoff_date: Option<Date>,
}

impl DebtWithSchedule {
    pub fn new(debt: Debt) -> Self {
        Self {
            debt,
            schedule: Vec::new(),
            payoff_month: None,
            payoff_date: None,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.payoff_month.is_some()
    }

    pub fn total_paid(&self) -> f64 {
        self.schedule.last().map_or(0.0, |e| e.total_paid)
    }

    pub fn total_interest(&self) -> f64 {
        self.schedule.last().map_or(0.0, |e| e.total_interest_paid)
    }
}
