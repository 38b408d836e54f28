//! Fixed-rate loan amortization
//!
//! Standard level-payment schedules for a single loan (mortgages, auto loans),
//! optionally with a fixed extra principal payment each month. Uses the same
//! monthly arithmetic and `PaymentSchedule` rows as the multi-debt simulator.

use serde::{Deserialize, Serialize};

use crate::config::MAX_MONTHS;
use crate::error::{Field, Result, ValidationError, non_negative};
use crate::model::{PaymentSchedule, RunningTotals, monthly_rate};
use crate::simulation::apply_payment;

/// Terms of a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    /// Annual percentage rate (6.5 = 6.5% APR)
    pub annual_rate: f64,
    pub term_months: u32,
    /// Paid on top of the scheduled payment every month
    #[serde(default)]
    pub extra_payment: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
            extra_payment: 0.0,
        }
    }

    #[must_use]
    pub fn with_extra_payment(mut self, extra_payment: f64) -> Self {
        self.extra_payment = extra_payment;
        self
    }

    pub fn validate(&self) -> Result<()> {
        non_negative(None, Field::Principal, self.principal)?;
        non_negative(None, Field::InterestRate, self.annual_rate)?;
        non_negative(None, Field::ExtraPayment, self.extra_payment)?;
        check_term(self.term_months)
    }
}

/// Full schedule for one loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Scheduled level payment, excluding any extra payment
    pub monthly_payment: f64,
    pub entries: Vec<PaymentSchedule>,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl AmortizationSchedule {
    /// Months until the balance reached zero
    pub fn months(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.month)
    }
}

/// Effect of the extra monthly payment compared to the plain schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtraPaymentImpact {
    pub base_months: u32,
    pub months: u32,
    pub months_saved: u32,
    pub interest_saved: f64,
}

/// Terms run from one month up to `MAX_MONTHS`
fn check_term(term_months: u32) -> Result<()> {
    if term_months == 0 {
        return Err(ValidationError::ZeroTerm);
    }
    if term_months > MAX_MONTHS {
        return Err(ValidationError::TermTooLong(term_months));
    }
    Ok(())
}

/// Level monthly payment that retires `principal` over `term_months`.
///
/// Zero-rate loans split the principal evenly.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> Result<f64> {
    non_negative(None, Field::Principal, principal)?;
    non_negative(None, Field::InterestRate, annual_rate_pct)?;
    check_term(term_months)?;

    let r = monthly_rate(annual_rate_pct);
    let n = f64::from(term_months);
    if r == 0.0 {
        return Ok(principal / n);
    }
    Ok(principal * r / (1.0 - (1.0 + r).powf(-n)))
}

/// Build the month-by-month schedule for a loan.
///
/// The last scheduled month pays whatever is left so floating point residue
/// never spills into an extra month.
pub fn amortize(terms: &LoanTerms) -> Result<AmortizationSchedule> {
    terms.validate()?;

    let scheduled = monthly_payment(terms.principal, terms.annual_rate, terms.term_months)?;
    let rate = monthly_rate(terms.annual_rate);
    let payment = scheduled + terms.extra_payment;

    let mut entries = Vec::with_capacity(terms.term_months as usize);
    let mut totals = RunningTotals::default();
    let mut balance = terms.principal;

    for month in 1..=terms.term_months {
        if balance <= 0.0 {
            break;
        }
        let requested = if month == terms.term_months {
            f64::INFINITY
        } else {
            payment
        };

        let step = apply_payment(balance, rate, requested);
        balance = step.new_balance;
        entries.push(totals.entry(
            month,
            step.payment,
            step.principal,
            step.interest,
            step.new_balance,
        ));
    }

    Ok(AmortizationSchedule {
        monthly_payment: scheduled,
        entries,
        total_interest: totals.interest,
        total_paid: totals.paid,
    })
}

/// Compare the schedule with and without the extra monthly payment
pub fn extra_payment_impact(terms: &LoanTerms) -> Result<ExtraPaymentImpact> {
    let base = amortize(&terms.with_extra_payment(0.0))?;
    let accelerated = amortize(terms)?;

    Ok(ExtraPaymentImpact {
        base_months: base.months(),
        months: accelerated.months(),
        months_saved: base.months().saturating_sub(accelerated.months()),
        interest_saved: base.total_interest - accelerated.total_interest,
    })
}
