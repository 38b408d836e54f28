use crate::config::PayoffConfig;
use crate::error::ValidationError;
use crate::metrics::SimulationMetrics;
use crate::model::{Debt, PayoffResult, PayoffSummary, SimulationWarning, WarningKind};
use crate::simulation_state::PayoffState;

/// One month of interest and payment applied to a single balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPayment {
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub new_balance: f64,
}

/// Accrue a month of interest on `balance` and pay up to `requested` against it.
///
/// The payment never exceeds `balance + interest`. When it covers that amount
/// the balance closes at exactly zero.
pub fn apply_payment(balance: f64, monthly_rate: f64, requested: f64) -> MonthlyPayment {
    let interest = balance * monthly_rate;
    let owed = balance + interest;

    if requested >= owed {
        return MonthlyPayment {
            payment: owed,
            principal: balance,
            interest,
            new_balance: 0.0,
        };
    }

    let payment = requested.max(0.0);
    let principal = payment - interest;
    MonthlyPayment {
        payment,
        principal,
        interest,
        new_balance: (balance - principal).max(0.0),
    }
}

/// The minimum payment, or the full payoff amount when that is smaller
#[inline]
pub fn minimum_or_remaining(debt: &Debt) -> f64 {
    debt.minimum_payment
        .min(debt.balance + debt.monthly_interest())
}

/// Run the payoff simulation.
///
/// Never fails: an empty debt list yields empty results, an under-funded budget
/// is raised to the sum of minimums, and a plan that never amortizes stops at
/// the month cap with an `Incomplete` status. The cap never exceeds
/// `MAX_MONTHS`, whatever `config.max_months` asks for.
pub fn simulate(config: &PayoffConfig) -> PayoffResult {
    simulate_with_metrics(config).0
}

/// Validate the configuration, then simulate
pub fn try_simulate(config: &PayoffConfig) -> Result<PayoffResult, ValidationError> {
    config.validate()?;
    Ok(simulate(config))
}

/// Run the payoff simulation and collect loop metrics
pub fn simulate_with_metrics(config: &PayoffConfig) -> (PayoffResult, SimulationMetrics) {
    let mut metrics = SimulationMetrics::new();

    if config.debts.is_empty() {
        tracing::debug!("no debts to simulate");
        let mut result = PayoffResult::empty();
        result.summary = PayoffSummary {
            effective_monthly_budget: config.effective_monthly_budget(),
            ..PayoffSummary::default()
        };
        return (result, metrics);
    }

    let start_date = config
        .start_date
        .unwrap_or_else(|| jiff::Zoned::now().date());
    let month_cap = config.month_cap();
    let warnings = collect_warnings(config);
    let mut state = PayoffState::from_config(config, start_date);

    tracing::info!(
        debts = config.debts.len(),
        total_balance = config.total_balance(),
        strategy = %config.strategy,
        budget = state.effective_budget,
        "starting payoff simulation"
    );

    state.sort_active();
    metrics.record_sort();

    while !state.active.is_empty() && state.month < month_cap {
        metrics.record_month(state.active.len());

        advance_month(&mut state);

        for _ in state.retire_paid_off() {
            metrics.record_payoff();
        }

        state.sort_active();
        metrics.record_sort();
    }

    if !state.active.is_empty() {
        metrics.record_cap_hit();
        tracing::warn!(
            months = state.month,
            remaining = state.remaining_balance(),
            open_debts = state.active.len(),
            "payoff did not complete within the month cap"
        );
    }

    let result = state.into_result(warnings);
    tracing::info!(
        months = result.summary.months,
        total_interest = result.summary.total_interest_paid,
        complete = result.is_complete(),
        "payoff simulation finished"
    );

    (result, metrics)
}

/// Simulate one month: every open debt pays its minimum (or what remains),
/// and the target at the head of `active` also receives the leftover budget.
fn advance_month(state: &mut PayoffState) {
    state.month += 1;
    let month = state.month;

    let committed: f64 = state
        .active
        .iter()
        .map(|&i| minimum_or_remaining(&state.debts[i]))
        .sum();
    let leftover = (state.effective_budget - committed).max(0.0);

    let mut month_payment = 0.0;
    let mut month_principal = 0.0;
    let mut month_interest = 0.0;

    for (rank, &i) in state.active.iter().enumerate() {
        let debt = &mut state.debts[i];
        let requested = if rank == 0 {
            debt.minimum_payment + leftover
        } else {
            minimum_or_remaining(debt)
        };

        let step = apply_payment(debt.balance, debt.monthly_rate(), requested);
        debt.balance = step.new_balance;

        let entry = state.debt_totals[i].entry(
            month,
            step.payment,
            step.principal,
            step.interest,
            step.new_balance,
        );
        state.schedules[i].schedule.push(entry);

        month_payment += step.payment;
        month_principal += step.principal;
        month_interest += step.interest;
    }

    let remaining: f64 = state.active.iter().map(|&i| state.debts[i].balance).sum();
    let entry = state.aggregate_totals.entry(
        month,
        month_payment,
        month_principal,
        month_interest,
        remaining,
    );
    state.per_month_summary.push(entry);
}

fn collect_warnings(config: &PayoffConfig) -> Vec<SimulationWarning> {
    let mut warnings = Vec::new();

    if config.is_underfunded() {
        let effective = config.effective_monthly_budget();
        tracing::warn!(
            requested = config.monthly_budget,
            effective,
            "monthly budget is below the sum of minimum payments"
        );
        warnings.push(SimulationWarning {
            kind: WarningKind::BudgetRaisedToMinimums {
                requested: config.monthly_budget,
                effective,
            },
        });
    }

    for debt in &config.debts {
        if !debt.is_paid_off() && !debt.amortizes() {
            warnings.push(SimulationWarning {
                kind: WarningKind::MinimumBelowInterest {
                    debt_id: debt.id,
                    minimum_payment: debt.minimum_payment,
                    monthly_interest: debt.monthly_interest(),
                },
            });
        }
    }

    warnings
}
