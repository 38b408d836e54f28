//! Plain-text reports for the terminal

use std::fmt::Write;

use debtplan_core::amortization::{AmortizationSchedule, ExtraPaymentImpact};
use debtplan_core::comparison::StrategyComparison;
use debtplan_core::config::PayoffMetadata;
use debtplan_core::model::{DebtWithSchedule, PayoffResult, PayoffStatus};

use crate::util::format::{format_currency, format_duration, format_rate};

fn debt_label(entry: &DebtWithSchedule, metadata: &PayoffMetadata) -> String {
    match metadata.description(entry.debt.id) {
        Some(desc) => format!("{} ({})", entry.debt.name, desc),
        None => entry.debt.name.clone(),
    }
}

/// Render the headline numbers, per-debt payoff and any warnings
pub fn render_summary(result: &PayoffResult, metadata: &PayoffMetadata) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    match &result.status {
        PayoffStatus::NoDebts => {
            out.push_str("No debts to pay off.\n");
            return out;
        }
        PayoffStatus::Complete => {
            let _ = writeln!(
                out,
                "Debt free in {} ({} months)",
                format_duration(summary.months),
                summary.months
            );
            if let Some(date) = result.debt_free_date() {
                let _ = writeln!(out, "Debt-free date:   {}", date);
            }
        }
        PayoffStatus::Incomplete {
            remaining_balance,
            unpaid,
        } => {
            let _ = writeln!(
                out,
                "NOT paid off after {} months: {} still owed on {} debt(s)",
                summary.months,
                format_currency(*remaining_balance),
                unpaid.len()
            );
        }
    }

    let _ = writeln!(
        out,
        "Monthly budget:   {}",
        format_currency(summary.effective_monthly_budget)
    );
    let _ = writeln!(out, "Total paid:       {}", format_currency(summary.total_paid));
    let _ = writeln!(
        out,
        "Total interest:   {}",
        format_currency(summary.total_interest_paid)
    );

    out.push('\n');
    let _ = writeln!(
        out,
        "{:<28} {:>14} {:>8} {:>14} {:>8} {:>12}",
        "Debt", "Balance", "Rate", "Interest", "Month", "Paid off"
    );
    for entry in &result.per_debt_schedules {
        let (month, date) = match (entry.payoff_month, entry.payoff_date) {
            (Some(m), Some(d)) => (m.to_string(), d.to_string()),
            _ => ("-".to_string(), "open".to_string()),
        };
        let _ = writeln!(
            out,
            "{:<28} {:>14} {:>8} {:>14} {:>8} {:>12}",
            debt_label(entry, metadata),
            format_currency(entry.debt.balance),
            format_rate(entry.debt.interest_rate),
            format_currency(entry.total_interest()),
            month,
            date
        );
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        for warning in &result.warnings {
            let _ = writeln!(out, "warning: {}", warning);
        }
    }

    out
}

/// Render the aggregate month-by-month schedule
pub fn render_schedule(result: &PayoffResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Payment", "Principal", "Interest", "Balance"
    );
    for row in &result.per_month_summary {
        let _ = writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14} {:>16}",
            row.month,
            format_currency(row.payment),
            format_currency(row.principal),
            format_currency(row.interest),
            format_currency(row.remaining_balance)
        );
    }
    out
}

/// Render every strategy side by side against the minimum-payments baseline
pub fn render_comparison(comparison: &StrategyComparison, metadata: &PayoffMetadata) -> String {
    let mut out = String::new();
    let best = comparison.best().map(|o| o.strategy);

    let _ = writeln!(
        out,
        "{:<24} {:>8} {:>16} {:>16}  First paid off",
        "Strategy", "Months", "Interest", "Saved"
    );
    for outcome in &comparison.outcomes {
        let months = if outcome.complete {
            outcome.months.to_string()
        } else {
            format!("{}+", outcome.months)
        };
        let saved = comparison
            .interest_saved(outcome.strategy)
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        let first = outcome
            .payoff_order
            .first()
            .map(|id| {
                metadata
                    .debt_name(*id)
                    .map(str::to_string)
                    .unwrap_or_else(|| id.to_string())
            })
            .unwrap_or_else(|| "-".to_string());
        let marker = if Some(outcome.strategy) == best { "*" } else { " " };

        let _ = writeln!(
            out,
            "{}{:<23} {:>8} {:>16} {:>16}  {}",
            marker,
            outcome.strategy.label(),
            months,
            format_currency(outcome.total_interest_paid),
            saved,
            first
        );
    }

    let baseline = &comparison.minimum_only;
    let _ = writeln!(
        out,
        "\nMinimum payments only: {} months, {} interest{}",
        baseline.months,
        format_currency(baseline.total_interest_paid),
        if baseline.complete { "" } else { " (never paid off)" }
    );
    if best.is_some() {
        out.push_str("* least interest\n");
    }
    out
}

/// Render a single-loan schedule, with the extra-payment savings when there are any
pub fn render_amortization(
    schedule: &AmortizationSchedule,
    impact: Option<&ExtraPaymentImpact>,
    show_rows: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Monthly payment:  {}",
        format_currency(schedule.monthly_payment)
    );
    let _ = writeln!(
        out,
        "Paid off in:      {} ({} months)",
        format_duration(schedule.months()),
        schedule.months()
    );
    let _ = writeln!(out, "Total paid:       {}", format_currency(schedule.total_paid));
    let _ = writeln!(
        out,
        "Total interest:   {}",
        format_currency(schedule.total_interest)
    );

    if let Some(impact) = impact.filter(|i| i.months_saved > 0 || i.interest_saved > 0.0) {
        let _ = writeln!(
            out,
            "Extra payment saves {} and {} of interest",
            format_duration(impact.months_saved),
            format_currency(impact.interest_saved)
        );
    }

    if show_rows {
        out.push('\n');
        let _ = writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14} {:>16}",
            "Month", "Payment", "Principal", "Interest", "Balance"
        );
        for row in &schedule.entries {
            let _ = writeln!(
                out,
                "{:>6} {:>14} {:>14} {:>14} {:>16}",
                row.month,
                format_currency(row.payment),
                format_currency(row.principal),
                format_currency(row.interest),
                format_currency(row.remaining_balance)
            );
        }
    }
    out
}
