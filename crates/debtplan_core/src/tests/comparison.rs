//! Strategy comparison and the minimum-payments baseline

use super::{debt, plan};
use crate::comparison::compare_strategies;
use crate::config::PayoffConfig;
use crate::model::DebtId;
use crate::simulation::simulate;
use crate::strategy::PayoffStrategy;

fn household() -> PayoffConfig {
    plan(
        vec![
            debt(0, 900.0, 8.0, 40.0),
            debt(1, 6_500.0, 24.9, 180.0),
            debt(2, 2_200.0, 15.0, 65.0),
            debt(3, 14_000.0, 6.5, 280.0),
        ],
        1_100.0,
        PayoffStrategy::Snowball,
    )
}

#[test]
fn test_outcomes_match_individual_runs() {
    let config = household();
    let comparison = compare_strategies(&config);

    assert_eq!(comparison.outcomes.len(), PayoffStrategy::ALL.len());
    for (outcome, strategy) in comparison.outcomes.iter().zip(PayoffStrategy::ALL) {
        assert_eq!(outcome.strategy, strategy);

        let result = simulate(&config.with_strategy(strategy));
        assert_eq!(outcome.months, result.summary.months);
        assert_eq!(outcome.total_interest_paid, result.summary.total_interest_paid);
        assert_eq!(outcome.payoff_order, result.payoff_order());
        assert!(outcome.complete);
    }
}

#[test]
fn test_avalanche_never_pays_more_interest_than_snowball() {
    let comparison = compare_strategies(&household());

    let avalanche = comparison.outcome(PayoffStrategy::Avalanche).unwrap();
    let snowball = comparison.outcome(PayoffStrategy::Snowball).unwrap();

    assert!(avalanche.total_interest_paid <= snowball.total_interest_paid);
    assert_eq!(avalanche.payoff_order[0], DebtId(1));
    assert_eq!(snowball.payoff_order[0], DebtId(0));

    let best = comparison.best().unwrap();
    assert!(best.total_interest_paid <= avalanche.total_interest_paid);
}

#[test]
fn test_savings_against_minimum_payments() {
    let config = household();
    let comparison = compare_strategies(&config);

    let baseline = &comparison.minimum_only;
    assert!(baseline.complete);
    assert_eq!(baseline.strategy, config.strategy);

    for strategy in PayoffStrategy::ALL {
        assert!(comparison.interest_saved(strategy).unwrap() > 0.0);
        assert!(comparison.months_saved(strategy).unwrap() > 0);
    }
}

#[test]
fn test_best_skips_incomplete_outcomes() {
    // Nothing amortizes with a budget equal to the minimums
    let config = plan(
        vec![debt(0, 20_000.0, 30.0, 100.0), debt(1, 15_000.0, 28.0, 100.0)],
        200.0,
        PayoffStrategy::Avalanche,
    );

    let comparison = compare_strategies(&config);

    assert!(comparison.outcomes.iter().all(|o| !o.complete));
    assert!(comparison.best().is_none());
}
