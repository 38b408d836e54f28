//! Where each strategy sends the surplus
//!
//! Every debt pays its minimum; the leftover budget goes to the debt the
//! strategy ranks first among those still open, re-ranked every month.

use super::{debt, plan};
use crate::model::{DebtId, PayoffResult};
use crate::simulation::simulate;
use crate::strategy::PayoffStrategy;

const EPS: f64 = 1e-6;

fn payments(result: &PayoffResult, id: u16) -> Vec<f64> {
    result
        .debt(DebtId(id))
        .unwrap()
        .schedule
        .iter()
        .map(|e| e.payment)
        .collect()
}

fn payoff_month(result: &PayoffResult, id: u16) -> u32 {
    result.debt(DebtId(id)).unwrap().payoff_month.unwrap()
}

#[test]
fn test_snowball_targets_smallest_balance() {
    let config = plan(
        vec![debt(0, 300.0, 12.0, 25.0), debt(1, 500.0, 12.0, 25.0)],
        150.0,
        PayoffStrategy::Snowball,
    );

    let result = simulate(&config);

    let small_done = payoff_month(&result, 0);
    assert!(small_done < payoff_month(&result, 1));
    assert_eq!(result.payoff_order(), vec![DebtId(0), DebtId(1)]);

    // Larger balance gets only its minimum until the small one is gone
    let large = payments(&result, 1);
    for month in 0..small_done as usize {
        assert!(
            (large[month] - 25.0).abs() < EPS,
            "month {} large debt paid {}",
            month + 1,
            large[month]
        );
    }
    assert!((large[small_done as usize] - 150.0).abs() < EPS);

    let small = payments(&result, 0);
    assert!((small[0] - 125.0).abs() < EPS);
}

#[test]
fn test_surplus_in_payoff_month_is_not_redirected() {
    let config = plan(
        vec![debt(0, 300.0, 12.0, 25.0), debt(1, 500.0, 12.0, 25.0)],
        150.0,
        PayoffStrategy::Snowball,
    );

    let result = simulate(&config);
    let month = payoff_month(&result, 0) as usize;

    // The closing payment is less than the target's share; the rest stays unspent
    let row = result.per_month_summary[month - 1];
    assert!(row.payment < 150.0);
    assert!((payments(&result, 1)[month - 1] - 25.0).abs() < EPS);
}

#[test]
fn test_avalanche_targets_highest_rate() {
    let config = plan(
        vec![debt(0, 1_000.0, 5.0, 30.0), debt(1, 1_000.0, 20.0, 30.0)],
        200.0,
        PayoffStrategy::Avalanche,
    );

    let result = simulate(&config);

    let high_rate_done = payoff_month(&result, 1);
    assert!(high_rate_done < payoff_month(&result, 0));

    let low_rate = payments(&result, 0);
    assert!(
        low_rate[..high_rate_done as usize]
            .iter()
            .all(|p| (p - 30.0).abs() < EPS)
    );
    assert!((payments(&result, 1)[0] - 170.0).abs() < EPS);
}

#[test]
fn test_avalanche_ignores_balance_size() {
    let config = plan(
        vec![debt(0, 200.0, 3.0, 20.0), debt(1, 6_000.0, 24.0, 150.0)],
        400.0,
        PayoffStrategy::Avalanche,
    );

    let result = simulate(&config);

    // The tiny low-rate balance still only gets its minimum in month 1
    assert!((payments(&result, 0)[0] - 20.0).abs() < EPS);
    assert!((payments(&result, 1)[0] - 380.0).abs() < EPS);
}

#[test]
fn test_highest_and_lowest_payment_first() {
    let debts = vec![debt(0, 2_000.0, 10.0, 50.0), debt(1, 2_000.0, 10.0, 120.0)];

    let highest = simulate(&plan(debts.clone(), 300.0, PayoffStrategy::HighestPaymentFirst));
    assert!((payments(&highest, 1)[0] - 250.0).abs() < EPS);
    assert!((payments(&highest, 0)[0] - 50.0).abs() < EPS);
    assert_eq!(highest.payoff_order()[0], DebtId(1));

    let lowest = simulate(&plan(debts, 300.0, PayoffStrategy::LowestPaymentFirst));
    assert!((payments(&lowest, 0)[0] - 180.0).abs() < EPS);
    assert!((payments(&lowest, 1)[0] - 120.0).abs() < EPS);
    assert_eq!(lowest.payoff_order()[0], DebtId(0));
}

#[test]
fn test_balanced_resorts_as_interest_cost_changes() {
    // Annual cost: 5% of 5000 = 250 vs 20% of 1500 = 300
    let config = plan(
        vec![debt(0, 5_000.0, 5.0, 100.0), debt(1, 1_500.0, 20.0, 50.0)],
        500.0,
        PayoffStrategy::Balanced,
    );

    let result = simulate(&config);

    let big = payments(&result, 0);
    let costly = payments(&result, 1);

    // Month 1 targets the costlier debt
    assert!((costly[0] - 400.0).abs() < EPS);
    assert!((big[0] - 100.0).abs() < EPS);

    // Its balance drops to 1125 (cost 225), below the other's ~246, so month 2 switches
    assert!((costly[1] - 50.0).abs() < EPS);
    assert!((big[1] - 450.0).abs() < EPS);

    assert!(result.is_complete());
}

#[test]
fn test_equal_debts_follow_input_order() {
    let config = plan(
        vec![debt(4, 800.0, 10.0, 40.0), debt(2, 800.0, 10.0, 40.0)],
        200.0,
        PayoffStrategy::Snowball,
    );

    let result = simulate(&config);

    assert!((payments(&result, 4)[0] - 160.0).abs() < EPS);
    assert!((payments(&result, 2)[0] - 40.0).abs() < EPS);
    assert_eq!(result.payoff_order()[0], DebtId(4));
}

#[test]
fn test_debts_tied_mid_run_fall_back_to_input_order() {
    // Month 1 targets the smaller second debt; both then owe 240
    let config = plan(
        vec![debt(0, 300.0, 0.0, 60.0), debt(1, 260.0, 0.0, 10.0)],
        80.0,
        PayoffStrategy::Snowball,
    );

    let result = simulate(&config);

    let first = payments(&result, 0);
    let second = payments(&result, 1);
    assert!((first[0] - 60.0).abs() < EPS);
    assert!((second[0] - 20.0).abs() < EPS);

    // Tie in month 2: the debt listed first takes the surplus
    assert!((first[1] - 70.0).abs() < EPS);
    assert!((second[1] - 10.0).abs() < EPS);
}
