//! Simulation metrics collection for profiling and debugging
//!
//! Counts the work done by a payoff run and records whether the month cap
//! cut it short.

/// Metrics collected during simulation execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationMetrics {
    /// Months stepped through by the simulation loop
    pub months_simulated: u32,
    /// Times the open debts were re-sorted by the strategy comparator
    pub sort_passes: u32,
    /// Debts whose balance reached zero during the run
    pub payoffs: u32,
    /// Most debts open at the start of any single month
    pub max_active_debts: usize,
    /// Whether the run stopped at the month cap with debts still open
    pub cap_hit: bool,
}

impl SimulationMetrics {
    /// Create empty metrics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a simulated month with `active` open debts
    pub fn record_month(&mut self, active: usize) {
        self.months_simulated += 1;
        if active > self.max_active_debts {
            self.max_active_debts = active;
        }
    }

    pub fn record_sort(&mut self) {
        self.sort_passes += 1;
    }

    pub fn record_payoff(&mut self) {
        self.payoffs += 1;
    }

    pub fn record_cap_hit(&mut self) {
        self.cap_hit = true;
    }

    /// Average number of sorts per simulated month
    #[must_use]
    pub fn sorts_per_month(&self) -> f64 {
        if self.months_simulated == 0 {
            0.0
        } else {
            f64::from(self.sort_passes) / f64::from(self.months_simulated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_basic() {
        let mut metrics = SimulationMetrics::new();

        metrics.record_sort();
        metrics.record_month(3);
        metrics.record_sort();
        metrics.record_month(2);
        metrics.record_payoff();
        metrics.record_sort();

        assert_eq!(metrics.months_simulated, 2);
        assert_eq!(metrics.sort_passes, 3);
        assert_eq!(metrics.payoffs, 1);
        assert_eq!(metrics.max_active_debts, 3);
        assert!(!metrics.cap_hit);
        assert!((metrics.sorts_per_month() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_cap_recording() {
        let mut metrics = SimulationMetrics::new();
        assert_eq!(metrics.sorts_per_month(), 0.0);

        metrics.record_cap_hit();
        assert!(metrics.cap_hit);
    }
}
