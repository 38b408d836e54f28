//! Unique identifiers for simulation entities

use serde::{Deserialize, Serialize};

/// Unique identifier for a Debt within a payoff plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebtId(pub u16);

impl std::fmt::Display for DebtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "debt#{}", self.0)
    }
}
