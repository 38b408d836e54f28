//! Plan metadata for human-readable names
//!
//! `PayoffMetadata` provides bidirectional mappings between debt names and
//! ids, enabling the builder DSL and front-ends to refer to debts by name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::DebtId;

/// Holds debt names and descriptions, along with a name-to-id reverse lookup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoffMetadata {
    /// Debt ID to display name
    pub names: FxHashMap<DebtId, String>,
    /// Debt ID to free-form description
    #[serde(default)]
    pub descriptions: FxHashMap<DebtId, String>,
    /// Name to Debt ID reverse lookup
    #[serde(default)]
    pub debt_names: FxHashMap<String, DebtId>,
}

impl PayoffMetadata {
    /// Create a new empty metadata instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a debt with its name and optional description
    pub fn register_debt(&mut self, id: DebtId, name: String, description: Option<String>) {
        self.debt_names.insert(name.clone(), id);
        self.names.insert(id, name);
        if let Some(desc) = description {
            self.descriptions.insert(id, desc);
        }
    }

    #[must_use]
    pub fn debt_id(&self, name: &str) -> Option<DebtId> {
        self.debt_names.get(name).copied()
    }

    #[must_use]
    pub fn debt_name(&self, id: DebtId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn description(&self, id: DebtId) -> Option<&str> {
        self.descriptions.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut metadata = PayoffMetadata::new();
        metadata.register_debt(DebtId(0), "Visa".into(), Some("Rewards card".into()));
        metadata.register_debt(DebtId(1), "Car".into(), None);

        assert_eq!(metadata.debt_id("Visa"), Some(DebtId(0)));
        assert_eq!(metadata.debt_name(DebtId(1)), Some("Car"));
        assert_eq!(metadata.description(DebtId(0)), Some("Rewards card"));
        assert_eq!(metadata.description(DebtId(1)), None);
        assert_eq!(metadata.debt_id("Boat"), None);
    }
}
