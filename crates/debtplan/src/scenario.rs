//! Scenario files
//!
//! A scenario is a human-edited YAML file describing the debts and the monthly
//! budget. Debts are referenced by name; ids are assigned in file order.
//!
//! ```yaml
//! name: Household
//! monthly_budget: 1100
//! strategy: avalanche
//! start_date: 2025-01-01
//! debts:
//!   - name: Visa
//!     type: credit_card
//!     balance: 6500
//!     interest_rate: 24.9
//!     minimum_payment: 180
//! ```

use std::fs;
use std::path::Path;

use debtplan_core::config::{DebtBuilder, PayoffBuilder, PayoffConfig, PayoffMetadata};
use debtplan_core::model::DebtType;
use debtplan_core::strategy::PayoffStrategy;
use serde::{Deserialize, Serialize};

/// A payoff scenario in human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub monthly_budget: f64,

    #[serde(default)]
    pub strategy: PayoffStrategy,

    /// Reference date for payoff dates; today when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<jiff::civil::Date>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_months: Option<u32>,

    #[serde(default)]
    pub debts: Vec<DebtData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtData {
    pub name: String,
    #[serde(rename = "type", default)]
    pub debt_type: DebtType,
    pub balance: f64,
    /// Annual percentage rate
    #[serde(default)]
    pub interest_rate: f64,
    pub minimum_payment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error types for scenario loading
#[derive(Debug)]
pub enum ScenarioError {
    Io(String),
    Parse(String),
    DuplicateName(String),
    Invalid(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(msg) => write!(f, "IO error: {}", msg),
            ScenarioError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ScenarioError::DuplicateName(name) => {
                write!(f, "debt name '{}' is used more than once", name)
            }
            ScenarioError::Invalid(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl ScenarioData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ScenarioError::Io(format!("{}: {}", path.display(), e)))?;
        let scenario = Self::from_yaml(&content)
            .map_err(|e| ScenarioError::Parse(format!("{}: {}", path.display(), e)))?;
        scenario.check_names()?;

        tracing::debug!(
            path = %path.display(),
            debts = scenario.debts.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Debt names are lookup keys, so they must be unique
    fn check_names(&self) -> Result<(), ScenarioError> {
        let mut seen = std::collections::HashSet::new();
        for debt in &self.debts {
            if !seen.insert(debt.name.as_str()) {
                return Err(ScenarioError::DuplicateName(debt.name.clone()));
            }
        }
        Ok(())
    }

    /// Convert to a core configuration, assigning ids in file order
    pub fn to_config(&self) -> Result<(PayoffConfig, PayoffMetadata), ScenarioError> {
        let mut builder = PayoffBuilder::new()
            .monthly_budget(self.monthly_budget)
            .strategy(self.strategy);

        if let Some(date) = self.start_date {
            builder = builder.start_date(date);
        }
        if let Some(months) = self.max_months {
            builder = builder.max_months(months);
        }

        for debt in &self.debts {
            let mut entry = DebtBuilder::new(debt.name.clone(), debt.debt_type)
                .balance(debt.balance)
                .rate(debt.interest_rate)
                .minimum(debt.minimum_payment);
            if let Some(desc) = &debt.description {
                entry = entry.description(desc.clone());
            }
            builder = builder.debt(entry);
        }

        builder
            .build()
            .map_err(|e| ScenarioError::Invalid(e.to_string()))
    }
}
