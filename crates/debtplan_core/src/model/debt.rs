//! Debts being paid down by the simulator

use serde::{Deserialize, Serialize};

use super::ids::DebtId;

/// Category of a debt. Carried through to results for display, never read by
/// the payoff arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    Mortgage,
    Auto,
    Student,
    Medical,
    Personal,
    #[default]
    Other,
}

impl DebtType {
    pub fn label(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "Credit Card",
            DebtType::Mortgage => "Mortgage",
            DebtType::Auto => "Auto Loan",
            DebtType::Student => "Student Loan",
            DebtType::Medical => "Medical",
            DebtType::Personal => "Personal Loan",
            DebtType::Other => "Other",
        }
    }
}

/// A liability with a balance, an annual rate and a fixed minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    /// Outstanding balance, never negative
    pub balance: f64,
    /// Annual nominal rate as a percentage (12.0 means 12% APR)
    pub interest_rate: f64,
    /// Amount due each month while the balance is positive
    pub minimum_payment: f64,
    #[serde(rename = "type", default)]
    pub debt_type: DebtType,
}

impl Debt {
    pub fn new(
        id: DebtId,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            debt_type: DebtType::Other,
        }
    }

    #[must_use]
    pub fn with_type(mut self, debt_type: DebtType) -> Self {
        self.debt_type = debt_type;
        self
    }

    /// Simple monthly rate: annual percentage / 100 / 12
    #[inline]
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.interest_rate)
    }

    /// Interest accrued on the current balance over one month
    #[inline]
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// Whether the minimum payment alone shrinks the balance
    pub fn amortizes(&self) -> bool {
        self.minimum_payment > self.monthly_interest()
    }

    /// The annual interest cost at the current balance, used by the balanced strategy
    #[inline]
    pub fn annual_interest_cost(&self) -> f64 {
        self.interest_rate / 100.0 * self.balance
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

/// Convert an annual percentage rate to the simple monthly rate
#[inline]
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_interest() {
        let debt = Debt::new(DebtId(0), "Card", 1200.0, 12.0, 200.0);
        assert!((debt.monthly_rate() - 0.01).abs() < 1e-12);
        assert!((debt.monthly_interest() - 12.0).abs() < 1e-9);
        assert!(debt.amortizes());
    }

    #[test]
    fn test_non_amortizing_minimum() {
        // 24% on 10k accrues 200/month
        let debt = Debt::new(DebtId(0), "Card", 10_000.0, 24.0, 150.0);
        assert!(!debt.amortizes());
    }

    #[test]
    fn test_debt_type_serde_names() {
        let debt = Debt::new(DebtId(3), "Visa", 500.0, 19.9, 25.0).with_type(DebtType::CreditCard);
        let json = serde_json::to_string(&debt).unwrap();
        assert!(json.contains("\"type\":\"credit_card\""));

        let parsed: Debt = serde_json::from_str(
            r#"{"id":1,"name":"Misc","balance":10.0,"interest_rate":0.0,"minimum_payment":5.0}"#,
        )
        .unwrap();
        assert_eq!(parsed.debt_type, DebtType::Other);
    }
}
