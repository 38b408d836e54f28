use std::fmt;

use crate::config::MAX_MONTHS;
use crate::model::DebtId;

/// Which numeric field of an input failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Balance,
    InterestRate,
    MinimumPayment,
    MonthlyBudget,
    Principal,
    TermMonths,
    ExtraPayment,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Balance => "balance",
            Field::InterestRate => "interest rate",
            Field::MinimumPayment => "minimum payment",
            Field::MonthlyBudget => "monthly budget",
            Field::Principal => "principal",
            Field::TermMonths => "term",
            Field::ExtraPayment => "extra payment",
        };
        f.write_str(name)
    }
}

/// Errors raised when payoff inputs cannot be simulated meaningfully
///
/// The simulator itself never fails; these come from the validation done by
/// `PayoffConfig::validate` and the loan amortization helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A value is NaN or infinite
    NotFinite {
        debt_id: Option<DebtId>,
        field: Field,
    },
    /// A value that must be zero or positive is negative
    Negative {
        debt_id: Option<DebtId>,
        field: Field,
        value: f64,
    },
    /// Two debts share the same id
    DuplicateDebtId(DebtId),
    /// A loan term of zero months
    ZeroTerm,
    /// A loan term longer than `MAX_MONTHS`
    TermTooLong(u32),
    /// A month cap of zero or above `MAX_MONTHS`
    MonthCapOutOfRange(u32),
    /// More debts than `DebtId` can number
    TooManyDebts { count: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotFinite {
                debt_id: Some(id),
                field,
            } => write!(f, "{id}: {field} must be a finite number"),
            ValidationError::NotFinite {
                debt_id: None,
                field,
            } => write!(f, "{field} must be a finite number"),
            ValidationError::Negative {
                debt_id: Some(id),
                field,
                value,
            } => write!(f, "{id}: {field} must not be negative (got {value})"),
            ValidationError::Negative {
                debt_id: None,
                field,
                value,
            } => write!(f, "{field} must not be negative (got {value})"),
            ValidationError::DuplicateDebtId(id) => write!(f, "duplicate debt id {id}"),
            ValidationError::ZeroTerm => write!(f, "loan term must be at least one month"),
            ValidationError::TermTooLong(months) => write!(
                f,
                "loan term of {months} months exceeds the {MAX_MONTHS} month limit"
            ),
            ValidationError::MonthCapOutOfRange(months) => write!(
                f,
                "month cap must be between 1 and {MAX_MONTHS} (got {months})"
            ),
            ValidationError::TooManyDebts { count } => write!(
                f,
                "{count} debts given; at most {} are supported",
                usize::from(u16::MAX) + 1
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Check that a value is finite and not negative
pub(crate) fn non_negative(debt_id: Option<DebtId>, field: Field, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { debt_id, field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            debt_id,
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_checks() {
        assert!(non_negative(None, Field::MonthlyBudget, 0.0).is_ok());
        assert_eq!(
            non_negative(Some(DebtId(2)), Field::Balance, -1.0),
            Err(ValidationError::Negative {
                debt_id: Some(DebtId(2)),
                field: Field::Balance,
                value: -1.0
            })
        );
        assert_eq!(
            non_negative(None, Field::InterestRate, f64::NAN),
            Err(ValidationError::NotFinite {
                debt_id: None,
                field: Field::InterestRate
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Negative {
            debt_id: Some(DebtId(4)),
            field: Field::MinimumPayment,
            value: -25.0,
        };
        assert_eq!(
            err.to_string(),
            "debt#4: minimum payment must not be negative (got -25)"
        );
        assert_eq!(
            ValidationError::DuplicateDebtId(DebtId(1)).to_string(),
            "duplicate debt id debt#1"
        );
        assert_eq!(
            ValidationError::MonthCapOutOfRange(0).to_string(),
            "month cap must be between 1 and 600 (got 0)"
        );
    }
}
