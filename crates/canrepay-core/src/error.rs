use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanRepayError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(
        "Non-convergent payment: a monthly payment of {monthly_payment} does not cover \
         the first month's interest of {interest_accrual}, so the loan is never repaid"
    )]
    NonConvergentPayment {
        monthly_payment: Decimal,
        interest_accrual: Decimal,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CanRepayError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CanRepayError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CanRepayError {
    fn from(e: serde_json::Error) -> Self {
        CanRepayError::Serialization(e.to_string())
    }
}
