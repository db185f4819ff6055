pub mod assumptions;
pub mod error;
pub mod input;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "net_worth")]
pub mod net_worth;

#[cfg(feature = "repayment_plan")]
pub mod repayment_plan;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "budget")]
pub mod budget;

pub use error::CanRepayError;
pub use types::*;

/// Standard result type for all canrepay operations
pub type CanRepayResult<T> = Result<T, CanRepayError>;
