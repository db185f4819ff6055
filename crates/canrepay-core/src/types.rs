use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::CanRepayResult;

/// All monetary values, in Canadian dollars. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates as entered by the borrower, in percent (7.2 = 7.2%).
pub type Percent = Decimal;

/// Rates expressed as decimals (0.006 = 0.6%).
pub type Rate = Decimal;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);
pub const HUNDRED: Decimal = dec!(100);

/// Convert an annual percentage into a monthly decimal rate.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / HUNDRED / MONTHS_PER_YEAR
}

/// Round for display the way a borrower expects (half away from zero).
pub fn round_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Parse a JSON payload into an operation input.
pub fn from_json<T: DeserializeOwned>(json: &str) -> CanRepayResult<T> {
    Ok(serde_json::from_str(json)?)
}

/// Serialise an operation output to compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> CanRepayResult<String> {
    Ok(serde_json::to_string(value)?)
}
