//! Parsing of raw text entry into amounts.
//!
//! The calculators validate strictly. Leniency lives here: forms where a
//! partial entry is still meaningful (the net-worth snapshot) go through
//! [`parse_amount_or_zero`], which substitutes zero for anything blank or
//! unparseable. Everything else goes through [`parse_amount`].

use std::str::FromStr;

use rust_decimal::Decimal;
#[cfg(feature = "net_worth")]
use serde::{Deserialize, Serialize};

use crate::error::CanRepayError;
use crate::types::Money;
use crate::CanRepayResult;

fn normalise(raw: &str) -> String {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    unsigned.replace(',', "")
}

/// Strictly parse a dollar amount such as `"40000"`, `"$40,000.50"`.
pub fn parse_amount(field: &str, raw: &str) -> CanRepayResult<Money> {
    let cleaned = normalise(raw);
    if cleaned.is_empty() {
        return Err(CanRepayError::invalid(field, "a value is required"));
    }
    Decimal::from_str(&cleaned)
        .map_err(|_| CanRepayError::invalid(field, format!("'{}' is not a number", raw.trim())))
}

/// Parse an amount, substituting zero for a missing, blank, or non-numeric entry.
pub fn parse_amount_or_zero(raw: Option<&str>) -> Money {
    raw.map(normalise)
        .and_then(|s| Decimal::from_str(&s).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Net-worth form fields exactly as typed.
#[cfg(feature = "net_worth")]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNetWorthFields {
    pub savings: Option<String>,
    pub vehicle_value: Option<String>,
    pub investment_balance: Option<String>,
    pub federal_loan_balance: Option<String>,
    pub provincial_loan_balance: Option<String>,
}

#[cfg(feature = "net_worth")]
impl RawNetWorthFields {
    /// Apply the zero-substitution policy to every field.
    pub fn to_input(&self) -> crate::net_worth::NetWorthInput {
        let lenient = |f: &Option<String>| Some(parse_amount_or_zero(f.as_deref()));
        crate::net_worth::NetWorthInput {
            savings: lenient(&self.savings),
            vehicle_value: lenient(&self.vehicle_value),
            investment_balance: lenient(&self.investment_balance),
            federal_loan_balance: lenient(&self.federal_loan_balance),
            provincial_loan_balance: lenient(&self.provincial_loan_balance),
        }
    }
}
