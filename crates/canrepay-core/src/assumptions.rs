use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

/// Standard repayment term for Canada Student Loans and most provincial loans.
pub const STANDARD_TERM_MONTHS: u32 = 120;

/// Years after graduation the projection assumes before the balance is settled.
pub const DEFAULT_GRACE_YEARS: u32 = 5;

/// Rate and plan assumptions that change with policy, not with the borrower.
///
/// Defaults reflect Alberta: federal loans interest-free, provincial loans at
/// 7.2%. Callers load overrides from a file when rates are revised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepaymentAssumptions {
    pub federal_rate_pct: Percent,
    pub provincial_rate_pct: Percent,
    pub term_months: u32,
    pub grace_years: u32,
    /// Lower bound of the income-share slider.
    pub min_payment_pct: Percent,
    /// Upper bound of the income-share slider.
    pub max_payment_pct: Percent,
}

impl Default for RepaymentAssumptions {
    fn default() -> Self {
        Self {
            federal_rate_pct: Decimal::ZERO,
            provincial_rate_pct: dec!(7.2),
            term_months: STANDARD_TERM_MONTHS,
            grace_years: DEFAULT_GRACE_YEARS,
            min_payment_pct: dec!(5),
            max_payment_pct: dec!(50),
        }
    }
}

impl RepaymentAssumptions {
    /// Whether an income share falls inside the slider bounds. Never clamps.
    pub fn payment_percentage_in_range(&self, pct: Percent) -> bool {
        pct >= self.min_payment_pct && pct <= self.max_payment_pct
    }
}
