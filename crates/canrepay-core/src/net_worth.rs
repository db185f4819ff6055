use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::types::{with_metadata, ComputationOutput, Money};

/// Balance-sheet entries for a student. Absent entries count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetWorthInput {
    #[serde(default)]
    pub savings: Option<Money>,
    #[serde(default)]
    pub vehicle_value: Option<Money>,
    #[serde(default)]
    pub investment_balance: Option<Money>,
    #[serde(default)]
    pub federal_loan_balance: Option<Money>,
    #[serde(default)]
    pub provincial_loan_balance: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSnapshot {
    pub assets: Money,
    pub liabilities: Money,
    pub net_worth: Money,
}

fn sum_entries(entries: &[(&str, Option<Money>)], warnings: &mut Vec<String>) -> Money {
    entries
        .iter()
        .map(|(name, value)| {
            let v = value.unwrap_or(Decimal::ZERO);
            if v < Decimal::ZERO {
                warnings.push(format!("{name} is negative ({v}); summed as entered"));
            }
            v
        })
        .sum()
}

/// Assets minus liabilities. Never fails.
pub fn compute_net_worth(input: &NetWorthInput) -> ComputationOutput<NetWorthSnapshot> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let assets = sum_entries(
        &[
            ("savings", input.savings),
            ("vehicle_value", input.vehicle_value),
            ("investment_balance", input.investment_balance),
        ],
        &mut warnings,
    );
    let liabilities = sum_entries(
        &[
            ("federal_loan_balance", input.federal_loan_balance),
            ("provincial_loan_balance", input.provincial_loan_balance),
        ],
        &mut warnings,
    );
    let net_worth = assets - liabilities;

    debug!(%assets, %liabilities, %net_worth, "net worth computed");

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Net worth: (savings + vehicle + investments) - (federal + provincial loans)",
        input,
        warnings,
        elapsed,
        NetWorthSnapshot {
            assets,
            liabilities,
            net_worth,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_input_is_zero() {
        let out = compute_net_worth(&NetWorthInput::default());
        assert_eq!(out.result.net_worth, Decimal::ZERO);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_negative_entry_warns() {
        let input = NetWorthInput {
            savings: Some(dec!(-100)),
            ..Default::default()
        };
        let out = compute_net_worth(&input);
        assert_eq!(out.result.net_worth, dec!(-100));
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("savings"));
    }
}
