use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

use crate::error::CanRepayError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::CanRepayResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub monthly_income: Money,
    /// Category name to monthly amount, e.g. rent, utilities, groceries.
    #[serde(default)]
    pub fixed_expenses: BTreeMap<String, Money>,
    /// Loan payment to fit into what is left over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_payment: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub monthly_income: Money,
    pub total_expenses: Money,
    pub remaining: Money,
    pub remaining_after_payment: Option<Money>,
}

/// Income left after fixed expenses, and after the planned loan payment.
pub fn compute_monthly_budget(
    input: &BudgetInput,
) -> CanRepayResult<ComputationOutput<BudgetSnapshot>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_income < Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "monthly_income",
            "Monthly income cannot be negative",
        ));
    }
    if let Some((category, _)) = input
        .fixed_expenses
        .iter()
        .find(|(_, amount)| **amount < Decimal::ZERO)
    {
        return Err(CanRepayError::invalid(
            &format!("fixed_expenses.{category}"),
            "Expense amounts cannot be negative",
        ));
    }
    if matches!(input.planned_payment, Some(p) if p < Decimal::ZERO) {
        return Err(CanRepayError::invalid(
            "planned_payment",
            "Planned payment cannot be negative",
        ));
    }

    let total_expenses: Money = input.fixed_expenses.values().copied().sum();
    let remaining = input.monthly_income - total_expenses;
    let remaining_after_payment = input.planned_payment.map(|p| remaining - p);

    if remaining < Decimal::ZERO {
        warnings.push(format!("Fixed expenses exceed income by {}", -remaining));
    } else if let Some(after) = remaining_after_payment.filter(|a| *a < Decimal::ZERO) {
        warnings.push(format!(
            "Planned payment leaves a shortfall of {} each month",
            -after
        ));
    }

    debug!(%total_expenses, %remaining, "budget computed");

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Budget: income - Σ fixed expenses - planned payment",
        input,
        warnings,
        elapsed,
        BudgetSnapshot {
            monthly_income: input.monthly_income,
            total_expenses,
            remaining,
            remaining_after_payment,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_expense_names_category() {
        let input = BudgetInput {
            monthly_income: dec!(3000),
            fixed_expenses: BTreeMap::from([("rent".to_string(), dec!(-1))]),
            planned_payment: None,
        };
        match compute_monthly_budget(&input).unwrap_err() {
            CanRepayError::InvalidInput { field, .. } => assert_eq!(field, "fixed_expenses.rent"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_expenses_leaves_full_income() {
        let input = BudgetInput {
            monthly_income: dec!(2500),
            fixed_expenses: BTreeMap::new(),
            planned_payment: None,
        };
        let out = compute_monthly_budget(&input).unwrap();
        assert_eq!(out.result.remaining, dec!(2500));
        assert_eq!(out.result.remaining_after_payment, None);
    }
}
