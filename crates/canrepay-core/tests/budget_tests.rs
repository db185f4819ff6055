use std::collections::BTreeMap;

use canrepay_core::budget::{compute_monthly_budget, BudgetInput};
use rust_decimal_macros::dec;

// ===========================================================================
// Monthly budget
// ===========================================================================

fn student_expenses() -> BTreeMap<String, rust_decimal::Decimal> {
    BTreeMap::from([
        ("rent".to_string(), dec!(800)),
        ("utilities".to_string(), dec!(150)),
        ("groceries".to_string(), dec!(300)),
        ("transportation".to_string(), dec!(100)),
    ])
}

#[test]
fn test_remaining_after_fixed_expenses() {
    let input = BudgetInput {
        monthly_income: dec!(3000),
        fixed_expenses: student_expenses(),
        planned_payment: None,
    };
    let out = compute_monthly_budget(&input).unwrap();
    assert_eq!(out.result.total_expenses, dec!(1350));
    assert_eq!(out.result.remaining, dec!(1650));
    assert!(out.warnings.is_empty());
}

#[test]
fn test_planned_payment_fits() {
    let input = BudgetInput {
        monthly_income: dec!(3000),
        fixed_expenses: student_expenses(),
        planned_payment: Some(dec!(300)),
    };
    let out = compute_monthly_budget(&input).unwrap();
    assert_eq!(out.result.remaining_after_payment, Some(dec!(1350)));
}

#[test]
fn test_planned_payment_shortfall_warns() {
    let input = BudgetInput {
        monthly_income: dec!(1500),
        fixed_expenses: student_expenses(),
        planned_payment: Some(dec!(400)),
    };
    let out = compute_monthly_budget(&input).unwrap();
    assert_eq!(out.result.remaining_after_payment, Some(dec!(-250)));
    assert!(out.warnings[0].contains("shortfall of 250"));
}

#[test]
fn test_expenses_over_income_warns() {
    let input = BudgetInput {
        monthly_income: dec!(1000),
        fixed_expenses: student_expenses(),
        planned_payment: None,
    };
    let out = compute_monthly_budget(&input).unwrap();
    assert_eq!(out.result.remaining, dec!(-350));
    assert!(out.warnings[0].contains("exceed income"));
}

#[test]
fn test_negative_income_rejected() {
    let input = BudgetInput {
        monthly_income: dec!(-1),
        fixed_expenses: BTreeMap::new(),
        planned_payment: None,
    };
    assert!(compute_monthly_budget(&input).is_err());
}
