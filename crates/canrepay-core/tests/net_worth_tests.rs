use canrepay_core::input::RawNetWorthFields;
use canrepay_core::net_worth::{compute_net_worth, NetWorthInput, NetWorthSnapshot};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Net worth
// ===========================================================================

fn student() -> NetWorthInput {
    NetWorthInput {
        savings: Some(dec!(5000)),
        vehicle_value: Some(dec!(10000)),
        investment_balance: Some(dec!(2000)),
        federal_loan_balance: Some(dec!(15000)),
        provincial_loan_balance: Some(dec!(10000)),
    }
}

#[test]
fn test_student_balance_sheet_is_negative() {
    let out = compute_net_worth(&student());
    assert_eq!(
        out.result,
        NetWorthSnapshot {
            assets: dec!(17000),
            liabilities: dec!(25000),
            net_worth: dec!(-8000.00),
        }
    );
    assert!(out.warnings.is_empty());
}

#[test]
fn test_field_order_does_not_matter() {
    // Swapping values between fields on the same side leaves the totals unchanged
    let mut shuffled = student();
    shuffled.savings = Some(dec!(2000));
    shuffled.investment_balance = Some(dec!(5000));
    shuffled.federal_loan_balance = Some(dec!(10000));
    shuffled.provincial_loan_balance = Some(dec!(15000));

    assert_eq!(
        compute_net_worth(&student()).result,
        compute_net_worth(&shuffled).result
    );
}

#[test]
fn test_missing_fields_count_as_zero() {
    let input = NetWorthInput {
        savings: Some(dec!(1200)),
        ..Default::default()
    };
    let out = compute_net_worth(&input);
    assert_eq!(out.result.liabilities, Decimal::ZERO);
    assert_eq!(out.result.net_worth, dec!(1200));
}

#[test]
fn test_raw_text_entry_uses_zero_substitution() {
    let raw = RawNetWorthFields {
        savings: Some("5000".into()),
        vehicle_value: Some("".into()),
        investment_balance: Some("abc".into()),
        federal_loan_balance: Some("$15,000".into()),
        provincial_loan_balance: None,
    };
    let out = compute_net_worth(&raw.to_input());
    assert_eq!(out.result.assets, dec!(5000));
    assert_eq!(out.result.liabilities, dec!(15000));
    assert_eq!(out.result.net_worth, dec!(-10000));
}

#[test]
fn test_deserialises_partial_json() {
    let input: NetWorthInput =
        serde_json::from_str(r#"{"savings": "250.50", "provincial_loan_balance": "100"}"#)
            .unwrap();
    let out = compute_net_worth(&input);
    assert_eq!(out.result.net_worth, dec!(150.50));
}
