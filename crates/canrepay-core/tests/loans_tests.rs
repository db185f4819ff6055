use canrepay_core::loans::{project_total_owed, summarize_loans, LoanLedger, ProjectionInput};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

// ===========================================================================
// Ledger and progress
// ===========================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ledger_with_two_payments() -> LoanLedger {
    let mut ledger = LoanLedger::new(dec!(24_000), dec!(16_000));
    ledger.record_payment(date(2023, 3, 15), dec!(1000)).unwrap();
    ledger.record_payment(date(2023, 9, 1), dec!(1000)).unwrap();
    ledger
}

#[test]
fn test_summary_from_payment_log() {
    let out = summarize_loans(&ledger_with_two_payments());
    let s = &out.result;

    assert_eq!(s.total_loans, dec!(40_000));
    assert_eq!(s.payments_made, dec!(2000));
    assert_eq!(s.outstanding, dec!(38_000));
    // 2,000 / 40,000 = 5%
    assert_eq!(s.progress_pct, dec!(5));
    assert_eq!(s.payment_count, 2);
    assert_eq!(s.last_payment_date, Some(date(2023, 9, 1)));
}

#[test]
fn test_payment_log_is_append_only() {
    let mut ledger = ledger_with_two_payments();
    ledger.record_payment(date(2024, 1, 10), dec!(250.75)).unwrap();

    assert_eq!(ledger.payments.len(), 3);
    assert_eq!(ledger.payments[0].date, date(2023, 3, 15));
    assert_eq!(ledger.payments[2].amount, dec!(250.75));
    assert_eq!(ledger.outstanding(), dec!(37_749.25));
}

// ===========================================================================
// Projection
// ===========================================================================

#[test]
fn test_projection_charges_provincial_interest_until_grace_ends() {
    let input = ProjectionInput {
        ledger: ledger_with_two_payments(),
        graduation_date: date(2027, 6, 1),
        as_of: date(2026, 10, 18),
        provincial_rate_pct: dec!(7.2),
        grace_years: None,
    };
    let out = project_total_owed(&input).unwrap();
    let p = &out.result;

    // 2027 + 5 - 2026 = 6 years
    assert_eq!(p.years_remaining, 6);
    // 16,000 × 7.2% × 6 = 6,912
    assert_eq!(p.provincial_interest, dec!(6912));
    assert_eq!(p.projected_total, dec!(44_912));
}

#[test]
fn test_projection_custom_grace_years() {
    let input = ProjectionInput {
        ledger: LoanLedger::new(dec!(0), dec!(10_000)),
        graduation_date: date(2026, 5, 1),
        as_of: date(2026, 10, 18),
        provincial_rate_pct: dec!(5),
        grace_years: Some(2),
    };
    let out = project_total_owed(&input).unwrap();
    assert_eq!(out.result.years_remaining, 2);
    assert_eq!(out.result.projected_total, dec!(11_000));
}

#[test]
fn test_ledger_json_round_trip_shape() {
    let json = r#"{
        "federal_balance": "24000",
        "provincial_balance": "16000",
        "payments": [{"date": "2023-03-15", "amount": "1000"}]
    }"#;
    let ledger: LoanLedger = serde_json::from_str(json).unwrap();
    assert_eq!(summarize_loans(&ledger).result.outstanding, dec!(39_000));
}
