use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::CanRepayError;
use crate::time_value::payoff_periods;
use crate::types::{
    monthly_rate, round_display, with_metadata, ComputationOutput, Money, Percent, Rate, HUNDRED,
    MONTHS_PER_YEAR,
};
use crate::CanRepayResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A loan and the level monthly payment the borrower intends to make.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    pub principal: Money,
    pub annual_interest_rate_pct: Percent,
    pub monthly_payment: Money,
}

impl LoanInputs {
    /// Payment derived from a share of monthly income (the slider plan).
    pub fn from_income_share(
        principal: Money,
        annual_interest_rate_pct: Percent,
        monthly_income: Money,
        payment_percentage: Percent,
    ) -> Self {
        Self {
            principal,
            annual_interest_rate_pct,
            monthly_payment: income_share_payment(monthly_income, payment_percentage),
        }
    }
}

/// Payoff horizon and cost for a level-payment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Unrounded count of monthly periods to reach a zero balance.
    pub number_of_payments: Decimal,
    /// Payoff horizon in years, one decimal place.
    pub years: Decimal,
    /// Interest over the life of the loan, to the cent.
    pub total_interest_paid: Money,
    pub monthly_payment: Money,
    pub monthly_rate: Rate,
}

/// `monthly_income * payment_percentage / 100`. Bounds are the caller's concern.
pub fn income_share_payment(monthly_income: Money, payment_percentage: Percent) -> Money {
    monthly_income * payment_percentage / HUNDRED
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Solve for the number of monthly payments needed to repay a loan, and the
/// interest paid along the way.
pub fn compute_amortization(
    input: &LoanInputs,
) -> CanRepayResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();

    // --- Validation ---
    if input.principal <= Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "principal",
            "Loan amount must be > 0",
        ));
    }
    if input.annual_interest_rate_pct < Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "annual_interest_rate_pct",
            "Interest rate must be 0 or more",
        ));
    }
    if input.monthly_payment <= Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "monthly_payment",
            "Monthly payment must be > 0",
        ));
    }

    let rate = monthly_rate(input.annual_interest_rate_pct);
    let number_of_payments = payoff_periods(rate, input.principal, input.monthly_payment)
        .inspect_err(|e| {
            if let CanRepayError::NonConvergentPayment { .. } = e {
                warn!(
                    principal = %input.principal,
                    monthly_payment = %input.monthly_payment,
                    "payment does not cover monthly interest"
                );
            }
        })?;

    let years = round_display(number_of_payments / MONTHS_PER_YEAR, 1);
    let total_paid = input
        .monthly_payment
        .checked_mul(number_of_payments)
        .ok_or_else(|| {
            CanRepayError::invalid("monthly_payment", "total repaid is too large to compute with")
        })?;
    let total_interest_paid = round_display(total_paid - input.principal, 2);

    debug!(
        number_of_payments = %number_of_payments,
        years = %years,
        total_interest_paid = %total_interest_paid,
        "amortization solved"
    );

    let methodology = if rate.is_zero() {
        "Interest-free payoff: principal / monthly payment"
    } else {
        "Amortization period: ln(P / (P - B·r)) / ln(1 + r)"
    };

    let output = AmortizationResult {
        number_of_payments,
        years,
        total_interest_paid,
        monthly_payment: input.monthly_payment,
        monthly_rate: rate,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, Vec::new(), elapsed, output))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loan(principal: Decimal, rate: Decimal, payment: Decimal) -> LoanInputs {
        LoanInputs {
            principal,
            annual_interest_rate_pct: rate,
            monthly_payment: payment,
        }
    }

    #[test]
    fn test_typical_student_loan() {
        let out = compute_amortization(&loan(dec!(40_000), dec!(5), dec!(300))).unwrap();
        let r = &out.result;
        // ln(2.25) / ln(1 + 0.05/12) ≈ 195.03 months
        assert!((r.number_of_payments - dec!(195.03)).abs() < dec!(0.01));
        assert_eq!(r.years, dec!(16.3));
        assert!((r.total_interest_paid - dec!(18508.53)).abs() < dec!(0.02));
    }

    #[test]
    fn test_zero_rate_is_simple_division() {
        let out = compute_amortization(&loan(dec!(24_000), Decimal::ZERO, dec!(400))).unwrap();
        assert_eq!(out.result.number_of_payments, dec!(60));
        assert_eq!(out.result.years, dec!(5.0));
        assert_eq!(out.result.total_interest_paid, Decimal::ZERO);
    }

    #[test]
    fn test_payment_below_interest_is_non_convergent() {
        let err = compute_amortization(&loan(dec!(40_000), dec!(5), dec!(100))).unwrap_err();
        match err {
            CanRepayError::NonConvergentPayment {
                monthly_payment,
                interest_accrual,
            } => {
                assert_eq!(monthly_payment, dec!(100));
                assert!(interest_accrual > monthly_payment);
            }
            other => panic!("expected NonConvergentPayment, got {other:?}"),
        }
    }

    #[test]
    fn test_payment_equal_to_interest_is_non_convergent() {
        // 12,000 at 12% accrues exactly 120/month
        let err = compute_amortization(&loan(dec!(12_000), dec!(12), dec!(120))).unwrap_err();
        assert!(matches!(err, CanRepayError::NonConvergentPayment { .. }));
    }

    #[test]
    fn test_invalid_fields_are_named() {
        let cases = [
            (loan(Decimal::ZERO, dec!(5), dec!(300)), "principal"),
            (loan(dec!(1000), dec!(-1), dec!(300)), "annual_interest_rate_pct"),
            (loan(dec!(1000), dec!(5), Decimal::ZERO), "monthly_payment"),
        ];
        for (input, expected) in cases {
            match compute_amortization(&input).unwrap_err() {
                CanRepayError::InvalidInput { field, .. } => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_income_share_payment() {
        let input = LoanInputs::from_income_share(dec!(40_000), dec!(5), dec!(3000), dec!(10));
        assert_eq!(input.monthly_payment, dec!(300));
    }

    #[test]
    fn test_assumptions_echo_input() {
        let out = compute_amortization(&loan(dec!(10_000), dec!(6), dec!(200))).unwrap();
        assert_eq!(out.assumptions["principal"], "10000");
        assert!(out.warnings.is_empty());
    }
}
