use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::CanRepayError;
use crate::types::{Money, Rate};
use crate::CanRepayResult;

fn out_of_range(field: &str) -> CanRepayError {
    CanRepayError::invalid(field, "value is too large to compute with")
}

/// Compute (1 + r)^-n by repeated multiplication of the one-period discount
/// factor. For r > 0 every step shrinks toward zero, so long terms and high
/// rates never overflow.
pub fn discount_factor(rate: Rate, n: u32) -> Option<Decimal> {
    let one_plus_r = Decimal::ONE.checked_add(rate)?;
    let v = Decimal::ONE.checked_div(one_plus_r)?;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result.checked_mul(v)?;
        if result.is_zero() {
            break;
        }
    }
    Some(result)
}

/// Level payment that retires `balance` over `nper` periods at `rate` per period.
///
/// A zero rate short-circuits to straight-line division, so tiny rates never
/// go through the near-cancelling `1 - (1 + r)^-n` denominator at exactly zero.
pub fn annuity_payment(rate: Rate, nper: u32, balance: Money) -> CanRepayResult<Money> {
    if nper == 0 {
        return Err(CanRepayError::invalid(
            "term_months",
            "Number of periods must be > 0",
        ));
    }
    if rate < Decimal::ZERO {
        return Err(CanRepayError::invalid("rate", "Periodic rate must be >= 0"));
    }

    if rate.is_zero() {
        return Ok(balance / Decimal::from(nper));
    }

    let discount = discount_factor(rate, nper).ok_or_else(|| out_of_range("rate"))?;
    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(CanRepayError::invalid(
            "rate",
            "Annuity factor collapsed to zero",
        ));
    }

    // denominator >= r / (1 + r), so the payment is bounded by balance × (1 + r)
    balance
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| out_of_range("balance"))
}

/// Number of level payments (fractional) needed to retire `balance`.
///
/// Fails with `NonConvergentPayment` when the payment does not exceed the
/// first period's interest, checked before any logarithm is taken.
pub fn payoff_periods(rate: Rate, balance: Money, payment: Money) -> CanRepayResult<Decimal> {
    if payment <= Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "monthly_payment",
            "Payment must be > 0",
        ));
    }

    if rate.is_zero() {
        return balance
            .checked_div(payment)
            .ok_or_else(|| out_of_range("principal"));
    }

    let interest_accrual = balance
        .checked_mul(rate)
        .ok_or_else(|| out_of_range("principal"))?;
    if payment <= interest_accrual {
        return Err(CanRepayError::NonConvergentPayment {
            monthly_payment: payment,
            interest_accrual,
        });
    }

    let ratio = payment
        .checked_div(payment - interest_accrual)
        .ok_or_else(|| out_of_range("monthly_payment"))?;
    let numerator = ratio
        .checked_ln()
        .ok_or(CanRepayError::NonConvergentPayment {
            monthly_payment: payment,
            interest_accrual,
        })?;
    let denominator = Decimal::ONE
        .checked_add(rate)
        .and_then(|d| d.checked_ln())
        .filter(|d| !d.is_zero())
        .ok_or_else(|| CanRepayError::invalid("rate", "Periodic rate must be greater than -100%"))?;

    Ok(numerator / denominator)
}
