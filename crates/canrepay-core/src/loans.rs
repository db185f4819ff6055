use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::assumptions::DEFAULT_GRACE_YEARS;
use crate::error::CanRepayError;
use crate::types::{round_display, with_metadata, ComputationOutput, Money, Percent, HUNDRED};
use crate::CanRepayResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A repayment made against the combined balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: Money,
}

/// Original federal and provincial balances plus the append-only payment log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanLedger {
    pub federal_balance: Money,
    pub provincial_balance: Money,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl LoanLedger {
    pub fn new(federal_balance: Money, provincial_balance: Money) -> Self {
        Self {
            federal_balance,
            provincial_balance,
            payments: Vec::new(),
        }
    }

    /// Append a payment. Entries are never edited or removed.
    pub fn record_payment(&mut self, date: NaiveDate, amount: Money) -> CanRepayResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CanRepayError::invalid(
                "amount",
                "Payment amount must be a positive number",
            ));
        }
        self.payments.push(Payment { date, amount });
        debug!(%date, %amount, count = self.payments.len(), "payment recorded");
        Ok(())
    }

    pub fn total_loans(&self) -> Money {
        self.federal_balance + self.provincial_balance
    }

    pub fn payments_made(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub fn outstanding(&self) -> Money {
        self.total_loans() - self.payments_made()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub total_loans: Money,
    pub payments_made: Money,
    pub outstanding: Money,
    /// Share of the original balance repaid, 0–100, two decimal places.
    pub progress_pct: Percent,
    pub payment_count: usize,
    pub last_payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub ledger: LoanLedger,
    pub graduation_date: NaiveDate,
    pub as_of: NaiveDate,
    pub provincial_rate_pct: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentProjection {
    pub outstanding: Money,
    pub years_remaining: u32,
    pub provincial_interest: Money,
    pub projected_total: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Totals, outstanding balance, and repayment progress from the payment log.
pub fn summarize_loans(ledger: &LoanLedger) -> ComputationOutput<LoanSummary> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let total_loans = ledger.total_loans();
    let payments_made = ledger.payments_made();
    let outstanding = total_loans - payments_made;

    let progress_pct = if total_loans > Decimal::ZERO {
        round_display(payments_made / total_loans * HUNDRED, 2).min(HUNDRED)
    } else {
        Decimal::ZERO
    };

    if outstanding < Decimal::ZERO {
        warnings.push(format!(
            "Payments exceed the original balance by {}",
            -outstanding
        ));
    }

    let summary = LoanSummary {
        total_loans,
        payments_made,
        outstanding,
        progress_pct,
        payment_count: ledger.payments.len(),
        last_payment_date: ledger.payments.iter().map(|p| p.date).max(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Ledger summary: outstanding = federal + provincial - Σ payments",
        ledger,
        warnings,
        elapsed,
        summary,
    )
}

/// Rough total owed once the grace period after graduation ends, charging
/// simple interest on the provincial balance for the remaining whole years.
pub fn project_total_owed(
    input: &ProjectionInput,
) -> CanRepayResult<ComputationOutput<RepaymentProjection>> {
    let start = Instant::now();

    if input.provincial_rate_pct < Decimal::ZERO {
        return Err(CanRepayError::invalid(
            "provincial_rate_pct",
            "Interest rate must be 0 or more",
        ));
    }

    let grace_years = input.grace_years.unwrap_or(DEFAULT_GRACE_YEARS);
    let end_year = i64::from(input.graduation_date.year()) + i64::from(grace_years);
    let years_remaining =
        u32::try_from((end_year - i64::from(input.as_of.year())).max(0)).unwrap_or(u32::MAX);

    let outstanding = input.ledger.outstanding();
    let projected = input
        .ledger
        .provincial_balance
        .checked_mul(input.provincial_rate_pct / HUNDRED)
        .and_then(|annual| annual.checked_mul(Decimal::from(years_remaining)))
        .and_then(|interest| Some((interest, outstanding.checked_add(interest)?)));
    let Some((provincial_interest, projected_total)) = projected else {
        return Err(CanRepayError::invalid(
            "provincial_rate_pct",
            "projected interest is too large to compute with",
        ));
    };

    debug!(years_remaining, %projected_total, "repayment projection computed");

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Projection: outstanding + provincial balance × rate × years to end of grace period",
        input,
        Vec::new(),
        elapsed,
        RepaymentProjection {
            outstanding,
            years_remaining,
            provincial_interest,
            projected_total,
        },
    ))
}
