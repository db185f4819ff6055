use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::amortization::income_share_payment;
use crate::assumptions::{RepaymentAssumptions, STANDARD_TERM_MONTHS};
use crate::error::CanRepayError;
use crate::time_value::annuity_payment;
use crate::types::{monthly_rate, round_display, with_metadata, ComputationOutput, Money, Percent};
use crate::CanRepayResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Balances and income for the standard plan comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardPlanInput {
    pub federal_balance: Money,
    pub provincial_balance: Money,
    pub provincial_rate_pct: Percent,
    pub monthly_income: Money,
    pub payment_percentage: Percent,
    /// Defaults to the 10-year standard term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
    /// Defaults to interest-free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_rate_pct: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_payment_pct: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_payment_pct: Option<Percent>,
}

impl StandardPlanInput {
    /// Build an input using the rates, term, and slider bounds from `assumptions`.
    pub fn with_assumptions(
        assumptions: &RepaymentAssumptions,
        federal_balance: Money,
        provincial_balance: Money,
        monthly_income: Money,
        payment_percentage: Percent,
    ) -> Self {
        Self {
            federal_balance,
            provincial_balance,
            provincial_rate_pct: assumptions.provincial_rate_pct,
            monthly_income,
            payment_percentage,
            term_months: Some(assumptions.term_months),
            federal_rate_pct: Some(assumptions.federal_rate_pct),
            min_payment_pct: Some(assumptions.min_payment_pct),
            max_payment_pct: Some(assumptions.max_payment_pct),
        }
    }

    /// Fill any unset term, federal rate, or slider bound from `assumptions`.
    pub fn fill_defaults(&mut self, assumptions: &RepaymentAssumptions) {
        self.term_months.get_or_insert(assumptions.term_months);
        self.federal_rate_pct
            .get_or_insert(assumptions.federal_rate_pct);
        self.min_payment_pct
            .get_or_insert(assumptions.min_payment_pct);
        self.max_payment_pct
            .get_or_insert(assumptions.max_payment_pct);
    }
}

/// Monthly payments under the standard fixed-term plan, next to the
/// borrower's income-share plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRepaymentPlan {
    pub term_months: u32,
    pub federal_monthly_payment: Money,
    pub provincial_monthly_payment: Money,
    pub total_monthly_payment: Money,
    pub income_based_payment: Money,
    /// Income-share payment minus the standard total; negative means the
    /// borrower's plan pays less than the standard schedule requires.
    pub income_plan_surplus: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Both loans amortise with the level-payment annuity formula, each at its own
/// rate. At a zero rate (the federal default) this is straight-line `B / n`.
pub fn compute_standard_repayment_plan(
    input: &StandardPlanInput,
) -> CanRepayResult<ComputationOutput<StandardRepaymentPlan>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let term_months = input.term_months.unwrap_or(STANDARD_TERM_MONTHS);
    if term_months == 0 {
        return Err(CanRepayError::invalid(
            "term_months",
            "Repayment term must be at least one month",
        ));
    }
    let defaults = RepaymentAssumptions::default();
    let federal_rate_pct = input.federal_rate_pct.unwrap_or(defaults.federal_rate_pct);
    for (field, rate) in [
        ("federal_rate_pct", federal_rate_pct),
        ("provincial_rate_pct", input.provincial_rate_pct),
    ] {
        if rate < Decimal::ZERO {
            return Err(CanRepayError::invalid(field, "Interest rate must be 0 or more"));
        }
    }

    let bounds = RepaymentAssumptions {
        min_payment_pct: input.min_payment_pct.unwrap_or(defaults.min_payment_pct),
        max_payment_pct: input.max_payment_pct.unwrap_or(defaults.max_payment_pct),
        ..defaults
    };
    if bounds.min_payment_pct > bounds.max_payment_pct {
        return Err(CanRepayError::invalid(
            "min_payment_pct",
            "Slider minimum cannot exceed the maximum",
        ));
    }
    if !bounds.payment_percentage_in_range(input.payment_percentage) {
        warnings.push(format!(
            "Payment percentage {}% is outside the usual {}–{}% range",
            input.payment_percentage, bounds.min_payment_pct, bounds.max_payment_pct
        ));
    }

    let federal_monthly_payment = annuity_payment(
        monthly_rate(federal_rate_pct),
        term_months,
        input.federal_balance,
    )?;
    let provincial_monthly_payment = annuity_payment(
        monthly_rate(input.provincial_rate_pct),
        term_months,
        input.provincial_balance,
    )?;
    let total_monthly_payment = federal_monthly_payment
        .checked_add(provincial_monthly_payment)
        .ok_or_else(|| {
            CanRepayError::invalid("provincial_balance", "combined payment is too large to compute with")
        })?;
    let income_based_payment =
        income_share_payment(input.monthly_income, input.payment_percentage);

    if income_based_payment < total_monthly_payment {
        warnings.push(format!(
            "Income-based payment of {} is below the standard payment of {}",
            round_display(income_based_payment, 2),
            round_display(total_monthly_payment, 2)
        ));
    }

    debug!(
        %federal_monthly_payment,
        %provincial_monthly_payment,
        %income_based_payment,
        "standard repayment plan computed"
    );

    let output = StandardRepaymentPlan {
        term_months,
        federal_monthly_payment,
        provincial_monthly_payment,
        total_monthly_payment,
        income_based_payment,
        income_plan_surplus: income_based_payment - total_monthly_payment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Standard plan: each loan B·r / (1 - (1 + r)^-n), B/n when r = 0",
        input,
        warnings,
        elapsed,
        output,
    ))
}
