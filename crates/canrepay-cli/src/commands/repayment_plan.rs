use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use canrepay_core::assumptions::RepaymentAssumptions;
use canrepay_core::repayment_plan::{self, StandardPlanInput};

use crate::input;

/// Arguments for the standard plan comparison
#[derive(Args)]
pub struct StandardPlanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Federal loan balance
    #[arg(long, alias = "federal")]
    pub federal_balance: Option<Decimal>,

    /// Provincial loan balance
    #[arg(long, alias = "provincial")]
    pub provincial_balance: Option<Decimal>,

    /// Provincial rate in percent (defaults to the assumptions file)
    #[arg(long)]
    pub provincial_rate: Option<Decimal>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Share of monthly income put toward the loans
    #[arg(long, default_value = "10")]
    pub percentage: Decimal,

    /// Repayment term in months (defaults to the assumptions file)
    #[arg(long)]
    pub term_months: Option<u32>,
}

pub fn run_standard_plan(
    args: StandardPlanArgs,
    assumptions: &RepaymentAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: StandardPlanInput = if let Some(ref path) = args.input {
        let mut plan: StandardPlanInput = input::file::read_json(path)?;
        plan.fill_defaults(assumptions);
        plan
    } else if let Some(mut plan) = input::stdin::read_stdin::<StandardPlanInput>()? {
        plan.fill_defaults(assumptions);
        plan
    } else {
        let mut plan = StandardPlanInput::with_assumptions(
            assumptions,
            args.federal_balance
                .ok_or("--federal-balance is required (or provide --input)")?,
            args.provincial_balance
                .ok_or("--provincial-balance is required (or provide --input)")?,
            args.income
                .ok_or("--income is required (or provide --input)")?,
            args.percentage,
        );
        if let Some(rate) = args.provincial_rate {
            plan.provincial_rate_pct = rate;
        }
        if let Some(term) = args.term_months {
            plan.term_months = Some(term);
        }
        plan
    };

    let result = repayment_plan::compute_standard_repayment_plan(&plan_input)?;
    Ok(serde_json::to_value(result)?)
}
