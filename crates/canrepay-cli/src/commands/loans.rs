use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use canrepay_core::assumptions::RepaymentAssumptions;
use canrepay_core::loans::{self, LoanLedger, ProjectionInput};

use crate::input;

/// Arguments for the payment-log summary
#[derive(Args)]
pub struct LoanSummaryArgs {
    /// Path to JSON ledger file (balances and payments)
    #[arg(long)]
    pub input: Option<String>,

    /// Record a payment of this amount before summarising
    #[arg(long)]
    pub add_payment: Option<Decimal>,

    /// Date of the added payment (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the end-of-grace projection
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to JSON ledger file (balances and payments)
    #[arg(long)]
    pub input: Option<String>,

    /// Expected graduation date (YYYY-MM-DD)
    #[arg(long)]
    pub graduation: NaiveDate,

    /// Projection date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Provincial rate in percent (defaults to the assumptions file)
    #[arg(long)]
    pub provincial_rate: Option<Decimal>,

    /// Years after graduation (defaults to the assumptions file)
    #[arg(long)]
    pub grace_years: Option<u32>,
}

fn read_ledger(path: Option<&str>) -> Result<LoanLedger, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(ledger) = input::stdin::read_stdin::<LoanLedger>()? {
        Ok(ledger)
    } else {
        Err("a ledger is required: provide --input or pipe JSON on stdin".into())
    }
}

pub fn run_loan_summary(args: LoanSummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut ledger = read_ledger(args.input.as_deref())?;

    if let Some(amount) = args.add_payment {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        ledger.record_payment(date, amount)?;
    }

    let result = loans::summarize_loans(&ledger);
    Ok(serde_json::to_value(result)?)
}

pub fn run_project(
    args: ProjectArgs,
    assumptions: &RepaymentAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger = read_ledger(args.input.as_deref())?;

    let projection_input = ProjectionInput {
        ledger,
        graduation_date: args.graduation,
        as_of: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
        provincial_rate_pct: args
            .provincial_rate
            .unwrap_or(assumptions.provincial_rate_pct),
        grace_years: Some(args.grace_years.unwrap_or(assumptions.grace_years)),
    };

    let result = loans::project_total_owed(&projection_input)?;
    Ok(serde_json::to_value(result)?)
}
