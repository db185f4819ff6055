use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use canrepay_core::amortization::{self, LoanInputs};

use crate::input;

/// Arguments for the payoff-horizon solver
#[derive(Args)]
pub struct AmortizeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan balance outstanding
    #[arg(long, alias = "loan")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (5 = 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Fixed monthly payment (takes precedence over --income/--percentage)
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Monthly income, used with --percentage to derive the payment
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Share of monthly income put toward the loan
    #[arg(long, default_value = "10")]
    pub percentage: Decimal,
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInputs = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(parsed) = input::stdin::read_stdin::<LoanInputs>()? {
        parsed
    } else {
        let principal = args
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
        match (args.payment, args.income) {
            (Some(payment), _) => LoanInputs {
                principal,
                annual_interest_rate_pct: rate,
                monthly_payment: payment,
            },
            (None, Some(income)) => {
                LoanInputs::from_income_share(principal, rate, income, args.percentage)
            }
            (None, None) => {
                return Err("--payment or --income is required (or provide --input)".into())
            }
        }
    };

    let result = amortization::compute_amortization(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
