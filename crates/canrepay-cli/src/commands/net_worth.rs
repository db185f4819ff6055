use clap::Args;
use serde_json::Value;

use canrepay_core::input::RawNetWorthFields;
use canrepay_core::net_worth::{self, NetWorthInput};

use crate::input;

/// Arguments for the net-worth snapshot.
///
/// Flags take raw text: blank or non-numeric entries count as zero.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct NetWorthArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current savings
    #[arg(long)]
    pub savings: Option<String>,

    /// Vehicle value
    #[arg(long, alias = "car")]
    pub vehicle_value: Option<String>,

    /// Investment account balance
    #[arg(long, alias = "investments")]
    pub investment_balance: Option<String>,

    /// Federal loan balance
    #[arg(long, alias = "federal")]
    pub federal_loan_balance: Option<String>,

    /// Provincial loan balance
    #[arg(long, alias = "provincial")]
    pub provincial_loan_balance: Option<String>,
}

pub fn run_net_worth(args: NetWorthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let nw_input: NetWorthInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(parsed) = input::stdin::read_stdin::<NetWorthInput>()? {
        parsed
    } else {
        RawNetWorthFields {
            savings: args.savings,
            vehicle_value: args.vehicle_value,
            investment_balance: args.investment_balance,
            federal_loan_balance: args.federal_loan_balance,
            provincial_loan_balance: args.provincial_loan_balance,
        }
        .to_input()
    };

    let result = net_worth::compute_net_worth(&nw_input);
    Ok(serde_json::to_value(result)?)
}
