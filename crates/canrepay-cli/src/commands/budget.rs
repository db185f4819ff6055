use std::collections::BTreeMap;

use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use canrepay_core::budget::{self, BudgetInput};
use canrepay_core::input::parse_amount;

use crate::input;

/// Arguments for the monthly budget
#[derive(Args)]
pub struct BudgetArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Fixed expense as CATEGORY=AMOUNT (repeatable)
    #[arg(long = "expense")]
    pub expenses: Vec<String>,

    /// Planned monthly loan payment
    #[arg(long)]
    pub payment: Option<Decimal>,
}

fn parse_expenses(raw: &[String]) -> Result<BTreeMap<String, Decimal>, Box<dyn std::error::Error>> {
    let mut expenses = BTreeMap::new();
    for entry in raw {
        let (category, amount) = entry
            .split_once('=')
            .ok_or_else(|| format!("--expense '{entry}' must look like CATEGORY=AMOUNT"))?;
        let category = category.trim();
        let amount = parse_amount(category, amount)?;
        *expenses.entry(category.to_string()).or_insert(Decimal::ZERO) += amount;
    }
    Ok(expenses)
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget_input: BudgetInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(parsed) = input::stdin::read_stdin::<BudgetInput>()? {
        parsed
    } else {
        BudgetInput {
            monthly_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            fixed_expenses: parse_expenses(&args.expenses)?,
            planned_payment: args.payment,
        }
    };

    let result = budget::compute_monthly_budget(&budget_input)?;
    Ok(serde_json::to_value(result)?)
}
