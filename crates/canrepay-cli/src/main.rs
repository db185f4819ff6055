mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::amortization::AmortizeArgs;
use commands::budget::BudgetArgs;
use commands::loans::{LoanSummaryArgs, ProjectArgs};
use commands::net_worth::NetWorthArgs;
use commands::repayment_plan::StandardPlanArgs;

/// Student-loan repayment planning
#[derive(Parser)]
#[command(
    name = "canrepay",
    version,
    about = "Student-loan repayment planning",
    long_about = "A CLI for Canadian student-loan repayment planning with decimal \
                  precision. Solves payoff horizons, compares the standard 10-year \
                  plan with an income-share plan, tracks payments, and summarises \
                  net worth and monthly budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// JSON or YAML file overriding rate and term assumptions
    #[arg(long, global = true)]
    assumptions: Option<String>,

    /// Log computation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve how long a loan takes to repay at a given monthly payment
    Amortize(AmortizeArgs),
    /// Snapshot of assets minus liabilities
    NetWorth(NetWorthArgs),
    /// Standard 10-year federal/provincial payments vs an income-share plan
    StandardPlan(StandardPlanArgs),
    /// Totals, outstanding balance, and progress from a payment log
    LoanSummary(LoanSummaryArgs),
    /// Project the total owed at the end of the grace period
    Project(ProjectArgs),
    /// Income left after fixed expenses and the planned payment
    Budget(BudgetArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "canrepay_core=debug,canrepay_cli=debug"
    } else {
        "canrepay_core=warn,canrepay_cli=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let assumptions = match input::file::load_assumptions(cli.assumptions.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    tracing::debug!(?assumptions, "assumptions loaded");

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Amortize(args) => commands::amortization::run_amortize(args),
        Commands::NetWorth(args) => commands::net_worth::run_net_worth(args),
        Commands::StandardPlan(args) => {
            commands::repayment_plan::run_standard_plan(args, &assumptions)
        }
        Commands::LoanSummary(args) => commands::loans::run_loan_summary(args),
        Commands::Project(args) => commands::loans::run_project(args, &assumptions),
        Commands::Budget(args) => commands::budget::run_budget(args),
        Commands::Version => {
            println!("canrepay {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
