mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{LoanArgs, MortgageArgs};
use commands::compound::CompoundArgs;
use commands::savings::SavingsArgs;

/// Solve the missing variable of a loan, deposit, or savings plan
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Solve the missing variable of a loan, deposit, or savings plan",
    long_about = "Enter all but one of an instrument's quantities and the missing one \
                  is computed: mortgage and loan payments, principal or term; \
                  lump-sum compound-interest deposits; savings annuities with \
                  contributions at period start or end. Leave exactly one value \
                  flag out to mark it as the unknown."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed-payment mortgage, term in calendar years
    Mortgage(MortgageArgs),
    /// Fixed-payment loan, term in months
    Loan(LoanArgs),
    /// Lump-sum compound interest
    Compound(CompoundArgs),
    /// Savings annuity with periodic contributions
    Savings(SavingsArgs),
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

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Mortgage(args) => commands::amortization::run_mortgage(args),
        Commands::Loan(args) => commands::amortization::run_loan(args),
        Commands::Compound(args) => commands::compound::run_compound(args),
        Commands::Savings(args) => commands::savings::run_savings(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::render(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
