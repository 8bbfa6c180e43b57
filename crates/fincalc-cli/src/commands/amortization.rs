use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};

use fincalc_core::amortization::{self, AmortizationRequest};
use fincalc_core::conversion::{
    self, fraction_from_percent, periodic_rate, periods_from_years, Frequency,
};
use fincalc_core::selector::{self, AmortizationFields};

use crate::input;

/// Arguments for the mortgage calculator. Calendar years and an annual
/// percentage rate; compounding is monthly.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MortgageArgs {
    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed; leave out to solve for it
    #[arg(long)]
    pub amount: Option<f64>,

    /// Monthly payment; leave out to solve for it
    #[arg(long)]
    pub payment: Option<f64>,

    /// Annual interest rate in percent (always required)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years; leave out to solve for it
    #[arg(long)]
    pub years: Option<f64>,
}

/// Arguments for the loan calculator. Identical to the mortgage except the
/// term is entered and reported in months.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed; leave out to solve for it
    #[arg(long)]
    pub amount: Option<f64>,

    /// Monthly payment; leave out to solve for it
    #[arg(long)]
    pub payment: Option<f64>,

    /// Annual interest rate in percent (always required)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in months; leave out to solve for it
    #[arg(long)]
    pub months: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct MortgageInput {
    amount: Option<f64>,
    payment: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct LoanInput {
    amount: Option<f64>,
    payment: Option<f64>,
    rate: Option<f64>,
    months: Option<f64>,
}

/// Normalize calendar-unit entries into the solver's per-period terms.
fn normalized_fields(
    amount: Option<f64>,
    payment: Option<f64>,
    annual_rate_pct: Option<f64>,
    periods: Option<f64>,
) -> AmortizationFields {
    AmortizationFields {
        principal: amount,
        payment,
        rate: annual_rate_pct.map(|r| periodic_rate(fraction_from_percent(r), Frequency::Monthly)),
        periods,
    }
}

fn solve_report(
    instrument: &'static str,
    fields: AmortizationFields,
    inputs: Value,
    years_out: bool,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request = selector::select_amortization(&fields)?;
    let value = amortization::solve(&request)?;

    Ok(match request {
        AmortizationRequest::Principal { .. } => {
            super::report(instrument, "principal", value, None, inputs)
        }
        AmortizationRequest::Payment { .. } => {
            super::report(instrument, "payment", value, None, inputs)
        }
        AmortizationRequest::Periods { .. } => {
            let extra = years_out
                .then(|| ("years", conversion::years_from_periods(value, Frequency::Monthly)));
            super::report(instrument, "periods", value, extra, inputs)
        }
    })
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: MortgageInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        data
    } else {
        MortgageInput {
            amount: args.amount,
            payment: args.payment,
            rate: args.rate,
            years: args.years,
        }
    };

    let fields = normalized_fields(
        file.amount,
        file.payment,
        file.rate,
        file.years.map(|y| periods_from_years(y, Frequency::Monthly)),
    );
    let inputs = json!({
        "amount": file.amount,
        "payment": file.payment,
        "rate": file.rate,
        "years": file.years,
    });

    solve_report("mortgage", fields, inputs, true)
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: LoanInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        data
    } else {
        LoanInput {
            amount: args.amount,
            payment: args.payment,
            rate: args.rate,
            months: args.months,
        }
    };

    let fields = normalized_fields(file.amount, file.payment, file.rate, file.months);
    let inputs = json!({
        "amount": file.amount,
        "payment": file.payment,
        "rate": file.rate,
        "months": file.months,
    });

    solve_report("loan", fields, inputs, false)
}
