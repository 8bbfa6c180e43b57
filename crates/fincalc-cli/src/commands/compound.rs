use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};

use fincalc_core::compound_growth::{self, GrowthRequest};
use fincalc_core::conversion::fraction_from_percent;
use fincalc_core::selector::{self, GrowthFields};

use crate::input;

/// Arguments for the compound-interest calculator. Annual compounding: the
/// term is in years and the rate is an annual percentage.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompoundArgs {
    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Initial deposit; leave out to solve for it
    #[arg(long)]
    pub initial: Option<f64>,

    /// Target future amount; leave out to solve for it
    #[arg(long)]
    pub future: Option<f64>,

    /// Annual interest rate in percent; leave out to solve for it
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years; leave out to solve for it
    #[arg(long)]
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct CompoundInput {
    initial: Option<f64>,
    future: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
}

pub fn run_compound(args: CompoundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: CompoundInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        data
    } else {
        CompoundInput {
            initial: args.initial,
            future: args.future,
            rate: args.rate,
            years: args.years,
        }
    };

    let fields = GrowthFields {
        present_value: file.initial,
        future_value: file.future,
        rate: file.rate.map(fraction_from_percent),
        periods: file.years,
    };
    let inputs = json!({
        "initial": file.initial,
        "future": file.future,
        "rate": file.rate,
        "years": file.years,
    });

    let request = selector::select_growth(&fields)?;
    let value = compound_growth::solve(&request)?;

    Ok(match request {
        GrowthRequest::PresentValue { .. } => {
            super::report("compound", "present_value", value, None, inputs)
        }
        GrowthRequest::FutureValue { .. } => {
            super::report("compound", "future_value", value, None, inputs)
        }
        GrowthRequest::Rate { .. } => {
            // Echo the rate back in the same unit it is entered in.
            super::report("compound", "rate", value, Some(("rate_percent", value * 100.0)), inputs)
        }
        GrowthRequest::Periods { .. } => super::report("compound", "periods", value, None, inputs),
    })
}
