use clap::{Args, ValueEnum};
use serde::Deserialize;
use serde_json::{json, Value};

use fincalc_core::annuity::{self, AnnuityRequest};
use fincalc_core::conversion::{
    self, fraction_from_percent, periodic_rate, periods_from_years, Frequency,
};
use fincalc_core::selector::{self, AnnuityFields};
use fincalc_core::Timing;

use crate::input;

/// Arguments for the savings calculator: an opening balance plus monthly
/// contributions. Calendar years and an annual percentage rate; compounding
/// is monthly.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SavingsArgs {
    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Opening balance (always required; may be 0)
    #[arg(long)]
    pub initial: Option<f64>,

    /// Target future amount; leave out to solve for it
    #[arg(long)]
    pub future: Option<f64>,

    /// Monthly contribution; leave out to solve for it
    #[arg(long)]
    pub payment: Option<f64>,

    /// Annual interest rate in percent (always required)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years; leave out to solve for it
    #[arg(long)]
    pub years: Option<f64>,

    /// When each contribution is posted
    #[arg(long, default_value = "end")]
    pub timing: TimingArg,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingArg {
    /// Ordinary annuity: contributions at period end
    #[default]
    End,
    /// Annuity due: contributions at period start
    Begin,
}

impl From<TimingArg> for Timing {
    fn from(value: TimingArg) -> Self {
        match value {
            TimingArg::End => Timing::PeriodEnd,
            TimingArg::Begin => Timing::PeriodBegin,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct SavingsInput {
    initial: Option<f64>,
    future: Option<f64>,
    payment: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    #[serde(default)]
    timing: TimingArg,
}

pub fn run_savings(args: SavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: SavingsInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        data
    } else {
        SavingsInput {
            initial: args.initial,
            future: args.future,
            payment: args.payment,
            rate: args.rate,
            years: args.years,
            timing: args.timing,
        }
    };

    let fields = AnnuityFields {
        present_value: file.initial,
        future_value: file.future,
        payment: file.payment,
        rate: file
            .rate
            .map(|r| periodic_rate(fraction_from_percent(r), Frequency::Monthly)),
        periods: file.years.map(|y| periods_from_years(y, Frequency::Monthly)),
        timing: file.timing.into(),
    };
    let inputs = json!({
        "initial": file.initial,
        "future": file.future,
        "payment": file.payment,
        "rate": file.rate,
        "years": file.years,
        "timing": fields.timing,
    });

    let request = selector::select_annuity(&fields)?;
    let value = annuity::solve(&request)?;

    Ok(match request {
        AnnuityRequest::FutureValue { .. } => {
            super::report("savings", "future_value", value, None, inputs)
        }
        AnnuityRequest::Payment { .. } => super::report("savings", "payment", value, None, inputs),
        AnnuityRequest::Periods { .. } => super::report(
            "savings",
            "periods",
            value,
            Some(("years", conversion::years_from_periods(value, Frequency::Monthly))),
            inputs,
        ),
    })
}
