//! Calendar-unit normalization performed before the solvers run.
//!
//! The solvers only ever see a periodic fractional rate and a matching
//! period count. Turning calendar years into months, or an annual
//! percentage rate into a per-period fraction, happens here on the caller's
//! side of the boundary — never inside a solver.

use serde::{Deserialize, Serialize};

use crate::types::{Periods, Rate};

/// Compounding frequency used to normalize calendar inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
}

impl Frequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }
}

/// Calendar years to a period count at the given frequency.
pub fn periods_from_years(years: f64, frequency: Frequency) -> Periods {
    years * f64::from(frequency.periods_per_year())
}

/// A period count back to calendar years, for display.
pub fn years_from_periods(periods: Periods, frequency: Frequency) -> f64 {
    periods / f64::from(frequency.periods_per_year())
}

/// Nominal annual rate (as a fraction) to the per-period rate.
pub fn periodic_rate(annual_rate: Rate, frequency: Frequency) -> Rate {
    annual_rate / f64::from(frequency.periods_per_year())
}

/// A percentage entry (`4.5` meaning 4.5%) to a fraction (`0.045`).
pub fn fraction_from_percent(percent: f64) -> f64 {
    percent / 100.0
}
