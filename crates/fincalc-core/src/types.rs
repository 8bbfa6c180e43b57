use serde::{Deserialize, Serialize};

/// Monetary values. Plain doubles: the core performs no rounding and no
/// currency handling.
pub type Money = f64;

/// Periodic fractional rates (0.005 = 0.5% per period). Never percentages,
/// never annualized — the caller normalizes first.
pub type Rate = f64;

/// Period counts matching the rate's compounding frequency. Fractional
/// counts are legal (a solve can land between two payment dates).
pub type Periods = f64;

/// When in each period an annuity contribution is posted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Ordinary annuity: contributions at period end.
    #[default]
    PeriodEnd,
    /// Annuity due: contributions at period start.
    PeriodBegin,
}

impl Timing {
    /// Multiplier applied to the payment-growth term. Only the payment term
    /// is affected; the present-value term never is.
    pub fn payment_factor(self, rate: Rate) -> f64 {
        match self {
            Timing::PeriodEnd => 1.0,
            Timing::PeriodBegin => 1.0 + rate,
        }
    }
}

/// Which amortization field is being computed. The rate is always known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationUnknown {
    Principal,
    Payment,
    Periods,
}

/// Which compound-growth field is being computed. All four are solvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthUnknown {
    PresentValue,
    FutureValue,
    Rate,
    Periods,
}

/// Which annuity field is being computed. The rate and the opening balance
/// are always known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnuityUnknown {
    FutureValue,
    Payment,
    Periods,
}
