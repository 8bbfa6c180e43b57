//! Lump-sum compound growth solver.
//!
//! Relation: `future = present · (1+rate)^periods`. Unlike the amortizing
//! loan, all four variables are independently solvable, including the rate.

use serde::{Deserialize, Serialize};

use crate::error::{ReasonCode, SolveError};
use crate::numeric::{
    check_positive_amount, check_positive_periods, check_rate_floor, checked_div, compound_factor,
    ensure_finite,
};
use crate::types::{GrowthUnknown, Money, Periods, Rate};
use crate::SolveResult;

/// A fully-validated compound-growth solve: exactly one unknown, every other
/// field present and used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unknown", rename_all = "snake_case")]
pub enum GrowthRequest {
    PresentValue {
        future_value: Money,
        rate: Rate,
        periods: Periods,
    },
    FutureValue {
        present_value: Money,
        rate: Rate,
        periods: Periods,
    },
    Rate {
        present_value: Money,
        future_value: Money,
        periods: Periods,
    },
    Periods {
        present_value: Money,
        future_value: Money,
        rate: Rate,
    },
}

impl GrowthRequest {
    /// The field this request computes.
    pub fn unknown(&self) -> GrowthUnknown {
        match self {
            GrowthRequest::PresentValue { .. } => GrowthUnknown::PresentValue,
            GrowthRequest::FutureValue { .. } => GrowthUnknown::FutureValue,
            GrowthRequest::Rate { .. } => GrowthUnknown::Rate,
            GrowthRequest::Periods { .. } => GrowthUnknown::Periods,
        }
    }
}

/// Dispatch on the unknown tag.
pub fn solve(request: &GrowthRequest) -> SolveResult<f64> {
    match *request {
        GrowthRequest::PresentValue {
            future_value,
            rate,
            periods,
        } => solve_present(future_value, rate, periods),
        GrowthRequest::FutureValue {
            present_value,
            rate,
            periods,
        } => solve_future(present_value, rate, periods),
        GrowthRequest::Rate {
            present_value,
            future_value,
            periods,
        } => solve_rate(present_value, future_value, periods),
        GrowthRequest::Periods {
            present_value,
            future_value,
            rate,
        } => solve_periods(present_value, future_value, rate),
    }
}

/// `present = future / (1+rate)^periods`
pub fn solve_present(future_value: Money, rate: Rate, periods: Periods) -> SolveResult<Money> {
    check_rate_floor(rate)?;
    check_positive_amount(future_value, "future_value")?;
    check_positive_periods(periods)?;

    let factor = compound_factor(rate, periods, "present_value")?;
    checked_div(future_value, factor, "present_value")
}

/// `future = present · (1+rate)^periods`
pub fn solve_future(present_value: Money, rate: Rate, periods: Periods) -> SolveResult<Money> {
    check_rate_floor(rate)?;
    check_positive_amount(present_value, "present_value")?;
    check_positive_periods(periods)?;

    let factor = compound_factor(rate, periods, "future_value")?;
    ensure_finite(present_value * factor, "future_value")
}

/// `rate = (future/present)^(1/periods) − 1`
///
/// A zero result is a valid answer (the balance never moved); only the
/// period count has to be nonzero here.
pub fn solve_rate(present_value: Money, future_value: Money, periods: Periods) -> SolveResult<Rate> {
    check_positive_amount(present_value, "present_value")?;
    check_positive_amount(future_value, "future_value")?;
    check_positive_periods(periods)?;

    let ratio = future_value / present_value;
    ensure_finite(ratio.powf(1.0 / periods) - 1.0, "rate")
}

/// `periods = ln(future/present) / ln(1+rate)`
pub fn solve_periods(present_value: Money, future_value: Money, rate: Rate) -> SolveResult<Periods> {
    check_rate_floor(rate)?;
    if rate == 0.0 {
        // A flat balance reaches a different target never, the same target
        // after any number of periods; either way the count is undefined.
        return Err(SolveError::InvalidDomain {
            field: "rate",
            code: ReasonCode::ZeroRate,
        });
    }
    check_positive_amount(present_value, "present_value")?;
    check_positive_amount(future_value, "future_value")?;

    checked_div(
        (future_value / present_value).ln(),
        (1.0 + rate).ln(),
        "periods",
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    // ---------------------------------------------------------------
    // 1. Reference growth: 1000 at 5% for 10 periods
    // ---------------------------------------------------------------
    #[test]
    fn test_future_reference_value() {
        let future = solve_future(1000.0, 0.05, 10.0).unwrap();
        // 1000 * 1.05^10 = 1628.8946...
        assert_relative_eq!(future, 1628.894_626_777_442, max_relative = 1e-12);
    }

    // ---------------------------------------------------------------
    // 2. Round trip: future -> present reconstructs the original
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_future_present() {
        let future = solve_future(1000.0, 0.05, 10.0).unwrap();
        let present = solve_present(future, 0.05, 10.0).unwrap();
        assert_relative_eq!(present, 1000.0, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 3. Round trip: future -> rate reconstructs the rate
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_future_rate() {
        let future = solve_future(2500.0, 0.035, 18.0).unwrap();
        let rate = solve_rate(2500.0, future, 18.0).unwrap();
        assert_relative_eq!(rate, 0.035, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 4. Round trip: future -> periods reconstructs the count
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_future_periods() {
        let future = solve_future(2500.0, 0.035, 18.0).unwrap();
        let periods = solve_periods(2500.0, future, 0.035).unwrap();
        assert_relative_eq!(periods, 18.0, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 5. Future value is strictly increasing in rate and periods
    // ---------------------------------------------------------------
    #[test]
    fn test_future_monotone() {
        let base = solve_future(1000.0, 0.04, 12.0).unwrap();
        assert!(solve_future(1000.0, 0.041, 12.0).unwrap() > base);
        assert!(solve_future(1000.0, 0.04, 13.0).unwrap() > base);
    }

    // ---------------------------------------------------------------
    // 6. A zero rate is a valid *answer* when solving for the rate
    // ---------------------------------------------------------------
    #[test]
    fn test_rate_zero_is_valid_result() {
        let rate = solve_rate(1500.0, 1500.0, 7.0).unwrap();
        assert_eq!(rate, 0.0);
    }

    // ---------------------------------------------------------------
    // 7. A zero rate makes the period count undefined
    // ---------------------------------------------------------------
    #[test]
    fn test_periods_rejects_zero_rate() {
        let err = solve_periods(1000.0, 2000.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidDomain {
                field: "rate",
                code: ReasonCode::ZeroRate,
            }
        );
    }

    // ---------------------------------------------------------------
    // 8. Rates at or below -100% are rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_rate_floor_rejected() {
        assert!(solve_future(1000.0, -1.0, 5.0).is_err());
        assert!(solve_present(1000.0, -1.5, 5.0).is_err());
    }

    // ---------------------------------------------------------------
    // 9. Negative rates above the floor still discount correctly
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_rate_shrinks_balance() {
        let future = solve_future(1000.0, -0.01, 12.0).unwrap();
        assert!(future < 1000.0 && future > 0.0);
    }

    // ---------------------------------------------------------------
    // 10. Zero amounts and zero periods are rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(solve_future(0.0, 0.05, 10.0).is_err());
        assert!(solve_present(-10.0, 0.05, 10.0).is_err());
        assert!(solve_rate(1000.0, 2000.0, 0.0).is_err());
        assert!(solve_future(1000.0, 0.05, 0.0).is_err());
    }

    // ---------------------------------------------------------------
    // 11. Idempotence: repeated calls are bit-identical
    // ---------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let a = solve_rate(1234.5, 9876.5, 42.0).unwrap();
        let b = solve_rate(1234.5, 9876.5, 42.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    // ---------------------------------------------------------------
    // 12. Overflow is reported, never returned as an infinity
    // ---------------------------------------------------------------
    #[test]
    fn test_overflowing_growth_reported_as_non_finite() {
        // 2^1e6 overflows f64; the guard must catch it.
        let err = solve_future(1.0e300, 1.0, 1.0e6).unwrap_err();
        assert_eq!(
            err,
            SolveError::NonFiniteResult {
                context: "future_value",
            }
        );
    }

    // ---------------------------------------------------------------
    // 13. Dispatch routes by unknown tag
    // ---------------------------------------------------------------
    #[test]
    fn test_dispatch_matches_direct_calls() {
        let request = GrowthRequest::Rate {
            present_value: 1000.0,
            future_value: 2000.0,
            periods: 10.0,
        };
        assert_eq!(request.unknown(), GrowthUnknown::Rate);
        assert_eq!(
            solve(&request).unwrap(),
            solve_rate(1000.0, 2000.0, 10.0).unwrap()
        );
    }
}
