//! Savings annuity solver: an opening balance compounding alongside a level
//! contribution stream.
//!
//! With `x = (1+rate)^periods` and a timing factor `tf` (`1+rate` for
//! contributions at period start, `1` at period end), the relation is
//! `future = present·x + payment·g` where `g = (x−1)/rate · tf`.
//!
//! The zero-rate limit of `g` is the period count itself, so `rate == 0` is
//! handled as its own linear case rather than dividing by zero. The rate is
//! always a known input; this instrument never solves for it.

use serde::{Deserialize, Serialize};

use crate::error::{ReasonCode, SolveError};
use crate::numeric::{
    check_positive_amount, check_positive_periods, check_rate_floor, checked_div, compound_factor,
    ensure_finite,
};
use crate::types::{AnnuityUnknown, Money, Periods, Rate, Timing};
use crate::SolveResult;

/// A fully-validated annuity solve: exactly one unknown, every other field
/// present and used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unknown", rename_all = "snake_case")]
pub enum AnnuityRequest {
    FutureValue {
        present_value: Money,
        payment: Money,
        rate: Rate,
        periods: Periods,
        timing: Timing,
    },
    Payment {
        present_value: Money,
        future_value: Money,
        rate: Rate,
        periods: Periods,
        timing: Timing,
    },
    Periods {
        present_value: Money,
        future_value: Money,
        payment: Money,
        rate: Rate,
        timing: Timing,
    },
}

impl AnnuityRequest {
    /// The field this request computes.
    pub fn unknown(&self) -> AnnuityUnknown {
        match self {
            AnnuityRequest::FutureValue { .. } => AnnuityUnknown::FutureValue,
            AnnuityRequest::Payment { .. } => AnnuityUnknown::Payment,
            AnnuityRequest::Periods { .. } => AnnuityUnknown::Periods,
        }
    }
}

/// Dispatch on the unknown tag.
pub fn solve(request: &AnnuityRequest) -> SolveResult<f64> {
    match *request {
        AnnuityRequest::FutureValue {
            present_value,
            payment,
            rate,
            periods,
            timing,
        } => solve_future(present_value, payment, rate, periods, timing),
        AnnuityRequest::Payment {
            present_value,
            future_value,
            rate,
            periods,
            timing,
        } => solve_payment(present_value, future_value, rate, periods, timing),
        AnnuityRequest::Periods {
            present_value,
            future_value,
            payment,
            rate,
            timing,
        } => solve_periods(present_value, future_value, payment, rate, timing),
    }
}

/// The opening balance may be zero (a savings plan started from nothing)
/// but never negative.
fn check_present(present_value: Money) -> SolveResult<()> {
    if !(present_value >= 0.0) || !present_value.is_finite() {
        return Err(SolveError::InvalidDomain {
            field: "present_value",
            code: ReasonCode::NegativeAmount,
        });
    }
    Ok(())
}

/// Annuity growth factor `g`. Its zero-rate limit is the period count, where
/// timing no longer matters (`tf = 1+0`).
fn growth_factor(rate: Rate, periods: Periods, timing: Timing) -> SolveResult<f64> {
    if rate == 0.0 {
        return Ok(periods);
    }
    let x = compound_factor(rate, periods, "growth_factor")?;
    ensure_finite(
        (x - 1.0) / rate * timing.payment_factor(rate),
        "growth_factor",
    )
}

/// `future = present·x + payment·g` — direct evaluation.
pub fn solve_future(
    present_value: Money,
    payment: Money,
    rate: Rate,
    periods: Periods,
    timing: Timing,
) -> SolveResult<Money> {
    check_rate_floor(rate)?;
    check_present(present_value)?;
    check_positive_amount(payment, "payment")?;
    check_positive_periods(periods)?;

    let x = compound_factor(rate, periods, "future_value")?;
    let g = growth_factor(rate, periods, timing)?;
    ensure_finite(present_value * x + payment * g, "future_value")
}

/// `payment = (future − present·x) / g`
pub fn solve_payment(
    present_value: Money,
    future_value: Money,
    rate: Rate,
    periods: Periods,
    timing: Timing,
) -> SolveResult<Money> {
    check_rate_floor(rate)?;
    check_present(present_value)?;
    check_positive_amount(future_value, "future_value")?;
    check_positive_periods(periods)?;

    let x = compound_factor(rate, periods, "payment")?;
    let g = growth_factor(rate, periods, timing)?;
    checked_div(future_value - present_value * x, g, "payment")
}

/// Solve for the period count by first solving the relation for `x`.
///
/// Substituting `g = (x−1)/rate · tf` turns the relation into a linear
/// equation in `x`: with `k = payment·tf/rate`, `x = (future+k)/(present+k)`,
/// then `periods = ln(x)/ln(1+rate)`. A vanishing `present+k` or a
/// non-positive `x` means no period count can reach the target.
pub fn solve_periods(
    present_value: Money,
    future_value: Money,
    payment: Money,
    rate: Rate,
    timing: Timing,
) -> SolveResult<Periods> {
    check_rate_floor(rate)?;
    check_present(present_value)?;
    check_positive_amount(future_value, "future_value")?;
    check_positive_amount(payment, "payment")?;

    if rate == 0.0 {
        // Zero-rate limit: future = present + payment·periods.
        return ensure_finite((future_value - present_value) / payment, "periods");
    }

    let k = payment * timing.payment_factor(rate) / rate;
    let denominator = present_value + k;
    if denominator == 0.0 {
        return Err(SolveError::DegenerateInput {
            field: "present_value",
            code: ReasonCode::ZeroDenominator,
        });
    }
    let x = (future_value + k) / denominator;
    if !(x > 0.0) {
        return Err(SolveError::DegenerateInput {
            field: "future_value",
            code: ReasonCode::NonPositiveGrowth,
        });
    }

    checked_div(x.ln(), (1.0 + rate).ln(), "periods")
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
    // 1. Reference future value, ordinary annuity
    // ---------------------------------------------------------------
    #[test]
    fn test_future_reference_value() {
        // 1000·1.01^12 + 100·(1.01^12 − 1)/0.01 = 1126.8250 + 1268.2503
        let future = solve_future(1000.0, 100.0, 0.01, 12.0, Timing::PeriodEnd).unwrap();
        assert_relative_eq!(future, 2395.075_331_45, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 2. Zero-rate boundary: future = present + payment·periods
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_future_is_linear() {
        let end = solve_future(1000.0, 100.0, 0.0, 12.0, Timing::PeriodEnd).unwrap();
        let begin = solve_future(1000.0, 100.0, 0.0, 12.0, Timing::PeriodBegin).unwrap();
        assert_eq!(end, 2200.0);
        // Timing is irrelevant at a zero rate.
        assert_eq!(begin, 2200.0);
    }

    // ---------------------------------------------------------------
    // 3. Zero-rate boundary: payment agrees with the linear formula
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_payment_is_linear() {
        let payment = solve_payment(1000.0, 2200.0, 0.0, 12.0, Timing::PeriodEnd).unwrap();
        assert_relative_eq!(payment, 100.0, max_relative = 1e-12);
    }

    // ---------------------------------------------------------------
    // 4. Zero-rate boundary: periods agrees with the linear formula
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_periods_is_linear() {
        let periods = solve_periods(1000.0, 2200.0, 100.0, 0.0, Timing::PeriodEnd).unwrap();
        assert_relative_eq!(periods, 12.0, max_relative = 1e-12);
    }

    // ---------------------------------------------------------------
    // 5. Timing affects only the payment-growth term
    // ---------------------------------------------------------------
    #[test]
    fn test_timing_scales_payment_term_only() {
        let rate = 0.01;
        let present = 1000.0;
        let end = solve_future(present, 100.0, rate, 12.0, Timing::PeriodEnd).unwrap();
        let begin = solve_future(present, 100.0, rate, 12.0, Timing::PeriodBegin).unwrap();

        let x = (1.0 + rate).powf(12.0);
        let payment_term_end = end - present * x;
        let payment_term_begin = begin - present * x;
        assert_relative_eq!(
            payment_term_begin,
            payment_term_end * (1.0 + rate),
            max_relative = 1e-12
        );
    }

    // ---------------------------------------------------------------
    // 6. Round trip: future -> payment reconstructs the contribution
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_future_payment() {
        for timing in [Timing::PeriodEnd, Timing::PeriodBegin] {
            let future = solve_future(500.0, 250.0, 0.004, 120.0, timing).unwrap();
            let payment = solve_payment(500.0, future, 0.004, 120.0, timing).unwrap();
            assert_relative_eq!(payment, 250.0, max_relative = 1e-9);
        }
    }

    // ---------------------------------------------------------------
    // 7. Round trip: future -> periods reconstructs the count
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip_future_periods() {
        for timing in [Timing::PeriodEnd, Timing::PeriodBegin] {
            let future = solve_future(500.0, 250.0, 0.004, 120.0, timing).unwrap();
            let periods = solve_periods(500.0, future, 250.0, 0.004, timing).unwrap();
            assert_relative_eq!(periods, 120.0, max_relative = 1e-9);
        }
    }

    // ---------------------------------------------------------------
    // 8. Zero opening balance is a legal savings plan
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_present_value_accepted() {
        let future = solve_future(0.0, 100.0, 0.01, 12.0, Timing::PeriodEnd).unwrap();
        // Pure contribution stream: 100·(1.01^12 − 1)/0.01
        assert_relative_eq!(future, 1268.250_301_32, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 9. Negative opening balance is rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_present_value_rejected() {
        let err = solve_future(-1.0, 100.0, 0.01, 12.0, Timing::PeriodEnd).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidDomain {
                field: "present_value",
                code: ReasonCode::NegativeAmount,
            }
        );
    }

    // ---------------------------------------------------------------
    // 10. Unreachable target: periods solve reports degeneracy
    // ---------------------------------------------------------------
    #[test]
    fn test_periods_unreachable_target_rejected() {
        // Negative rate shrinking toward an asymptote below the target:
        // x = (future + k)/(present + k) goes non-positive when the target
        // sits beyond what the stream can ever reach.
        let err = solve_periods(100.0, 60_000.0, 50.0, -0.05, Timing::PeriodEnd).unwrap_err();
        assert_eq!(
            err,
            SolveError::DegenerateInput {
                field: "future_value",
                code: ReasonCode::NonPositiveGrowth,
            }
        );
    }

    // ---------------------------------------------------------------
    // 11. Vanishing present + payment·tf/rate: no linear solve exists
    // ---------------------------------------------------------------
    #[test]
    fn test_periods_vanishing_denominator_rejected() {
        // k = 50·1/−0.05 = −1000, exactly cancelling the opening balance.
        let err = solve_periods(1000.0, 5000.0, 50.0, -0.05, Timing::PeriodEnd).unwrap_err();
        assert_eq!(
            err,
            SolveError::DegenerateInput {
                field: "present_value",
                code: ReasonCode::ZeroDenominator,
            }
        );
    }

    // ---------------------------------------------------------------
    // 12. Overflow is reported, never returned as an infinity
    // ---------------------------------------------------------------
    #[test]
    fn test_overflowing_growth_reported_as_non_finite() {
        let err = solve_future(1.0e300, 1.0e300, 1.0, 1.0e6, Timing::PeriodEnd).unwrap_err();
        assert_eq!(
            err,
            SolveError::NonFiniteResult {
                context: "future_value",
            }
        );
    }

    // ---------------------------------------------------------------
    // 13. Zero periods and zero payments are rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(solve_future(1000.0, 100.0, 0.01, 0.0, Timing::PeriodEnd).is_err());
        assert!(solve_future(1000.0, 0.0, 0.01, 12.0, Timing::PeriodEnd).is_err());
        assert!(solve_payment(1000.0, 0.0, 0.01, 12.0, Timing::PeriodEnd).is_err());
        assert!(solve_periods(1000.0, 2000.0, 0.0, 0.01, Timing::PeriodEnd).is_err());
    }

    // ---------------------------------------------------------------
    // 14. Idempotence: repeated calls are bit-identical
    // ---------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let a = solve_payment(750.0, 50_000.0, 0.0035, 180.0, Timing::PeriodBegin).unwrap();
        let b = solve_payment(750.0, 50_000.0, 0.0035, 180.0, Timing::PeriodBegin).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    // ---------------------------------------------------------------
    // 15. Dispatch routes by unknown tag
    // ---------------------------------------------------------------
    #[test]
    fn test_dispatch_matches_direct_calls() {
        let request = AnnuityRequest::Periods {
            present_value: 500.0,
            future_value: 40_000.0,
            payment: 250.0,
            rate: 0.004,
            timing: Timing::PeriodEnd,
        };
        assert_eq!(request.unknown(), AnnuityUnknown::Periods);
        assert_eq!(
            solve(&request).unwrap(),
            solve_periods(500.0, 40_000.0, 250.0, 0.004, Timing::PeriodEnd).unwrap()
        );
    }
}
