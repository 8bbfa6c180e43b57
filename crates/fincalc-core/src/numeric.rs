//! Leaf numeric primitives shared by the solvers.
//!
//! Every power, logarithm, and division in the solver layer goes through
//! these helpers so that NaN or an infinity can never escape to a caller.

use crate::error::{ReasonCode, SolveError};
use crate::SolveResult;

/// Reject non-finite intermediate or final values.
pub(crate) fn ensure_finite(value: f64, context: &'static str) -> SolveResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolveError::NonFiniteResult { context })
    }
}

/// `(1 + rate)^periods`, checked. Negative exponents are legal (discounting).
pub(crate) fn compound_factor(rate: f64, periods: f64, context: &'static str) -> SolveResult<f64> {
    ensure_finite((1.0 + rate).powf(periods), context)
}

/// Division with an explicit failure when the denominator vanishes.
pub(crate) fn checked_div(num: f64, den: f64, context: &'static str) -> SolveResult<f64> {
    if den == 0.0 {
        return Err(SolveError::DegenerateInput {
            field: context,
            code: ReasonCode::ZeroDenominator,
        });
    }
    ensure_finite(num / den, context)
}

/// A rate that must be a usable growth rate: above -100% and finite.
/// Zero is allowed here; operations that additionally need a nonzero rate
/// check that themselves.
pub(crate) fn check_rate_floor(rate: f64) -> SolveResult<()> {
    if !(rate > -1.0) || !rate.is_finite() {
        return Err(SolveError::InvalidDomain {
            field: "rate",
            code: ReasonCode::RateBelowFloor,
        });
    }
    Ok(())
}

/// A monetary amount that must be strictly positive. The comparison is
/// written so NaN also fails it.
pub(crate) fn check_positive_amount(value: f64, field: &'static str) -> SolveResult<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(SolveError::InvalidDomain {
            field,
            code: ReasonCode::NonPositiveAmount,
        });
    }
    Ok(())
}

/// A period count that must be strictly positive and finite.
pub(crate) fn check_positive_periods(periods: f64) -> SolveResult<()> {
    if !(periods > 0.0) || !periods.is_finite() {
        return Err(SolveError::InvalidDomain {
            field: "periods",
            code: ReasonCode::NonPositivePeriods,
        });
    }
    Ok(())
}
