use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason codes attached to solver failures.
///
/// Message composition is a caller concern (and locale-aware), so failures
/// carry enumerated codes rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// A rate of exactly zero where the relation requires a nonzero rate.
    ZeroRate,
    /// A rate at or below -100%; the growth factor would not be positive.
    RateBelowFloor,
    /// A monetary amount that must be strictly positive was zero or negative.
    NonPositiveAmount,
    /// A monetary amount that must be non-negative was negative.
    NegativeAmount,
    /// A period count that must be strictly positive was zero or negative.
    NonPositivePeriods,
    /// The payment does not cover the interest accruing each period, so the
    /// balance can never amortize.
    PaymentBelowInterest,
    /// A logarithm argument fell outside its valid range.
    LogOutOfRange,
    /// A derived denominator vanished.
    ZeroDenominator,
    /// The derived growth argument was not positive.
    NonPositiveGrowth,
}

/// Failure of a single solve call. All variants are recoverable and local
/// to the call; no partial result is ever produced alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// An argument lies outside its mathematically valid range for the
    /// requested unknown.
    #[error("invalid domain for `{field}`: {code:?}")]
    InvalidDomain {
        field: &'static str,
        code: ReasonCode,
    },

    /// The supplied combination is structurally unsolvable even though each
    /// argument is individually in range.
    #[error("degenerate input at `{field}`: {code:?}")]
    DegenerateInput {
        field: &'static str,
        code: ReasonCode,
    },

    /// A division, logarithm, or power produced NaN or an infinity. Raised
    /// instead of ever returning a non-finite value to the caller.
    #[error("non-finite result while computing `{context}`")]
    NonFiniteResult { context: &'static str },
}

/// Failure of the field-selection step that runs before any solver.
///
/// Mirrors the form-level rules of the calculator: exactly one field may be
/// left empty, and some fields may never be the empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Every field was supplied; there is nothing to compute.
    #[error("every field was supplied; leave exactly one empty")]
    NoUnknownField,

    /// More than one field was left empty.
    #[error("more than one field was left empty")]
    MultipleUnknownFields,

    /// A field that can never be the unknown was left empty.
    #[error("`{field}` is required and cannot be left empty")]
    FieldRequired { field: &'static str },

    /// A supplied field was zero where zero is not a usable input.
    #[error("`{field}` must not be zero")]
    ZeroField { field: &'static str },
}
