//! Fixed-payment amortizing loan solver.
//!
//! Relation: `payment = principal · rate / (1 − (1+rate)^(−periods))` for a
//! nonzero periodic rate. The rate is always a known input here — this
//! instrument never solves for it.

use serde::{Deserialize, Serialize};

use crate::error::{ReasonCode, SolveError};
use crate::numeric::{
    check_positive_amount, check_positive_periods, check_rate_floor, checked_div, compound_factor,
    ensure_finite,
};
use crate::types::{AmortizationUnknown, Money, Periods, Rate};
use crate::SolveResult;

/// A fully-validated amortization solve: exactly one unknown, every other
/// field present. Produced once by the selector and consumed as-is — the
/// solver never re-derives a field the caller already supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unknown", rename_all = "snake_case")]
pub enum AmortizationRequest {
    Principal {
        payment: Money,
        rate: Rate,
        periods: Periods,
    },
    Payment {
        principal: Money,
        rate: Rate,
        periods: Periods,
    },
    Periods {
        principal: Money,
        payment: Money,
        rate: Rate,
    },
}

impl AmortizationRequest {
    /// The field this request computes.
    pub fn unknown(&self) -> AmortizationUnknown {
        match self {
            AmortizationRequest::Principal { .. } => AmortizationUnknown::Principal,
            AmortizationRequest::Payment { .. } => AmortizationUnknown::Payment,
            AmortizationRequest::Periods { .. } => AmortizationUnknown::Periods,
        }
    }
}

/// Dispatch on the unknown tag.
pub fn solve(request: &AmortizationRequest) -> SolveResult<f64> {
    match *request {
        AmortizationRequest::Principal {
            payment,
            rate,
            periods,
        } => solve_principal(payment, rate, periods),
        AmortizationRequest::Payment {
            principal,
            rate,
            periods,
        } => solve_payment(principal, rate, periods),
        AmortizationRequest::Periods {
            principal,
            payment,
            rate,
        } => solve_periods(principal, rate, payment),
    }
}

fn check_rate(rate: Rate) -> SolveResult<()> {
    check_rate_floor(rate)?;
    if rate == 0.0 {
        return Err(SolveError::InvalidDomain {
            field: "rate",
            code: ReasonCode::ZeroRate,
        });
    }
    Ok(())
}

/// `principal = payment · (1 − (1+rate)^(−periods)) / rate`
pub fn solve_principal(payment: Money, rate: Rate, periods: Periods) -> SolveResult<Money> {
    check_rate(rate)?;
    check_positive_amount(payment, "payment")?;
    check_positive_periods(periods)?;

    let discount = compound_factor(rate, -periods, "principal")?;
    ensure_finite(payment * (1.0 - discount) / rate, "principal")
}

/// `payment = principal · rate / (1 − (1+rate)^(−periods))`
pub fn solve_payment(principal: Money, rate: Rate, periods: Periods) -> SolveResult<Money> {
    check_rate(rate)?;
    check_positive_amount(principal, "principal")?;
    check_positive_periods(periods)?;

    let discount = compound_factor(rate, -periods, "payment")?;
    checked_div(principal * rate, 1.0 - discount, "payment")
}

/// `periods = −ln(1 − principal·rate/payment) / ln(1+rate)`
///
/// The log argument must lie in `(0, 1]`. At or below zero the payment does
/// not cover the per-period interest and the loan can never amortize; above
/// one the supplied rate and amounts are inconsistent. Both are reported as
/// domain failures rather than clamped.
pub fn solve_periods(principal: Money, rate: Rate, payment: Money) -> SolveResult<Periods> {
    check_rate(rate)?;
    check_positive_amount(principal, "principal")?;
    check_positive_amount(payment, "payment")?;

    let log_arg = 1.0 - principal * rate / payment;
    if !(log_arg > 0.0) {
        return Err(SolveError::InvalidDomain {
            field: "payment",
            code: ReasonCode::PaymentBelowInterest,
        });
    }
    if log_arg > 1.0 {
        return Err(SolveError::InvalidDomain {
            field: "rate",
            code: ReasonCode::LogOutOfRange,
        });
    }

    checked_div(-log_arg.ln(), (1.0 + rate).ln(), "periods")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
