//! Field selection: decides which variable a solve call must compute.
//!
//! Each instrument exposes a record of optional fields mirroring the
//! calculator form, with `None` marking the field the user left empty. The
//! selector checks the form-level rules — exactly one field empty, some
//! fields never allowed to be the empty one, zeros rejected up front — and
//! produces a fully-typed solve request. The unknown is decided here, once,
//! and passed into the solver as an immutable tag; the solvers never infer
//! it themselves and never hold it as state between calls.

use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationRequest;
use crate::annuity::AnnuityRequest;
use crate::compound_growth::GrowthRequest;
use crate::error::SelectError;
use crate::types::{Money, Periods, Rate, Timing};

/// The amortization form. The rate field can never be the empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmortizationFields {
    pub principal: Option<Money>,
    pub payment: Option<Money>,
    pub rate: Option<Rate>,
    pub periods: Option<Periods>,
}

/// The compound-growth form. Any of the four fields may be the empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthFields {
    pub present_value: Option<Money>,
    pub future_value: Option<Money>,
    pub rate: Option<Rate>,
    pub periods: Option<Periods>,
}

/// The savings form. The rate and the opening balance are always required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnuityFields {
    pub present_value: Option<Money>,
    pub future_value: Option<Money>,
    pub payment: Option<Money>,
    pub rate: Option<Rate>,
    pub periods: Option<Periods>,
    #[serde(default)]
    pub timing: Timing,
}

fn reject_zero(value: Option<f64>, field: &'static str) -> Result<(), SelectError> {
    match value {
        Some(v) if v == 0.0 => Err(SelectError::ZeroField { field }),
        _ => Ok(()),
    }
}

/// Select the unknown for an amortization solve.
pub fn select_amortization(
    fields: &AmortizationFields,
) -> Result<AmortizationRequest, SelectError> {
    let rate = fields
        .rate
        .ok_or(SelectError::FieldRequired { field: "rate" })?;
    reject_zero(fields.principal, "principal")?;
    reject_zero(fields.payment, "payment")?;
    reject_zero(fields.periods, "periods")?;

    match (fields.principal, fields.payment, fields.periods) {
        (None, Some(payment), Some(periods)) => Ok(AmortizationRequest::Principal {
            payment,
            rate,
            periods,
        }),
        (Some(principal), None, Some(periods)) => Ok(AmortizationRequest::Payment {
            principal,
            rate,
            periods,
        }),
        (Some(principal), Some(payment), None) => Ok(AmortizationRequest::Periods {
            principal,
            payment,
            rate,
        }),
        (Some(_), Some(_), Some(_)) => Err(SelectError::NoUnknownField),
        _ => Err(SelectError::MultipleUnknownFields),
    }
}

/// Select the unknown for a compound-growth solve.
pub fn select_growth(fields: &GrowthFields) -> Result<GrowthRequest, SelectError> {
    reject_zero(fields.present_value, "present_value")?;
    reject_zero(fields.future_value, "future_value")?;
    reject_zero(fields.periods, "periods")?;

    match (
        fields.present_value,
        fields.future_value,
        fields.rate,
        fields.periods,
    ) {
        (None, Some(future_value), Some(rate), Some(periods)) => Ok(GrowthRequest::PresentValue {
            future_value,
            rate,
            periods,
        }),
        (Some(present_value), None, Some(rate), Some(periods)) => Ok(GrowthRequest::FutureValue {
            present_value,
            rate,
            periods,
        }),
        (Some(present_value), Some(future_value), None, Some(periods)) => Ok(GrowthRequest::Rate {
            present_value,
            future_value,
            periods,
        }),
        (Some(present_value), Some(future_value), Some(rate), None) => Ok(GrowthRequest::Periods {
            present_value,
            future_value,
            rate,
        }),
        (Some(_), Some(_), Some(_), Some(_)) => Err(SelectError::NoUnknownField),
        _ => Err(SelectError::MultipleUnknownFields),
    }
}

/// Select the unknown for an annuity solve.
pub fn select_annuity(fields: &AnnuityFields) -> Result<AnnuityRequest, SelectError> {
    let rate = fields
        .rate
        .ok_or(SelectError::FieldRequired { field: "rate" })?;
    let present_value = fields.present_value.ok_or(SelectError::FieldRequired {
        field: "present_value",
    })?;
    reject_zero(fields.future_value, "future_value")?;
    reject_zero(fields.payment, "payment")?;
    reject_zero(fields.periods, "periods")?;
    let timing = fields.timing;

    match (fields.future_value, fields.payment, fields.periods) {
        (None, Some(payment), Some(periods)) => Ok(AnnuityRequest::FutureValue {
            present_value,
            payment,
            rate,
            periods,
            timing,
        }),
        (Some(future_value), None, Some(periods)) => Ok(AnnuityRequest::Payment {
            present_value,
            future_value,
            rate,
            periods,
            timing,
        }),
        (Some(future_value), Some(payment), None) => Ok(AnnuityRequest::Periods {
            present_value,
            future_value,
            payment,
            rate,
            timing,
        }),
        (Some(_), Some(_), Some(_)) => Err(SelectError::NoUnknownField),
        _ => Err(SelectError::MultipleUnknownFields),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
