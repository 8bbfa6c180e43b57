//! Closed-form solvers for the three instrument classes behind a
//! three-of-four financial calculator: fixed-payment amortizing loans,
//! lump-sum compound growth, and savings annuities.
//!
//! Each solver is a pure function of already-normalized inputs (a periodic
//! fractional rate and a matching period count) plus a tag naming the one
//! variable to compute. Unit conversion, field selection, and display
//! formatting live at the edges — see [`conversion`] and [`selector`].

pub mod amortization;
pub mod annuity;
pub mod compound_growth;
pub mod conversion;
pub mod error;
mod numeric;
pub mod selector;
pub mod types;

pub use error::{ReasonCode, SelectError, SolveError};
pub use types::*;

/// Standard result type for all solver operations.
pub type SolveResult<T> = Result<T, SolveError>;
