//! Moore-Penrose pseudoinverse solvers and verifier.
//!
//! Two independent constructions of the pseudoinverse:
//!
//! - [`moore_penrose_limit`] — the limit of a Tikhonov-regularized inverse
//!   as the regularization parameter is halved geometrically, stopping when
//!   successive approximations agree in Frobenius norm. Approximate; works
//!   for any rank.
//! - [`greville`] — Greville's recursion, incorporating one row of the
//!   input at a time with a rank-one update. Exact up to floating-point
//!   error; a degenerate branch handles rows that are linearly dependent
//!   on the rows already seen.
//!
//! [`verify`] checks a candidate against the four Penrose identities and
//! reports each independently; a true pseudoinverse satisfies all four.
//!
//! Fatal conditions (empty input, shape mismatch, a singular regularized
//! system) are reported as [`PinvError`]. Non-fatal diagnostics travel in
//! the result structs: [`LimitResult::converged`] flags an exhausted
//! iteration budget, and [`GrevilleResult::degenerate_rows`] records where
//! the dependent-row branch fired.

mod greville;
mod limit;
mod verify;


pub use greville::{greville, GrevilleResult, GrevilleSettings};
pub use limit::{moore_penrose_limit, LimitResult, LimitSettings};
pub use verify::{verify, PenroseReport};

/// Errors from the pseudoinverse solvers and verifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinvError {
    /// Input matrix has zero rows or zero columns.
    EmptyMatrix,
    /// Paired matrices have incompatible shapes.
    ShapeMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// A regularized system could not be inverted (the regularization
    /// parameter underflowed to zero).
    Singular,
}

impl core::fmt::Display for PinvError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinvError::EmptyMatrix => write!(f, "matrix has zero rows or columns"),
            PinvError::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            PinvError::Singular => write!(f, "regularized system is singular"),
        }
    }
}
