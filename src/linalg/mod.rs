//! LU decomposition with partial pivoting.
//!
//! [`lu_in_place`] and [`lu_solve`] are free functions over the
//! [`MatrixMut`](crate::traits::MatrixMut) /
//! [`MatrixRef`](crate::traits::MatrixRef) seam; the [`Lu`] wrapper struct
//! offers a higher-level API (`solve`, `inverse`, `det`). Convenience
//! method on [`Matrix`](crate::Matrix): `a.inverse()`.

pub(crate) mod lu;

pub use lu::{lu_in_place, lu_solve, Lu};

/// Errors from linear algebra operations.
///
/// ```
/// use pinverse::{LinalgError, Matrix};
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}
