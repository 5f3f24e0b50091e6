use alloc::vec::Vec;

use crate::matrix::Matrix;
use crate::pinv::PinvError;
use crate::traits::FloatScalar;

/// Settings for Greville's recursive pseudoinverse solver.
#[derive(Debug, Clone, Copy)]
pub struct GrevilleSettings<T> {
    /// Threshold below which the quadratic form `a^T*Z*a` is treated as
    /// zero, routing the update through the degenerate (linearly dependent
    /// row) branch. Scales with the magnitude of the input entries, so
    /// adjust it for matrices far from unit scale.
    pub tol: T,
}

impl Default for GrevilleSettings<f64> {
    fn default() -> Self {
        Self { tol: 1e-10 }
    }
}

impl Default for GrevilleSettings<f32> {
    fn default() -> Self {
        Self { tol: 1e-5 }
    }
}

/// Result of the Greville solver.
#[derive(Debug, Clone)]
pub struct GrevilleResult<T> {
    /// The pseudoinverse, shaped `ncols x nrows` of the input.
    pub pinv: Matrix<T>,
    /// Number of row-incorporation steps, always `nrows - 1`.
    pub iterations: usize,
    /// Input row indices (0-based) that were incorporated through the
    /// degenerate branch, i.e. rows linearly dependent on the rows above
    /// them. Empty for inputs of full row rank.
    pub degenerate_rows: Vec<usize>,
}

/// Moore-Penrose pseudoinverse by Greville's recursion.
///
/// Builds the pseudoinverse online, one row of `A` at a time. After row
/// `i` is incorporated, the running `P` is the exact pseudoinverse of the
/// first `i` rows; each step appends one column to `P` and adjusts the
/// existing ones with a rank-one update. Rows whose projection onto the
/// orthogonal complement of the span so far vanishes (`a^T*Z*a <= tol`)
/// take the degenerate branch, which keeps `P` exact without dividing by
/// a vanishing quadratic form.
///
/// Unlike the regularized limit method this is not iterative refinement:
/// the result is exact up to floating-point rounding, and `iterations` is
/// always `nrows - 1`.
///
/// # Example
///
/// ```
/// use pinverse::{greville, GrevilleSettings, Matrix};
///
/// // Rank-deficient: second row repeats the first
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 1.0, 1.0, 1.0]);
/// let result = greville(&a, &GrevilleSettings::default()).unwrap();
///
/// assert_eq!(result.degenerate_rows, &[1]);
/// assert!((result.pinv[(0, 0)] - 0.25).abs() < 1e-12);
/// ```
pub fn greville<T: FloatScalar>(
    a: &Matrix<T>,
    settings: &GrevilleSettings<T>,
) -> Result<GrevilleResult<T>, PinvError> {
    if a.is_empty() {
        return Err(PinvError::EmptyMatrix);
    }

    let (m, n) = a.shape();

    // Seed with the first row: a1 / (a1^T a1), or the zero column when the
    // row itself is (numerically) zero.
    let first = a.row(0);
    let d = first.frobenius_norm_squared();
    let mut pinv = if d.abs() < settings.tol {
        Matrix::zeros(n, 1)
    } else {
        first.transpose() / d
    };

    let mut sub = first;
    let mut degenerate_rows = Vec::new();

    for i in 1..m {
        let row = a.row(i);
        let col = row.transpose();

        // Z projects onto the orthogonal complement of the rows seen so far
        let z = Matrix::eye(n) - &pinv * &sub;
        let za = &z * &col;
        let q = (&row * &za)[(0, 0)];

        let row_p = &row * &pinv;

        let (update, new_col) = if q > settings.tol {
            // Regular case: the new row extends the span
            ((&za * &row_p) / q, za / q)
        } else {
            // Degenerate case: the new row lies in the span of the
            // previous ones
            degenerate_rows.push(i);
            let r = &pinv * &pinv.transpose();
            let ra = &r * &col;
            let denom = T::one() + (&row * &ra)[(0, 0)];
            ((&ra * &row_p) / denom, ra / denom)
        };

        pinv = (&pinv - &update).hcat(&new_col);
        sub.push_row(row.row_slice(0));
    }

    Ok(GrevilleResult {
        pinv,
        iterations: m - 1,
        degenerate_rows,
    })
}
