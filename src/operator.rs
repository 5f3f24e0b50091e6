//! Affine operator identification via the pseudoinverse.
//!
//! Given paired observation matrices `X` (inputs, one sample per column)
//! and `Y` (outputs, same column count), [`fit_operator`] finds the
//! operator `A` minimizing `||Y - A*X~||` in the least-squares sense,
//! where `X~` is `X` with an appended row of ones so the fit carries a
//! constant term. The solution is `A = Y * X~+`, with the pseudoinverse
//! supplied by either solver from [`crate::pinv`].

use crate::matrix::Matrix;
use crate::pinv::PinvError;
use crate::traits::{FloatScalar, Scalar};

/// Append a row of ones to the bottom of `x`: `X~ = [X; 1 ... 1]`.
///
/// ```
/// use pinverse::{augment_ones, Matrix};
/// let x = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let xt = augment_ones(&x);
/// assert_eq!(xt.shape(), (3, 3));
/// assert_eq!(xt.row_slice(2), &[1.0, 1.0, 1.0]);
/// ```
pub fn augment_ones<T: Scalar>(x: &Matrix<T>) -> Matrix<T> {
    let mut out = x.clone();
    out.push_row(Matrix::fill(1, x.ncols(), T::one()).row_slice(0));
    out
}

/// Element-wise reconstruction error metrics between a target matrix and
/// its reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructionError<T> {
    /// Induced one norm (maximum absolute column sum) of the residual.
    pub norm_one: T,
    /// Mean squared error over all entries.
    pub mse: T,
    /// Root mean squared error.
    pub rmse: T,
}

/// Compute reconstruction error metrics for `truth - predicted`.
///
/// Panics if the shapes differ (both matrices come from the same fit, so a
/// mismatch is a caller bug, not an input condition).
pub fn reconstruction_error<T: FloatScalar>(
    truth: &Matrix<T>,
    predicted: &Matrix<T>,
) -> ReconstructionError<T> {
    let diff = truth - predicted;
    let count = T::from(diff.nrows() * diff.ncols()).unwrap_or_else(T::one);
    let mse = diff.frobenius_norm_squared() / count;
    ReconstructionError {
        norm_one: diff.norm_one(),
        mse,
        rmse: mse.sqrt(),
    }
}

/// A fitted affine operator together with its reconstruction diagnostics.
#[derive(Debug, Clone)]
pub struct OperatorFit<T> {
    /// The operator `A`, shaped `y.nrows x (x.nrows + 1)`; the last column
    /// multiplies the constant ones row.
    pub operator: Matrix<T>,
    /// `A * X~`, the reconstruction of `Y`.
    pub predicted: Matrix<T>,
    /// Error metrics of `Y - predicted`.
    pub error: ReconstructionError<T>,
}

/// Identify the affine operator `A` with `Y ≈ A * X~` by pseudoinversion.
///
/// `pinv` supplies the pseudoinverse of the ones-augmented input; pass a
/// closure over either solver. `X` and `Y` must have the same number of
/// columns (samples).
///
/// # Example
///
/// ```
/// use pinverse::{fit_operator, greville, GrevilleSettings, Matrix};
///
/// // Y doubles X's single row and adds 1: y = 2x + 1
/// let x = Matrix::from_rows(1, 3, &[0.0_f64, 1.0, 2.0]);
/// let y = Matrix::from_rows(1, 3, &[1.0, 3.0, 5.0]);
///
/// let fit = fit_operator(&x, &y, |m| {
///     greville(m, &GrevilleSettings::default()).map(|r| r.pinv)
/// })
/// .unwrap();
///
/// assert!((fit.operator[(0, 0)] - 2.0).abs() < 1e-8);
/// assert!((fit.operator[(0, 1)] - 1.0).abs() < 1e-8);
/// assert!(fit.error.rmse < 1e-8);
/// ```
pub fn fit_operator<T: FloatScalar>(
    x: &Matrix<T>,
    y: &Matrix<T>,
    pinv: impl FnOnce(&Matrix<T>) -> Result<Matrix<T>, PinvError>,
) -> Result<OperatorFit<T>, PinvError> {
    if x.is_empty() || y.is_empty() {
        return Err(PinvError::EmptyMatrix);
    }
    if y.ncols() != x.ncols() {
        return Err(PinvError::ShapeMismatch {
            expected: (y.nrows(), x.ncols()),
            got: y.shape(),
        });
    }

    let x_aug = augment_ones(x);
    let x_pinv = pinv(&x_aug)?;

    let operator = y * &x_pinv;
    let predicted = &operator * &x_aug;
    let error = reconstruction_error(y, &predicted);

    Ok(OperatorFit {
        operator,
        predicted,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinv::{greville, moore_penrose_limit, GrevilleSettings, LimitSettings};

    #[test]
    fn augment_appends_ones_row() {
        let x = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let xt = augment_ones(&x);
        assert_eq!(xt.shape(), (3, 2));
        assert_eq!(xt.row_slice(0), &[1.0, 2.0]);
        assert_eq!(xt.row_slice(2), &[1.0, 1.0]);
    }

    #[test]
    fn exact_affine_map_is_recovered() {
        // X~ is square and invertible, so Y = W * X~ is reproduced exactly
        let x = Matrix::from_rows(2, 3, &[1.0, 2.0, 0.0, 0.0, 1.0, 1.0]);
        let w = Matrix::from_rows(2, 3, &[1.0, -1.0, 2.0, 0.5, 0.0, -1.0]);
        let y = &w * &augment_ones(&x);

        let fit = fit_operator(&x, &y, |m| {
            greville(m, &GrevilleSettings::default()).map(|r| r.pinv)
        })
        .unwrap();

        assert!(fit.operator.max_abs_diff(&w) < 1e-8);
        assert!(fit.predicted.max_abs_diff(&y) < 1e-8);
        assert!(fit.error.rmse < 1e-8);
        assert!(fit.error.norm_one < 1e-8);
    }

    #[test]
    fn both_solvers_produce_comparable_fits() {
        let x: Matrix<f64> = Matrix::from_rows(2, 4, &[0.0, 1.0, 2.0, 3.0, 1.0, 0.0, 1.0, 0.0]);
        let y: Matrix<f64> = Matrix::from_rows(1, 4, &[1.0, 2.5, 5.0, 6.5]);

        let via_greville = fit_operator(&x, &y, |m| {
            greville(m, &GrevilleSettings::default()).map(|r| r.pinv)
        })
        .unwrap();
        let via_limit = fit_operator(&x, &y, |m| {
            moore_penrose_limit(m, &LimitSettings::default()).map(|r| r.pinv)
        })
        .unwrap();

        assert!(via_greville
            .operator
            .max_abs_diff(&via_limit.operator) < 1e-3);
        assert!((via_greville.error.rmse - via_limit.error.rmse).abs() < 1e-3);
    }

    #[test]
    fn column_count_mismatch_rejected() {
        let x = Matrix::from_rows(1, 3, &[1.0, 2.0, 3.0]);
        let y = Matrix::from_rows(1, 2, &[1.0, 2.0]);
        assert_eq!(
            fit_operator(&x, &y, |m| greville(m, &GrevilleSettings::default())
                .map(|r| r.pinv))
            .unwrap_err(),
            PinvError::ShapeMismatch {
                expected: (1, 3),
                got: (1, 2),
            }
        );
    }

    #[test]
    fn residual_metrics_consistency() {
        let truth: Matrix<f64> = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let predicted: Matrix<f64> = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 2.0]);
        let err = reconstruction_error(&truth, &predicted);
        // Single residual entry of 2.0
        assert!((err.norm_one - 2.0).abs() < 1e-12);
        assert!((err.mse - 1.0).abs() < 1e-12);
        assert!((err.rmse - 1.0).abs() < 1e-12);
    }
}
