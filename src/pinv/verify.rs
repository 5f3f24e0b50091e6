use crate::matrix::Matrix;
use crate::pinv::PinvError;
use crate::traits::FloatScalar;

/// Outcome of checking the four Penrose conditions.
///
/// Each field is one identity, judged independently by element-wise
/// closeness; `all()` is the conjunction. A candidate is the Moore-Penrose
/// pseudoinverse exactly when all four hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenroseReport {
    /// Condition 1: `A*P*A = A`.
    pub reproduces_a: bool,
    /// Condition 2: `P*A*P = P`.
    pub reproduces_pinv: bool,
    /// Condition 3: `A*P` is symmetric.
    pub ap_symmetric: bool,
    /// Condition 4: `P*A` is symmetric.
    pub pa_symmetric: bool,
}

impl PenroseReport {
    /// Whether all four conditions hold.
    pub fn all(&self) -> bool {
        self.reproduces_a && self.reproduces_pinv && self.ap_symmetric && self.pa_symmetric
    }
}

/// Check a candidate pseudoinverse against the four Penrose conditions.
///
/// `tol` bounds the largest allowed element-wise deviation in each
/// identity. The candidate's shape must be the transpose of `a`'s shape;
/// anything else is rejected with [`PinvError::ShapeMismatch`] before any
/// arithmetic.
///
/// # Example
///
/// ```
/// use pinverse::{greville, verify, GrevilleSettings, Matrix};
///
/// let a = Matrix::from_rows(3, 2, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let p = greville(&a, &GrevilleSettings::default()).unwrap().pinv;
///
/// let report = verify(&a, &p, 1e-8).unwrap();
/// assert!(report.all());
///
/// // The transpose is not a pseudoinverse of A
/// let report = verify(&a, &a.transpose(), 1e-8).unwrap();
/// assert!(!report.all());
/// ```
pub fn verify<T: FloatScalar>(
    a: &Matrix<T>,
    pinv: &Matrix<T>,
    tol: T,
) -> Result<PenroseReport, PinvError> {
    if a.is_empty() {
        return Err(PinvError::EmptyMatrix);
    }
    let expected = (a.ncols(), a.nrows());
    if pinv.shape() != expected {
        return Err(PinvError::ShapeMismatch {
            expected,
            got: pinv.shape(),
        });
    }

    let ap = a * pinv;
    let pa = pinv * a;

    Ok(PenroseReport {
        reproduces_a: (&ap * a).max_abs_diff(a) <= tol,
        reproduces_pinv: (&pa * pinv).max_abs_diff(pinv) <= tol,
        ap_symmetric: ap.max_abs_diff(&ap.transpose()) <= tol,
        pa_symmetric: pa.max_abs_diff(&pa.transpose()) <= tol,
    })
}
