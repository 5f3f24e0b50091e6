use alloc::vec::Vec;

use crate::matrix::Matrix;
use crate::pinv::PinvError;
use crate::traits::FloatScalar;

/// Settings for the regularized-limit pseudoinverse solver.
#[derive(Debug, Clone, Copy)]
pub struct LimitSettings<T> {
    /// Convergence tolerance on the Frobenius distance between successive
    /// approximations.
    pub tol: T,
    /// Initial regularization parameter, halved each step.
    pub delta_init: T,
    /// Maximum number of halving steps.
    pub max_iter: usize,
}

impl Default for LimitSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            delta_init: 10.0,
            max_iter: 1000,
        }
    }
}

impl Default for LimitSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-3,
            delta_init: 10.0,
            max_iter: 1000,
        }
    }
}

/// Result of the regularized-limit solver.
#[derive(Debug, Clone)]
pub struct LimitResult<T> {
    /// Approximate pseudoinverse, shaped `ncols x nrows` of the input.
    pub pinv: Matrix<T>,
    /// Number of halving steps performed.
    pub iterations: usize,
    /// Whether the successive-difference criterion was met. `false` means
    /// the iteration budget ran out; the approximation is still returned
    /// and usable, but its precision is up to the caller to judge.
    pub converged: bool,
    /// Frobenius distance between successive approximations, one entry per
    /// halving step.
    pub trace: Vec<T>,
}

/// Moore-Penrose pseudoinverse as the limit of a Tikhonov-regularized inverse.
///
/// For an `m x n` input `A` and regularization parameter `delta`:
///
/// - if `m <= n`: `P(delta) = A^T * (A*A^T + delta^2*I)^-1`
/// - else:        `P(delta) = (A^T*A + delta^2*I)^-1 * A^T`
///
/// The solver starts from `P(delta_init)` and halves `delta` until two
/// successive approximations are within `tol` in Frobenius norm, or the
/// iteration budget runs out (reported via [`LimitResult::converged`],
/// never as an error). The `delta^2` shift keeps the inner matrix
/// invertible for any rank of `A`, so [`PinvError::Singular`] can only
/// arise once `delta` has underflowed to zero.
///
/// # Example
///
/// ```
/// use pinverse::{moore_penrose_limit, verify, LimitSettings, Matrix};
///
/// let a = Matrix::from_rows(2, 3, &[1.0_f64, 0.0, 2.0, -1.0, 3.0, 1.0]);
/// let result = moore_penrose_limit(&a, &LimitSettings::default()).unwrap();
///
/// assert!(result.converged);
/// assert_eq!(result.pinv.shape(), (3, 2));
/// assert!(verify(&a, &result.pinv, 1e-4).unwrap().all());
/// ```
pub fn moore_penrose_limit<T: FloatScalar>(
    a: &Matrix<T>,
    settings: &LimitSettings<T>,
) -> Result<LimitResult<T>, PinvError> {
    if a.is_empty() {
        return Err(PinvError::EmptyMatrix);
    }

    let at = a.transpose();
    let two = T::one() + T::one();

    let mut delta = settings.delta_init;
    let mut prev = regularized_pinv(a, &at, delta)?;
    let mut trace = Vec::new();

    for step in 0..settings.max_iter {
        delta = delta / two;
        let cur = regularized_pinv(a, &at, delta)?;
        let dist = (&cur - &prev).frobenius_norm();
        trace.push(dist);

        if dist < settings.tol {
            return Ok(LimitResult {
                pinv: cur,
                iterations: step + 1,
                converged: true,
                trace,
            });
        }

        prev = cur;
    }

    Ok(LimitResult {
        pinv: prev,
        iterations: settings.max_iter,
        converged: false,
        trace,
    })
}

/// One regularized inverse evaluation `P(delta)`.
///
/// Inverts the smaller of the two normal matrices: `A*A^T` (`m x m`) when
/// the input is wide, `A^T*A` (`n x n`) when it is tall.
fn regularized_pinv<T: FloatScalar>(
    a: &Matrix<T>,
    at: &Matrix<T>,
    delta: T,
) -> Result<Matrix<T>, PinvError> {
    let shift = delta * delta;

    if a.nrows() <= a.ncols() {
        let mut gram = a * at;
        for i in 0..gram.nrows() {
            gram[(i, i)] = gram[(i, i)] + shift;
        }
        let inv = gram.inverse().map_err(|_| PinvError::Singular)?;
        Ok(at * &inv)
    } else {
        let mut gram = at * a;
        for i in 0..gram.nrows() {
            gram[(i, i)] = gram[(i, i)] + shift;
        }
        let inv = gram.inverse().map_err(|_| PinvError::Singular)?;
        Ok(&inv * at)
    }
}
