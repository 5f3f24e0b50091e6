use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Squared Frobenius norm (sum of all elements squared).
    pub fn frobenius_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared entries).
    ///
    /// Used by the limit solver as its convergence distance metric.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }

    /// One norm (maximum absolute column sum).
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_one() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols {
            let mut col_sum = T::zero();
            for i in 0..self.nrows {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows {
            let mut row_sum = T::zero();
            for j in 0..self.ncols {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// Largest absolute element-wise difference from `rhs`.
    ///
    /// The closeness measure behind the Penrose-condition verifier.
    /// Panics if the shapes differ.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let a = Matrix::from_rows(1, 2, &[1.0_f64, 2.0]);
    /// let b = Matrix::from_rows(1, 2, &[1.5, 2.0]);
    /// assert!((a.max_abs_diff(&b) - 0.5).abs() < 1e-12);
    /// ```
    pub fn max_abs_diff(&self, rhs: &Self) -> T {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} vs {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut max = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            let d = (a - b).abs();
            if d > max {
                max = d;
            }
        }
        max
    }
}
