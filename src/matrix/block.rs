use alloc::vec::Vec;

use crate::traits::Scalar;

use super::Matrix;

// ── Row / Column access ─────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Row `i` as a slice (rows are contiguous in storage).
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}

impl<T: Scalar> Matrix<T> {
    /// Extract row `i` as a `1 x ncols` matrix.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let r = m.row(1);
    /// assert_eq!(r.shape(), (1, 3));
    /// assert_eq!(r[(0, 0)], 4.0);
    /// ```
    pub fn row(&self, i: usize) -> Self {
        Self::from_rows(1, self.ncols, self.row_slice(i))
    }

    /// Extract column `j` as an `nrows x 1` matrix.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let c = m.col(1);
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c[(1, 0)], 5.0);
    /// ```
    pub fn col(&self, j: usize) -> Self {
        let mut data = Vec::with_capacity(self.nrows);
        for i in 0..self.nrows {
            data.push(self[(i, j)]);
        }
        Self::from_vec(self.nrows, 1, data)
    }

    /// Append one row to the bottom of the matrix, in place.
    ///
    /// Panics if `row.len() != ncols`. Rows are contiguous in storage, so
    /// this is a plain buffer extension.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let mut m = Matrix::from_rows(1, 2, &[1.0, 2.0]);
    /// m.push_row(&[3.0, 4.0]);
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn push_row(&mut self, row: &[T]) {
        assert_eq!(
            row.len(),
            self.ncols,
            "row length {} does not match {} columns",
            row.len(),
            self.ncols,
        );
        self.data.extend_from_slice(row);
        self.nrows += 1;
    }

    /// Horizontal concatenation: `[self | rhs]`.
    ///
    /// Panics if the row counts differ. The Greville recursion uses this to
    /// append each newly computed pseudoinverse column.
    ///
    /// ```
    /// use pinverse::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 4.0, 5.0]);
    /// let b = Matrix::from_rows(2, 1, &[3.0, 6.0]);
    /// let c = a.hcat(&b);
    /// assert_eq!(c.shape(), (2, 3));
    /// assert_eq!(c[(0, 2)], 3.0);
    /// assert_eq!(c[(1, 2)], 6.0);
    /// ```
    pub fn hcat(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.nrows, rhs.nrows,
            "row count mismatch: {}x{} | {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for i in 0..self.nrows {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(rhs.row_slice(i));
        }
        Self::from_vec(self.nrows, ncols, data)
    }
}
