//! # pinverse
//!
//! Moore-Penrose pseudoinverse of dense real matrices, computed by two
//! independent numerical methods and verifiable against the four defining
//! Penrose conditions. Pure Rust, no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use pinverse::{greville, verify, GrevilleSettings, Matrix};
//!
//! // 3x2 matrix of full column rank
//! let a = Matrix::from_rows(3, 2, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! let result = greville(&a, &GrevilleSettings::default()).unwrap();
//! assert_eq!(result.pinv.shape(), (2, 3));
//!
//! // P is a left inverse: P * A = I
//! let pa = &result.pinv * &a;
//! assert!((pa[(0, 0)] - 1.0).abs() < 1e-10);
//! assert!(pa[(0, 1)].abs() < 1e-10);
//!
//! let report = verify(&a, &result.pinv, 1e-8).unwrap();
//! assert!(report.all());
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions.
//!   `Vec<T>` row-major storage. Arithmetic operators, transpose, row and
//!   column manipulation, Frobenius/one/infinity norms.
//!
//! - [`linalg`] — LU decomposition with partial pivoting. Free functions
//!   operate on `&mut impl MatrixMut<T>` for in-place use; the [`Lu`]
//!   wrapper struct offers `solve()`, `inverse()`, and `det()`. Convenience
//!   method on `Matrix`: `a.inverse()`.
//!
//! - [`pinv`] — The pseudoinverse solvers and verifier:
//!   [`moore_penrose_limit`] (Tikhonov-regularized limit with a
//!   successive-difference stopping rule), [`greville`] (exact row-by-row
//!   recursion with a degenerate-rank branch), and [`verify`] (the four
//!   Penrose identities as a boolean report).
//!
//! - [`operator`] — Affine operator identification `A = Y * X~+` on
//!   ones-augmented data, with reconstruction error metrics.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, required by norms and solvers
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no_std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod operator;
pub mod pinv;
pub mod traits;

pub use linalg::{Lu, LinalgError};
pub use matrix::Matrix;
pub use operator::{augment_ones, fit_operator, OperatorFit, ReconstructionError};
pub use pinv::{
    greville, moore_penrose_limit, verify, GrevilleResult, GrevilleSettings, LimitResult,
    LimitSettings, PenroseReport, PinvError,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
