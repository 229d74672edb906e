#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! Two structurally different algorithms factor a square matrix `A` into
//! `P * A = L * U`:
//!
//! - [`lup_decomposition`]: in-place row elimination with partial pivoting.
//! - [`lup_decomposition_recursive`]: recursion on the Schur complement of the pivot.
//!
//! Both pick the same pivots and therefore return the same factors. The
//! [`permutation`] module computes determinants by the Leibniz formula and serves as
//! an independent check of [`calc_determinant`].
//!
//! ```rust
//! use linfield_algebra::Rational;
//! use linfield_lup::{calc_determinant, lup_decomposition};
//! use linfield_matrix::Matrix;
//!
//! let a = Matrix::new(vec![
//!     vec![Rational::from(3), Rational::from(1)],
//!     vec![Rational::from(2), Rational::from(5)],
//! ])
//! .unwrap();
//!
//! let lup = lup_decomposition(&a).unwrap().expect("matrix is regular");
//! assert_eq!(lup.p.multiply(&a).unwrap(), lup.l.multiply(&lup.u).unwrap());
//! assert_eq!(calc_determinant(&a).unwrap(), Rational::from(13));
//! ```

/// Error types for decompositions.
pub mod error;

/// The LUP result type, the iterative algorithm and the derived operations.
pub mod lup;

/// Determinants by permutation expansion.
pub mod permutation;

/// The recursive Schur-complement algorithm.
pub mod recursive;

pub use crate::error::LupError;
pub use crate::lup::{calc_determinant, inverse, lup_decomposition, Lup, LupAlgorithm};
pub use crate::recursive::lup_decomposition_recursive;
