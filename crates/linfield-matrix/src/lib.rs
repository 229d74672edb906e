#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! [`Matrix`] is an immutable, row-major, two-dimensional container. Its arithmetic
//! goes through the [`Field`](linfield_algebra::Field) trait of the element type, so
//! a product of rational matrices is computed exactly.
//!
//! ```rust
//! use linfield_matrix::Matrix;
//!
//! let a = Matrix::new(vec![vec![2.0, 0.0, 3.0], vec![5.0, 1.0, 4.0]]).unwrap();
//! let b = Matrix::new(vec![vec![7.0], vec![1.0], vec![5.0]]).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.shape(), [2, 1]);
//! assert_eq!(c.as_slice(), &[29.0, 56.0]);
//! ```

/// Error types for matrix construction and arithmetic.
pub mod error;

/// The dense [`Matrix`] type and its operations.
pub mod matrix;

pub use crate::error::MatrixError;
pub use crate::matrix::Matrix;
