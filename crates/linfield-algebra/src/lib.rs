#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! Linear-algebra routines in the `linfield` crates never use native arithmetic
//! directly. They go through the [`Field`] trait, so the same elimination code runs
//! over floating-point numbers and over exact [`Rational`] numbers.
//!
//! Pivot selection additionally needs to rank candidates by size. That is what
//! [`Distance`] and [`TotalOrder`] are for. The three traits together form the
//! [`Scalar`] bundle, which is blanket-implemented for every type that provides them.
//!
//! ```rust
//! use linfield_algebra::{Field, Rational};
//!
//! let a = Rational::new(1, 3).unwrap();
//! let b = Rational::new(1, 6).unwrap();
//! assert_eq!(a.add(&b), Rational::new(1, 2).unwrap());
//! assert_eq!(a.divide(&b).unwrap(), Rational::from(2));
//! ```

/// Error types for scalar arithmetic.
pub mod error;

/// The [`Field`], [`Distance`] and [`TotalOrder`] capability traits.
pub mod field;

/// Field instances for the primitive floating-point types.
pub mod float;

/// Exact rational numbers backed by reduced `i64` fractions.
pub mod rational;

pub use crate::error::FieldError;
pub use crate::field::{Distance, Field, Scalar, TotalOrder};
pub use crate::rational::Rational;
