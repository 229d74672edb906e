use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::FieldError;

/// Algebraic capabilities of a scalar type.
///
/// A `Field` provides the two identities, addition, multiplication and both inverses.
/// Subtraction and division are derived from them. Implementations are trusted to
/// satisfy the field axioms; nothing here checks them.
///
/// Values must be canonical: two algebraically equal scalars have to compare equal
/// with [`PartialEq`]. Matrix equality and singularity detection rely on it.
///
/// # Example
///
/// ```
/// use linfield_algebra::Field;
///
/// let x = 3.0f64;
/// assert_eq!(x.subtract(&1.0), 2.0);
/// assert_eq!(x.multiplicative_inverse().unwrap(), 1.0 / 3.0);
/// assert!(0.0f64.multiplicative_inverse().is_err());
/// ```
pub trait Field: Clone + PartialEq + Debug {
    /// The additive identity (zero).
    fn add_identity() -> Self;

    /// The multiplicative identity (one).
    fn mul_identity() -> Self;

    /// Returns `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// Returns `self * other`.
    fn multiply(&self, other: &Self) -> Self;

    /// Returns `-self`.
    fn additive_inverse(&self) -> Self;

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `self` is the additive identity.
    fn multiplicative_inverse(&self) -> Result<Self, FieldError>;

    /// Returns `self - other`.
    fn subtract(&self, other: &Self) -> Self {
        self.add(&other.additive_inverse())
    }

    /// Returns `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `other` is the additive identity.
    fn divide(&self, other: &Self) -> Result<Self, FieldError> {
        Ok(self.multiply(&other.multiplicative_inverse()?))
    }

    /// Returns true if `self` equals the additive identity.
    fn is_add_identity(&self) -> bool {
        *self == Self::add_identity()
    }
}

/// A distance between two scalars, expressed in the scalar type itself.
///
/// Only used to rank pivot candidates, so it has to be comparable through
/// [`TotalOrder`] and equal to the additive identity exactly for equal inputs.
pub trait Distance: Field {
    /// Distance between `self` and `other`.
    fn distance(&self, other: &Self) -> Self;

    /// Distance from the additive identity, i.e. the absolute value.
    fn magnitude(&self) -> Self {
        self.distance(&Self::add_identity())
    }

    /// Compares the magnitudes of `self` and `other`.
    ///
    /// Types whose magnitude can leave the representable range override this to
    /// compare without materializing it.
    fn compare_magnitude(&self, other: &Self) -> Ordering
    where
        Self: TotalOrder,
    {
        self.magnitude().compare(&other.magnitude())
    }
}

/// A total order over a scalar type.
pub trait TotalOrder {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Everything the decomposition routines need from a scalar type.
///
/// Implemented automatically for every type that is a [`Field`] with a [`Distance`]
/// and a [`TotalOrder`]. New scalar types plug in by implementing those three traits.
pub trait Scalar: Field + Distance + TotalOrder {}

impl<T> Scalar for T where T: Field + Distance + TotalOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integers modulo 7, used to check the default methods on a non-numeric field.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Gf7(u8);

    impl Field for Gf7 {
        fn add_identity() -> Self {
            Gf7(0)
        }

        fn mul_identity() -> Self {
            Gf7(1)
        }

        fn add(&self, other: &Self) -> Self {
            Gf7((self.0 + other.0) % 7)
        }

        fn multiply(&self, other: &Self) -> Self {
            Gf7((self.0 * other.0) % 7)
        }

        fn additive_inverse(&self) -> Self {
            Gf7((7 - self.0) % 7)
        }

        fn multiplicative_inverse(&self) -> Result<Self, FieldError> {
            (1..7)
                .map(Gf7)
                .find(|x| self.multiply(x) == Gf7(1))
                .ok_or(FieldError::DivisionByZero)
        }
    }

    #[test]
    fn test_default_subtract() {
        assert_eq!(Gf7(2).subtract(&Gf7(5)), Gf7(4));
        assert_eq!(Gf7(5).subtract(&Gf7(5)), Gf7(0));
    }

    #[test]
    fn test_default_divide() -> Result<(), FieldError> {
        assert_eq!(Gf7(3).divide(&Gf7(5))?.multiply(&Gf7(5)), Gf7(3));
        assert_eq!(Gf7(1).divide(&Gf7(0)), Err(FieldError::DivisionByZero));
        Ok(())
    }

    #[test]
    fn test_is_add_identity() {
        assert!(Gf7(0).is_add_identity());
        assert!(!Gf7(3).is_add_identity());
    }
}
