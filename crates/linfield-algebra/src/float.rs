use std::cmp::Ordering;

use num_traits::Float;

use crate::error::FieldError;
use crate::field::{Distance, Field, TotalOrder};

// NOTE: singularity checks compare against an exact 0.0, there is no tolerance.
// Nearly singular matrices therefore decompose into large, unstable factors
// instead of being reported as singular.
macro_rules! impl_float_field {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                fn add_identity() -> Self {
                    <$t as num_traits::Zero>::zero()
                }

                fn mul_identity() -> Self {
                    <$t as num_traits::One>::one()
                }

                fn add(&self, other: &Self) -> Self {
                    self + other
                }

                fn multiply(&self, other: &Self) -> Self {
                    self * other
                }

                fn additive_inverse(&self) -> Self {
                    -self
                }

                fn multiplicative_inverse(&self) -> Result<Self, FieldError> {
                    if self.is_add_identity() {
                        return Err(FieldError::DivisionByZero);
                    }
                    Ok(Float::recip(*self))
                }

                fn divide(&self, other: &Self) -> Result<Self, FieldError> {
                    if other.is_add_identity() {
                        return Err(FieldError::DivisionByZero);
                    }
                    Ok(self / other)
                }
            }

            impl Distance for $t {
                fn distance(&self, other: &Self) -> Self {
                    Float::abs(self - other)
                }
            }

            impl TotalOrder for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_float_field!(f32, f64);
