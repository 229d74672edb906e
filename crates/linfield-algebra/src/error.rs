/// An error type for scalar field operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The additive identity has no multiplicative inverse.
    #[error("Division by zero")]
    DivisionByZero,

    /// The reduced value does not fit into the scalar's representation.
    #[error("Value {numer}/{denom} is out of range")]
    Overflow {
        /// Reduced numerator
        numer: i128,
        /// Reduced denominator
        denom: i128,
    },

    /// The input could not be parsed as a scalar.
    #[error("Failed to parse scalar from {0:?}")]
    Parse(String),
}
