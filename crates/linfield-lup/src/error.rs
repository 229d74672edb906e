use linfield_algebra::FieldError;
use linfield_matrix::MatrixError;

/// An error type for decompositions and determinants.
///
/// A singular matrix is not an error: decompositions report it as `None` and
/// determinants as the additive identity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LupError {
    /// The operation is only defined for square matrices.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the input
        rows: usize,
        /// Number of columns of the input
        cols: usize,
    },

    /// Matrix error
    #[error(transparent)]
    MatrixError(#[from] MatrixError),

    /// Field error
    #[error(transparent)]
    FieldError(#[from] FieldError),
}
