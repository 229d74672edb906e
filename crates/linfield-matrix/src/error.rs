/// An error type for matrix construction and arithmetic.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A row does not have the same number of elements as the first row.
    #[error("Row {row} has {len} elements but the first row has {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Number of elements in the offending row
        len: usize,
        /// Number of elements in the first row
        expected: usize,
    },

    /// The data length does not match the requested shape.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// An index lies outside the matrix.
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows of the matrix
        rows: usize,
        /// Number of columns of the matrix
        cols: usize,
    },

    /// The shapes of the operands are incompatible.
    #[error("Dimension mismatch: {message}. Expected shape: {expected:?}, got: {actual:?}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Shape required by the operation
        expected: [usize; 2],
        /// Shape that was supplied
        actual: [usize; 2],
    },
}

impl MatrixError {
    /// Creates a DimensionMismatch error with context.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: [usize; 2],
        actual: [usize; 2],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected,
            actual,
        }
    }

    /// Creates an IndexOutOfRange error for a matrix of the given shape.
    pub fn index_out_of_range(row: usize, col: usize, shape: [usize; 2]) -> Self {
        Self::IndexOutOfRange {
            row,
            col,
            rows: shape[0],
            cols: shape[1],
        }
    }
}
