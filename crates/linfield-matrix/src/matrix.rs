use std::fmt;
use std::ops::{Index, Range};

use linfield_algebra::Field;

use crate::error::MatrixError;

/// A dense `m x n` matrix stored in row-major order.
///
/// A matrix always has at least one row and one column and every row has the same
/// length. Once built it is never modified: every operation returns a new matrix.
///
/// Two matrices are equal if they have the same shape and equal elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from a vector of rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows of the matrix, each one holding the same number of elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if there are no rows or the rows are empty,
    /// and [`MatrixError::RaggedRows`] if a row's length differs from the first row's.
    ///
    /// # Example
    ///
    /// ```
    /// use linfield_matrix::{Matrix, MatrixError};
    ///
    /// let m = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), [2, 3]);
    ///
    /// let err = Matrix::new(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    /// assert_eq!(err, MatrixError::RaggedRows { row: 1, len: 2, expected: 3 });
    /// ```
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::RaggedRows {
                row,
                len: r.len(),
                expected: cols,
            });
        }

        let num_rows = rows.len();
        let data = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: num_rows,
            cols,
            data,
        })
    }

    /// Creates a matrix from a shape and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if a dimension is zero and
    /// [`MatrixError::InvalidShape`] if `data` does not hold `rows * cols` elements.
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, MatrixError> {
        let [rows, cols] = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidShape {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix by evaluating `f([row, col])` for every position.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if a dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use linfield_matrix::Matrix;
    ///
    /// let m = Matrix::from_shape_fn([2, 2], |[i, j]| i * 2 + j).unwrap();
    /// assert_eq!(m.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; 2], mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut([usize; 2]) -> T,
    {
        let [rows, cols] = shape;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f([i, j]));
            }
        }
        Self::from_shape_vec(shape, data)
    }

    /// The shape as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the `i`-th row, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        (i < self.rows).then(|| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Returns the element at row `i` and column `j`, 0-indexed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] outside `[0, m) x [0, n)`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::index_out_of_range(i, j, self.shape()));
        }
        Ok(&self.data[i * self.cols + j])
    }
}

impl<T: Clone> Matrix<T> {
    /// Copies the elements into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Extracts the block covering `rows` x `cols`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if a range ends past the matrix and
    /// [`MatrixError::EmptyMatrix`] if a range is empty.
    pub fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self, MatrixError> {
        if rows.end > self.rows || cols.end > self.cols {
            return Err(MatrixError::index_out_of_range(
                rows.end.saturating_sub(1),
                cols.end.saturating_sub(1),
                self.shape(),
            ));
        }
        let shape = [rows.len(), cols.len()];
        Self::from_shape_fn(shape, |[i, j]| self[(rows.start + i, cols.start + j)].clone())
    }

    /// Reorders the rows so that row `i` of the result is row `perm[i]` of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `perm` does not have one entry per
    /// row and [`MatrixError::IndexOutOfRange`] if an entry is not a valid row.
    pub fn permute_rows(&self, perm: &[usize]) -> Result<Self, MatrixError> {
        if perm.len() != self.rows {
            return Err(MatrixError::dimension_mismatch(
                "Row permutation length must equal the number of rows",
                [self.rows, 1],
                [perm.len(), 1],
            ));
        }
        let mut data = Vec::with_capacity(self.data.len());
        for &src in perm {
            let row = self
                .row(src)
                .ok_or_else(|| MatrixError::index_out_of_range(src, 0, self.shape()))?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// The main diagonal, from the top-left corner.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self[(i, i)].clone())
            .collect()
    }
}

impl<T: Field> Matrix<T> {
    /// Creates an `m x n` matrix filled with the additive identity.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if a dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_shape_fn([rows, cols], |_| T::add_identity())
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::from_shape_fn([n, n], |[i, j]| {
            if i == j {
                T::mul_identity()
            } else {
                T::add_identity()
            }
        })
    }

    /// Element-wise sum of two matrices of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.element_wise_op(other, |a, b| a.add(b))
    }

    /// Element-wise difference of two matrices of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.element_wise_op(other, |a, b| a.subtract(b))
    }

    /// Matrix product `self * other`.
    ///
    /// The sums of products are computed with the field operations of `T`, never with
    /// native arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the number of columns of `self`
    /// differs from the number of rows of `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use linfield_algebra::Rational;
    /// use linfield_matrix::Matrix;
    ///
    /// let half = Rational::new(1, 2).unwrap();
    /// let a = Matrix::new(vec![vec![half, half]]).unwrap();
    /// let b = Matrix::new(vec![vec![half], vec![half]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().as_slice(), &[half]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::dimension_mismatch(
                "Left columns must equal right rows",
                [self.cols, other.cols],
                other.shape(),
            ));
        }

        Self::from_shape_fn([self.rows, other.cols], |[i, j]| {
            (0..self.cols).fold(T::add_identity(), |acc, k| {
                acc.add(&self[(i, k)].multiply(&other[(k, j)]))
            })
        })
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: &T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| x.multiply(scalar)).collect(),
        }
    }

    fn element_wise_op<F>(&self, other: &Self, op: F) -> Result<Self, MatrixError>
    where
        F: Fn(&T, &T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(
                "Element-wise operations require identical shapes",
                self.shape(),
                other.shape(),
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows, "row {i} out of range ({})", self.rows);
        assert!(j < self.cols, "column {j} out of range ({})", self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{{m={}, n={}, elems=", self.rows, self.cols)?;
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
