use std::cmp::Ordering;

use linfield_algebra::{Field, Scalar};
use linfield_matrix::{Matrix, MatrixError};

use crate::error::LupError;
use crate::recursive::lup_decomposition_recursive;

/// The factors of an LUP decomposition `P * A = L * U`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lup<T> {
    /// Unit lower-triangular matrix.
    pub l: Matrix<T>,
    /// Upper-triangular matrix with a non-zero diagonal.
    pub u: Matrix<T>,
    /// Permutation matrix applied to the rows of `A`.
    pub p: Matrix<T>,
    /// Determinant of `p`: the multiplicative identity or its additive inverse.
    pub p_sign: T,
}

impl<T: Field> Lup<T> {
    /// Determinant of the decomposed matrix, `p_sign * prod(diag(u))`.
    pub fn determinant(&self) -> T {
        let u_det = self
            .u
            .diagonal()
            .iter()
            .fold(T::mul_identity(), |acc, x| acc.multiply(x));
        self.p_sign.multiply(&u_det)
    }

    /// Solves `A * X = B` for `X`, where `A` is the decomposed matrix.
    ///
    /// `B` may have any number of columns; each column is solved independently by
    /// forward substitution on `L` and back substitution on `U`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `B` does not have one row per row
    /// of `A`.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LupError> {
        let n = self.u.rows();
        let k = b.cols();
        if b.rows() != n {
            return Err(MatrixError::dimension_mismatch(
                "Right-hand side must have one row per row of the matrix",
                [n, k],
                b.shape(),
            )
            .into());
        }

        let pb = self.p.multiply(b)?.to_rows();

        // L * Y = P * B, L has a unit diagonal
        let mut y: Vec<Vec<T>> = Vec::with_capacity(n);
        for i in 0..n {
            let row = (0..k)
                .map(|c| {
                    (0..i).fold(pb[i][c].clone(), |acc, j| {
                        acc.subtract(&self.l[(i, j)].multiply(&y[j][c]))
                    })
                })
                .collect();
            y.push(row);
        }

        // U * X = Y
        let mut x: Vec<Vec<T>> = vec![Vec::new(); n];
        for i in (0..n).rev() {
            let row = (0..k)
                .map(|c| {
                    (i + 1..n)
                        .fold(y[i][c].clone(), |acc, j| {
                            acc.subtract(&self.u[(i, j)].multiply(&x[j][c]))
                        })
                        .divide(&self.u[(i, i)])
                })
                .collect::<Result<Vec<_>, _>>()?;
            x[i] = row;
        }

        Ok(Matrix::new(x)?)
    }
}

/// Selects the algorithm used to compute an LUP decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LupAlgorithm {
    /// Row elimination with partial pivoting, see [`lup_decomposition`].
    #[default]
    Iterative,
    /// Schur-complement recursion, see [`lup_decomposition_recursive`].
    Recursive,
}

impl LupAlgorithm {
    /// Decomposes `matrix` with the selected algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`LupError::NotSquare`] if `matrix` is not square.
    pub fn decompose<T: Scalar>(self, matrix: &Matrix<T>) -> Result<Option<Lup<T>>, LupError> {
        match self {
            Self::Iterative => lup_decomposition(matrix),
            Self::Recursive => lup_decomposition_recursive(matrix),
        }
    }
}

pub(crate) fn ensure_square<T>(matrix: &Matrix<T>) -> Result<usize, LupError> {
    if !matrix.is_square() {
        return Err(LupError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(matrix.rows())
}

/// Returns the index of the candidate with the largest magnitude.
///
/// Ties keep the earliest candidate. `None` if every candidate is zero.
pub(crate) fn find_pivot<'a, T, I>(candidates: I) -> Option<usize>
where
    T: Scalar + 'a,
    I: IntoIterator<Item = (usize, &'a T)>,
{
    let mut best: Option<(usize, &T)> = None;
    for (index, value) in candidates {
        if value.is_add_identity() {
            continue;
        }
        match best {
            Some((_, current)) if value.compare_magnitude(current) != Ordering::Greater => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Computes the LUP decomposition of a square matrix by row elimination.
///
/// For each column `k` the row with the largest magnitude at or below the diagonal
/// becomes the pivot row. The multipliers are stored in place below the diagonal and
/// become `L`; what is left on and above the diagonal becomes `U`.
///
/// A column without a pivot makes the matrix singular. For floats this means a pivot
/// of exactly `0.0`, so nearly singular matrices still decompose.
///
/// # Arguments
///
/// * `matrix` - The square matrix to decompose. It is not modified.
///
/// # Returns
///
/// `Some(Lup)` with `P * A = L * U`, or `None` if the matrix is singular.
///
/// # Errors
///
/// Returns [`LupError::NotSquare`] if `matrix` is not square.
///
/// # Example
///
/// ```
/// use linfield_lup::lup_decomposition;
/// use linfield_matrix::Matrix;
///
/// let a = Matrix::new(vec![vec![0.0, 1.0], vec![-1.0, 0.0]]).unwrap();
/// let lup = lup_decomposition(&a).unwrap().unwrap();
/// assert_eq!(lup.p_sign, -1.0);
/// assert_eq!(lup.determinant(), 1.0);
///
/// let singular = Matrix::new(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
/// assert!(lup_decomposition(&singular).unwrap().is_none());
/// ```
pub fn lup_decomposition<T: Scalar>(matrix: &Matrix<T>) -> Result<Option<Lup<T>>, LupError> {
    let n = ensure_square(matrix)?;

    let mut elems = matrix.to_rows();
    let mut permutation: Vec<usize> = (0..n).collect();
    let mut p_sign = T::mul_identity();

    for k in 0..n {
        let Some(pivot_row) = find_pivot((k..n).map(|i| (i, &elems[i][k]))) else {
            log::debug!("singular matrix: no non-zero pivot in column {k}");
            return Ok(None);
        };

        if pivot_row != k {
            log::trace!("swapping rows {k} and {pivot_row}");
            elems.swap(k, pivot_row);
            permutation.swap(k, pivot_row);
            p_sign = p_sign.additive_inverse();
        }

        let (upper, lower) = elems.split_at_mut(k + 1);
        let pivot = &upper[k];
        for row in lower.iter_mut() {
            let multiplier = row[k].divide(&pivot[k])?;
            for j in k + 1..n {
                row[j] = row[j].subtract(&multiplier.multiply(&pivot[j]));
            }
            row[k] = multiplier;
        }
    }

    let l = Matrix::from_shape_fn([n, n], |[i, j]| match i.cmp(&j) {
        Ordering::Greater => elems[i][j].clone(),
        Ordering::Equal => T::mul_identity(),
        Ordering::Less => T::add_identity(),
    })?;
    let u = Matrix::from_shape_fn([n, n], |[i, j]| {
        if i <= j {
            elems[i][j].clone()
        } else {
            T::add_identity()
        }
    })?;
    let p = Matrix::from_shape_fn([n, n], |[i, j]| {
        if permutation[i] == j {
            T::mul_identity()
        } else {
            T::add_identity()
        }
    })?;

    Ok(Some(Lup { l, u, p, p_sign }))
}

/// Computes the determinant of a square matrix from its LUP decomposition.
///
/// A singular matrix has determinant zero; this is not reported as an error.
///
/// # Errors
///
/// Returns [`LupError::NotSquare`] if `matrix` is not square.
///
/// # Example
///
/// ```
/// use linfield_lup::calc_determinant;
/// use linfield_matrix::Matrix;
///
/// let a = Matrix::new(vec![vec![3.0f64, 1.0], vec![2.0, 5.0]]).unwrap();
/// assert!((calc_determinant(&a).unwrap() - 13.0).abs() < 1e-12);
///
/// let zero_column = Matrix::new(vec![vec![0.0, 1.0], vec![0.0, 5.0]]).unwrap();
/// assert_eq!(calc_determinant(&zero_column).unwrap(), 0.0);
/// ```
pub fn calc_determinant<T: Scalar>(matrix: &Matrix<T>) -> Result<T, LupError> {
    Ok(lup_decomposition(matrix)?.map_or_else(T::add_identity, |lup| lup.determinant()))
}

/// Computes the inverse of a square matrix.
///
/// # Returns
///
/// `Some(inverse)`, or `None` if the matrix is singular.
///
/// # Errors
///
/// Returns [`LupError::NotSquare`] if `matrix` is not square.
pub fn inverse<T: Scalar>(matrix: &Matrix<T>) -> Result<Option<Matrix<T>>, LupError> {
    let Some(lup) = lup_decomposition(matrix)? else {
        return Ok(None);
    };
    let identity = Matrix::identity(matrix.rows())?;
    lup.solve(&identity).map(Some)
}
