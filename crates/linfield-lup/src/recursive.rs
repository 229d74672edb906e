use linfield_algebra::Scalar;
use linfield_matrix::Matrix;

use crate::error::LupError;
use crate::lup::{ensure_square, find_pivot, Lup};

/// Computes the LUP decomposition of a square matrix by Schur-complement recursion.
///
/// The row with the largest magnitude in the first column is swapped to the top.
/// Writing the swapped matrix as
///
/// ```text
/// | a11  w   |
/// | v    A22 |
/// ```
///
/// the Schur complement `A22 - v * w / a11` is decomposed recursively and the
/// result is extended by the pivot row and column. The recursion depth equals the
/// order of the matrix.
///
/// Pivots are chosen exactly as in [`lup_decomposition`](crate::lup_decomposition),
/// so both functions return the same factors.
///
/// # Errors
///
/// Returns [`LupError::NotSquare`] if `matrix` is not square.
///
/// # Example
///
/// ```
/// use linfield_lup::lup_decomposition_recursive;
/// use linfield_matrix::Matrix;
///
/// let a = Matrix::new(vec![vec![0.0, 1.0], vec![-1.0, 0.0]]).unwrap();
/// let lup = lup_decomposition_recursive(&a).unwrap().unwrap();
/// assert_eq!(lup.p.multiply(&a).unwrap(), lup.l.multiply(&lup.u).unwrap());
/// assert_eq!(lup.determinant(), 1.0);
/// ```
pub fn lup_decomposition_recursive<T: Scalar>(
    matrix: &Matrix<T>,
) -> Result<Option<Lup<T>>, LupError> {
    ensure_square(matrix)?;
    decompose(matrix)
}

fn decompose<T: Scalar>(a: &Matrix<T>) -> Result<Option<Lup<T>>, LupError> {
    let n = a.rows();

    let Some(pivot_row) = find_pivot((0..n).map(|i| (i, &a[(i, 0)]))) else {
        log::debug!("singular matrix: no non-zero pivot in a {n}x{n} Schur complement");
        return Ok(None);
    };

    if n == 1 {
        let unit = Matrix::identity(1)?;
        return Ok(Some(Lup {
            l: unit.clone(),
            u: a.clone(),
            p: unit,
            p_sign: T::mul_identity(),
        }));
    }

    let mut swap: Vec<usize> = (0..n).collect();
    swap.swap(0, pivot_row);
    let swap_sign = if pivot_row != 0 {
        log::trace!("swapping rows 0 and {pivot_row}");
        T::mul_identity().additive_inverse()
    } else {
        T::mul_identity()
    };
    let swap_matrix = Matrix::identity(n)?.permute_rows(&swap)?;
    let swapped = a.permute_rows(&swap)?;

    let pivot = &swapped[(0, 0)];
    let w = swapped.slice(0..1, 1..n)?;
    let multipliers = (1..n)
        .map(|i| swapped[(i, 0)].divide(pivot))
        .collect::<Result<Vec<_>, _>>()?;
    let multipliers = Matrix::from_shape_vec([n - 1, 1], multipliers)?;

    // A22 - (v / a11) * w
    let schur = swapped
        .slice(1..n, 1..n)?
        .subtract(&multipliers.multiply(&w)?)?;

    let Some(sub) = decompose(&schur)? else {
        return Ok(None);
    };

    let l_column = sub.p.multiply(&multipliers)?;
    let l = Matrix::from_shape_fn([n, n], |[i, j]| match (i, j) {
        (0, 0) => T::mul_identity(),
        (0, _) => T::add_identity(),
        (_, 0) => l_column[(i - 1, 0)].clone(),
        _ => sub.l[(i - 1, j - 1)].clone(),
    })?;
    let u = Matrix::from_shape_fn([n, n], |[i, j]| match (i, j) {
        (0, _) => swapped[(0, j)].clone(),
        (_, 0) => T::add_identity(),
        _ => sub.u[(i - 1, j - 1)].clone(),
    })?;
    let p_sub = Matrix::from_shape_fn([n, n], |[i, j]| match (i, j) {
        (0, 0) => T::mul_identity(),
        (0, _) | (_, 0) => T::add_identity(),
        _ => sub.p[(i - 1, j - 1)].clone(),
    })?;
    let p = p_sub.multiply(&swap_matrix)?;

    Ok(Some(Lup {
        l,
        u,
        p,
        p_sign: swap_sign.multiply(&sub.p_sign),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lup::lup_decomposition;
    use approx::assert_relative_eq;
    use linfield_algebra::Rational;

    #[test]
    fn test_recursive_2x2() -> Result<(), LupError> {
        let a = Matrix::new(vec![vec![3.0, 1.0], vec![2.0, 5.0]])?;
        let lup = lup_decomposition_recursive(&a)?.expect("regular matrix");
        assert_eq!(lup.l[(0, 0)], 1.0);
        assert_eq!(lup.l[(0, 1)], 0.0);
        assert_relative_eq!(lup.l[(1, 0)], 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(lup.u[(0, 0)], 3.0);
        assert_eq!(lup.u[(0, 1)], 1.0);
        assert_eq!(lup.u[(1, 0)], 0.0);
        assert_relative_eq!(lup.u[(1, 1)], 13.0 / 3.0, epsilon = 1e-12);
        assert_eq!(lup.p, Matrix::identity(2)?);
        assert_eq!(lup.p_sign, 1.0);
        Ok(())
    }

    #[test]
    fn test_recursive_base_case() -> Result<(), LupError> {
        let a = Matrix::new(vec![vec![Rational::from(-4)]])?;
        let lup = lup_decomposition_recursive(&a)?.expect("regular matrix");
        assert_eq!(lup.u, a);
        assert_eq!(lup.l, Matrix::identity(1)?);
        assert_eq!(lup.p, Matrix::identity(1)?);
        assert_eq!(lup.p_sign, Rational::from(1));

        let zero = Matrix::new(vec![vec![Rational::from(0)]])?;
        assert_eq!(lup_decomposition_recursive(&zero)?, None);
        Ok(())
    }

    #[test]
    fn test_recursive_matches_iterative() -> Result<(), LupError> {
        let rows: Vec<Vec<Rational>> = [
            [1, 0, 3, 2],
            [2, 1, 5, -1],
            [7, 6, 4, 0],
            [-3, 2, 2, 8],
        ]
        .iter()
        .map(|r| r.iter().map(|&x| Rational::from(x)).collect())
        .collect();
        let a = Matrix::new(rows)?;

        let iterative = lup_decomposition(&a)?.expect("regular matrix");
        let recursive = lup_decomposition_recursive(&a)?.expect("regular matrix");
        assert_eq!(iterative, recursive);
        assert_eq!(recursive.p.multiply(&a)?, recursive.l.multiply(&recursive.u)?);
        Ok(())
    }

    #[test]
    fn test_recursive_singular_in_schur_complement() -> Result<(), LupError> {
        // first column is fine, the 2x2 Schur complement is zero
        let a = Matrix::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![4.0, 8.0, 12.0],
        ])?;
        assert_eq!(lup_decomposition_recursive(&a)?, None);
        Ok(())
    }

    #[test]
    fn test_recursive_not_square() -> Result<(), LupError> {
        let a = Matrix::new(vec![vec![1.0], vec![2.0]])?;
        assert_eq!(
            lup_decomposition_recursive(&a),
            Err(LupError::NotSquare { rows: 2, cols: 1 })
        );
        Ok(())
    }
}
