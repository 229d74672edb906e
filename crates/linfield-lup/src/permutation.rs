//! Determinants by permutation expansion (the Leibniz formula).
//!
//! `det(A) = sum over all permutations s of sign(s) * A[0][s(0)] * ... * A[n-1][s(n-1)]`
//!
//! All `n!` permutations are materialized, so this is only meant for small matrices,
//! mostly as an independent check of [`calc_determinant`](crate::calc_determinant).

use linfield_algebra::Field;
use linfield_matrix::Matrix;

use crate::error::LupError;
use crate::lup::ensure_square;

/// The parity of a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Even number of transpositions.
    Positive,
    /// Odd number of transpositions.
    Negative,
}

impl Sign {
    /// The opposite parity.
    pub fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Multiplies `value` by this sign.
    pub fn apply<T: Field>(self, value: T) -> T {
        match self {
            Self::Positive => value,
            Self::Negative => value.additive_inverse(),
        }
    }
}

/// A permutation of `0..n` together with its sign.
///
/// `map()[i]` is the image of `i`: `[0, 2, 1]` swaps the second and third element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    sign: Sign,
    map: Vec<usize>,
}

impl Permutation {
    /// The sign of the permutation.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The images of `0..n` in order.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Number of elements being permuted.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true for the permutation of zero elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Generates every permutation of `0..n` with its sign.
///
/// Permutations come out in lexicographic order of their maps, starting with the
/// identity.
///
/// # Example
///
/// ```
/// use linfield_lup::permutation::{generate_permutations, Sign};
///
/// let perms = generate_permutations(3);
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[1].map(), &[0, 2, 1]);
/// assert_eq!(perms[1].sign(), Sign::Negative);
/// ```
pub fn generate_permutations(n: usize) -> Vec<Permutation> {
    let elements: Vec<usize> = (0..n).collect();
    expand(Sign::Positive, &elements)
}

fn expand(sign: Sign, elements: &[usize]) -> Vec<Permutation> {
    if elements.len() <= 1 {
        return vec![Permutation {
            sign,
            map: elements.to_vec(),
        }];
    }

    let mut acc = Vec::new();
    let mut sign = sign;
    for i in 0..elements.len() {
        // moving element i to the front takes i transpositions
        let mut rest = elements.to_vec();
        let first = rest.remove(i);

        for perm in expand(sign, &rest) {
            let mut map = Vec::with_capacity(elements.len());
            map.push(first);
            map.extend(perm.map);
            acc.push(Permutation {
                sign: perm.sign,
                map,
            });
        }
        sign = sign.flip();
    }
    acc
}

/// Computes the determinant of a square matrix by permutation expansion.
///
/// Only field operations are used, so the result is exact for exact fields.
///
/// # Errors
///
/// Returns [`LupError::NotSquare`] if `matrix` is not square.
///
/// # Example
///
/// ```
/// use linfield_lup::permutation::calc_determinant;
/// use linfield_matrix::Matrix;
///
/// let a = Matrix::new(vec![vec![0.0, 1.0], vec![-1.0, 0.0]]).unwrap();
/// assert_eq!(calc_determinant(&a).unwrap(), 1.0);
/// ```
pub fn calc_determinant<T: Field>(matrix: &Matrix<T>) -> Result<T, LupError> {
    let n = ensure_square(matrix)?;

    let det = generate_permutations(n)
        .iter()
        .fold(T::add_identity(), |acc, perm| {
            let product = perm
                .map()
                .iter()
                .enumerate()
                .fold(T::mul_identity(), |p, (i, &j)| p.multiply(&matrix[(i, j)]));
            acc.add(&perm.sign().apply(product))
        });
    Ok(det)
}
