use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::FieldError;
use crate::field::{Distance, Field, TotalOrder};

/// An exact rational number `numer / denom`.
///
/// Values are always stored in canonical form: the fraction is reduced by the gcd of
/// numerator and denominator, the denominator is strictly positive and zero is `0/1`.
/// This makes structural equality coincide with numerical equality.
///
/// Arithmetic is carried out in `i128` and reduced before narrowing back to `i64`.
///
/// # Panics
///
/// The arithmetic operators and [`Rational::abs`] panic if a reduced result does not
/// fit into `i64`, the same way native integer arithmetic does on overflow.
/// [`Rational::new`] and [`Field::multiplicative_inverse`] report it as
/// [`FieldError::Overflow`] instead.
///
/// # Example
///
/// ```
/// use linfield_algebra::Rational;
///
/// let r = Rational::new(6, -4).unwrap();
/// assert_eq!(r.numer(), -3);
/// assert_eq!(r.denom(), 2);
/// assert_eq!(r.to_string(), "-3/2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

impl Rational {
    /// Creates a new rational number and reduces it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `denom` is zero and
    /// [`FieldError::Overflow`] if the reduced fraction with a positive denominator
    /// does not fit into `i64`, e.g. `i64::MIN / -1`.
    pub fn new(numer: i64, denom: i64) -> Result<Self, FieldError> {
        if denom == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Self::try_reduce(numer as i128, denom as i128)
    }

    /// Creates the rational number `n / 1`.
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// The numerator; carries the sign.
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// The denominator; always positive.
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Returns true if the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`, whose absolute value is not representable.
    pub fn abs(&self) -> Self {
        Self::reduce((self.numer as i128).abs(), self.denom as i128)
    }

    /// Converts to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    // `denom` must be non-zero.
    fn try_reduce(numer: i128, denom: i128) -> Result<Self, FieldError> {
        let g = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        match (i64::try_from(numer), i64::try_from(denom)) {
            (Ok(numer), Ok(denom)) => Ok(Self { numer, denom }),
            _ => Err(FieldError::Overflow { numer, denom }),
        }
    }

    // Operators panic on overflow like the native integer operators.
    fn reduce(numer: i128, denom: i128) -> Self {
        match Self::try_reduce(numer, denom) {
            Ok(r) => r,
            Err(err) => panic!("rational overflow: {err}"),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = FieldError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        (r.numer, r.denom)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        let (a, b) = (self.numer as i128, self.denom as i128);
        let (c, d) = (rhs.numer as i128, rhs.denom as i128);
        Self::reduce(a * d + c * b, b * d)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        let (a, b) = (self.numer as i128, self.denom as i128);
        let (c, d) = (rhs.numer as i128, rhs.denom as i128);
        Self::reduce(a * c, b * d)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Self::reduce(-(self.numer as i128), self.denom as i128)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross multiplication keeps the order
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl num_traits::Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl num_traits::One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Field for Rational {
    fn add_identity() -> Self {
        Self::from_integer(0)
    }

    fn mul_identity() -> Self {
        Self::from_integer(1)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn multiply(&self, other: &Self) -> Self {
        *self * *other
    }

    fn additive_inverse(&self) -> Self {
        -*self
    }

    fn multiplicative_inverse(&self) -> Result<Self, FieldError> {
        Self::new(self.denom, self.numer)
    }
}

impl Distance for Rational {
    fn distance(&self, other: &Self) -> Self {
        (*self - *other).abs()
    }

    fn compare_magnitude(&self, other: &Self) -> Ordering {
        // |a/b| vs |c/d| as |a|*d vs |c|*b, exact in i128 even for i64::MIN
        let lhs = (self.numer as i128).abs() * other.denom as i128;
        let rhs = (other.numer as i128).abs() * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl TotalOrder for Rational {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = FieldError;

    /// Parses `"n"` or `"n/d"`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| FieldError::Parse(s.to_string()))
        };
        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Distance, Field, FieldError, Ordering, Rational, TotalOrder};

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces() {
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(2, 4).numer(), 1);
        assert_eq!(r(2, 4).denom(), 2);
        assert_eq!(r(0, 5), Rational::from_integer(0));
        assert_eq!(r(0, -5).denom(), 1);
    }

    #[test]
    fn test_new_sign_convention() {
        let x = r(3, -9);
        assert_eq!(x.numer(), -1);
        assert_eq!(x.denom(), 3);
        assert_eq!(r(-3, -9), r(1, 3));
    }

    #[test]
    fn test_new_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_field_operations() -> Result<(), FieldError> {
        let a = r(1, 3);
        let b = r(1, 6);
        assert_eq!(a.add(&b), r(1, 2));
        assert_eq!(a.subtract(&b), r(1, 6));
        assert_eq!(a.multiply(&b), r(1, 18));
        assert_eq!(a.divide(&b)?, Rational::from(2));
        assert_eq!(a.additive_inverse(), r(-1, 3));
        assert_eq!(r(-2, 7).multiplicative_inverse()?, r(-7, 2));
        Ok(())
    }

    #[test]
    fn test_inverse_of_zero() {
        let zero = Rational::add_identity();
        assert_eq!(
            zero.multiplicative_inverse(),
            Err(FieldError::DivisionByZero)
        );
        assert_eq!(r(1, 2).divide(&zero), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_distance_and_order() {
        assert_eq!(r(1, 3).distance(&r(1, 2)), r(1, 6));
        assert_eq!(r(-5, 4).magnitude(), r(5, 4));
        assert_eq!(r(1, 3).compare(&r(1, 2)), Ordering::Less);
        assert_eq!(r(-1, 2).compare(&r(-2, 3)), Ordering::Greater);
        assert_eq!(r(2, 4).compare(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_large_intermediates() {
        let big = Rational::from_integer(i64::MAX);
        assert_eq!(big.multiply(&r(1, i64::MAX)), Rational::from_integer(1));
    }

    #[test]
    #[should_panic(expected = "rational overflow")]
    fn test_overflow_panics() {
        let big = Rational::from_integer(i64::MAX);
        let _ = big.add(&big);
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            Rational::new(i64::MIN, -1),
            Err(FieldError::Overflow {
                numer: 1 << 63,
                denom: 1
            })
        );
        assert_eq!(
            Rational::new(1, i64::MIN),
            Err(FieldError::Overflow {
                numer: -1,
                denom: 1 << 63
            })
        );
        assert_eq!(
            Rational::from_integer(i64::MIN).multiplicative_inverse(),
            Err(FieldError::Overflow {
                numer: -1,
                denom: 1 << 63
            })
        );
    }

    #[test]
    fn test_new_extreme_values() {
        assert_eq!(r(i64::MIN, 1).numer(), i64::MIN);
        assert_eq!(r(i64::MIN, 2), Rational::from_integer(i64::MIN / 2));
        assert_eq!(r(2, i64::MIN), r(-1, 1 << 62));
        assert_eq!(r(i64::MIN, i64::MIN), Rational::from_integer(1));
    }

    #[test]
    fn test_compare_magnitude_of_min() {
        let min = Rational::from_integer(i64::MIN);
        let max = Rational::from_integer(i64::MAX);
        assert_eq!(min.compare_magnitude(&max), Ordering::Greater);
        assert_eq!(max.compare_magnitude(&min), Ordering::Less);
        assert_eq!(r(-1, 2).compare_magnitude(&r(1, 2)), Ordering::Equal);
        assert_eq!(r(-1, 3).compare_magnitude(&r(1, 2)), Ordering::Less);
    }

    #[test]
    #[should_panic(expected = "rational overflow")]
    fn test_magnitude_of_min_panics() {
        let _ = Rational::from_integer(i64::MIN).magnitude();
    }

    #[test]
    fn test_display() {
        assert_eq!(r(4, 2).to_string(), "2");
        assert_eq!(r(-4, 6).to_string(), "-2/3");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3/4".parse::<Rational>(), Ok(r(3, 4)));
        assert_eq!(" -6 / 8 ".parse::<Rational>(), Ok(r(-3, 4)));
        assert_eq!("7".parse::<Rational>(), Ok(Rational::from(7)));
        assert_eq!("1/0".parse::<Rational>(), Err(FieldError::DivisionByZero));
        assert_eq!(
            "x/2".parse::<Rational>(),
            Err(FieldError::Parse("x/2".to_string()))
        );
    }

    #[test]
    fn test_num_traits() {
        use num_traits::{One, Zero};
        assert!(Rational::zero().is_zero());
        assert_eq!(Rational::one(), Rational::mul_identity());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&r(-3, 6))?;
        assert_eq!(json, "[-1,2]");
        let back: Rational = serde_json::from_str("[2,-4]")?;
        assert_eq!(back, r(-1, 2));
        assert!(serde_json::from_str::<Rational>("[1,0]").is_err());
        Ok(())
    }
}
