//! Rational exponents.
//!
//! Dimension exponents are small fractions such as `2`, `-1` or `1/2`. [`Ratio`] stores them in
//! lowest terms with a positive denominator, so two exponents are equal exactly when their fields
//! are equal. Every operation here is a `const fn`: type-level tags compute their exponents at
//! compile time, and an arithmetic failure there is a build failure.
//!
//! ```rust
//! use mesi_core::Ratio;
//!
//! const HALF: Ratio = Ratio::new(2, 4);
//! assert_eq!((HALF.num(), HALF.den()), (1, 2));
//! assert_eq!(HALF.add(Ratio::new(1, 3)), Ratio::new(5, 6));
//! ```

use crate::error::Error;
use core::fmt;

/// A reduced fraction `num / den` with `den > 0` and `gcd(|num|, den) == 1`.
///
/// The fields are private; every constructor reduces or validates, so the invariant holds for any
/// `Ratio` a caller can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i32,
    den: i32,
}

/// Greatest common divisor (Euclid). `gcd(0, 0)` is `0`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Normalises `num / den`: moves the sign into the numerator and divides by the gcd.
///
/// Returns `None` when `den == 0` or the reduced fraction does not fit in `i32`.
const fn reduce_wide(num: i128, den: i128) -> Option<Ratio> {
    if den == 0 {
        return None;
    }
    if num == 0 {
        return Some(Ratio::ZERO);
    }
    let (mut n, mut d) = (num, den);
    if d < 0 {
        n = -n;
        d = -d;
    }
    let g = gcd_wide(n.unsigned_abs(), d as u128) as i128;
    let (n, d) = (n / g, d / g);
    if n < i32::MIN as i128 || n > i32::MAX as i128 || d > i32::MAX as i128 {
        return None;
    }
    Some(Ratio {
        num: n as i32,
        den: d as i32,
    })
}

/// Reduces `num / den` to lowest terms with a positive denominator.
///
/// # Panics
///
/// Panics if `den == 0`. In a const context (every type-level tag) this is a build failure.
///
/// ```rust
/// use mesi_core::rational::reduce;
///
/// assert_eq!(reduce(6, -4), (-3, 2));
/// assert_eq!(reduce(0, 7), (0, 1));
/// ```
pub const fn reduce(num: i32, den: i32) -> (i32, i32) {
    let r = Ratio::new(num, den);
    (r.num, r.den)
}

/// `a/b + c/d = (ad + cb) / bd`, reduced.
pub const fn add_frac(a: (i32, i32), b: (i32, i32)) -> (i32, i32) {
    let r = Ratio::new(a.0, a.1).add(Ratio::new(b.0, b.1));
    (r.num, r.den)
}

/// `a/b - c/d = (ad - cb) / bd`, reduced.
pub const fn sub_frac(a: (i32, i32), b: (i32, i32)) -> (i32, i32) {
    let r = Ratio::new(a.0, a.1).sub(Ratio::new(b.0, b.1));
    (r.num, r.den)
}

impl Ratio {
    /// The exponent `0`.
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };
    /// The exponent `1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Builds a reduced ratio from any fraction.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0` (a build failure in const contexts). Use [`Ratio::checked_new`] for
    /// runtime input.
    pub const fn new(num: i32, den: i32) -> Ratio {
        assert!(den != 0, "exponent denominator must be non-zero");
        match reduce_wide(num as i128, den as i128) {
            Some(r) => r,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// Builds an integer ratio `n / 1`.
    pub const fn integer(n: i32) -> Ratio {
        Ratio { num: n, den: 1 }
    }

    /// Runtime constructor: reduces, or fails on a zero denominator.
    ///
    /// ```rust
    /// use mesi_core::{Error, Ratio};
    ///
    /// assert_eq!(Ratio::checked_new(-2, -6), Ok(Ratio::new(1, 3)));
    /// assert_eq!(Ratio::checked_new(1, 0), Err(Error::ZeroDenominator));
    /// ```
    pub const fn checked_new(num: i32, den: i32) -> Result<Ratio, Error> {
        if den == 0 {
            return Err(Error::ZeroDenominator);
        }
        match reduce_wide(num as i128, den as i128) {
            Some(r) => Ok(r),
            None => Err(Error::ExponentOverflow),
        }
    }

    /// Accepts `num / den` only if it is already in lowest terms with a positive denominator.
    pub const fn from_reduced(num: i32, den: i32) -> Option<Ratio> {
        if Self::is_reduced_pair(num, den) {
            Some(Ratio { num, den })
        } else {
            None
        }
    }

    /// `true` if `num / den` is already in canonical form.
    pub const fn is_reduced_pair(num: i32, den: i32) -> bool {
        if den <= 0 {
            return false;
        }
        gcd(num.unsigned_abs() as u64, den as u64) == 1
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(self) -> i32 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(self) -> i32 {
        self.den
    }

    /// `true` for the zero exponent.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Const-usable equality.
    #[inline]
    pub const fn same_as(self, other: Ratio) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Sum, or `None` if the reduced result overflows `i32`.
    pub const fn checked_add(self, rhs: Ratio) -> Option<Ratio> {
        let (a, b) = (self.num as i128, self.den as i128);
        let (c, d) = (rhs.num as i128, rhs.den as i128);
        reduce_wide(a * d + c * b, b * d)
    }

    /// Difference, or `None` if the reduced result overflows `i32`.
    pub const fn checked_sub(self, rhs: Ratio) -> Option<Ratio> {
        let (a, b) = (self.num as i128, self.den as i128);
        let (c, d) = (rhs.num as i128, rhs.den as i128);
        reduce_wide(a * d - c * b, b * d)
    }

    /// Product, or `None` if the reduced result overflows `i32`.
    pub const fn checked_mul(self, rhs: Ratio) -> Option<Ratio> {
        reduce_wide(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Sum.
    ///
    /// # Panics
    ///
    /// Panics on exponent overflow.
    pub const fn add(self, rhs: Ratio) -> Ratio {
        match self.checked_add(rhs) {
            Some(r) => r,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// Difference.
    ///
    /// # Panics
    ///
    /// Panics on exponent overflow.
    pub const fn sub(self, rhs: Ratio) -> Ratio {
        match self.checked_sub(rhs) {
            Some(r) => r,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// Product.
    ///
    /// # Panics
    ///
    /// Panics on exponent overflow.
    pub const fn mul(self, rhs: Ratio) -> Ratio {
        match self.checked_mul(rhs) {
            Some(r) => r,
            None => panic!("dimension exponent overflow"),
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ZERO
    }
}

impl TryFrom<(i32, i32)> for Ratio {
    type Error = Error;

    fn try_from((num, den): (i32, i32)) -> Result<Self, Self::Error> {
        Ratio::checked_new(num, den)
    }
}

impl From<Ratio> for (i32, i32) {
    fn from(r: Ratio) -> Self {
        (r.num, r.den)
    }
}

impl From<i32> for Ratio {
    fn from(n: i32) -> Self {
        Ratio::integer(n)
    }
}

/// Formats as `n` for integers and `n/d` otherwise.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ratio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.num, self.den), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pair = <(i32, i32)>::deserialize(deserializer)?;
        Ratio::try_from(pair).map_err(serde::de::Error::custom)
    }
}
