//! Quantities whose tag is only known at runtime.
//!
//! [`DynQuantity`] carries its [`Tag`] as a value, so it can sit in heterogeneous collections or
//! come out of a deserializer. It supports the same algebra as [`Quantity`], but compatibility is
//! checked when the operation runs and reported as an [`Error`].

use crate::dimension::Dimension;
use crate::error::Error;
use crate::prefix::Prefix;
use crate::quantity::{rescale, Quantity};
use crate::storage::Storage;
use crate::tag::Tag;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;

/// A magnitude with a runtime tag.
///
/// ```rust
/// use mesi_core::{Dim, DynQuantity, Error, Quantity};
///
/// let d: Quantity<f64, Dim<1, 0, 0>> = Quantity::new(2.0);
/// let t: Quantity<f64, Dim<0, 1, 0>> = Quantity::new(4.0);
///
/// let (d, t) = (DynQuantity::from(d), DynQuantity::from(t));
/// let v = d.checked_div(t).unwrap();
/// assert_eq!(v.to_string(), "0.5 m s^-1");
/// assert!(matches!(d.checked_add(t), Err(Error::Incompatible { .. })));
///
/// let back: Quantity<f64, Dim<1, -1, 0>> = v.try_into().unwrap();
/// assert_eq!(back.value(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynQuantity<T> {
    value: T,
    tag: Tag,
}

impl<T> DynQuantity<T> {
    /// Wraps a magnitude under a runtime tag.
    #[inline]
    pub const fn new(value: T, tag: Tag) -> Self {
        DynQuantity { value, tag }
    }

    /// The raw magnitude.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// The runtime tag.
    #[inline]
    pub const fn tag(&self) -> Tag {
        self.tag
    }
}

impl<T: Storage> DynQuantity<T> {
    /// Sum of two quantities with equal tags.
    pub fn checked_add(self, rhs: Self) -> Result<Self, Error> {
        self.tag.ensure_compatible(rhs.tag)?;
        Ok(Self::new(self.value + rhs.value, self.tag))
    }

    /// Difference of two quantities with equal tags.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, Error> {
        self.tag.ensure_compatible(rhs.tag)?;
        Ok(Self::new(self.value - rhs.value, self.tag))
    }

    /// Product; the tags combine.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, Error> {
        let tag = self.tag.checked_mul(rhs.tag)?;
        Ok(Self::new(self.value * rhs.value, tag))
    }

    /// Quotient; the tags combine. Division by zero follows the storage type.
    pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        let tag = self.tag.checked_div(rhs.tag)?;
        Ok(Self::new(self.value / rhs.value, tag))
    }

    /// Compares two quantities with equal tags.
    pub fn checked_partial_cmp(&self, rhs: &Self) -> Result<Option<Ordering>, Error> {
        self.tag.ensure_compatible(rhs.tag)?;
        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// Rescales to another prefix with the same rule as [`Quantity::to`].
    pub fn to_prefix(self, prefix: i32) -> Self {
        let value = rescale(self.value, self.tag.prefix(), prefix);
        Self::new(value, Tag::new(self.tag.vector(), prefix))
    }
}

impl<T: Storage + Ord> DynQuantity<T> {
    /// Total order for quantities with equal tags.
    pub fn checked_cmp(&self, rhs: &Self) -> Result<Ordering, Error> {
        self.tag.ensure_compatible(rhs.tag)?;
        Ok(self.value.cmp(&rhs.value))
    }
}

impl<T: Neg<Output = T>> Neg for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.tag)
    }
}

impl<T: fmt::Display> fmt::Display for DynQuantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.tag.is_scalar() {
            write!(f, " {}", self.tag)?;
        }
        Ok(())
    }
}

impl<T, D: Dimension, P: Prefix> From<Quantity<T, D, P>> for DynQuantity<T> {
    fn from(q: Quantity<T, D, P>) -> Self {
        DynQuantity::new(q.value(), Quantity::<T, D, P>::TAG)
    }
}

impl<T, D: Dimension, P: Prefix> TryFrom<DynQuantity<T>> for Quantity<T, D, P> {
    type Error = Error;

    fn try_from(d: DynQuantity<T>) -> Result<Self, Self::Error> {
        d.tag.ensure_compatible(Self::TAG)?;
        Ok(Quantity::new(d.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dim, DimVector};
    use crate::prefix::Pow10;

    type M = Quantity<i64, Dim<1, 0, 0>>;
    type Km = Quantity<i64, Dim<1, 0, 0>, Pow10<3>>;
    type S = Quantity<i64, Dim<0, 1, 0>>;

    #[test]
    fn add_requires_equal_tags() {
        let a = DynQuantity::from(M::new(2));
        let b = DynQuantity::from(M::new(3));
        assert_eq!(a.checked_add(b).map(DynQuantity::value), Ok(5));
        assert_eq!(b.checked_sub(a).map(DynQuantity::value), Ok(1));

        let km = DynQuantity::from(Km::new(1));
        assert_eq!(
            a.checked_add(km),
            Err(Error::Incompatible {
                left: M::TAG,
                right: Km::TAG
            })
        );
        assert!(a.checked_sub(DynQuantity::from(S::new(1))).is_err());
    }

    #[test]
    fn comparison_requires_equal_tags() {
        let a = DynQuantity::from(M::new(2));
        let b = DynQuantity::from(M::new(3));
        assert_eq!(a.checked_cmp(&b), Ok(Ordering::Less));
        assert_eq!(a.checked_partial_cmp(&b), Ok(Some(Ordering::Less)));
        let s = DynQuantity::from(S::new(2));
        assert!(matches!(a.checked_cmp(&s), Err(Error::Incompatible { .. })));
    }

    #[test]
    fn mul_div_combine_tags() {
        let a = DynQuantity::from(Km::new(6));
        let b = DynQuantity::from(S::new(3));
        let v = a.checked_div(b).unwrap();
        assert_eq!(v.value(), 2);
        assert_eq!(v.tag(), Tag::of::<Dim<1, -1, 0>, Pow10<3>>());
        assert_eq!(v.checked_mul(b).unwrap(), a);
    }

    #[test]
    fn mul_reports_prefix_overflow() {
        let big = DynQuantity::new(1i64, Tag::new(DimVector::DIMENSIONLESS, i32::MAX));
        assert_eq!(big.checked_mul(big), Err(Error::PrefixOverflow));
    }

    #[test]
    fn to_prefix_uses_static_rule() {
        let m = DynQuantity::from(M::new(5));
        assert_eq!(m.to_prefix(-3).value(), 5000);
        assert_eq!(m.to_prefix(3).value(), 0);
        assert_eq!(m.to_prefix(-3).tag().prefix(), -3);
    }

    #[test]
    fn round_trip_through_static_type() {
        let dynamic = DynQuantity::from(M::new(7));
        let back: M = dynamic.try_into().unwrap();
        assert_eq!(back.value(), 7);

        let wrong: Result<Km, _> = dynamic.try_into();
        assert_eq!(
            wrong.map(Quantity::value),
            Err(Error::Incompatible {
                left: M::TAG,
                right: Km::TAG
            })
        );
    }

    #[test]
    fn neg_and_display() {
        let a = -DynQuantity::from(S::new(4));
        assert_eq!(a.to_string(), "-4 s");
        assert_eq!(DynQuantity::new(3, Tag::SCALAR).to_string(), "3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_tag() {
        let d = DynQuantity::from(Km::new(4));
        let json = serde_json::to_string(&d).unwrap();
        let back: DynQuantity<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
