//! Runtime view of a type-level tag.

use crate::dimension::{DimVector, Dimension};
use crate::error::Error;
use crate::prefix::Prefix;

/// A dimension vector together with a prefix exponent.
///
/// This is the canonical key of a quantity's type: two quantities are compatible exactly when their
/// tags are equal. It is what [`DescribeCache`](crate::DescribeCache) is keyed by and what a
/// [`DynQuantity`](crate::DynQuantity) carries at runtime.
///
/// ```rust
/// use mesi_core::{Dim, Pow10, Tag};
///
/// let km = Tag::of::<Dim<1, 0, 0>, Pow10<3>>();
/// assert_eq!(km.prefix(), 3);
/// assert_eq!(km.to_string(), "* 10^3 m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    vector: DimVector,
    prefix: i32,
}

impl Tag {
    /// Dimensionless, unprefixed.
    pub const SCALAR: Tag = Tag::new(DimVector::DIMENSIONLESS, 0);

    /// Builds a tag from its parts.
    #[inline]
    pub const fn new(vector: DimVector, prefix: i32) -> Self {
        Tag { vector, prefix }
    }

    /// The tag of `Quantity<_, D, P>`.
    #[inline]
    pub const fn of<D: Dimension, P: Prefix>() -> Self {
        Tag::new(D::VECTOR, P::EXPONENT)
    }

    /// Dimension vector.
    #[inline]
    pub const fn vector(self) -> DimVector {
        self.vector
    }

    /// Prefix exponent (power of ten).
    #[inline]
    pub const fn prefix(self) -> i32 {
        self.prefix
    }

    /// `true` for a dimensionless, unprefixed tag (renders as the empty string).
    pub const fn is_scalar(self) -> bool {
        self.vector.is_dimensionless() && self.prefix == 0
    }

    /// Exact equality of both parts, usable in const contexts.
    pub const fn same_as(self, other: Tag) -> bool {
        self.vector.same_as(other.vector) && self.prefix == other.prefix
    }

    /// Tag of a product: exponents and prefixes add.
    pub fn checked_mul(self, rhs: Tag) -> Result<Tag, Error> {
        let vector = self.vector.checked_mul(rhs.vector).ok_or(Error::ExponentOverflow)?;
        let prefix = self.prefix.checked_add(rhs.prefix).ok_or(Error::PrefixOverflow)?;
        Ok(Tag::new(vector, prefix))
    }

    /// Tag of a quotient: exponents and prefixes subtract.
    pub fn checked_div(self, rhs: Tag) -> Result<Tag, Error> {
        let vector = self.vector.checked_div(rhs.vector).ok_or(Error::ExponentOverflow)?;
        let prefix = self.prefix.checked_sub(rhs.prefix).ok_or(Error::PrefixOverflow)?;
        Ok(Tag::new(vector, prefix))
    }

    /// `Ok(())` when the tags match, otherwise [`Error::Incompatible`].
    pub fn ensure_compatible(self, other: Tag) -> Result<(), Error> {
        if self == other {
            Ok(())
        } else {
            Err(Error::Incompatible {
                left: self,
                right: other,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDimension, Dim};
    use crate::prefix::Pow10;

    #[test]
    fn of_reads_the_type_level_constants() {
        let tag = Tag::of::<Dim<1, -2, 0>, Pow10<-3>>();
        assert_eq!(tag.prefix(), -3);
        assert_eq!(tag.vector(), <Dim<1, -2, 0>>::VECTOR);
    }

    #[test]
    fn mul_and_div_combine_both_parts() {
        let m = Tag::new(DimVector::base(BaseDimension::Length), 3);
        let s = Tag::new(DimVector::base(BaseDimension::Time), -1);
        let q = m.checked_div(s).unwrap();
        assert_eq!(q, Tag::of::<Dim<1, -1, 0>, Pow10<4>>());
        assert_eq!(q.checked_mul(s).unwrap(), m);
    }

    #[test]
    fn prefix_overflow_is_reported() {
        let a = Tag::new(DimVector::DIMENSIONLESS, i32::MAX);
        let b = Tag::new(DimVector::DIMENSIONLESS, 1);
        assert_eq!(a.checked_mul(b), Err(Error::PrefixOverflow));
        assert_eq!(Tag::new(DimVector::DIMENSIONLESS, i32::MIN).checked_div(b), Err(Error::PrefixOverflow));
    }

    #[test]
    fn ensure_compatible_reports_both_sides() {
        let m = Tag::of::<Dim<1, 0, 0>, Pow10<0>>();
        let km = Tag::of::<Dim<1, 0, 0>, Pow10<3>>();
        assert_eq!(m.ensure_compatible(m), Ok(()));
        assert_eq!(
            m.ensure_compatible(km),
            Err(Error::Incompatible { left: m, right: km })
        );
    }
}
