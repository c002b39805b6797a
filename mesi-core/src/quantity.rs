//! Quantity type and its operator algebra.

use crate::dimension::{DimProduct, DimQuotient, DimVector, Dimension, Dimensionless};
use crate::error::Error;
use crate::prefix::{Pow10, Prefix, PrefixDifference, PrefixSum, Unprefixed};
use crate::storage::Storage;
use crate::tag::Tag;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use num_traits::PrimInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw magnitude of storage type `T` tagged with a dimension `D` and a prefix `P`.
///
/// The tags are phantom types: a `Quantity` is exactly as large as its `T`. A bare number never
/// becomes a quantity implicitly and a quantity never decays into one; use [`Quantity::new`] and
/// [`Quantity::value`].
///
/// Addition, subtraction and comparison are implemented only between quantities of the very same
/// type, so a mismatch is a type error even in code that is never called. Tags written differently
/// but equal in value (say `Length * Time` and `Time * Length`) are distinct types; bring one to
/// the other's spelling with [`Quantity::cast`], which checks the values agree:
///
/// ```rust
/// use mesi_core::{Dim, DimProduct, Quantity};
///
/// type L = Dim<1, 0, 0>;
/// type T = Dim<0, 1, 0>;
///
/// let a: Quantity<f64, DimProduct<L, T>> = Quantity::new(2.0);
/// let b: Quantity<f64, DimProduct<T, L>> = Quantity::new(3.0);
/// assert_eq!((a + b.cast()).value(), 5.0);
/// ```
///
/// ```compile_fail
/// use mesi_core::{Dim, Quantity};
///
/// let a: Quantity<f64, Dim<1, 0, 0>> = Quantity::new(2.0);
/// let b: Quantity<f64, Dim<0, 1, 0>> = Quantity::new(3.0);
/// let _ = a + b; // quantities have different dimension vectors
/// ```
///
/// ```compile_fail
/// use mesi_core::{Dim, Pow10, Quantity};
///
/// let a: Quantity<i32, Dim<1, 0, 0>> = Quantity::new(2);
/// let b: Quantity<i32, Dim<1, 0, 0>, Pow10<3>> = Quantity::new(3);
/// let _ = a < b; // quantities have different prefixes
/// ```
///
/// ```compile_fail
/// use mesi_core::{Dim, Quantity};
///
/// #[allow(dead_code)]
/// fn never_called(a: Quantity<f64, Dim<1, 0, 0>>, b: Quantity<f64, Dim<0, 1, 0>>) -> bool {
///     a == b
/// }
/// ```
///
/// ```compile_fail
/// use mesi_core::{Dim, Pow10, Quantity};
///
/// #[allow(dead_code)]
/// fn never_called(
///     a: Quantity<i32, Dim<1, 0, 0>>,
///     b: Quantity<i32, Dim<1, 0, 0>, Pow10<3>>,
/// ) -> bool {
///     a < b
/// }
/// ```
pub struct Quantity<T, D: Dimension, P: Prefix = Pow10<0>> {
    value: T,
    _tag: PhantomData<fn() -> (D, P)>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time compatibility checks
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluating `OK` fails the build unless both tags are equal.
struct Compatible<D1, P1, D2, P2>(PhantomData<(D1, P1, D2, P2)>);

impl<D1: Dimension, P1: Prefix, D2: Dimension, P2: Prefix> Compatible<D1, P1, D2, P2> {
    const OK: () = {
        assert!(
            D1::VECTOR.same_as(D2::VECTOR),
            "quantities have different dimension vectors"
        );
        assert!(
            P1::EXPONENT == P2::EXPONENT,
            "quantities have different prefixes; convert one explicitly with `to`"
        );
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefix rescaling
// ─────────────────────────────────────────────────────────────────────────────

/// Rescales `value` from `10^from` to `10^to` by repeated multiplication or division by ten.
///
/// Integer storage truncates on every division.
pub(crate) fn rescale<T: Storage>(mut value: T, from: i32, to: i32) -> T {
    let mut steps = from as i64 - to as i64;
    while steps > 0 {
        value = value * T::TEN;
        steps -= 1;
    }
    while steps < 0 {
        value = value / T::TEN;
        steps += 1;
    }
    value
}

/// Like [`rescale`] but fails instead of truncating or overflowing.
pub(crate) fn try_rescale<T: Storage + PrimInt>(mut value: T, from: i32, to: i32) -> Result<T, Error> {
    let mut steps = from as i64 - to as i64;
    while steps > 0 {
        value = value
            .checked_mul(&T::TEN)
            .ok_or(Error::StorageOverflow { from, to })?;
        steps -= 1;
    }
    while steps < 0 {
        if value % T::TEN != T::zero() {
            return Err(Error::PrecisionLoss { from, to });
        }
        value = value / T::TEN;
        steps += 1;
    }
    Ok(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction, access and conversion
// ─────────────────────────────────────────────────────────────────────────────

impl<T, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// Runtime view of this quantity's type-level tag.
    pub const TAG: Tag = Tag::of::<D, P>();

    /// Wraps a raw magnitude under this type's tag.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Quantity};
    ///
    /// let d: Quantity<f64, Dim<1, 0, 0>> = Quantity::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        // Forces the tag constants (and their reduction checks) to be evaluated.
        let _tag = Self::TAG;
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the raw magnitude, expressed in units of `10^P` times the SI base units.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Borrows the raw magnitude.
    #[inline]
    pub const fn value_ref(&self) -> &T {
        &self.value
    }

    /// The runtime tag.
    #[inline]
    pub const fn tag(&self) -> Tag {
        Self::TAG
    }

    /// The runtime dimension vector.
    #[inline]
    pub const fn dimension(&self) -> DimVector {
        D::VECTOR
    }

    /// The prefix exponent.
    #[inline]
    pub const fn prefix(&self) -> i32 {
        P::EXPONENT
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Re-tags to a tag with the same dimension vector and prefix written as a different type.
    ///
    /// ```rust
    /// use mesi_core::{Dim, DimProduct, Quantity};
    ///
    /// type L = Dim<1, 0, 0>;
    /// let area: Quantity<f64, DimProduct<L, L>> = Quantity::new(4.0);
    /// let same: Quantity<f64, Dim<2, 0, 0>> = area.cast();
    /// assert_eq!(same.value(), 4.0);
    /// ```
    ///
    /// ```compile_fail
    /// use mesi_core::{Dim, Quantity};
    ///
    /// let area: Quantity<f64, Dim<2, 0, 0>> = Quantity::new(4.0);
    /// let _: Quantity<f64, Dim<3, 0, 0>> = area.cast(); // quantities have different dimension vectors
    /// ```
    #[inline]
    pub fn cast<D2: Dimension, P2: Prefix>(self) -> Quantity<T, D2, P2> {
        let () = Compatible::<D, P, D2, P2>::OK;
        Quantity::new(self.value)
    }

    /// Applies `f` to the raw magnitude, keeping the tag.
    #[inline]
    pub fn map<F: FnOnce(T) -> T>(self, f: F) -> Self {
        Self::new(f(self.value))
    }
}

impl<T: Storage, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// The zero quantity.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// Converts to another prefix of the same dimension.
    ///
    /// The magnitude is scaled by `10^(P - P2)`, one multiplication or division by ten at a time.
    /// With integer storage every division truncates, so a round trip through a larger prefix can
    /// lose digits; use [`Quantity::try_to`] to detect that.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Pow10, Quantity};
    ///
    /// let m: Quantity<i32, Dim<1, 0, 0>> = Quantity::new(5);
    /// let mm = m.to::<Pow10<-3>>();
    /// assert_eq!(mm.value(), 5000);
    /// assert_eq!(mm.to::<Pow10<0>>().value(), 5);
    ///
    /// let km = m.to::<Pow10<3>>();
    /// assert_eq!(km.value(), 0);
    /// ```
    #[inline]
    pub fn to<P2: Prefix>(self) -> Quantity<T, D, P2> {
        Quantity::new(rescale(self.value, P::EXPONENT, P2::EXPONENT))
    }
}

impl<T: Storage + PrimInt, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// Converts to another prefix, failing instead of losing digits or overflowing.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Error, Pow10, Quantity};
    ///
    /// let m: Quantity<i32, Dim<1, 0, 0>> = Quantity::new(5);
    /// assert_eq!(m.try_to::<Pow10<-3>>().map(|q| q.value()), Ok(5000));
    /// assert_eq!(
    ///     m.try_to::<Pow10<3>>().map(|q| q.value()),
    ///     Err(Error::PrecisionLoss { from: 0, to: 3 })
    /// );
    /// ```
    pub fn try_to<P2: Prefix>(self) -> Result<Quantity<T, D, P2>, Error> {
        try_rescale(self.value, P::EXPONENT, P2::EXPONENT).map(Quantity::new)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-type traits
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Clone, D: Dimension, P: Prefix> Clone for Quantity<T, D, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, D: Dimension, P: Prefix> Copy for Quantity<T, D, P> {}

impl<T: Default, D: Dimension, P: Prefix> Default for Quantity<T, D, P> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Hash, D: Dimension, P: Prefix> Hash for Quantity<T, D, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        Self::TAG.hash(state);
    }
}

impl<T: fmt::Debug, D: Dimension, P: Prefix> fmt::Debug for Quantity<T, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("tag", &format_args!("[{}]", Self::TAG))
            .finish()
    }
}

/// Formats as `"<value> <unit>"`, or just the value for an unprefixed dimensionless quantity.
///
/// Format options such as precision apply to the value.
///
/// ```rust
/// use mesi_core::{Dim, Quantity};
///
/// let g: Quantity<f64, Dim<1, -2, 0>> = Quantity::new(9.81);
/// assert_eq!(format!("{g:.1}"), "9.8 m s^-2");
/// ```
impl<T: fmt::Display, D: Dimension, P: Prefix> fmt::Display for Quantity<T, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !Self::TAG.is_scalar() {
            write!(f, " {}", Self::TAG)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators: identical tags only
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Add<Output = T>, D: Dimension, P: Prefix> Add for Quantity<T, D, P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<T: AddAssign, D: Dimension, P: Prefix> AddAssign for Quantity<T, D, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<T: Sub<Output = T>, D: Dimension, P: Prefix> Sub for Quantity<T, D, P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<T: SubAssign, D: Dimension, P: Prefix> SubAssign for Quantity<T, D, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<T: Neg<Output = T>, D: Dimension, P: Prefix> Neg for Quantity<T, D, P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<T: Storage, D: Dimension, P: Prefix> Sum for Quantity<T, D, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| Self::new(acc.value + q.value))
    }
}

impl<'a, T: Storage, D: Dimension, P: Prefix> Sum<&'a Quantity<T, D, P>> for Quantity<T, D, P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| Self::new(acc.value + q.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators: tags combine
// ─────────────────────────────────────────────────────────────────────────────

impl<T, D, P, D2, P2> Mul<Quantity<T, D2, P2>> for Quantity<T, D, P>
where
    T: Mul<Output = T>,
    D: Dimension,
    P: Prefix,
    D2: Dimension,
    P2: Prefix,
{
    type Output = Quantity<T, DimProduct<D, D2>, PrefixSum<P, P2>>;
    #[inline]
    fn mul(self, rhs: Quantity<T, D2, P2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<T, D, P, D2, P2> Div<Quantity<T, D2, P2>> for Quantity<T, D, P>
where
    T: Div<Output = T>,
    D: Dimension,
    P: Prefix,
    D2: Dimension,
    P2: Prefix,
{
    type Output = Quantity<T, DimQuotient<D, D2>, PrefixDifference<P, P2>>;
    #[inline]
    fn div(self, rhs: Quantity<T, D2, P2>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<T: Storage, D: Dimension, P: Prefix> Mul<T> for Quantity<T, D, P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<T: Storage, D: Dimension, P: Prefix> Div<T> for Quantity<T, D, P> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<T: Storage + MulAssign, D: Dimension, P: Prefix> MulAssign<T> for Quantity<T, D, P> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.value *= rhs;
    }
}

impl<T: Storage + DivAssign, D: Dimension, P: Prefix> DivAssign<T> for Quantity<T, D, P> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.value /= rhs;
    }
}

impl<T: MulAssign, D: Dimension, P: Prefix> MulAssign<Quantity<T, Dimensionless, Unprefixed>>
    for Quantity<T, D, P>
{
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<T, Dimensionless, Unprefixed>) {
        self.value *= rhs.value;
    }
}

impl<T: DivAssign, D: Dimension, P: Prefix> DivAssign<Quantity<T, Dimensionless, Unprefixed>>
    for Quantity<T, D, P>
{
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<T, Dimensionless, Unprefixed>) {
        self.value /= rhs.value;
    }
}

/// `scalar * quantity` and `scalar / quantity` for a primitive storage type.
macro_rules! impl_scalar_lhs {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<D: Dimension, P: Prefix> Mul<Quantity<$t, D, P>> for $t {
                type Output = Quantity<$t, D, P>;
                #[inline]
                fn mul(self, rhs: Quantity<$t, D, P>) -> Self::Output {
                    Quantity::new(self * rhs.value)
                }
            }

            impl<D: Dimension, P: Prefix> Div<Quantity<$t, D, P>> for $t {
                type Output = Quantity<$t, DimQuotient<Dimensionless, D>, PrefixDifference<Pow10<0>, P>>;
                #[inline]
                fn div(self, rhs: Quantity<$t, D, P>) -> Self::Output {
                    Quantity::new(self / rhs.value)
                }
            }
        )+
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Comparison: identical tags only
// ─────────────────────────────────────────────────────────────────────────────

impl<T: PartialEq, D: Dimension, P: Prefix> PartialEq for Quantity<T, D, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, D: Dimension, P: Prefix> Eq for Quantity<T, D, P> {}

impl<T: PartialOrd, D: Dimension, P: Prefix> PartialOrd for Quantity<T, D, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, D: Dimension, P: Prefix> Ord for Quantity<T, D, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Serialize, D: Dimension, P: Prefix> Serialize for Quantity<T, D, P> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, D: Dimension, P: Prefix> Deserialize<'de> for Quantity<T, D, P> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their unit.
///
/// Use it with `#[serde(with = "...")]` to keep the rendered tag next to the magnitude. The unit
/// string is the same one [`Tag`]'s `Display` produces, and it is checked on input.
///
/// ```rust
/// use mesi_core::{Dim, Pow10, Quantity};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Sample {
///     #[serde(with = "mesi_core::serde_with_unit")]
///     depth: Quantity<f64, Dim<1, 0, 0>, Pow10<3>>, // {"value": 1.5, "unit": "* 10^3 m"}
///     tilt: Quantity<f64, Dim<0, 0, 0>>,          // 0.25
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::format;
    use alloc::string::{String, ToString};
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a quantity as a struct with `value` and `unit` fields.
    pub fn serialize<T, D, P, S>(quantity: &Quantity<T, D, P>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        D: Dimension,
        P: Prefix,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value_ref())?;
        state.serialize_field("unit", &Quantity::<T, D, P>::TAG.to_string())?;
        state.end()
    }

    /// Deserializes a quantity from a struct with a `value` field and an optional `unit` field.
    ///
    /// A present `unit` must equal the rendered tag of the target type.
    pub fn deserialize<'de, T, D, P, De>(deserializer: De) -> Result<Quantity<T, D, P>, De::Error>
    where
        T: Deserialize<'de>,
        D: Dimension,
        P: Prefix,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<T, D, P>(PhantomData<fn() -> (T, D, P)>);

        impl<'de, T, D, P> Visitor<'de> for QuantityVisitor<T, D, P>
        where
            T: Deserialize<'de>,
            D: Dimension,
            P: Prefix,
        {
            type Value = Quantity<T, D, P>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<T, D, P>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit) = unit {
                    let expected = Quantity::<T, D, P>::TAG.to_string();
                    if unit != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dim;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    type Length = Dim<1, 0, 0>;
    type Time = Dim<0, 1, 0>;
    type Mass = Dim<0, 0, 1>;
    type M<T = f64> = Quantity<T, Length>;
    type S<T = f64> = Quantity<T, Time>;
    type Kg<T = f64> = Quantity<T, Mass>;

    #[test]
    fn new_and_value() {
        let q = M::new(2.5_f64);
        assert_eq!(q.value(), 2.5);
        assert_eq!(*q.value_ref(), 2.5);
        assert_eq!(q.prefix(), 0);
        assert_eq!(q.dimension(), Length::VECTOR);
    }

    #[test]
    fn add_sub_keep_left_tag() {
        let a = M::new(2.0);
        let b = M::new(3.0);
        assert_eq!(a + b, M::new(5.0));
        assert_eq!(b - a, M::new(1.0));

        let mut c = a;
        c += b;
        c -= M::new(1.0);
        assert_eq!(c, M::new(4.0));
    }

    #[test]
    fn product_tag_casts_to_direct_spelling() {
        let area = M::new(3.0_f64) * M::new(2.0);
        assert_eq!(area.value(), 6.0);
        assert_eq!(area.dimension(), <Dim<2, 0, 0>>::VECTOR);

        let direct: Quantity<f64, Dim<2, 0, 0>> = Quantity::new(6.0);
        let same: Quantity<f64, Dim<2, 0, 0>> = area.cast();
        assert_eq!(same, direct);
        assert_eq!(area.tag(), direct.tag());
    }

    #[test]
    fn quotient_subtracts_prefixes() {
        let km: Quantity<f64, Length, Pow10<3>> = Quantity::new(10.0);
        let ms: Quantity<f64, Time, Pow10<-3>> = Quantity::new(2.0);
        let v = km / ms;
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.prefix(), 6);
        assert_eq!(v.dimension(), <Dim<1, -1, 0>>::VECTOR);
    }

    #[test]
    fn force_from_base_quantities() {
        let f = Kg::new(2.0_f64) * M::new(3.0) / (S::new(1.0) * S::new(2.0));
        let expected: Quantity<f64, Dim<1, -2, 1>> = Quantity::new(3.0);
        let f: Quantity<f64, Dim<1, -2, 1>> = f.cast();
        assert_eq!(f, expected);
    }

    #[test]
    fn scalar_operations() {
        let d = M::new(4.0_f64);
        assert_eq!(d * 2.0, M::new(8.0));
        assert_eq!(2.0 * d, M::new(8.0));
        assert_eq!(d / 2.0, M::new(2.0));

        let inv = 2.0_f64 / d;
        assert_eq!(inv.value(), 0.5);
        assert_eq!(inv.dimension(), <Dim<-1, 0, 0>>::VECTOR);

        let mut e = d;
        e *= 3.0;
        e /= 2.0;
        assert_eq!(e, M::new(6.0));
    }

    #[test]
    fn scalar_division_negates_prefix() {
        let km: Quantity<i64, Length, Pow10<3>> = Quantity::new(4);
        let inv = 8i64 / km;
        assert_eq!(inv.value(), 2);
        assert_eq!(inv.prefix(), -3);
    }

    #[test]
    fn compound_scaling_by_dimensionless_quantity() {
        let ratio: Quantity<f64, Dimensionless> = (M::new(3.0_f64) / M::new(1.5)).cast();
        let mut d = M::new(5.0);
        d *= ratio;
        assert_eq!(d, M::new(10.0));
        d /= ratio;
        assert_eq!(d, M::new(5.0));
    }

    #[test]
    fn neg_and_pos() {
        let d = M::<i32>::new(7);
        assert_eq!((-d).value(), -7);
        assert_eq!(d.pos().value(), 7);
    }

    #[test]
    fn comparisons() {
        let a = S::<i32>::new(1);
        let b = S::<i32>::new(2);
        assert!(a < b);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(a.max(b), b);
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn sum_over_iterator() {
        let parts = [M::new(1.0), M::new(2.0), M::new(3.5)];
        let total: M = parts.iter().sum();
        assert_eq!(total, M::new(6.5));
        let total: M = parts.into_iter().sum();
        assert_eq!(total, M::new(6.5));
    }

    #[test]
    fn integer_prefix_round_trips() {
        let five = M::<i32>::new(5);
        assert_eq!(five.to::<Pow10<-3>>().to::<Pow10<0>>().value(), 5);
        assert_eq!(five.to::<Pow10<3>>().to::<Pow10<0>>().value(), 0);
    }

    #[test]
    fn zero_distance_round_trip_is_exact() {
        let x = M::new(0.1_f64 + 0.2);
        assert_eq!(x.to::<Pow10<0>>().value().to_bits(), x.value().to_bits());
    }

    #[test]
    fn float_prefix_conversion() {
        let km: Quantity<f64, Length, Pow10<3>> = Quantity::new(1.25);
        assert_relative_eq!(km.to::<Pow10<0>>().value(), 1250.0);
        assert_relative_eq!(km.to::<Pow10<6>>().value(), 0.00125);
    }

    #[test]
    fn try_to_detects_loss_and_overflow() {
        let q = M::<i8>::new(12);
        assert_eq!(q.try_to::<Pow10<-1>>().map(|q| q.value()), Ok(120));
        assert_eq!(
            q.try_to::<Pow10<-2>>().map(|q| q.value()),
            Err(Error::StorageOverflow { from: 0, to: -2 })
        );
        assert_eq!(
            q.try_to::<Pow10<1>>().map(|q| q.value()),
            Err(Error::PrecisionLoss { from: 0, to: 1 })
        );
        let exact = M::<i8>::new(120);
        assert_eq!(exact.try_to::<Pow10<1>>().map(|q| q.value()), Ok(12));
    }

    #[test]
    fn cast_between_equal_tags() {
        type Lt = DimProduct<Length, Time>;
        type Tl = DimProduct<Time, Length>;
        let a: Quantity<f64, Lt> = Quantity::new(1.0);
        let b: Quantity<f64, Tl> = a.cast();
        assert_eq!(b.value(), 1.0);
        assert_eq!(a.tag(), b.tag());
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(M::new(2.0).to_string(), "2 m");
        let ratio = M::new(1.0_f64) / M::new(4.0);
        assert_eq!(ratio.to_string(), "0.25");
        let per_ms: Quantity<i32, Dim<0, -1, 0>, Pow10<3>> = Quantity::new(4);
        assert_eq!(per_ms.to_string(), "4 * 10^3 s^-1");
    }

    #[test]
    fn debug_shows_tag() {
        let q: Quantity<i32, Length> = Quantity::new(3);
        assert_eq!(format!("{q:?}"), "Quantity { value: 3, tag: [m] }");
    }

    #[test]
    fn tag_constant_matches_runtime_view() {
        type Kmps = Quantity<f64, Dim<1, -1, 0>, Pow10<3>>;
        assert_eq!(Kmps::TAG, Tag::new(<Dim<1, -1, 0>>::VECTOR, 3));
        assert_ne!(Kmps::TAG.vector(), DimVector::DIMENSIONLESS);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_raw_value() {
        let q = M::new(42.5);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "42.5");
        let back: M = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_with_unit_validates() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "crate::serde_with_unit")]
            accel: Quantity<f64, Dim<1, -2, 0>>,
        }

        let w = Wrapper {
            accel: Quantity::new(9.5),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"accel":{"value":9.5,"unit":"m s^-2"}}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.accel.value(), 9.5);

        let no_unit: Wrapper = serde_json::from_str(r#"{"accel":{"value":1.0}}"#).unwrap();
        assert_eq!(no_unit.accel.value(), 1.0);

        let wrong = serde_json::from_str::<Wrapper>(r#"{"accel":{"value":1.0,"unit":"m"}}"#);
        assert!(wrong.is_err());
    }

    proptest! {
        #[test]
        fn prop_order_follows_raw_values(a in -1.0e6..1.0e6f64, b in -1.0e6..1.0e6f64) {
            let (qa, qb) = (M::new(a), M::new(b));
            prop_assert_eq!(qa < qb, a < b);
            prop_assert_eq!(qa == qb, a == b);
            prop_assert_eq!(qa.partial_cmp(&qb), a.partial_cmp(&b));
        }

        #[test]
        fn prop_multiplication_commutes(a in -1000i64..1000, b in -1000i64..1000) {
            let x = M::<i64>::new(a) * S::<i64>::new(b);
            let y = S::<i64>::new(b) * M::<i64>::new(a);
            prop_assert_eq!(x.tag(), y.tag());
            let xy = x.cast::<Dim<1, 1, 0>, Pow10<0>>();
            let yx = y.cast::<Dim<1, 1, 0>, Pow10<0>>();
            prop_assert_eq!(xy, yx);
        }

        #[test]
        fn prop_integer_rescale_down_then_up_is_exact(v in -100_000i64..100_000, p in 0u32..6) {
            let q = M::<i64>::new(v);
            let back = match p {
                0 => q.to::<Pow10<0>>().to::<Pow10<0>>(),
                1 => q.to::<Pow10<-1>>().to::<Pow10<0>>(),
                2 => q.to::<Pow10<-2>>().to::<Pow10<0>>(),
                3 => q.to::<Pow10<-3>>().to::<Pow10<0>>(),
                4 => q.to::<Pow10<-4>>().to::<Pow10<0>>(),
                _ => q.to::<Pow10<-5>>().to::<Pow10<0>>(),
            };
            prop_assert_eq!(back, q);
        }
    }
}
