//! Dimension vectors and type-level dimension tags.
//!
//! A [`DimVector`] holds one reduced rational exponent per SI base dimension. Type-level tags
//! implement [`Dimension`] by providing their vector as an associated constant, and the combinators
//! ([`DimProduct`], [`DimQuotient`], [`DimPow`]) compute theirs with `const fn`s, so every tag's
//! vector is known at compile time.

use crate::rational::Ratio;
use core::marker::PhantomData;

/// Number of SI base dimensions.
pub const BASE_COUNT: usize = 7;

/// The seven SI base dimensions, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Time (second).
    Time,
    /// Mass (kilogram).
    Mass,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in canonical order.
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Mass,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position in a [`DimVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Mass => "kg",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Mass => "mass",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }

    // Const panics only take literal messages, hence one arm per dimension.
    const fn reject_unreduced(self) -> ! {
        match self {
            BaseDimension::Length => panic!("the length exponent fraction is not irreducible"),
            BaseDimension::Time => panic!("the time exponent fraction is not irreducible"),
            BaseDimension::Mass => panic!("the mass exponent fraction is not irreducible"),
            BaseDimension::Current => panic!("the current exponent fraction is not irreducible"),
            BaseDimension::Temperature => {
                panic!("the temperature exponent fraction is not irreducible")
            }
            BaseDimension::Amount => panic!("the amount exponent fraction is not irreducible"),
            BaseDimension::LuminousIntensity => {
                panic!("the luminous intensity exponent fraction is not irreducible")
            }
        }
    }
}

/// Seven reduced rational exponents, one per [`BaseDimension`].
///
/// ```rust
/// use mesi_core::{BaseDimension, DimVector, Ratio};
///
/// let length = DimVector::base(BaseDimension::Length);
/// let time = DimVector::base(BaseDimension::Time);
/// let speed = length.div(time);
/// assert_eq!(speed.exponent(BaseDimension::Time), Ratio::integer(-1));
/// assert_eq!(speed.mul(time), length);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimVector {
    exponents: [Ratio; BASE_COUNT],
}

impl DimVector {
    /// All exponents zero.
    pub const DIMENSIONLESS: DimVector = DimVector {
        exponents: [Ratio::ZERO; BASE_COUNT],
    };

    /// Wraps already-built exponents. [`Ratio`] is always reduced, so no check is needed.
    #[inline]
    pub const fn new(exponents: [Ratio; BASE_COUNT]) -> Self {
        DimVector { exponents }
    }

    /// Builds a vector from raw `(numerator, denominator)` pairs that must already be reduced.
    ///
    /// # Panics
    ///
    /// Panics, naming the offending base dimension, if a pair is not in lowest terms with a
    /// positive denominator. Tags evaluate this in a constant, so the panic is a build failure.
    pub const fn from_reduced(pairs: [(i32, i32); BASE_COUNT]) -> Self {
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            let (num, den) = pairs[i];
            exponents[i] = match Ratio::from_reduced(num, den) {
                Some(r) => r,
                None => BaseDimension::ALL[i].reject_unreduced(),
            };
            i += 1;
        }
        DimVector { exponents }
    }

    /// Builds a vector from raw pairs, reducing each one.
    ///
    /// # Panics
    ///
    /// Panics if a denominator is zero.
    pub const fn from_fractions(pairs: [(i32, i32); BASE_COUNT]) -> Self {
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = Ratio::new(pairs[i].0, pairs[i].1);
            i += 1;
        }
        DimVector { exponents }
    }

    /// The vector with exponent one for `dim` and zero elsewhere.
    pub const fn base(dim: BaseDimension) -> Self {
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        exponents[dim.index()] = Ratio::ONE;
        DimVector { exponents }
    }

    /// Exponent of one base dimension.
    #[inline]
    pub const fn exponent(self, dim: BaseDimension) -> Ratio {
        self.exponents[dim.index()]
    }

    /// All exponents, in canonical order.
    #[inline]
    pub const fn exponents(self) -> [Ratio; BASE_COUNT] {
        self.exponents
    }

    /// `true` if every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.same_as(Self::DIMENSIONLESS)
    }

    /// Exact component-wise equality, usable in const contexts.
    pub const fn same_as(self, other: DimVector) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if !self.exponents[i].same_as(other.exponents[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Combine under multiplication: exponents add.
    ///
    /// # Panics
    ///
    /// Panics on exponent overflow.
    pub const fn mul(self, rhs: DimVector) -> DimVector {
        match self.checked_mul(rhs) {
            Some(v) => v,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// Combine under division: exponents subtract (`self - rhs`).
    ///
    /// # Panics
    ///
    /// Panics on exponent overflow.
    pub const fn div(self, rhs: DimVector) -> DimVector {
        match self.checked_div(rhs) {
            Some(v) => v,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// Multiplication, or `None` on exponent overflow.
    pub const fn checked_mul(self, rhs: DimVector) -> Option<DimVector> {
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = match self.exponents[i].checked_add(rhs.exponents[i]) {
                Some(r) => r,
                None => return None,
            };
            i += 1;
        }
        Some(DimVector { exponents })
    }

    /// Division, or `None` on exponent overflow.
    pub const fn checked_div(self, rhs: DimVector) -> Option<DimVector> {
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = match self.exponents[i].checked_sub(rhs.exponents[i]) {
                Some(r) => r,
                None => return None,
            };
            i += 1;
        }
        Some(DimVector { exponents })
    }

    /// `degree`-th root: every exponent multiplied by `1 / degree`.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is zero.
    pub const fn root(self, degree: i32) -> DimVector {
        self.pow(1, degree)
    }

    /// Rational power: every exponent multiplied by `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero or an exponent overflows.
    pub const fn pow(self, num: i32, den: i32) -> DimVector {
        let factor = Ratio::new(num, den);
        let mut exponents = [Ratio::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = self.exponents[i].mul(factor);
            i += 1;
        }
        DimVector { exponents }
    }
}

impl Default for DimVector {
    fn default() -> Self {
        DimVector::DIMENSIONLESS
    }
}

/// Type-level dimension tag.
///
/// Tags carry no runtime data; a tag is usually an empty enum. Implementations come from the
/// tag types in this module or from `#[derive(Dimension)]`:
///
/// ```rust
/// use mesi_core::{BaseDimension, DimVector, Dimension, Ratio};
///
/// pub enum Diffusivity {}
/// impl Dimension for Diffusivity {
///     const VECTOR: DimVector = DimVector::from_reduced([(2, 1), (-1, 1), (0, 1), (0, 1), (0, 1), (0, 1), (0, 1)]);
/// }
///
/// assert_eq!(Diffusivity::VECTOR.exponent(BaseDimension::Length), Ratio::integer(2));
/// ```
pub trait Dimension: 'static {
    /// The exponents of this tag.
    const VECTOR: DimVector;
}

/// Raw tag with explicit rational exponents, in canonical order: length, time, mass, current,
/// temperature, amount, luminous intensity.
///
/// Every pair must already be reduced; using a tag with an unreduced pair fails the build with a
/// message naming the base dimension.
///
/// ```rust
/// use mesi_core::{Dimension, RationalDim, Ratio, BaseDimension};
///
/// type SqrtMeter = RationalDim<1, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1>;
/// assert_eq!(SqrtMeter::VECTOR.exponent(BaseDimension::Length), Ratio::new(1, 2));
/// ```
///
/// ```compile_fail
/// use mesi_core::{Dimension, RationalDim};
///
/// type Broken = RationalDim<2, 4, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1>;
/// let _ = Broken::VECTOR; // the length exponent fraction is not irreducible
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RationalDim<
    const L_NUM: i32,
    const L_DEN: i32,
    const T_NUM: i32,
    const T_DEN: i32,
    const M_NUM: i32,
    const M_DEN: i32,
    const I_NUM: i32,
    const I_DEN: i32,
    const TH_NUM: i32,
    const TH_DEN: i32,
    const N_NUM: i32,
    const N_DEN: i32,
    const J_NUM: i32,
    const J_DEN: i32,
> {}

impl<
        const L_NUM: i32,
        const L_DEN: i32,
        const T_NUM: i32,
        const T_DEN: i32,
        const M_NUM: i32,
        const M_DEN: i32,
        const I_NUM: i32,
        const I_DEN: i32,
        const TH_NUM: i32,
        const TH_DEN: i32,
        const N_NUM: i32,
        const N_DEN: i32,
        const J_NUM: i32,
        const J_DEN: i32,
    > Dimension
    for RationalDim<
        L_NUM,
        L_DEN,
        T_NUM,
        T_DEN,
        M_NUM,
        M_DEN,
        I_NUM,
        I_DEN,
        TH_NUM,
        TH_DEN,
        N_NUM,
        N_DEN,
        J_NUM,
        J_DEN,
    >
{
    const VECTOR: DimVector = DimVector::from_reduced([
        (L_NUM, L_DEN),
        (T_NUM, T_DEN),
        (M_NUM, M_DEN),
        (I_NUM, I_DEN),
        (TH_NUM, TH_DEN),
        (N_NUM, N_DEN),
        (J_NUM, J_DEN),
    ]);
}

/// Tag with integer exponents: length, time, mass, then optionally current, temperature, amount
/// and luminous intensity.
///
/// ```rust
/// use mesi_core::{BaseDimension, Dim, Dimension, Ratio};
///
/// type Speed = Dim<1, -1, 0>;
/// assert_eq!(Speed::VECTOR.exponent(BaseDimension::Time), Ratio::integer(-1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim<
    const L: i32,
    const T: i32,
    const M: i32,
    const I: i32 = 0,
    const TH: i32 = 0,
    const N: i32 = 0,
    const J: i32 = 0,
> {}

impl<
        const L: i32,
        const T: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Dimension for Dim<L, T, M, I, TH, N, J>
{
    const VECTOR: DimVector = DimVector::new([
        Ratio::integer(L),
        Ratio::integer(T),
        Ratio::integer(M),
        Ratio::integer(I),
        Ratio::integer(TH),
        Ratio::integer(N),
        Ratio::integer(J),
    ]);
}

/// Tag for dimensionless quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const VECTOR: DimVector = DimVector::DIMENSIONLESS;
}

/// Dimension of a product `A * B`: exponents add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimProduct<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for DimProduct<A, B> {
    const VECTOR: DimVector = A::VECTOR.mul(B::VECTOR);
}

/// Dimension of a quotient `A / B`: exponents subtract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimQuotient<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for DimQuotient<A, B> {
    const VECTOR: DimVector = A::VECTOR.div(B::VECTOR);
}

/// Dimension of `A` raised to the rational power `N / DEN`: exponents are multiplied by `N / DEN`.
///
/// The power need not be reduced; `DEN` must be positive.
///
/// ```rust
/// use mesi_core::{BaseDimension, Dim, DimPow, Dimension, Ratio};
///
/// type LengthToThreeHalves = DimPow<Dim<1, 0, 0>, 3, 2>;
/// assert_eq!(LengthToThreeHalves::VECTOR.exponent(BaseDimension::Length), Ratio::new(3, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimPow<A: Dimension, const N: i32, const DEN: i32>(PhantomData<A>);
impl<A: Dimension, const N: i32, const DEN: i32> Dimension for DimPow<A, N, DEN> {
    const VECTOR: DimVector = {
        assert!(DEN > 0, "power denominator must be positive");
        A::VECTOR.pow(N, DEN)
    };
}

/// Dimension of the `N`-th root of `A`.
pub type DimRoot<A, const N: i32> = DimPow<A, 1, N>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Length = Dim<1, 0, 0>;
    type Time = Dim<0, 1, 0>;
    type Mass = Dim<0, 0, 1>;

    fn vector(pairs: [(i32, i32); BASE_COUNT]) -> DimVector {
        DimVector::from_fractions(pairs)
    }

    #[test]
    fn base_vectors() {
        for dim in BaseDimension::ALL {
            let v = DimVector::base(dim);
            for other in BaseDimension::ALL {
                let expected = if other == dim { Ratio::ONE } else { Ratio::ZERO };
                assert_eq!(v.exponent(other), expected);
            }
        }
    }

    #[test]
    fn symbols_follow_canonical_order() {
        let symbols: Vec<_> = BaseDimension::ALL.iter().map(|d| d.symbol()).collect();
        assert_eq!(symbols, ["m", "s", "kg", "A", "K", "mol", "cd"]);
    }

    #[test]
    fn product_adds_exponents() {
        type Area = DimProduct<Length, Length>;
        assert_eq!(Area::VECTOR.exponent(BaseDimension::Length), Ratio::integer(2));
        assert!(Area::VECTOR.same_as(<Dim<2, 0, 0>>::VECTOR));
    }

    #[test]
    fn quotient_subtracts_exponents() {
        type Force = DimQuotient<DimProduct<Mass, Length>, DimProduct<Time, Time>>;
        type Area = DimProduct<Length, Length>;
        type Pressure = DimQuotient<Force, Area>;
        assert_eq!(Pressure::VECTOR, <Dim<-1, -2, 1>>::VECTOR);
    }

    #[test]
    fn root_halves_exponents() {
        type Half = DimRoot<Dim<1, -2, 0>, 2>;
        assert_eq!(Half::VECTOR.exponent(BaseDimension::Length), Ratio::new(1, 2));
        assert_eq!(Half::VECTOR.exponent(BaseDimension::Time), Ratio::integer(-1));
    }

    #[test]
    fn pow_scales_exponents_by_the_power() {
        type Cubed = DimPow<Dim<1, -1, 0>, 3, 1>;
        assert_eq!(Cubed::VECTOR, <Dim<3, -3, 0>>::VECTOR);

        type ThreeHalves = DimPow<Dim<1, 0, 2>, 3, 2>;
        assert_eq!(ThreeHalves::VECTOR.exponent(BaseDimension::Length), Ratio::new(3, 2));
        assert_eq!(ThreeHalves::VECTOR.exponent(BaseDimension::Mass), Ratio::integer(3));

        type Unreduced = DimPow<Dim<2, 0, 0>, 2, 4>;
        assert_eq!(Unreduced::VECTOR, Length::VECTOR);

        type Inverse = DimPow<Dim<0, 2, 0>, -1, 2>;
        assert_eq!(Inverse::VECTOR, <Dim<0, -1, 0>>::VECTOR);
    }

    #[test]
    fn root_is_the_unit_fraction_power() {
        assert_eq!(
            <DimRoot<Dim<3, 0, 0>, 3>>::VECTOR,
            <DimPow<Dim<3, 0, 0>, 1, 3>>::VECTOR
        );
        assert_eq!(Length::VECTOR.pow(1, 2), Length::VECTOR.root(2));
    }

    #[test]
    fn rational_tag_matches_reducing_constructor() {
        type Odd = RationalDim<1, 2, -3, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1>;
        let built = vector([(2, 4), (3, -2), (0, 5), (0, 1), (0, 1), (0, 1), (0, 1)]);
        assert_eq!(Odd::VECTOR, built);
    }

    #[test]
    #[should_panic(expected = "the time exponent fraction is not irreducible")]
    fn from_reduced_names_the_dimension() {
        let _ = DimVector::from_reduced([(1, 1), (2, 4), (0, 1), (0, 1), (0, 1), (0, 1), (0, 1)]);
    }

    #[test]
    #[should_panic(expected = "the luminous intensity exponent fraction is not irreducible")]
    fn from_reduced_rejects_negative_denominator() {
        let _ = DimVector::from_reduced([(0, 1), (0, 1), (0, 1), (0, 1), (0, 1), (0, 1), (1, -1)]);
    }

    #[test]
    fn dimensionless_tag() {
        assert!(Dimensionless::VECTOR.is_dimensionless());
        assert!(!Length::VECTOR.is_dimensionless());
        assert!(DimQuotient::<Length, Length>::VECTOR.is_dimensionless());
    }

    #[test]
    fn checked_mul_reports_overflow() {
        let huge = DimVector::new([Ratio::integer(i32::MAX); BASE_COUNT]);
        assert_eq!(huge.checked_mul(DimVector::base(BaseDimension::Mass)), None);
        assert!(huge.checked_div(DimVector::base(BaseDimension::Mass)).is_some());
    }

    fn arb_vector() -> impl Strategy<Value = DimVector> {
        proptest::array::uniform7((-6i32..6, 1i32..4)).prop_map(vector)
    }

    proptest! {
        #[test]
        fn prop_mul_is_commutative_and_associative(a in arb_vector(), b in arb_vector(), c in arb_vector()) {
            prop_assert_eq!(a.mul(b), b.mul(a));
            prop_assert_eq!(a.mul(b).mul(c), a.mul(b.mul(c)));
        }

        #[test]
        fn prop_div_inverts_mul(a in arb_vector(), b in arb_vector()) {
            prop_assert_eq!(a.mul(b).div(b), a);
            prop_assert!(a.div(a).is_dimensionless());
        }

        #[test]
        fn prop_equality_is_an_equivalence(a in arb_vector(), b in arb_vector(), c in arb_vector()) {
            prop_assert!(a.same_as(a));
            prop_assert_eq!(a.same_as(b), b.same_as(a));
            if a.same_as(b) && b.same_as(c) {
                prop_assert!(a.same_as(c));
            }
        }
    }
}
