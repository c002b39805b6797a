//! Dimension-aware forwarding of the storage type's math functions.
//!
//! Functions that preserve the tag (`abs`, `floor`, `hypot`, ...) accept any quantity. Powers and
//! roots change the tag: the dimension exponents are multiplied by the power and so is the prefix,
//! which must stay an integer. Transcendental functions only make sense for a pure number and are
//! implemented only for the dimensionless, unprefixed tag; cast a ratio such as `m / m` to it first.
//!
//! ```compile_fail
//! use mesi_core::{Dim, Quantity};
//!
//! #[allow(dead_code)]
//! fn never_called(x: Quantity<f64, Dim<1, 0, 0>>) -> Quantity<f64, Dim<1, 0, 0>> {
//!     x.exp()
//! }
//! ```

use crate::dimension::{DimPow, DimProduct, Dimension, Dimensionless};
use crate::prefix::{Prefix, PrefixPow, PrefixSum, Unprefixed};
use crate::quantity::Quantity;
use crate::storage::Storage;
use num_traits::{Float, NumCast, Signed};

impl<T: Storage, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// The larger of two quantities (the first one if they are equal or unordered).
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// The smaller of two quantities (the first one if they are equal or unordered).
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Raises to the integer power `N`; exponents and prefix are multiplied by `N`.
    ///
    /// Works for any storage by repeated multiplication. A negative power divides one by the
    /// result, which truncates for integer storage.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Quantity};
    ///
    /// let side: Quantity<i32, Dim<1, 0, 0>> = Quantity::new(3);
    /// let area = side.powi::<2>();
    /// assert_eq!(area.value(), 9);
    /// assert_eq!(area.dimension(), <Dim<2, 0, 0> as mesi_core::Dimension>::VECTOR);
    /// ```
    #[inline]
    pub fn powi<const N: i32>(self) -> Quantity<T, DimPow<D, N, 1>, PrefixPow<P, N, 1>> {
        let mut acc = T::one();
        for _ in 0..N.unsigned_abs() {
            acc = acc * self.value();
        }
        Quantity::new(if N < 0 { T::one() / acc } else { acc })
    }

    /// `self - other` if positive, zero otherwise.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Quantity};
    ///
    /// type M = Quantity<u32, Dim<1, 0, 0>>;
    /// assert_eq!(M::new(7).positive_diff(M::new(3)).value(), 4);
    /// assert_eq!(M::new(3).positive_diff(M::new(7)).value(), 0);
    /// ```
    #[inline]
    pub fn positive_diff(self, other: Self) -> Self {
        if self > other {
            Self::new(self.value() - other.value())
        } else {
            Self::zero()
        }
    }
}

impl<T: Storage + Signed, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|v| v.abs())
    }

    /// Sign of the magnitude as a storage value (`-1`, `0` or `1`; NaN stays NaN for floats).
    #[inline]
    pub fn signum(self) -> T {
        self.value().signum()
    }
}

impl<T: Storage + Float, D: Dimension, P: Prefix> Quantity<T, D, P> {
    /// Largest integer magnitude not above this one.
    #[inline]
    pub fn floor(self) -> Self {
        self.map(Float::floor)
    }

    /// Smallest integer magnitude not below this one.
    #[inline]
    pub fn ceil(self) -> Self {
        self.map(Float::ceil)
    }

    /// Nearest integer magnitude, halfway cases away from zero.
    #[inline]
    pub fn round(self) -> Self {
        self.map(Float::round)
    }

    /// Integer part of the magnitude.
    #[inline]
    pub fn trunc(self) -> Self {
        self.map(Float::trunc)
    }

    /// `true` if the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    /// `sqrt(self² + other²)` for two quantities of the same type.
    ///
    /// ```rust
    /// use mesi_core::{Dim, Quantity};
    ///
    /// type M = Quantity<f64, Dim<1, 0, 0>>;
    /// assert_eq!(M::new(3.0).hypot(M::new(4.0)).value(), 5.0);
    /// ```
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.value().hypot(other.value()))
    }

    /// Raises to the rational power `N / DEN`.
    ///
    /// Exponents are multiplied by `N / DEN`; the prefix is too and must come out an integer.
    ///
    /// ```rust
    /// use mesi_core::{BaseDimension, Dim, Pow10, Quantity, Ratio};
    ///
    /// let cm: Quantity<f64, Dim<1, 0, 0>, Pow10<-2>> = Quantity::new(4.0);
    /// let q = cm.pow::<3, 2>();
    /// assert_eq!(q.value(), 8.0);
    /// assert_eq!(q.prefix(), -3);
    /// assert_eq!(q.dimension().exponent(BaseDimension::Length), Ratio::new(3, 2));
    /// ```
    ///
    /// ```compile_fail
    /// use mesi_core::{Dim, Pow10, Quantity};
    ///
    /// let mm: Quantity<f64, Dim<1, 0, 0>, Pow10<-3>> = Quantity::new(4.0);
    /// let _ = mm.pow::<3, 2>(); // prefix exponent times the power is not an integer
    /// ```
    #[inline]
    pub fn pow<const N: i32, const DEN: i32>(
        self,
    ) -> Quantity<T, DimPow<D, N, DEN>, PrefixPow<P, N, DEN>> {
        let v = self.value();
        let raised = match DEN {
            1 => v.powi(N),
            2 => v.sqrt().powi(N),
            3 => v.cbrt().powi(N),
            _ => match (<T as NumCast>::from(N), <T as NumCast>::from(DEN)) {
                (Some(n), Some(d)) => v.powf(n / d),
                _ => T::nan(),
            },
        };
        Quantity::new(raised)
    }

    /// Square root; exponents and prefix are halved.
    ///
    /// ```rust
    /// use mesi_core::{BaseDimension, Dim, Pow10, Quantity, Ratio};
    ///
    /// let area: Quantity<f64, Dim<2, 0, 0>, Pow10<6>> = Quantity::new(16.0);
    /// let side = area.sqrt();
    /// assert_eq!(side.value(), 4.0);
    /// assert_eq!(side.prefix(), 3);
    /// assert_eq!(side.dimension().exponent(BaseDimension::Length), Ratio::ONE);
    /// ```
    ///
    /// ```compile_fail
    /// use mesi_core::{Dim, Pow10, Quantity};
    ///
    /// let odd: Quantity<f64, Dim<2, 0, 0>, Pow10<3>> = Quantity::new(16.0);
    /// let _ = odd.sqrt(); // prefix exponent times the power is not an integer
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<T, DimPow<D, 1, 2>, PrefixPow<P, 1, 2>> {
        Quantity::new(self.value().sqrt())
    }

    /// Cube root; exponents and prefix are divided by three.
    #[inline]
    pub fn cbrt(self) -> Quantity<T, DimPow<D, 1, 3>, PrefixPow<P, 1, 3>> {
        Quantity::new(self.value().cbrt())
    }

    /// Fused `self * y + z`, where `z` has the type of `self * y`.
    #[inline]
    pub fn mul_add<D2: Dimension, P2: Prefix>(
        self,
        y: Quantity<T, D2, P2>,
        z: Quantity<T, DimProduct<D, D2>, PrefixSum<P, P2>>,
    ) -> Quantity<T, DimProduct<D, D2>, PrefixSum<P, P2>> {
        Quantity::new(self.value().mul_add(y.value(), z.value()))
    }
}

macro_rules! pure_number_fns {
    ($($(#[$meta:meta])* $name:ident => $float:ident;)+) => {
        impl<T: Storage + Float> Quantity<T, Dimensionless, Unprefixed> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name(self) -> Self {
                    self.map(Float::$float)
                }
            )+

            /// Four-quadrant arc tangent of `self / other`, both pure numbers.
            #[inline]
            pub fn atan2(self, other: Self) -> Self {
                Self::new(self.value().atan2(other.value()))
            }
        }
    };
}

pure_number_fns! {
    /// `e^self`.
    exp => exp;
    /// `2^self`.
    exp2 => exp2;
    /// `e^self - 1`, accurate near zero.
    exp_m1 => exp_m1;
    /// Natural logarithm.
    ln => ln;
    /// Base-10 logarithm.
    log10 => log10;
    /// Base-2 logarithm.
    log2 => log2;
    /// `ln(1 + self)`, accurate near zero.
    ln_1p => ln_1p;
    /// Sine (argument in radians).
    sin => sin;
    /// Cosine (argument in radians).
    cos => cos;
    /// Tangent (argument in radians).
    tan => tan;
    /// Arc sine, in radians.
    asin => asin;
    /// Arc cosine, in radians.
    acos => acos;
    /// Arc tangent, in radians.
    atan => atan;
    /// Hyperbolic sine.
    sinh => sinh;
    /// Hyperbolic cosine.
    cosh => cosh;
    /// Hyperbolic tangent.
    tanh => tanh;
    /// Inverse hyperbolic sine.
    asinh => asinh;
    /// Inverse hyperbolic cosine.
    acosh => acosh;
    /// Inverse hyperbolic tangent.
    atanh => atanh;
}
