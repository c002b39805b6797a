//! Type-level power-of-ten prefixes.
//!
//! The prefix is an eighth pseudo-exponent carried next to the dimension vector. It is summed under
//! multiplication, subtracted under division and must match exactly for addition, subtraction and
//! comparison. Named prefixes (`Kilo`, `Milli`, ...) live in [`crate::units::prefixes`].

use core::marker::PhantomData;

/// Type-level power of ten.
pub trait Prefix: 'static {
    /// The exponent `p` of the scale factor `10^p`.
    const EXPONENT: i32;
}

/// Prefix `10^E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pow10<const E: i32> {}
impl<const E: i32> Prefix for Pow10<E> {
    const EXPONENT: i32 = E;
}

/// The default, unscaled prefix `10^0`.
pub type Unprefixed = Pow10<0>;

/// Prefix of a product: `A + B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixSum<A: Prefix, B: Prefix>(PhantomData<(A, B)>);
impl<A: Prefix, B: Prefix> Prefix for PrefixSum<A, B> {
    const EXPONENT: i32 = match A::EXPONENT.checked_add(B::EXPONENT) {
        Some(p) => p,
        None => panic!("prefix exponent overflow"),
    };
}

/// Prefix of a quotient: `A - B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixDifference<A: Prefix, B: Prefix>(PhantomData<(A, B)>);
impl<A: Prefix, B: Prefix> Prefix for PrefixDifference<A, B> {
    const EXPONENT: i32 = match A::EXPONENT.checked_sub(B::EXPONENT) {
        Some(p) => p,
        None => panic!("prefix exponent overflow"),
    };
}

/// Prefix of `A` raised to the rational power `N / DEN`: `A * N / DEN`, which must be an integer.
///
/// ```rust
/// use mesi_core::{Pow10, Prefix, PrefixPow};
///
/// assert_eq!(<PrefixPow<Pow10<-6>, 3, 2>>::EXPONENT, -9);
/// ```
///
/// ```compile_fail
/// use mesi_core::{Pow10, Prefix, PrefixPow};
///
/// let _ = <PrefixPow<Pow10<3>, 1, 2>>::EXPONENT; // 3 / 2 is not an integer
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixPow<A: Prefix, const N: i32, const DEN: i32>(PhantomData<A>);
impl<A: Prefix, const N: i32, const DEN: i32> Prefix for PrefixPow<A, N, DEN> {
    const EXPONENT: i32 = {
        assert!(DEN > 0, "power denominator must be positive");
        let scaled = A::EXPONENT as i64 * N as i64;
        assert!(
            scaled % DEN as i64 == 0,
            "prefix exponent times the power is not an integer"
        );
        let exponent = scaled / DEN as i64;
        assert!(
            exponent >= i32::MIN as i64 && exponent <= i32::MAX as i64,
            "prefix exponent overflow"
        );
        exponent as i32
    };
}

/// Prefix of an `N`-th root: `A / N`, which must divide evenly.
pub type PrefixRoot<A, const N: i32> = PrefixPow<A, 1, N>;
