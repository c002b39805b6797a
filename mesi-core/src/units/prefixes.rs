//! SI prefixes.
//!
//! Each prefix is a type-level [`Pow10`] for use in a quantity's type, plus a dimensionless scale
//! constant of value one for building prefixed values by multiplication:
//!
//! ```rust
//! use mesi_core::units::base::Meters;
//! use mesi_core::units::literals::M;
//! use mesi_core::units::prefixes::{Kilo, KILO};
//! use mesi_core::Quantity;
//!
//! let typed: Quantity<f64, mesi_core::units::base::Length, Kilo> = Quantity::new(2.0);
//! let built = 2.0 * KILO * M;
//! assert_eq!(built.tag(), typed.tag());
//! let built: Quantity<f64, mesi_core::units::base::Length, Kilo> = built.cast();
//! assert_eq!(built, typed);
//! assert_eq!(typed.to::<mesi_core::Pow10<0>>(), Meters::new(2000.0));
//! ```

use crate::{Dimensionless, Pow10, Prefix, Quantity};

macro_rules! si_prefixes {
    ($($(#[$meta:meta])* $tag:ident, $constant:ident = $exp:literal;)+) => {
        $(
            $(#[$meta])*
            pub type $tag = Pow10<{ $exp }>;
        )+
        $(
            #[doc = concat!("Dimensionless scale factor `10^", stringify!($exp), "` with value one.")]
            pub const $constant: Quantity<f64, Dimensionless, $tag> = Quantity::new(1.0);
        )+
    };
}

si_prefixes! {
    /// `10^24`.
    Yotta, YOTTA = 24;
    /// `10^21`.
    Zetta, ZETTA = 21;
    /// `10^18`.
    Exa, EXA = 18;
    /// `10^15`.
    Peta, PETA = 15;
    /// `10^12`.
    Tera, TERA = 12;
    /// `10^9`.
    Giga, GIGA = 9;
    /// `10^6`.
    Mega, MEGA = 6;
    /// `10^3`.
    Kilo, KILO = 3;
    /// `10^2`.
    Hecto, HECTO = 2;
    /// `10^1`.
    Deca, DECA = 1;
    /// `10^-1`.
    Deci, DECI = -1;
    /// `10^-2`.
    Centi, CENTI = -2;
    /// `10^-3`.
    Milli, MILLI = -3;
    /// `10^-6`.
    Micro, MICRO = -6;
    /// `10^-9`.
    Nano, NANO = -9;
    /// `10^-12`.
    Pico, PICO = -12;
    /// `10^-15`.
    Femto, FEMTO = -15;
    /// `10^-18`.
    Atto, ATTO = -18;
    /// `10^-21`.
    Zepto, ZEPTO = -21;
    /// `10^-24`.
    Yocto, YOCTO = -24;
}

/// Exponent of a prefix tag, for use in generic code.
pub const fn exponent<P: Prefix>() -> i32 {
    P::EXPONENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::base::{Meters, Seconds};
    use crate::units::literals::{M, S};

    #[test]
    fn ladder_is_spaced_by_three() {
        let ladder = [
            exponent::<Yocto>(),
            exponent::<Zepto>(),
            exponent::<Atto>(),
            exponent::<Femto>(),
            exponent::<Pico>(),
            exponent::<Nano>(),
            exponent::<Micro>(),
            exponent::<Milli>(),
            0,
            exponent::<Kilo>(),
            exponent::<Mega>(),
            exponent::<Giga>(),
            exponent::<Tera>(),
            exponent::<Peta>(),
            exponent::<Exa>(),
            exponent::<Zetta>(),
            exponent::<Yotta>(),
        ];
        for pair in ladder.windows(2) {
            assert_eq!(pair[1] - pair[0], 3);
        }
        assert_eq!(exponent::<Centi>() + exponent::<Hecto>(), 0);
        assert_eq!(exponent::<Deci>() + exponent::<Deca>(), 0);
    }

    #[test]
    fn scale_constants_carry_their_prefix() {
        assert_eq!(KILO.prefix(), 3);
        assert_eq!(MICRO.prefix(), -6);
        assert_eq!(MEGA.value(), 1.0);
        assert_eq!(KILO.to_string(), "1 * 10^3");
    }

    #[test]
    fn prefixed_products_rescale_to_base() {
        let km = 5.0 * KILO * M;
        assert_eq!(km.prefix(), 3);
        let m: Meters = km.to::<Pow10<0>>().cast();
        assert_eq!(m, Meters::new(5000.0));

        let ms = 250.0 * MILLI * S;
        let s: Seconds = ms.to::<Pow10<0>>().cast();
        assert_eq!(s.value(), 0.25);
    }
}
