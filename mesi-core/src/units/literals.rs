//! Unit constants and literal-style constructors.
//!
//! Constants are `f64` quantities of value one, meant to be multiplied by a number. The
//! [`Literals`] extension trait wraps any storage value directly and keeps its type:
//!
//! ```rust
//! use mesi_core::units::literals::{Literals, KG, M, S};
//! use mesi_core::units::derived::Newtons;
//!
//! let f = 3.0 * KG * M / (S * S);
//! let g: Newtons<f64> = 3.0f64.newtons();
//! assert_eq!(f.tag(), g.tag());
//! let f: Newtons = f.cast();
//! assert_eq!(f, g);
//!
//! let n = 4u32.meters();
//! assert_eq!(n.value(), 4u32);
//! ```

use super::base::*;
use super::derived::*;
use crate::{Quantity, Storage};

macro_rules! unit_constants {
    ($($(#[$meta:meta])* $name:ident: $alias:ident;)+) => {
        $(
            $(#[$meta])*
            pub const $name: $alias = Quantity::new(1.0);
        )+
    };
}

unit_constants! {
    /// One metre.
    M: Meters;
    /// One square metre.
    M2: MetersSq;
    /// One cubic metre.
    M3: MetersCu;
    /// One second.
    S: Seconds;
    /// One square second.
    S2: SecondsSq;
    /// One kilogram.
    KG: Kilograms;
    /// One square kilogram.
    KG2: KilogramsSq;
    /// One ampere.
    A: Amperes;
    /// One kelvin.
    K: Kelvins;
    /// One mole.
    MOL: Moles;
    /// One candela.
    CD: Candelas;
    /// One newton.
    N: Newtons;
    /// One square newton.
    N2: NewtonsSq;
    /// One hertz.
    HZ: Hertz;
    /// One pascal.
    PA: Pascals;
    /// One joule.
    J: Joules;
    /// One watt.
    W: Watts;
    /// One coulomb.
    C: Coulombs;
    /// One volt.
    V: Volts;
    /// One farad.
    F: Farads;
    /// One ohm.
    OHM: Ohms;
    /// One siemens.
    SIEMENS: Siemens;
    /// One weber.
    WB: Webers;
    /// One tesla.
    T: Teslas;
    /// One henry.
    H: Henries;
}

/// Literal-style constructors for every storage type: `2.5f64.meters()`, `3u8.seconds()`.
///
/// Each method is `Quantity::new(self)` under the named unit's type.
pub trait Literals: Storage {
    /// Metres.
    fn meters(self) -> Meters<Self> {
        Quantity::new(self)
    }
    /// Square metres.
    fn meters_sq(self) -> MetersSq<Self> {
        Quantity::new(self)
    }
    /// Cubic metres.
    fn meters_cu(self) -> MetersCu<Self> {
        Quantity::new(self)
    }
    /// Seconds.
    fn seconds(self) -> Seconds<Self> {
        Quantity::new(self)
    }
    /// Square seconds.
    fn seconds_sq(self) -> SecondsSq<Self> {
        Quantity::new(self)
    }
    /// Kilograms.
    fn kilograms(self) -> Kilograms<Self> {
        Quantity::new(self)
    }
    /// Square kilograms.
    fn kilograms_sq(self) -> KilogramsSq<Self> {
        Quantity::new(self)
    }
    /// Amperes.
    fn amperes(self) -> Amperes<Self> {
        Quantity::new(self)
    }
    /// Kelvins.
    fn kelvins(self) -> Kelvins<Self> {
        Quantity::new(self)
    }
    /// Moles.
    fn moles(self) -> Moles<Self> {
        Quantity::new(self)
    }
    /// Candelas.
    fn candelas(self) -> Candelas<Self> {
        Quantity::new(self)
    }
    /// Newtons.
    fn newtons(self) -> Newtons<Self> {
        Quantity::new(self)
    }
    /// Square newtons.
    fn newtons_sq(self) -> NewtonsSq<Self> {
        Quantity::new(self)
    }
    /// Hertz.
    fn hertz(self) -> Hertz<Self> {
        Quantity::new(self)
    }
    /// Pascals.
    fn pascals(self) -> Pascals<Self> {
        Quantity::new(self)
    }
    /// Joules.
    fn joules(self) -> Joules<Self> {
        Quantity::new(self)
    }
    /// Watts.
    fn watts(self) -> Watts<Self> {
        Quantity::new(self)
    }
    /// Coulombs.
    fn coulombs(self) -> Coulombs<Self> {
        Quantity::new(self)
    }
    /// Volts.
    fn volts(self) -> Volts<Self> {
        Quantity::new(self)
    }
    /// Farads.
    fn farads(self) -> Farads<Self> {
        Quantity::new(self)
    }
    /// Ohms.
    fn ohms(self) -> Ohms<Self> {
        Quantity::new(self)
    }
    /// Siemens.
    fn siemens(self) -> Siemens<Self> {
        Quantity::new(self)
    }
    /// Webers.
    fn webers(self) -> Webers<Self> {
        Quantity::new(self)
    }
    /// Teslas.
    fn teslas(self) -> Teslas<Self> {
        Quantity::new(self)
    }
    /// Henries.
    fn henries(self) -> Henries<Self> {
        Quantity::new(self)
    }
}

impl<T: Storage> Literals for T {}
