//! Derived SI units.
//!
//! Each alias is spelled as the operator chain that produces it, so a value computed from base
//! quantities has exactly the alias's type:
//!
//! ```rust
//! use mesi_core::units::base::{Kilograms, Meters, Seconds};
//! use mesi_core::units::derived::Newtons;
//!
//! let f: Newtons = Meters::new(2.0) * Kilograms::new(3.0) / Seconds::new(1.0) / Seconds::new(2.0);
//! assert_eq!(f.value(), 3.0);
//! ```
//!
//! Different operator orders give different types with the same value. They do not add or
//! compare directly; convert one with [`Quantity::cast`](crate::Quantity::cast) first.
//!
//! These aliases are projections, so in expression position the storage has to be named:
//! `Newtons::<f64>::new(1.0)`. In type position (`let f: Newtons = ...`) it defaults to `f64`.

use super::base::{Amperes, Kilograms, Meters, Scalar, Seconds};
use core::ops::{Div, Mul};

/// Output type of `A * B`.
pub type Product<A, B> = <A as Mul<B>>::Output;
/// Output type of `A / B`.
pub type Quotient<A, B> = <A as Div<B>>::Output;

/// Area (`m^2`).
pub type MetersSq<T = f64> = Product<Meters<T>, Meters<T>>;
/// Volume (`m^3`).
pub type MetersCu<T = f64> = Product<Meters<T>, MetersSq<T>>;
/// `s^2`.
pub type SecondsSq<T = f64> = Product<Seconds<T>, Seconds<T>>;
/// `kg^2`.
pub type KilogramsSq<T = f64> = Product<Kilograms<T>, Kilograms<T>>;
/// Force (`m kg s^-2`).
pub type Newtons<T = f64> =
    Quotient<Quotient<Product<Meters<T>, Kilograms<T>>, Seconds<T>>, Seconds<T>>;
/// `N^2`.
pub type NewtonsSq<T = f64> = Product<Newtons<T>, Newtons<T>>;
/// Frequency (`s^-1`).
pub type Hertz<T = f64> = Quotient<Scalar<T>, Seconds<T>>;
/// Pressure (`N / m^2`).
pub type Pascals<T = f64> = Quotient<Newtons<T>, MetersSq<T>>;
/// Energy (`N m`).
pub type Joules<T = f64> = Product<Newtons<T>, Meters<T>>;
/// Power (`J / s`).
pub type Watts<T = f64> = Quotient<Joules<T>, Seconds<T>>;
/// Charge (`A s`).
pub type Coulombs<T = f64> = Product<Amperes<T>, Seconds<T>>;
/// Electric potential (`W / A`).
pub type Volts<T = f64> = Quotient<Watts<T>, Amperes<T>>;
/// Capacitance (`C / V`).
pub type Farads<T = f64> = Quotient<Coulombs<T>, Volts<T>>;
/// Resistance (`V / A`).
pub type Ohms<T = f64> = Quotient<Volts<T>, Amperes<T>>;
/// Conductance (`A / V`).
pub type Siemens<T = f64> = Quotient<Amperes<T>, Volts<T>>;
/// Magnetic flux (`V s`).
pub type Webers<T = f64> = Product<Volts<T>, Seconds<T>>;
/// Magnetic flux density (`Wb / m^2`).
pub type Teslas<T = f64> = Quotient<Webers<T>, MetersSq<T>>;
/// Inductance (`Wb / A`).
pub type Henries<T = f64> = Quotient<Webers<T>, Amperes<T>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{describe, Dim, Dimension, Quantity};
    use approx::assert_relative_eq;

    fn unit<Q: Default + Copy>() -> Q {
        Q::default()
    }

    #[test]
    fn describe_strings_of_derived_units() {
        assert_eq!(unit::<MetersSq>().tag().to_string(), "m^2");
        assert_eq!(unit::<MetersCu>().tag().to_string(), "m^3");
        assert_eq!(unit::<Hertz>().tag().to_string(), "s^-1");
        assert_eq!(unit::<Newtons>().tag().to_string(), "m s^-2 kg");
        assert_eq!(unit::<Pascals>().tag().to_string(), "m^-1 s^-2 kg");
        assert_eq!(unit::<Joules>().tag().to_string(), "m^2 s^-2 kg");
        assert_eq!(unit::<Watts>().tag().to_string(), "m^2 s^-3 kg");
        assert_eq!(unit::<Coulombs>().tag().to_string(), "s A");
        assert_eq!(unit::<Volts>().tag().to_string(), "m^2 s^-3 kg A^-1");
        assert_eq!(unit::<Farads>().tag().to_string(), "m^-2 s^4 kg^-1 A^2");
        assert_eq!(unit::<Ohms>().tag().to_string(), "m^2 s^-3 kg A^-2");
        assert_eq!(unit::<Siemens>().tag().to_string(), "m^-2 s^3 kg^-1 A^2");
        assert_eq!(unit::<Webers>().tag().to_string(), "m^2 s^-2 kg A^-1");
        assert_eq!(unit::<Teslas>().tag().to_string(), "s^-2 kg A^-1");
        assert_eq!(unit::<Henries>().tag().to_string(), "m^2 s^-2 kg A^-2");
        assert_eq!(unit::<NewtonsSq>().tag().to_string(), "m^2 s^-4 kg^2");
        assert_eq!(unit::<SecondsSq>().tag().to_string(), "s^2");
        assert_eq!(unit::<KilogramsSq>().tag().to_string(), "kg^2");
    }

    #[test]
    fn pressure_from_force_and_area() {
        let f = Newtons::<f64>::new(12.0);
        let a = MetersSq::<f64>::new(4.0);
        let p: Pascals = f / a;
        assert_eq!(p.value(), 3.0);
        assert_eq!(p.dimension(), <Dim<-1, -2, 1>>::VECTOR);
        assert_eq!(describe(p.dimension(), p.prefix()), "m^-1 s^-2 kg");
    }

    #[test]
    fn ohms_law() {
        let v = Volts::<f64>::new(12.0);
        let r = Ohms::<f64>::new(4.0);
        let i = v / r;
        assert_relative_eq!(i.value(), 3.0);
        let back: Amperes = i.cast();
        assert_eq!(back.value(), 3.0);
        let g: Siemens = (Scalar::<f64>::new(1.0) / r).cast();
        assert_relative_eq!(g.value(), 0.25);
    }

    #[test]
    fn differently_ordered_aliases_cast_into_each_other() {
        let a: Quantity<f64, Dim<1, -2, 1>> = Quantity::new(1.0);
        let n = Newtons::<f64>::new(1.0);
        assert_eq!(n.tag(), a.tag());
        let a_as_newtons: Newtons = a.cast();
        assert_eq!(n, a_as_newtons);
        assert_eq!((n + a_as_newtons).value(), 2.0);
        let n_as_raw: Quantity<f64, Dim<1, -2, 1>> = n.cast();
        assert_eq!(n_as_raw, a);
    }
}
