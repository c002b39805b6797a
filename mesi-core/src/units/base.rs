//! The seven SI base dimensions.
//!
//! ```rust
//! use mesi_core::units::base::{Length, Meters, Seconds};
//! use mesi_core::{Dimension, describe};
//!
//! let d = Meters::new(100.0_f64);
//! let t = Seconds::new(20.0);
//! assert_eq!((d / t).value(), 5.0);
//! assert_eq!(describe(Length::VECTOR, 0), "m");
//! ```
//!
//! The aliases default their storage to `f64` only where they are written as a type
//! (`let d: Meters = ...`). In an expression such as `Meters::new(1.0)` the storage is inferred
//! like any other generic parameter, so an unsuffixed float literal stays ambiguous until
//! something pins it; write `1.0_f64` or `Meters::<f64>::new(1.0)` when nothing else does.

use crate::{Dimension, Dimensionless, Quantity};

/// Dimension tag for length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(length = 1)]
pub enum Length {}

/// Dimension tag for time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(time = 1)]
pub enum Time {}

/// Dimension tag for mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(mass = 1)]
pub enum Mass {}

/// Dimension tag for electric current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(current = 1)]
pub enum Current {}

/// Dimension tag for thermodynamic temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(temperature = 1)]
pub enum Temperature {}

/// Dimension tag for amount of substance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(amount = 1)]
pub enum Amount {}

/// Dimension tag for luminous intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Dimension)]
#[dimension(luminous_intensity = 1)]
pub enum LuminousIntensity {}

/// A dimensionless, unprefixed number.
pub type Scalar<T = f64> = Quantity<T, Dimensionless>;
/// A length in metres.
pub type Meters<T = f64> = Quantity<T, Length>;
/// A time in seconds.
pub type Seconds<T = f64> = Quantity<T, Time>;
/// A mass in kilograms.
pub type Kilograms<T = f64> = Quantity<T, Mass>;
/// A current in amperes.
pub type Amperes<T = f64> = Quantity<T, Current>;
/// A temperature in kelvins.
pub type Kelvins<T = f64> = Quantity<T, Temperature>;
/// An amount of substance in moles.
pub type Moles<T = f64> = Quantity<T, Amount>;
/// A luminous intensity in candelas.
pub type Candelas<T = f64> = Quantity<T, LuminousIntensity>;
