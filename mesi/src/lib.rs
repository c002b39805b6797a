//! Compile-time checked SI quantities.
//!
//! `mesi` is the user-facing crate in this workspace. It re-exports the full API from `mesi-core`
//! plus the named SI units, prefixes and literal helpers at the crate root.
//!
//! A value is always a `Quantity<T, D, P>`: a raw number of storage type `T` (any primitive
//! integer or float) tagged with a dimension `D` (seven rational exponents over the SI base
//! dimensions) and a power-of-ten prefix `P`. The tags are phantom types, so a quantity costs
//! exactly as much as its `T`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions or prefixes in sums and comparisons, at build time.
//!   Only quantities of the same type add or compare; `cast` moves a value between two spellings
//!   of the same tag.
//! - Derives the dimension of products, quotients, powers and roots automatically, including
//!   fractional exponents such as `m^(1/2)` or `pow::<3, 2>()`.
//! - Makes prefix conversion explicit (`to::<Milli>()`), with a checked variant for integers.
//!
//! # What this crate does not try to solve
//!
//! - Non-SI units (feet, degrees, astronomical units, ...) and units chosen at runtime.
//! - Protection against the storage type's own faults: integer overflow and division by zero
//!   behave exactly as they do on `T`.
//!
//! # Quick start
//!
//! ```rust
//! use mesi::{Kilograms, Meters, MetersSq, Newtons, Pascals, Seconds};
//!
//! let area: MetersSq = Meters::new(3.0) * Meters::new(2.0);
//! let force: Newtons = Meters::new(1.0) * Kilograms::new(12.0) / Seconds::new(1.0) / Seconds::new(1.0);
//! let pressure: Pascals = force / area;
//! assert_eq!(pressure.value(), 2.0);
//! assert_eq!(pressure.to_string(), "2 m^-1 s^-2 kg");
//! ```
//!
//! Literal-style construction:
//!
//! ```rust
//! use mesi::literals::{KG, M, S};
//! use mesi::{Literals, Newtons};
//!
//! let f: Newtons = (2.0 * KG * M / (S * S)).cast();
//! assert_eq!(f, 2.0_f64.newtons());
//! let n: Newtons<i64> = 5_i64.newtons();
//! assert_eq!(n.value(), 5);
//! ```
//!
//! Prefixes:
//!
//! ```rust
//! use mesi::{Kilo, Meters, Milli, Quantity, Length, Unprefixed};
//!
//! let m = Meters::<i32>::new(5);
//! let mm: Quantity<i32, Length, Milli> = m.to();
//! assert_eq!(mm.value(), 5000);
//! assert_eq!(mm.to::<Unprefixed>().value(), 5);
//! assert_eq!(m.to::<Kilo>().value(), 0); // integer storage truncates
//! ```
//!
//! # Incorrect usage (build error)
//!
//! ```compile_fail
//! use mesi::{Meters, Seconds};
//!
//! let d = Meters::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // quantities have different dimension vectors
//! ```
//!
//! ```compile_fail
//! use mesi::{Kilo, Length, Meters, Quantity};
//!
//! let a = Meters::new(1.0);
//! let b: Quantity<f64, Length, Kilo> = Quantity::new(1.0);
//! let _ = a == b; // quantities have different prefixes
//! ```
//!
//! # Custom dimensions
//!
//! ```rust
//! use mesi::{Dimension, Quantity, Seconds};
//!
//! /// Noise density, `s^(1/2)`.
//! #[derive(Dimension)]
//! #[dimension(crate = mesi, time = "1/2")]
//! pub enum RootTime {}
//!
//! let n: Quantity<f64, RootTime> = Quantity::new(3.0);
//! let t: Seconds = (n * n).cast();
//! assert_eq!(t.value(), 9.0);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mesi-core` and the `DescribeCache`.
//! - `serde`: enables `serde` support; quantities serialize as their raw value, and
//!   `serde_with_unit` adds the rendered unit.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mesi = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! The static algebra reports every misuse as a build failure and has no runtime error path.
//! Mismatched operand types are ordinary type errors; value checks on tags (such as a `cast`
//! between unequal tags or a power that leaves the prefix fractional) fail while monomorphizing.
//! [`DynQuantity`], [`Quantity::try_to`] and [`Ratio::checked_new`] return [`Error`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mesi_core::*;

pub use mesi_core::units::base;
pub use mesi_core::units::derived;
pub use mesi_core::units::literals;
pub use mesi_core::units::prefixes;

pub use mesi_core::units::base::*;
pub use mesi_core::units::derived::*;
pub use mesi_core::units::literals::Literals;
pub use mesi_core::units::prefixes::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, Peta, Pico,
    Tera, Yocto, Yotta, Zepto, Zetta,
};
