//! Core engine for statically checked SI quantities.
//!
//! `mesi-core` attaches a physical dimension and a power-of-ten prefix to a raw number, at the type
//! level:
//!
//! - A *dimension vector* holds one reduced rational exponent per SI base dimension (length, time,
//!   mass, current, temperature, amount, luminous intensity). Type-level tags implement
//!   [`Dimension`] and expose their vector as a constant.
//! - A *prefix* is an integer power of ten ([`Prefix`], [`Pow10`]) carried next to the vector.
//! - A [`Quantity<T, D, P>`] is a raw magnitude of storage type `T` under those tags.
//!
//! Multiplication and division combine tags (exponents and prefixes add or subtract). Addition,
//! subtraction and comparison exist only between quantities of the same type, so a mismatch is a
//! type error. Two tags spelled differently but equal in value (`m * kg` and `kg * m`) are
//! reconciled with [`Quantity::cast`].
//!
//! Most users should depend on `mesi` (the facade crate) unless they need direct access to these
//! primitives.
//!
//! # Quick start
//!
//! ```rust
//! use mesi_core::units::base::{Meters, Seconds};
//! use mesi_core::units::derived::MetersSq;
//!
//! let area: MetersSq = Meters::new(3.0) * Meters::new(2.0);
//! assert_eq!(area.value(), 6.0);
//! assert_eq!(area.to_string(), "6 m^2");
//!
//! let speed = Meters::new(100.0_f64) / Seconds::new(20.0);
//! assert_eq!(speed.value(), 5.0);
//! ```
//!
//! Mixing dimensions in a sum does not build:
//!
//! ```compile_fail
//! use mesi_core::units::base::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! Neither does mixing prefixes; convert explicitly with [`Quantity::to`]:
//!
//! ```rust
//! use mesi_core::units::base::Length;
//! use mesi_core::units::prefixes::Kilo;
//! use mesi_core::{Pow10, Quantity};
//!
//! let km: Quantity<f64, Length, Kilo> = Quantity::new(1.5);
//! let m: Quantity<f64, Length> = Quantity::new(250.0);
//! assert_eq!((km.to::<Pow10<0>>() + m).value(), 1750.0);
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Unit systems other than SI, and units chosen at runtime (see [`DynQuantity`] for tags that are
//!   only known at runtime).
//! - Storage faults. Integer overflow or division by zero on a [`Quantity`] behave exactly as they
//!   do on the storage type.
//!
//! # `no_std`
//!
//! Disable default features to build `mesi-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mesi-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! Float math then comes from `num-traits`' `libm` backend. [`DescribeCache`] needs `std`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and [`DescribeCache`].
//! - `serde`: enables `serde` support; a [`Quantity`] serializes as its raw value only, and
//!   [`serde_with_unit`] keeps the unit next to it.
//!
//! # Panics and errors
//!
//! The static algebra has no error type. Operands of different types do not add, subtract or
//! compare, which `cargo check` already reports. The value checks on tags (reduced exponents,
//! exponent overflow, a prefix that a power leaves fractional, a [`Quantity::cast`] between
//! unequal tags) are associated-constant assertions raised while monomorphizing, so they show up
//! in `cargo build` and `cargo test`. Runtime-checked paths ([`Ratio::checked_new`],
//! [`Quantity::try_to`], [`DynQuantity`]) return [`Error`].

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod describe;
mod dimension;
mod dynamic;
mod error;
mod math;
mod prefix;
mod quantity;
pub mod rational;
mod storage;
mod tag;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use describe::describe;
#[cfg(feature = "std")]
pub use describe::DescribeCache;
pub use dimension::{
    BaseDimension, Dim, DimPow, DimProduct, DimQuotient, DimRoot, DimVector, Dimension,
    Dimensionless, RationalDim, BASE_COUNT,
};
pub use dynamic::DynQuantity;
pub use error::Error;
pub use mesi_derive::Dimension;
pub use prefix::{Pow10, Prefix, PrefixDifference, PrefixPow, PrefixRoot, PrefixSum, Unprefixed};
pub use quantity::Quantity;
pub use rational::Ratio;
pub use storage::Storage;
pub use tag::Tag;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Named units
// ─────────────────────────────────────────────────────────────────────────────

/// Base, derived and prefixed SI units plus literal helpers.
pub mod units;
