//! Named SI units built from the core algebra.
//!
//! Nothing here extends the engine: every alias is the exact output type of the operators applied
//! to the base quantities, and every constant and literal goes through [`Quantity::new`].
//!
//! ## Modules
//!
//! - [`base`]: the seven base dimension tags and their quantities (`Meters`, `Seconds`, ...).
//! - [`derived`]: derived SI units (`Newtons`, `Pascals`, `Volts`, ...) as operator output types.
//! - [`prefixes`]: SI prefix tags (`Kilo`, `Milli`, ...) and matching scale constants.
//! - [`literals`]: unit constants (`M`, `KG`, `N`, ...) and the [`Literals`](literals::Literals)
//!   extension trait.
//!
//! [`Quantity::new`]: crate::Quantity::new

pub mod base;
pub mod derived;
pub mod literals;
pub mod prefixes;
