//! Error type for the runtime-checked paths.
//!
//! The static [`Quantity`](crate::Quantity) algebra never returns errors: a mismatched tag is a
//! build failure and storage faults (overflow, division by zero) are the storage type's own. Only
//! runtime input goes through [`Error`]: [`Ratio::checked_new`](crate::Ratio::checked_new),
//! [`Quantity::try_to`](crate::Quantity::try_to) and [`DynQuantity`](crate::DynQuantity).

use crate::tag::Tag;

/// Failures of the runtime-checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fraction was given a zero denominator.
    #[error("exponent denominator must be non-zero")]
    ZeroDenominator,

    /// Combining exponents produced a fraction that does not fit in `i32`.
    #[error("dimension exponent overflow")]
    ExponentOverflow,

    /// Combining prefixes produced an exponent that does not fit in `i32`.
    #[error("prefix exponent overflow")]
    PrefixOverflow,

    /// Two quantities with different tags were added, subtracted, compared or cast.
    #[error("incompatible quantities: [{left}] vs [{right}]")]
    Incompatible {
        /// Tag of the left operand (or the source of a cast).
        left: Tag,
        /// Tag of the right operand (or the target of a cast).
        right: Tag,
    },

    /// Rescaling would drop non-zero digits.
    #[error("rescaling from 10^{from} to 10^{to} loses precision")]
    PrecisionLoss {
        /// Source prefix exponent.
        from: i32,
        /// Target prefix exponent.
        to: i32,
    },

    /// Rescaling overflows the storage type.
    #[error("rescaling from 10^{from} to 10^{to} overflows the storage type")]
    StorageOverflow {
        /// Source prefix exponent.
        from: i32,
        /// Target prefix exponent.
        to: i32,
    },
}
