//! Human-readable rendering of tags.
//!
//! A nonzero prefix is rendered first as `* 10^p`, then every nonzero exponent in canonical order as
//! `sym`, `sym^k` or `sym^(n/d)`, all joined by single spaces. An unprefixed dimensionless tag
//! renders as the empty string.
//!
//! ```rust
//! use mesi_core::{describe, Dim, Dimension};
//!
//! assert_eq!(describe(<Dim<-1, -2, 1>>::VECTOR, 0), "m^-1 s^-2 kg");
//! assert_eq!(describe(<Dim<1, 0, 0>>::VECTOR, -3), "* 10^-3 m");
//! ```

use crate::dimension::{BaseDimension, DimVector};
use crate::tag::Tag;
use alloc::string::{String, ToString};
use core::fmt;

#[cfg(feature = "std")]
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Renders a dimension vector and prefix exponent.
pub fn describe(vector: DimVector, prefix: i32) -> String {
    Tag::new(vector, prefix).to_string()
}

fn write_vector(f: &mut fmt::Formatter<'_>, vector: DimVector, mut first: bool) -> fmt::Result {
    for dim in BaseDimension::ALL {
        let exp = vector.exponent(dim);
        if exp.is_zero() {
            continue;
        }
        if !first {
            f.write_str(" ")?;
        }
        first = false;
        f.write_str(dim.symbol())?;
        if exp.is_integer() {
            if exp.num() != 1 {
                write!(f, "^{}", exp.num())?;
            }
        } else {
            write!(f, "^({})", exp)?;
        }
    }
    Ok(())
}

impl fmt::Display for DimVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, *self, true)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefixed = self.prefix() != 0;
        if prefixed {
            write!(f, "* 10^{}", self.prefix())?;
        }
        write_vector(f, self.vector(), !prefixed)
    }
}

/// Memoized [`describe`] strings, keyed by [`Tag`].
///
/// The cache is an ordinary value owned by whoever renders diagnostics; quantities never hold one.
/// It is safe to share across threads: two threads computing the same missing entry store the same
/// string, so the race is harmless.
///
/// ```rust
/// use mesi_core::{DescribeCache, Dim, Quantity};
///
/// let cache = DescribeCache::new();
/// let v: Quantity<f64, Dim<1, -1, 0>> = Quantity::new(3.0);
/// assert_eq!(&*cache.describe(v.tag()), "m s^-1");
/// assert_eq!(cache.len(), 1);
/// ```
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct DescribeCache {
    entries: RwLock<HashMap<Tag, Arc<str>>>,
}

#[cfg(feature = "std")]
impl DescribeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered tag, computing and storing it on first use.
    pub fn describe(&self, tag: Tag) -> Arc<str> {
        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tag)
        {
            return Arc::clone(hit);
        }

        let rendered: Arc<str> = Arc::from(tag.to_string());
        log::trace!("describe cache miss for [{}]", rendered);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(tag).or_insert(rendered))
    }

    /// Same as [`DescribeCache::describe`] for a vector and prefix.
    pub fn get(&self, vector: DimVector, prefix: i32) -> Arc<str> {
        self.describe(Tag::new(vector, prefix))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        log::debug!("clearing {} cached describe strings", entries.len());
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dim, Dimension, RationalDim};
    use crate::rational::Ratio;

    #[test]
    fn renders_integer_exponents() {
        assert_eq!(describe(<Dim<2, 0, 0>>::VECTOR, 0), "m^2");
        assert_eq!(describe(<Dim<0, -1, 0>>::VECTOR, 0), "s^-1");
        assert_eq!(describe(<Dim<2, -2, 1>>::VECTOR, 0), "m^2 s^-2 kg");
    }

    #[test]
    fn renders_fractional_exponents() {
        type Odd = RationalDim<1, 2, 0, 1, 0, 1, -3, 2, 0, 1, 0, 1, 0, 1>;
        assert_eq!(describe(Odd::VECTOR, 0), "m^(1/2) A^(-3/2)");
    }

    #[test]
    fn renders_all_base_symbols_in_order() {
        type All = Dim<1, 1, 1, 1, 1, 1, 1>;
        assert_eq!(describe(All::VECTOR, 0), "m s kg A K mol cd");
    }

    #[test]
    fn prefix_marker() {
        assert_eq!(describe(<Dim<1, 0, 0>>::VECTOR, 3), "* 10^3 m");
        assert_eq!(describe(<Dim<1, -1, 0>>::VECTOR, 6), "* 10^6 m s^-1");
        assert_eq!(describe(DimVector::DIMENSIONLESS, -6), "* 10^-6");
        assert_eq!(describe(DimVector::DIMENSIONLESS, 0), "");
    }

    #[test]
    fn vector_display_omits_prefix() {
        let v = DimVector::new([
            Ratio::integer(-1),
            Ratio::ZERO,
            Ratio::ONE,
            Ratio::ZERO,
            Ratio::ZERO,
            Ratio::ZERO,
            Ratio::ZERO,
        ]);
        assert_eq!(v.to_string(), "m^-1 kg");
    }

    #[cfg(feature = "std")]
    #[test]
    fn cache_reuses_entries() {
        let cache = DescribeCache::new();
        assert!(cache.is_empty());
        let a = cache.get(<Dim<1, -2, 0>>::VECTOR, 0);
        let b = cache.describe(Tag::new(<Dim<1, -2, 0>>::VECTOR, 0));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(&*a, "m s^-2");

        cache.get(<Dim<1, -2, 0>>::VECTOR, 3);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn cache_is_consistent_across_threads() {
        let cache = Arc::new(DescribeCache::new());
        let tag = Tag::new(<Dim<-1, -2, 1>>::VECTOR, 0);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.describe(tag))
            })
            .collect();
        for handle in handles {
            assert_eq!(&*handle.join().unwrap(), "m^-1 s^-2 kg");
        }
        assert_eq!(cache.len(), 1);
    }
}
