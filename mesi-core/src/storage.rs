//! Numeric storage contract.

use num_traits::Num;

/// A numeric type that can hold the raw magnitude of a [`Quantity`](crate::Quantity).
///
/// Beyond ordinary arithmetic the engine only needs the constant ten, which prefix rescaling
/// multiplies or divides by one step at a time. Implemented for every primitive integer and float
/// type.
pub trait Storage: Copy + Num + PartialOrd {
    /// The value `10`.
    const TEN: Self;
}

macro_rules! impl_storage {
    ($ten:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Storage for $t {
                const TEN: Self = $ten;
            }
        )+
    };
}

impl_storage!(10 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_storage!(10.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn ten<T: Storage>() -> T {
        T::TEN
    }

    #[test]
    fn ten_is_ten_for_every_storage() {
        assert_eq!(ten::<u8>(), 10u8);
        assert_eq!(ten::<i128>(), 10i128);
        assert_eq!(ten::<usize>(), 10usize);
        assert_eq!(ten::<f32>(), 10.0f32);
        assert_eq!(ten::<f64>(), 10.0f64);
    }
}
