//! Element types a buffer can hold.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

mod sealed {
    pub trait Sealed {}
}

/// A scalar that can live in an [`ArrayBuffer`](crate::ArrayBuffer).
///
/// Elements are `Copy` and have a zero value (`Default`) used to fill freshly
/// allocated stores. Equality, ordering and hashing are total so buffers
/// can implement `Eq`, `Ord` and `Hash` over their remaining elements:
/// floating point NaN equals NaN and sorts above every other value, and
/// `-0.0` equals `0.0`.
///
/// The trait is sealed; the implementors are `u8`, `char`, `i16`, `i32`,
/// `i64`, `f32` and `f64`.
pub trait Element: Copy + Default + Debug + sealed::Sealed + 'static {
    /// Short name used in debug output.
    const NAME: &'static str;

    fn element_eq(self, other: Self) -> bool;

    fn element_cmp(self, other: Self) -> Ordering;

    fn element_hash<H: Hasher>(self, state: &mut H);
}

macro_rules! impl_integral_element {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const NAME: &'static str = $name;

            #[inline]
            fn element_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn element_cmp(self, other: Self) -> Ordering {
                self.cmp(&other)
            }

            #[inline]
            fn element_hash<H: Hasher>(self, state: &mut H) {
                self.hash(state);
            }
        }
    )*};
}

macro_rules! impl_float_element {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const NAME: &'static str = $name;

            #[inline]
            fn element_eq(self, other: Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }

            #[inline]
            fn element_cmp(self, other: Self) -> Ordering {
                match self.partial_cmp(&other) {
                    Some(ordering) => ordering,
                    None => self.is_nan().cmp(&other.is_nan()),
                }
            }

            #[inline]
            fn element_hash<H: Hasher>(self, state: &mut H) {
                let canonical = if self.is_nan() {
                    <$ty>::NAN
                } else if self == 0.0 {
                    0.0
                } else {
                    self
                };
                canonical.to_bits().hash(state);
            }
        }
    )*};
}

impl_integral_element!(
    u8 => "u8",
    char => "char",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
);

impl_float_element!(f32 => "f32", f64 => "f64");
