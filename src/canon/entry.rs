// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer element types accepted by the binary transforms.
//!
//! Implemented for every primitive integer type except `u128`, whose values
//! above `i128::MAX` could not be reported in a [`CanonError::Domain`].
//!
//! [`CanonError::Domain`]: crate::error::CanonError::Domain

/// A primitive integer matrix entry.
pub trait IntegerEntry: Copy + Ord {
    /// Remainder modulo 2, always 0 or 1.
    fn parity(self) -> u8;

    /// The entry as a bit, or `None` when it is neither 0 nor 1.
    fn as_bit(self) -> Option<u8>;

    /// Lossless widening, used to report offending values.
    fn widen(self) -> i128;
}

macro_rules! impl_integer_entry {
    ($($t:ty),*) => {
        $(
            impl IntegerEntry for $t {
                #[inline]
                fn parity(self) -> u8 {
                    // Two's complement: the low bit is the Euclidean remainder.
                    (self & 1) as u8
                }

                #[inline]
                fn as_bit(self) -> Option<u8> {
                    match self {
                        0 => Some(0),
                        1 => Some(1),
                        _ => None,
                    }
                }

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer_entry!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_of_negatives() {
        assert_eq!((-1i8).parity(), 1);
        assert_eq!((-2i32).parity(), 0);
        assert_eq!(i128::MIN.parity(), 0);
        assert_eq!(isize::MIN.wrapping_add(1).parity(), 1);
    }

    #[test]
    fn test_parity_of_wide_unsigned() {
        assert_eq!(u64::MAX.parity(), 1);
        assert_eq!((usize::MAX - 1).parity(), 0);
    }

    #[test]
    fn test_as_bit() {
        assert_eq!(0u64.as_bit(), Some(0));
        assert_eq!(1isize.as_bit(), Some(1));
        assert_eq!((-1i16).as_bit(), None);
        assert_eq!(2usize.as_bit(), None);
    }

    #[test]
    fn test_widen_is_lossless() {
        assert_eq!(u64::MAX.widen(), u64::MAX as i128);
        assert_eq!(i64::MIN.widen(), -(1i128 << 63));
    }
}
