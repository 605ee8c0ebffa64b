//! Fixed-width binary words
//!
//! This module provides the `BinaryWord` abstraction that lets the
//! bit-packed genome work over any of the unsigned integer widths, plus
//! the small boolean bit helpers and window-mask construction shared by
//! the packed genome operations.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned word usable as genome storage.
///
/// Bit `i` holds gene `i`. The trait is sealed and implemented for
/// `u8`, `u16`, `u32` and `u64` only.
pub trait BinaryWord:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Number of bits in the word
    const BITS: u32;
    /// The all-zeros word
    const ZERO: Self;
    /// The all-ones word
    const ONES: Self;

    /// Test bit `index` (must be `< BITS`)
    fn test_bit(self, index: u32) -> bool;

    /// Return the word with bit `index` set
    fn set_bit(self, index: u32) -> Self;

    /// Return the word with bit `index` cleared
    fn clear_bit(self, index: u32) -> Self;

    /// Logical shift towards higher bit positions.
    ///
    /// Shifting by `BITS` or more yields zero.
    fn shift_left(self, amount: u32) -> Self;

    /// Logical shift towards lower bit positions.
    ///
    /// Shifting by `BITS` or more yields zero.
    fn shift_right(self, amount: u32) -> Self;

    /// Number of set bits
    fn popcount(self) -> u32;

    /// Word with bit order reversed (bit `i` moves to `BITS - 1 - i`)
    fn reversed(self) -> Self;

    /// Widen to `u64`
    fn to_u64(self) -> u64;

    /// Draw a uniformly random word
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_binary_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl BinaryWord for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONES: Self = <$t>::MAX;

                #[inline]
                fn test_bit(self, index: u32) -> bool {
                    (self >> index) & 1 == 1
                }

                #[inline]
                fn set_bit(self, index: u32) -> Self {
                    self | (1 << index)
                }

                #[inline]
                fn clear_bit(self, index: u32) -> Self {
                    self & !(1 << index)
                }

                #[inline]
                fn shift_left(self, amount: u32) -> Self {
                    self.checked_shl(amount).unwrap_or(0)
                }

                #[inline]
                fn shift_right(self, amount: u32) -> Self {
                    self.checked_shr(amount).unwrap_or(0)
                }

                #[inline]
                fn popcount(self) -> u32 {
                    self.count_ones()
                }

                #[inline]
                fn reversed(self) -> Self {
                    self.reverse_bits()
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    u64::from(self)
                }

                fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    };
}

impl_binary_word!(u8, u16, u32, u64);

/// Set or clear bit `index` according to `flag`
#[inline]
pub fn set_bit_to<W: BinaryWord>(word: W, index: u32, flag: bool) -> W {
    if flag {
        word.set_bit(index)
    } else {
        word.clear_bit(index)
    }
}

/// Apply a batch of `(index, flag)` updates to a word.
///
/// Updates are applied in order, so a later update to the same index wins.
pub fn apply_bits<W, I>(word: W, updates: I) -> W
where
    W: BinaryWord,
    I: IntoIterator<Item = (usize, bool)>,
{
    updates
        .into_iter()
        .fold(word, |acc, (index, flag)| set_bit_to(acc, index as u32, flag))
}

/// Mask with ones exactly at positions `low..=high`.
///
/// Built as the intersection of a right-shifted all-ones word (clearing
/// everything above `high`) and a left-shifted all-ones word (clearing
/// everything below `low`). Requires `low <= high < W::BITS`.
#[inline]
pub fn window_mask<W: BinaryWord>(low: u32, high: u32) -> W {
    debug_assert!(low <= high && high < W::BITS);
    W::ONES.shift_right(W::BITS - 1 - high) & W::ONES.shift_left(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bit_to() {
        assert_eq!(set_bit_to(0u8, 3, true), 0b0000_1000);
        assert_eq!(set_bit_to(0xFFu8, 3, false), 0b1111_0111);
        assert_eq!(set_bit_to(0b1000u8, 3, true), 0b1000);
        assert_eq!(set_bit_to(0u64, 63, true), 1u64 << 63);
    }

    #[test]
    fn test_apply_bits_last_update_wins() {
        let word = apply_bits(0u16, vec![(0, true), (15, true), (0, false), (4, true)]);
        assert_eq!(word, 0b1000_0000_0001_0000);
    }

    #[test]
    fn test_apply_bits_empty() {
        assert_eq!(apply_bits(0xA5u8, Vec::new()), 0xA5);
    }

    #[test]
    fn test_window_mask_edges() {
        assert_eq!(window_mask::<u8>(0, 7), 0xFF);
        assert_eq!(window_mask::<u8>(0, 0), 0b0000_0001);
        assert_eq!(window_mask::<u8>(7, 7), 0b1000_0000);
        assert_eq!(window_mask::<u8>(2, 4), 0b0001_1100);
        assert_eq!(window_mask::<u64>(0, 63), u64::MAX);
        assert_eq!(window_mask::<u32>(31, 31), 1u32 << 31);
    }

    #[test]
    fn test_shifts_saturate_to_zero() {
        assert_eq!(0xFFu8.shift_left(8), 0);
        assert_eq!(0xFFu8.shift_right(9), 0);
        assert_eq!(0xFFu8.shift_left(0), 0xFF);
        assert_eq!(0b0110u8.shift_right(1), 0b0011);
    }

    #[test]
    fn test_word_queries() {
        assert!(0b0100u8.test_bit(2));
        assert!(!0b0100u8.test_bit(1));
        assert_eq!(0b1011u16.popcount(), 3);
        assert_eq!(0b0000_0001u8.reversed(), 0b1000_0000);
        assert_eq!(<u32 as BinaryWord>::BITS, 32);
        assert_eq!(0xABu8.to_u64(), 0xAB);
    }
}
