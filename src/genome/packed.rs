//! Bit-packed genome
//!
//! This module provides `PackedGenome<W>`, a fixed-length boolean genome
//! stored in a single binary word. Gene `i` is bit `i` of the word, so
//! every capability operation reduces to a constant number of mask and
//! shift operations regardless of range length.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, RangeInclusive};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::defaults::{check_index, clamp_offset, range_bounds};
use crate::genome::traits::{BinaryGenome, FreeGenome, Genome, PermutationGenome, Score};
use crate::genome::word::{apply_bits, set_bit_to, window_mask, BinaryWord};

/// Fixed-width boolean genome backed by one binary word
///
/// The genome always has exactly `W::BITS` genes. Values are `Copy`, so
/// every operation returns an independent genome.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct PackedGenome<W: BinaryWord> {
    word: W,
}

/// 8-gene packed genome
pub type Genome8 = PackedGenome<u8>;
/// 16-gene packed genome
pub type Genome16 = PackedGenome<u16>;
/// 32-gene packed genome
pub type Genome32 = PackedGenome<u32>;
/// 64-gene packed genome
pub type Genome64 = PackedGenome<u64>;

impl<W: BinaryWord> PackedGenome<W> {
    /// Number of genes in every genome of this type
    pub const WIDTH: usize = W::BITS as usize;

    /// Wrap a raw word (bit `i` is gene `i`)
    pub fn from_word(word: W) -> Self {
        Self { word }
    }

    /// The underlying word
    pub fn word(&self) -> W {
        self.word
    }

    /// All genes `false`
    pub fn zeros() -> Self {
        Self { word: W::ZERO }
    }

    /// All genes `true`
    pub fn ones() -> Self {
        Self { word: W::ONES }
    }

    /// Uniformly random genome
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            word: W::random(rng),
        }
    }

    /// Build from exactly `WIDTH` genes, rejecting any other length
    pub fn try_from_list<I>(genes: I) -> Result<Self, GenomeError>
    where
        I: IntoIterator<Item = bool>,
    {
        let genes: Vec<bool> = genes.into_iter().collect();
        if genes.len() != Self::WIDTH {
            return Err(GenomeError::DimensionMismatch {
                expected: Self::WIDTH,
                actual: genes.len(),
            });
        }
        Ok(Self::from_list(genes))
    }

    /// Validate a gene range against this width without panicking
    pub fn checked_range(
        range: RangeInclusive<usize>,
    ) -> Result<RangeInclusive<usize>, GenomeError> {
        let (start, end) = (*range.start(), *range.end());
        if start <= end && end >= Self::WIDTH {
            return Err(GenomeError::InvalidRange {
                start,
                end,
                length: Self::WIDTH,
            });
        }
        Ok(range)
    }

    /// Gene at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < Self::WIDTH).then(|| self.word.test_bit(index as u32))
    }

    /// Number of `true` genes
    pub fn count_ones(&self) -> usize {
        self.word.popcount() as usize
    }

    /// Number of `false` genes
    pub fn count_zeros(&self) -> usize {
        Self::WIDTH - self.count_ones()
    }

    /// Number of positions where the genomes differ
    pub fn hamming_distance(&self, other: &Self) -> usize {
        (self.word ^ other.word).popcount() as usize
    }

    /// Every gene flipped
    pub fn complement(&self) -> Self {
        Self { word: !self.word }
    }

    fn bounds(range: &RangeInclusive<usize>) -> Option<(u32, u32)> {
        range_bounds(range, Self::WIDTH).map(|(start, end)| (start as u32, end as u32))
    }
}

impl<W: BinaryWord> Genome for PackedGenome<W> {
    type Gene = bool;

    fn length(&self) -> usize {
        Self::WIDTH
    }

    /// Genes past `WIDTH` are ignored; missing trailing genes are `false`.
    fn from_list<I>(genes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            word: apply_bits(W::ZERO, genes.into_iter().take(Self::WIDTH).enumerate()),
        }
    }

    fn gene(&self, index: usize) -> bool {
        check_index(index, Self::WIDTH);
        self.word.test_bit(index as u32)
    }

    fn to_list(&self) -> Vec<bool> {
        (0..W::BITS).map(|i| self.word.test_bit(i)).collect()
    }

    /// Hamming similarity: `WIDTH - hamming_distance`
    fn similarity(&self, other: &Self) -> Score {
        (Self::WIDTH - self.hamming_distance(other)) as Score
    }
}

impl<W: BinaryWord> PermutationGenome for PackedGenome<W> {
    fn swap(&self, i: usize, j: usize) -> Self {
        check_index(i, Self::WIDTH);
        check_index(j, Self::WIDTH);
        let (i, j) = (i as u32, j as u32);
        if self.word.test_bit(i) == self.word.test_bit(j) {
            return *self;
        }
        let pair = W::ZERO.set_bit(i).set_bit(j);
        Self {
            word: self.word ^ pair,
        }
    }

    fn inverse_range(&self, range: RangeInclusive<usize>) -> Self {
        let Some((start, end)) = Self::bounds(&range) else {
            return *self;
        };
        // Full reversal sends bit p to BITS-1-p; realign so it lands on start+end-p.
        let reversed = self.word.reversed();
        let top = W::BITS - 1;
        let aligned = if start + end >= top {
            reversed.shift_left(start + end - top)
        } else {
            reversed.shift_right(top - (start + end))
        };
        let mask = window_mask::<W>(start, end);
        Self {
            word: (self.word & !mask) | (aligned & mask),
        }
    }

    fn inverse(&self) -> Self {
        Self {
            word: self.word.reversed(),
        }
    }

    fn offset_range(&self, range: RangeInclusive<usize>, offset: isize) -> Self {
        let Some((start, end)) = Self::bounds(&range) else {
            return *self;
        };
        let offset = clamp_offset(start as usize, end as usize, Self::WIDTH, offset);
        if offset == 0 {
            return *self;
        }

        let block = end - start + 1;
        let distance = offset.unsigned_abs() as u32;
        let (transfer, replaced, transferred, moved) = if offset > 0 {
            // Genes above the block slide down into start..start+distance.
            (
                window_mask::<W>(start, start + distance - 1),
                window_mask::<W>(start + distance, end + distance),
                self.word.shift_right(block),
                self.word.shift_left(distance),
            )
        } else {
            // Genes below the block slide up into end-distance+1..=end.
            (
                window_mask::<W>(end + 1 - distance, end),
                window_mask::<W>(start - distance, end - distance),
                self.word.shift_left(block),
                self.word.shift_right(distance),
            )
        };
        let remainder = !(transfer | replaced);
        Self {
            word: (transferred & transfer) | (moved & replaced) | (self.word & remainder),
        }
    }
}

impl<W: BinaryWord> FreeGenome for PackedGenome<W> {
    fn with_gene(&self, index: usize, gene: bool) -> Self {
        check_index(index, Self::WIDTH);
        Self {
            word: set_bit_to(self.word, index as u32, gene),
        }
    }

    fn swap_between(&self, index: usize, other: &Self, other_index: usize) -> (Self, Self) {
        let mine = self.gene(index);
        let theirs = other.gene(other_index);
        (
            Self {
                word: set_bit_to(self.word, index as u32, theirs),
            },
            Self {
                word: set_bit_to(other.word, other_index as u32, mine),
            },
        )
    }

    fn swap_range_between(&self, other: &Self, range: RangeInclusive<usize>) -> (Self, Self) {
        let Some((start, end)) = Self::bounds(&range) else {
            return (*self, *other);
        };
        let mask = window_mask::<W>(start, end);
        (
            Self {
                word: (self.word & !mask) | (other.word & mask),
            },
            Self {
                word: (other.word & !mask) | (self.word & mask),
            },
        )
    }
}

impl<W: BinaryWord> BinaryGenome for PackedGenome<W> {
    fn shift(&self, amount: isize) -> Self {
        let distance = u32::try_from(amount.unsigned_abs()).unwrap_or(u32::MAX);
        let word = if amount >= 0 {
            self.word.shift_left(distance)
        } else {
            self.word.shift_right(distance)
        };
        Self { word }
    }

    fn and(&self, other: &Self) -> Self {
        *self & *other
    }

    fn or(&self, other: &Self) -> Self {
        *self | *other
    }

    fn xor(&self, other: &Self) -> Self {
        *self ^ *other
    }
}

impl<W: BinaryWord> BitAnd for PackedGenome<W> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            word: self.word & rhs.word,
        }
    }
}

impl<W: BinaryWord> BitOr for PackedGenome<W> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            word: self.word | rhs.word,
        }
    }
}

impl<W: BinaryWord> BitXor for PackedGenome<W> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            word: self.word ^ rhs.word,
        }
    }
}

impl<W: BinaryWord> Not for PackedGenome<W> {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl<W: BinaryWord> From<W> for PackedGenome<W> {
    fn from(word: W) -> Self {
        Self { word }
    }
}

/// Genes in index order, `'1'` for `true`
impl<W: BinaryWord> fmt::Display for PackedGenome<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..W::BITS {
            write!(f, "{}", if self.word.test_bit(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<W: BinaryWord> fmt::Debug for PackedGenome<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedGenome<{}>({})", W::BITS, self)
    }
}

/// Parse genes in index order; `_` separators are skipped.
impl<W: BinaryWord> FromStr for PackedGenome<W> {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genes = s
            .chars()
            .filter(|&c| c != '_')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GenomeError::Parse(format!("unexpected gene character {other:?}"))),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Self::try_from_list(genes)
    }
}
