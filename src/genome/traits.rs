//! Genome capability traits
//!
//! Genomes are layered by what they allow:
//!
//! - [`Genome`]: indexable, fixed-length sequence of genes
//! - [`PermutationGenome`]: reorders genes without changing the multiset
//! - [`FreeGenome`]: overwrites genes freely
//! - [`BinaryGenome`]: whole-genome boolean combination
//! - [`ExpandableGenome`]: changes length (no fixed-width realization)
//!
//! Every operation takes `&self` and returns a new genome value. Default
//! bodies live in [`crate::genome::defaults`] as free functions generic
//! over the layer below, so realizations can override them one by one.
//!
//! Indices are preconditions: passing an index outside `[0, length)`
//! panics. An inclusive range with `start > end` is empty and leaves the
//! genome unchanged.

use std::ops::RangeInclusive;

use crate::genome::defaults;

/// Fitness and similarity scores
pub type Score = f64;

/// Base genome capability
pub trait Genome: Clone + Sized {
    /// The gene type
    type Gene: Clone + PartialEq;

    /// Number of genes
    fn length(&self) -> usize;

    /// Build a genome from an ordered sequence of genes.
    ///
    /// `from_list(xs).gene(i) == xs[i]` for every valid `i`. Fixed-width
    /// realizations decide what happens when the sequence length differs
    /// from their width.
    fn from_list<I>(genes: I) -> Self
    where
        I: IntoIterator<Item = Self::Gene>;

    /// Gene at `index`
    fn gene(&self, index: usize) -> Self::Gene;

    /// All genes in index order
    fn to_list(&self) -> Vec<Self::Gene> {
        defaults::to_list(self)
    }

    /// Symmetric pairwise similarity, used as a fallback fitness or
    /// diversity signal.
    ///
    /// Defaults to the number of positions holding equal genes.
    fn similarity(&self, other: &Self) -> Score {
        defaults::similarity(self, other)
    }
}

/// Genomes whose gene order encodes the solution
pub trait PermutationGenome: Genome {
    /// Exchange the genes at `i` and `j`
    fn swap(&self, i: usize, j: usize) -> Self;

    /// Reverse gene order within `range`
    fn inverse_range(&self, range: RangeInclusive<usize>) -> Self {
        defaults::inverse_range(self, range)
    }

    /// Reverse the whole genome
    fn inverse(&self) -> Self {
        defaults::inverse(self)
    }

    /// Move the block `range` by `offset` positions.
    ///
    /// The offset is clamped so the block stays inside the genome. Genes
    /// displaced by the block slide into the positions it vacated; genes
    /// outside the union of the old and new positions are untouched.
    fn offset_range(&self, range: RangeInclusive<usize>, offset: isize) -> Self {
        defaults::offset_range(self, range, offset)
    }

    /// Move a single gene by `offset` positions
    fn offset(&self, index: usize, offset: isize) -> Self {
        self.offset_range(index..=index, offset)
    }
}

/// Genomes whose genes may be overwritten freely
pub trait FreeGenome: PermutationGenome {
    /// Genome with `gene` written at `index`
    fn with_gene(&self, index: usize, gene: Self::Gene) -> Self;

    /// Exchange gene `index` of `self` with gene `other_index` of `other`
    fn swap_between(&self, index: usize, other: &Self, other_index: usize) -> (Self, Self) {
        defaults::swap_between(self, index, other, other_index)
    }

    /// Exchange the block `range` between two genomes of equal length
    fn swap_range_between(&self, other: &Self, range: RangeInclusive<usize>) -> (Self, Self) {
        defaults::swap_range_between(self, other, range)
    }
}

/// Boolean genomes supporting whole-genome bitwise combination
pub trait BinaryGenome: FreeGenome<Gene = bool> {
    /// Shift every gene by `amount` positions.
    ///
    /// Positive amounts move genes towards higher indices. Vacated
    /// positions become `false`.
    fn shift(&self, amount: isize) -> Self {
        defaults::shift(self, amount)
    }

    /// Gene-wise AND
    fn and(&self, other: &Self) -> Self {
        defaults::zip_genes(self, other, |a, b| a & b)
    }

    /// Gene-wise OR
    fn or(&self, other: &Self) -> Self {
        defaults::zip_genes(self, other, |a, b| a | b)
    }

    /// Gene-wise XOR
    fn xor(&self, other: &Self) -> Self {
        defaults::zip_genes(self, other, |a, b| a ^ b)
    }
}

/// Genomes that can change length.
///
/// A fixed-width word cannot satisfy this capability, so the packed
/// genomes do not implement it.
pub trait ExpandableGenome: FreeGenome {
    /// `other`'s genes appended after `self`'s
    fn concat(&self, other: &Self) -> Self {
        defaults::concat(self, other)
    }

    /// Replace the block `range` with `times` consecutive copies of itself
    fn repeat(&self, range: RangeInclusive<usize>, times: usize) -> Self {
        defaults::repeat(self, range, times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Growable list genome relying on every default body
    #[derive(Clone, Debug, PartialEq)]
    struct ListGenome<T> {
        genes: Vec<T>,
    }

    impl<T: Clone + PartialEq> Genome for ListGenome<T> {
        type Gene = T;

        fn length(&self) -> usize {
            self.genes.len()
        }

        fn from_list<I>(genes: I) -> Self
        where
            I: IntoIterator<Item = T>,
        {
            Self {
                genes: genes.into_iter().collect(),
            }
        }

        fn gene(&self, index: usize) -> T {
            self.genes[index].clone()
        }
    }

    impl<T: Clone + PartialEq> PermutationGenome for ListGenome<T> {
        fn swap(&self, i: usize, j: usize) -> Self {
            let mut genes = self.genes.clone();
            genes.swap(i, j);
            Self { genes }
        }
    }

    impl<T: Clone + PartialEq> FreeGenome for ListGenome<T> {
        fn with_gene(&self, index: usize, gene: T) -> Self {
            let mut genes = self.genes.clone();
            genes[index] = gene;
            Self { genes }
        }
    }

    impl BinaryGenome for ListGenome<bool> {}

    impl<T: Clone + PartialEq> ExpandableGenome for ListGenome<T> {}

    fn tour(cities: &[u32]) -> ListGenome<u32> {
        ListGenome::from_list(cities.iter().copied())
    }

    fn bits(text: &str) -> ListGenome<bool> {
        ListGenome::from_list(text.chars().map(|c| c == '1'))
    }

    #[test]
    fn test_to_list_preserves_order() {
        let genome = tour(&[3, 1, 4, 1, 5]);
        assert_eq!(genome.to_list(), vec![3, 1, 4, 1, 5]);
        assert_eq!(genome.gene(2), 4);
    }

    #[test]
    fn test_similarity_counts_matching_positions() {
        let a = tour(&[0, 1, 2, 3]);
        let b = tour(&[0, 2, 1, 3]);
        assert_eq!(a.similarity(&b), 2.0);
        assert_eq!(b.similarity(&a), 2.0);
        assert_eq!(a.similarity(&a), 4.0);
    }

    #[test]
    fn test_inverse_range_not_anchored_at_zero() {
        let genome = tour(&[0, 1, 2, 3, 4, 5, 6]);
        let reversed = genome.inverse_range(2..=5);
        assert_eq!(reversed.to_list(), vec![0, 1, 5, 4, 3, 2, 6]);
    }

    #[test]
    fn test_inverse_range_odd_length() {
        let genome = tour(&[0, 1, 2, 3, 4]);
        assert_eq!(genome.inverse_range(1..=3).to_list(), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverse_range_empty_is_identity() {
        let genome = tour(&[0, 1, 2]);
        assert_eq!(genome.inverse_range(2..=1), genome);
    }

    #[test]
    fn test_inverse() {
        let genome = tour(&[0, 1, 2, 3]);
        assert_eq!(genome.inverse().to_list(), vec![3, 2, 1, 0]);
        let empty: ListGenome<u32> = ListGenome::from_list(Vec::new());
        assert_eq!(empty.inverse(), empty);
    }

    #[test]
    fn test_offset_range_forward() {
        let genome = tour(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let moved = genome.offset_range(2..=4, 2);
        assert_eq!(moved.to_list(), vec![0, 1, 5, 6, 2, 3, 4, 7]);
    }

    #[test]
    fn test_offset_range_backward() {
        let genome = tour(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let moved = genome.offset_range(4..=5, -3);
        assert_eq!(moved.to_list(), vec![0, 4, 5, 1, 2, 3, 6, 7]);
    }

    #[test]
    fn test_offset_range_clamps() {
        let genome = tour(&[0, 1, 2, 3, 4]);
        assert_eq!(genome.offset_range(3..=4, 5), genome);
        assert_eq!(
            genome.offset_range(1..=2, -10).to_list(),
            vec![1, 2, 0, 3, 4]
        );
    }

    #[test]
    fn test_offset_single_gene() {
        let genome = tour(&[0, 1, 2, 3]);
        assert_eq!(genome.offset(0, 2).to_list(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_swap_between() {
        let a = tour(&[0, 1, 2]);
        let b = tour(&[7, 8, 9]);
        let (a2, b2) = a.swap_between(0, &b, 2);
        assert_eq!(a2.to_list(), vec![9, 1, 2]);
        assert_eq!(b2.to_list(), vec![7, 8, 0]);
    }

    #[test]
    fn test_swap_range_between() {
        let a = tour(&[0, 1, 2, 3]);
        let b = tour(&[10, 11, 12, 13]);
        let (a2, b2) = a.swap_range_between(&b, 1..=2);
        assert_eq!(a2.to_list(), vec![0, 11, 12, 3]);
        assert_eq!(b2.to_list(), vec![10, 1, 2, 13]);
    }

    #[test]
    fn test_binary_defaults() {
        let a = bits("1100");
        let b = bits("1010");
        assert_eq!(a.and(&b), bits("1000"));
        assert_eq!(a.or(&b), bits("1110"));
        assert_eq!(a.xor(&b), bits("0110"));
        assert_eq!(a.shift(1), bits("0110"));
        assert_eq!(a.shift(-1), bits("1000"));
        assert_eq!(a.shift(4), bits("0000"));
        assert_eq!(a.shift(isize::MIN), bits("0000"));
        assert_eq!(a.shift(isize::MAX), bits("0000"));
    }

    #[test]
    fn test_concat() {
        let a = tour(&[0, 1]);
        let b = tour(&[2, 3, 4]);
        assert_eq!(a.concat(&b).to_list(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_repeat_grows_genome() {
        let genome = tour(&[0, 1, 2, 3]);
        assert_eq!(
            genome.repeat(1..=2, 3).to_list(),
            vec![0, 1, 2, 1, 2, 1, 2, 3]
        );
        assert_eq!(genome.repeat(1..=2, 1), genome);
        assert_eq!(genome.repeat(1..=2, 0).to_list(), vec![0, 3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_swap_range_between_rejects_bad_range() {
        let a = tour(&[0, 1]);
        let b = tour(&[2, 3]);
        let _ = a.swap_range_between(&b, 0..=2);
    }
}
