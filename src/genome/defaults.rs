//! Default bodies for the genome capability traits
//!
//! Each function is written only against the capability one layer below
//! the trait method it backs. Realizations that can do better (the
//! bit-packed genome, for one) override the trait method; these stay
//! available as reference behaviour.

use std::ops::RangeInclusive;

use crate::genome::traits::{FreeGenome, Genome, PermutationGenome, Score};

/// Panic unless `index` is a valid gene position
#[inline]
pub(crate) fn check_index(index: usize, length: usize) {
    assert!(
        index < length,
        "Index {index} out of range for genome of length {length}"
    );
}

/// Validate an inclusive range against `length`.
///
/// Returns `None` for an empty range and panics if a non-empty range
/// reaches past the last gene.
#[inline]
pub(crate) fn range_bounds(
    range: &RangeInclusive<usize>,
    length: usize,
) -> Option<(usize, usize)> {
    let (start, end) = (*range.start(), *range.end());
    if start > end {
        return None;
    }
    assert!(
        end < length,
        "Range {start}..={end} out of range for genome of length {length}"
    );
    Some((start, end))
}

#[inline]
pub(crate) fn check_same_length(expected: usize, actual: usize) {
    assert_eq!(
        expected, actual,
        "Dimension mismatch: expected {expected}, got {actual}"
    );
}

/// Clamp `offset` so the block `start..=end` stays within `length` genes
pub fn clamp_offset(start: usize, end: usize, length: usize, offset: isize) -> isize {
    let lowest = -(start as isize);
    let highest = (length - 1 - end) as isize;
    offset.clamp(lowest, highest)
}

/// `[gene(0), gene(1), ..., gene(n - 1)]`
pub fn to_list<G: Genome>(genome: &G) -> Vec<G::Gene> {
    (0..genome.length()).map(|i| genome.gene(i)).collect()
}

/// Count of positions where both genomes hold equal genes
pub fn similarity<G: Genome>(a: &G, b: &G) -> Score {
    let length = a.length().min(b.length());
    (0..length).filter(|&i| a.gene(i) == b.gene(i)).count() as Score
}

/// Reverse `range` by swapping mirrored pairs, walking inward from both
/// ends of the range.
pub fn inverse_range<G: PermutationGenome>(genome: &G, range: RangeInclusive<usize>) -> G {
    let Some((start, end)) = range_bounds(&range, genome.length()) else {
        return genome.clone();
    };
    (0..(end - start + 1) / 2).fold(genome.clone(), |acc, step| {
        acc.swap(start + step, end - step)
    })
}

/// Reverse the whole genome
pub fn inverse<G: PermutationGenome>(genome: &G) -> G {
    match genome.length() {
        0 => genome.clone(),
        length => genome.inverse_range(0..=length - 1),
    }
}

/// Move the block `range` by a clamped `offset`, rotating the genes it
/// passes over into the positions it leaves.
pub fn offset_range<G: PermutationGenome>(
    genome: &G,
    range: RangeInclusive<usize>,
    offset: isize,
) -> G {
    let length = genome.length();
    let Some((start, end)) = range_bounds(&range, length) else {
        return genome.clone();
    };
    let offset = clamp_offset(start, end, length, offset);
    if offset == 0 {
        return genome.clone();
    }

    let mut genes = genome.to_list();
    let block = end - start + 1;
    let distance = offset.unsigned_abs();
    if offset > 0 {
        genes[start..=end + distance].rotate_left(block);
    } else {
        genes[start - distance..=end].rotate_left(distance);
    }
    G::from_list(genes)
}

/// Exchange one gene between two genomes via `with_gene`
pub fn swap_between<G: FreeGenome>(a: &G, index: usize, b: &G, other_index: usize) -> (G, G) {
    let gene_a = a.gene(index);
    let gene_b = b.gene(other_index);
    (a.with_gene(index, gene_b), b.with_gene(other_index, gene_a))
}

/// Exchange the block `range` between two genomes, one index at a time
pub fn swap_range_between<G: FreeGenome>(a: &G, b: &G, range: RangeInclusive<usize>) -> (G, G) {
    check_same_length(a.length(), b.length());
    let Some((start, end)) = range_bounds(&range, a.length()) else {
        return (a.clone(), b.clone());
    };
    (start..=end).fold((a.clone(), b.clone()), |(left, right), i| {
        (left.with_gene(i, b.gene(i)), right.with_gene(i, a.gene(i)))
    })
}

/// Shift boolean genes by `amount`, filling vacated positions with `false`
pub fn shift<G: FreeGenome<Gene = bool>>(genome: &G, amount: isize) -> G {
    let length = genome.length() as isize;
    let amount = amount.clamp(-length, length);
    G::from_list((0..length).map(|position| {
        let source = position - amount;
        (0..length).contains(&source) && genome.gene(source as usize)
    }))
}

/// Combine two equal-length genomes gene by gene
pub fn zip_genes<G, F>(a: &G, b: &G, combine: F) -> G
where
    G: Genome,
    F: Fn(G::Gene, G::Gene) -> G::Gene,
{
    check_same_length(a.length(), b.length());
    G::from_list((0..a.length()).map(|i| combine(a.gene(i), b.gene(i))))
}

/// Append `b`'s genes after `a`'s
pub fn concat<G: Genome>(a: &G, b: &G) -> G {
    G::from_list(a.to_list().into_iter().chain(b.to_list()))
}

/// Replace the block `range` with `times` copies of itself
pub fn repeat<G: Genome>(genome: &G, range: RangeInclusive<usize>, times: usize) -> G {
    let Some((start, end)) = range_bounds(&range, genome.length()) else {
        return genome.clone();
    };
    let genes = genome.to_list();
    let block = &genes[start..=end];
    let mut expanded = Vec::with_capacity(genes.len() + block.len() * times.saturating_sub(1));
    expanded.extend_from_slice(&genes[..start]);
    for _ in 0..times {
        expanded.extend_from_slice(block);
    }
    expanded.extend_from_slice(&genes[end + 1..]);
    G::from_list(expanded)
}
