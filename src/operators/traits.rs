//! Operator traits
//!
//! This module defines the variation operator traits. Operators never
//! modify their inputs; they return fresh genomes built from the genome
//! capability operations.

use std::ops::RangeInclusive;

use rand::Rng;

/// Crossover operator trait
///
/// Combines genetic material from two parents to create offspring.
pub trait CrossoverOperator<G>: Send + Sync {
    /// Produce two offspring from two parents
    fn crossover<R: Rng + ?Sized>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G);
}

/// Mutation operator trait
///
/// Produces a randomly perturbed copy of a genome.
pub trait MutationOperator<G>: Send + Sync {
    /// Return a mutated copy of `genome`
    fn mutate<R: Rng + ?Sized>(&self, genome: &G, rng: &mut R) -> G;
}

/// Uniformly random non-empty inclusive range within `0..length`.
///
/// Requires `length > 0`.
pub fn random_range<R: Rng + ?Sized>(length: usize, rng: &mut R) -> RangeInclusive<usize> {
    let a = rng.gen_range(0..length);
    let b = rng.gen_range(0..length);
    a.min(b)..=a.max(b)
}
