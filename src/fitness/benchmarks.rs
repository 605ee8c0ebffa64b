//! Benchmark fitness functions
//!
//! Standard boolean-genome benchmarks, usable with any genome whose
//! genes are `bool`, plus a similarity-to-target fitness.

use std::marker::PhantomData;

use crate::fitness::traits::{Fitness, Score};
use crate::genome::traits::Genome;

/// OneMax function
///
/// Counts the number of `true` genes. Optimum when all genes are `true`.
#[derive(Clone, Debug)]
pub struct OneMax<G> {
    _genome: PhantomData<fn(&G)>,
}

impl<G> OneMax<G> {
    /// Create a new OneMax function
    pub fn new() -> Self {
        Self {
            _genome: PhantomData,
        }
    }
}

impl<G> Default for OneMax<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Genome<Gene = bool>> Fitness for OneMax<G> {
    type Genome = G;

    fn evaluate(&self, genome: &G) -> Score {
        genome.to_list().into_iter().filter(|&gene| gene).count() as Score
    }
}

/// LeadingOnes function
///
/// Counts the `true` genes before the first `false`.
#[derive(Clone, Debug)]
pub struct LeadingOnes<G> {
    _genome: PhantomData<fn(&G)>,
}

impl<G> LeadingOnes<G> {
    /// Create a new LeadingOnes function
    pub fn new() -> Self {
        Self {
            _genome: PhantomData,
        }
    }
}

impl<G> Default for LeadingOnes<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Genome<Gene = bool>> Fitness for LeadingOnes<G> {
    type Genome = G;

    fn evaluate(&self, genome: &G) -> Score {
        genome.to_list().into_iter().take_while(|&gene| gene).count() as Score
    }
}

/// Similarity to a fixed target genome
///
/// Scores with [`Genome::similarity`], so the target itself scores the
/// maximum.
#[derive(Clone, Debug)]
pub struct TargetSimilarity<G> {
    target: G,
}

impl<G: Genome> TargetSimilarity<G> {
    /// Create a fitness that rewards closeness to `target`
    pub fn new(target: G) -> Self {
        Self { target }
    }

    /// The target genome
    pub fn target(&self) -> &G {
        &self.target
    }
}

impl<G: Genome> Fitness for TargetSimilarity<G> {
    type Genome = G;

    fn evaluate(&self, genome: &G) -> Score {
        self.target.similarity(genome)
    }
}
