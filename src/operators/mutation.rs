//! Mutation operators
//!
//! Order-preserving mutations work on any [`PermutationGenome`]; gene
//! overwriting mutations need a [`FreeGenome`].

use rand::Rng;

use crate::genome::traits::{FreeGenome, PermutationGenome};
use crate::operators::probability::prob_value;
use crate::operators::traits::{random_range, MutationOperator};

/// Swap mutation
///
/// Swaps two random positions in the genome.
#[derive(Clone, Debug)]
pub struct SwapMutation {
    /// Number of swaps to perform
    pub num_swaps: usize,
}

impl SwapMutation {
    /// Create a new swap mutation with a single swap
    pub fn new() -> Self {
        Self { num_swaps: 1 }
    }

    /// Create with multiple swaps
    pub fn with_swaps(num_swaps: usize) -> Self {
        Self { num_swaps }
    }
}

impl Default for SwapMutation {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: PermutationGenome + Send + Sync> MutationOperator<G> for SwapMutation {
    fn mutate<R: Rng + ?Sized>(&self, genome: &G, rng: &mut R) -> G {
        let n = genome.length();
        if n < 2 {
            return genome.clone();
        }
        (0..self.num_swaps).fold(genome.clone(), |acc, _| {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            acc.swap(i, j)
        })
    }
}

/// Inversion mutation (2-opt)
///
/// Reverses a random segment of the genome.
#[derive(Clone, Debug, Default)]
pub struct InversionMutation;

impl InversionMutation {
    /// Create a new inversion mutation
    pub fn new() -> Self {
        Self
    }
}

impl<G: PermutationGenome + Send + Sync> MutationOperator<G> for InversionMutation {
    fn mutate<R: Rng + ?Sized>(&self, genome: &G, rng: &mut R) -> G {
        let n = genome.length();
        if n < 2 {
            return genome.clone();
        }
        genome.inverse_range(random_range(n, rng))
    }
}

/// Displacement mutation
///
/// Selects a random segment and moves it by a random offset. Offsets
/// that would push the segment out of the genome are clamped.
#[derive(Clone, Debug, Default)]
pub struct DisplacementMutation {
    /// Largest offset magnitude (default: genome length)
    pub max_offset: Option<usize>,
}

impl DisplacementMutation {
    /// Create a new displacement mutation
    pub fn new() -> Self {
        Self { max_offset: None }
    }

    /// Limit how far a segment may travel
    pub fn with_max_offset(mut self, max_offset: usize) -> Self {
        self.max_offset = Some(max_offset);
        self
    }
}

impl<G: PermutationGenome + Send + Sync> MutationOperator<G> for DisplacementMutation {
    fn mutate<R: Rng + ?Sized>(&self, genome: &G, rng: &mut R) -> G {
        let n = genome.length();
        if n < 2 {
            return genome.clone();
        }
        let reach = self.max_offset.unwrap_or(n).min(n) as isize;
        let offset = rng.gen_range(-reach..=reach);
        genome.offset_range(random_range(n, rng), offset)
    }
}

/// Bit-flip mutation
///
/// Flips each gene with a given probability.
#[derive(Clone, Debug)]
pub struct BitFlipMutation {
    /// Per-gene mutation probability (default: 1/n)
    pub mutation_probability: Option<f64>,
}

impl BitFlipMutation {
    /// Create a new bit-flip mutation
    pub fn new() -> Self {
        Self {
            mutation_probability: None,
        }
    }

    /// Set a fixed mutation probability per gene
    pub fn with_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        self.mutation_probability = Some(probability);
        self
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: FreeGenome<Gene = bool> + Send + Sync> MutationOperator<G> for BitFlipMutation {
    fn mutate<R: Rng + ?Sized>(&self, genome: &G, rng: &mut R) -> G {
        let n = genome.length();
        if n == 0 {
            return genome.clone();
        }
        let prob = self.mutation_probability.unwrap_or(1.0 / n as f64);
        (0..n).fold(genome.clone(), |acc, i| {
            let gene = acc.gene(i);
            acc.with_gene(i, prob_value(rng, prob, gene, !gene))
        })
    }
}
