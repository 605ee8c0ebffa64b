//! Fitness traits
//!
//! Fitness functions are external to the genome core: they map a genome
//! to a [`Score`], with higher treated as better by the selection helpers.

use std::marker::PhantomData;

pub use crate::genome::traits::Score;

/// Fitness evaluation trait
///
/// Defines how to evaluate the fitness of a genome.
pub trait Fitness {
    /// The genome type being evaluated
    type Genome;

    /// Evaluate fitness (higher = better by convention)
    fn evaluate(&self, genome: &Self::Genome) -> Score;
}

/// Adapter turning a closure into a [`Fitness`]
pub struct FitnessFn<G, F> {
    function: F,
    _genome: PhantomData<fn(&G)>,
}

impl<G, F> FitnessFn<G, F>
where
    F: Fn(&G) -> Score,
{
    /// Wrap `function` as a fitness evaluator
    pub fn new(function: F) -> Self {
        Self {
            function,
            _genome: PhantomData,
        }
    }
}

impl<G, F> Fitness for FitnessFn<G, F>
where
    F: Fn(&G) -> Score,
{
    type Genome = G;

    fn evaluate(&self, genome: &G) -> Score {
        (self.function)(genome)
    }
}
