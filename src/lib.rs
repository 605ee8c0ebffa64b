//! # genekit
//!
//! Genome building blocks for genetic algorithms.
//!
//! Genomes are immutable values exposed through layered capability
//! traits, with a bit-packed realization over fixed-width words where
//! every operation is a handful of mask and shift instructions.
//!
//! ## Core Concepts
//!
//! - **Capabilities**: [`Genome`](genome::traits::Genome) →
//!   [`PermutationGenome`](genome::traits::PermutationGenome) →
//!   [`FreeGenome`](genome::traits::FreeGenome) →
//!   [`BinaryGenome`](genome::traits::BinaryGenome), plus the
//!   length-changing [`ExpandableGenome`](genome::traits::ExpandableGenome)
//! - **Packed genomes**: [`PackedGenome`](genome::packed::PackedGenome)
//!   over `u8`, `u16`, `u32` or `u64`
//! - **Rate gating**: [`prob_event`](operators::probability::prob_event)
//!   and [`GeneticSettings`](population::settings::GeneticSettings)
//! - **Snapshots**: [`ScoredGenomes`](population::scored::ScoredGenomes)
//!   keeps scores, their total and the generation index together
//!
//! The search loop itself (selection, replacement, termination) belongs
//! to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use genekit::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let settings = GeneticSettings::new(()).with_mutation_rate(0.2)?;
//!
//! let target: Genome16 = "1111_0000_1111_0000".parse()?;
//! let fitness = TargetSimilarity::new(target);
//!
//! let genomes: Vec<Genome16> = (0..8).map(|_| Genome16::random(&mut rng)).collect();
//! let scored = ScoredGenomes::evaluate(genomes, &fitness, 0);
//!
//! let first = scored.roulette(&mut rng)?;
//! let second = scored.roulette(&mut rng)?;
//! let (child1, child2) = settings.maybe_crossover(
//!     &scored.get(first).unwrap().0,
//!     &scored.get(second).unwrap().0,
//!     &TwoPointCrossover::new(),
//!     &mut rng,
//! );
//!
//! let children = [child1, child2]
//!     .iter()
//!     .map(|child| settings.maybe_mutate(child, &BitFlipMutation::new(), &mut rng))
//!     .map(|child| (child, fitness.evaluate(&child)))
//!     .collect::<Vec<_>>();
//! let next = scored.next_generation(children, scored.generation() + 1)?;
//! assert_eq!(next.generation(), 1);
//! assert_eq!(next.len(), 2);
//! # Ok::<(), EvolutionError>(())
//! ```

pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
