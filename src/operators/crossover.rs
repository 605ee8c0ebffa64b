//! Crossover operators
//!
//! Every crossover here exchanges genes between two equal-length
//! parents through [`FreeGenome`] operations, so the bit-packed genomes
//! get their constant-time masked exchanges.

use rand::Rng;

use crate::genome::traits::FreeGenome;
use crate::operators::probability::prob_value;
use crate::operators::traits::{random_range, CrossoverOperator};

/// Uniform crossover
///
/// Exchanges each gene position independently with a given probability.
#[derive(Clone, Debug)]
pub struct UniformCrossover {
    /// Probability of exchanging each gene
    pub swap_probability: f64,
}

impl UniformCrossover {
    /// Create a new uniform crossover with 50% exchange probability
    pub fn new() -> Self {
        Self {
            swap_probability: 0.5,
        }
    }

    /// Create with a custom exchange probability
    pub fn with_probability(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self {
            swap_probability: probability,
        }
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: FreeGenome + Send + Sync> CrossoverOperator<G> for UniformCrossover {
    fn crossover<R: Rng + ?Sized>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G) {
        let n = parent1.length().min(parent2.length());
        (0..n).fold((parent1.clone(), parent2.clone()), |(child1, child2), i| {
            if prob_value(rng, self.swap_probability, false, true) {
                child1.swap_between(i, &child2, i)
            } else {
                (child1, child2)
            }
        })
    }
}

/// One-point crossover
///
/// Exchanges every gene from a random cut point to the end.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: FreeGenome + Send + Sync> CrossoverOperator<G> for OnePointCrossover {
    fn crossover<R: Rng + ?Sized>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G) {
        let n = parent1.length();
        if n < 2 {
            return (parent1.clone(), parent2.clone());
        }
        let cut = rng.gen_range(1..n);
        parent1.swap_range_between(parent2, cut..=n - 1)
    }
}

/// Two-point crossover
///
/// Exchanges the segment between two random cut points.
#[derive(Clone, Debug, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Create a new two-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: FreeGenome + Send + Sync> CrossoverOperator<G> for TwoPointCrossover {
    fn crossover<R: Rng + ?Sized>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G) {
        let n = parent1.length();
        if n == 0 {
            return (parent1.clone(), parent2.clone());
        }
        parent1.swap_range_between(parent2, random_range(n, rng))
    }
}

/// Point-swap crossover
///
/// Exchanges a single gene taken from a random position of each parent.
#[derive(Clone, Debug, Default)]
pub struct PointSwapCrossover;

impl PointSwapCrossover {
    /// Create a new point-swap crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: FreeGenome + Send + Sync> CrossoverOperator<G> for PointSwapCrossover {
    fn crossover<R: Rng + ?Sized>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G) {
        if parent1.length() == 0 || parent2.length() == 0 {
            return (parent1.clone(), parent2.clone());
        }
        let i = rng.gen_range(0..parent1.length());
        let j = rng.gen_range(0..parent2.length());
        parent1.swap_between(i, parent2, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::packed::{Genome16, Genome8};
    use crate::genome::traits::BinaryGenome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Each position keeps the same pair of genes across the two children
    fn is_positional_exchange(p1: Genome16, p2: Genome16, c1: Genome16, c2: Genome16) -> bool {
        (c1.and(&c2) == p1.and(&p2)) && (c1.or(&c2) == p1.or(&p2))
    }

    #[test]
    fn test_uniform_crossover_conserves_columns() {
        let mut rng = StdRng::seed_from_u64(21);
        let p1 = Genome16::ones();
        let p2 = Genome16::zeros();
        for _ in 0..50 {
            let (c1, c2) = UniformCrossover::new().crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.count_ones() + c2.count_ones(), 16);
            assert!(is_positional_exchange(p1, p2, c1, c2));
        }
    }

    #[test]
    fn test_uniform_crossover_boundary_probabilities() {
        let mut rng = StdRng::seed_from_u64(22);
        let p1 = Genome8::from_word(0b1010_1010);
        let p2 = Genome8::from_word(0b0101_0101);
        let never = UniformCrossover::with_probability(0.0);
        let always = UniformCrossover::with_probability(1.0);
        assert_eq!(never.crossover(&p1, &p2, &mut rng), (p1, p2));
        assert_eq!(always.crossover(&p1, &p2, &mut rng), (p2, p1));
    }

    #[test]
    fn test_one_point_crossover_keeps_head() {
        let mut rng = StdRng::seed_from_u64(23);
        let p1 = Genome16::ones();
        let p2 = Genome16::zeros();
        for _ in 0..50 {
            let (c1, c2) = OnePointCrossover::new().crossover(&p1, &p2, &mut rng);
            assert!(c1.get(0).unwrap());
            assert!(!c2.get(0).unwrap());
            assert!(!c1.get(15).unwrap());
            assert_eq!(c1.complement(), c2);
        }
    }

    #[test]
    fn test_two_point_crossover_conserves_columns() {
        let mut rng = StdRng::seed_from_u64(24);
        let p1 = Genome16::from_word(0xF00F);
        let p2 = Genome16::from_word(0x0FF0);
        for _ in 0..50 {
            let (c1, c2) = TwoPointCrossover::new().crossover(&p1, &p2, &mut rng);
            assert!(is_positional_exchange(p1, p2, c1, c2));
        }
    }

    #[test]
    fn test_point_swap_crossover_moves_one_gene() {
        let mut rng = StdRng::seed_from_u64(25);
        let p1 = Genome8::ones();
        let p2 = Genome8::zeros();
        let (c1, c2) = PointSwapCrossover::new().crossover(&p1, &p2, &mut rng);
        assert_eq!(c1.count_ones(), 7);
        assert_eq!(c2.count_ones(), 1);
    }
}
