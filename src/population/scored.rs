//! Scored population snapshots
//!
//! A [`ScoredGenomes`] value pairs each candidate with its fitness, caches
//! the total fitness, and records the generation it belongs to. The search
//! loop owns the generation counter; snapshots only carry it.

use rand::Rng;
use serde::Serialize;

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::{Fitness, Score};

/// Ordered (genome, score) pairs with a cached total and generation index
///
/// The cached total always equals the in-order sum of the scores. Entry
/// order is part of the value: roulette draws walk the entries in order,
/// so the same seed over the same snapshot selects the same index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredGenomes<G> {
    entries: Vec<(G, Score)>,
    total: Score,
    generation: usize,
}

fn sum_scores<'a, G: 'a>(entries: impl IntoIterator<Item = &'a (G, Score)>) -> Score {
    entries.into_iter().fold(0.0, |acc, (_, score)| acc + score)
}

impl<G> ScoredGenomes<G> {
    /// Create an empty snapshot for `generation`
    pub fn new(generation: usize) -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
            generation,
        }
    }

    /// Create a snapshot from already-scored genomes
    pub fn from_pairs<I>(pairs: I, generation: usize) -> Self
    where
        I: IntoIterator<Item = (G, Score)>,
    {
        let entries: Vec<(G, Score)> = pairs.into_iter().collect();
        let total = sum_scores(&entries);
        log::trace!(
            "built snapshot for generation {generation}: {} genomes, total {total}",
            entries.len()
        );
        Self {
            entries,
            total,
            generation,
        }
    }

    /// Score every genome with `fitness` and collect the results
    pub fn evaluate<I, F>(genomes: I, fitness: &F, generation: usize) -> Self
    where
        I: IntoIterator<Item = G>,
        F: Fitness<Genome = G> + ?Sized,
    {
        Self::from_pairs(
            genomes.into_iter().map(|genome| {
                let score = fitness.evaluate(&genome);
                (genome, score)
            }),
            generation,
        )
    }

    /// Build the snapshot that follows this one.
    ///
    /// The caller supplies the new generation index; it may repeat the
    /// current one but never go backwards.
    pub fn next_generation<I>(&self, pairs: I, generation: usize) -> EvoResult<Self>
    where
        I: IntoIterator<Item = (G, Score)>,
    {
        if generation < self.generation {
            log::debug!(
                "rejected generation {generation} after generation {}",
                self.generation
            );
            return Err(EvolutionError::Configuration(format!(
                "generation {generation} precedes current generation {}",
                self.generation
            )));
        }
        log::trace!("advancing from generation {} to {generation}", self.generation);
        Ok(Self::from_pairs(pairs, generation))
    }

    /// Append a scored genome
    pub fn push(&mut self, genome: G, score: Score) {
        self.entries.push((genome, score));
        self.total += score;
    }

    /// Append several scored genomes
    pub fn extend<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (G, Score)>,
    {
        for (genome, score) in pairs {
            self.push(genome, score);
        }
    }

    /// Overwrite the score at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_score(&mut self, index: usize, score: Score) {
        self.entries[index].1 = score;
        self.recompute_total();
    }

    /// Replace the entry at `index`, returning the previous one
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, genome: G, score: Score) -> (G, Score) {
        let previous = std::mem::replace(&mut self.entries[index], (genome, score));
        self.recompute_total();
        previous
    }

    /// Remove and return the entry at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> (G, Score) {
        let removed = self.entries.remove(index);
        self.recompute_total();
        removed
    }

    fn recompute_total(&mut self) {
        self.total = sum_scores(&self.entries);
    }

    /// Sum of all scores
    pub fn total(&self) -> Score {
        self.total
    }

    /// Average score, `None` when empty
    pub fn mean(&self) -> Option<Score> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.total / self.entries.len() as Score)
        }
    }

    /// Entry with the highest score
    pub fn best(&self) -> Option<&(G, Score)> {
        self.entries.iter().max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Entry with the lowest score
    pub fn worst(&self) -> Option<&(G, Score)> {
        self.entries.iter().min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Generation this snapshot belongs to
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&(G, Score)> {
        self.entries.get(index)
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = &(G, Score)> {
        self.entries.iter()
    }

    /// Iterate over the genomes in order
    pub fn genomes(&self) -> impl Iterator<Item = &G> {
        self.entries.iter().map(|(genome, _)| genome)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the snapshot, returning its entries
    pub fn into_pairs(self) -> Vec<(G, Score)> {
        self.entries
    }

    /// Fitness-proportionate index draw.
    ///
    /// Uses the cached total. Falls back to a uniform draw when scores
    /// cannot act as weights (a negative score, or a total that is not
    /// finite and positive).
    pub fn roulette<R: Rng + ?Sized>(&self, rng: &mut R) -> EvoResult<usize> {
        if self.entries.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        let weighted = self.total.is_finite()
            && self.total > 0.0
            && self.entries.iter().all(|(_, score)| *score >= 0.0);
        if !weighted {
            return Ok(rng.gen_range(0..self.entries.len()));
        }

        let target = rng.gen::<f64>() * self.total;
        let mut cumulative = 0.0;
        for (index, (_, score)) in self.entries.iter().enumerate() {
            cumulative += score;
            if cumulative > target {
                return Ok(index);
            }
        }
        // Rounding can leave the target at the very top of the wheel
        Ok(self
            .entries
            .iter()
            .rposition(|(_, score)| *score > 0.0)
            .unwrap_or(self.entries.len() - 1))
    }
}

impl<G> Default for ScoredGenomes<G> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<G> FromIterator<(G, Score)> for ScoredGenomes<G> {
    fn from_iter<I: IntoIterator<Item = (G, Score)>>(iter: I) -> Self {
        Self::from_pairs(iter, 0)
    }
}

impl<'a, G> IntoIterator for &'a ScoredGenomes<G> {
    type Item = &'a (G, Score);
    type IntoIter = std::slice::Iter<'a, (G, Score)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::OneMax;
    use crate::genome::packed::Genome8;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> ScoredGenomes<Genome8> {
        ScoredGenomes::from_pairs(
            vec![
                (Genome8::from_word(0b0000_0001), 1.0),
                (Genome8::from_word(0b0000_0111), 3.0),
                (Genome8::from_word(0b0000_0011), 2.0),
            ],
            4,
        )
    }

    #[test]
    fn test_from_pairs_total() {
        let scored = sample();
        assert_eq!(scored.len(), 3);
        assert_eq!(scored.total(), 6.0);
        assert_eq!(scored.generation(), 4);
        assert_relative_eq!(scored.mean().unwrap(), 2.0);
    }

    #[test]
    fn test_evaluate_with_fitness() {
        let genomes = vec![Genome8::ones(), Genome8::zeros(), Genome8::from_word(0x0F)];
        let scored = ScoredGenomes::evaluate(genomes, &OneMax::<Genome8>::new(), 0);
        let scores: Vec<Score> = scored.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![8.0, 0.0, 4.0]);
        assert_eq!(scored.total(), 12.0);
    }

    #[test]
    fn test_updates_keep_total() {
        let mut scored = sample();
        scored.push(Genome8::ones(), 8.0);
        assert_eq!(scored.total(), 14.0);

        scored.set_score(0, 5.0);
        assert_eq!(scored.total(), 18.0);

        let old = scored.replace(1, Genome8::zeros(), 0.0);
        assert_eq!(old.1, 3.0);
        assert_eq!(scored.total(), 15.0);

        let removed = scored.remove(3);
        assert_eq!(removed.0, Genome8::ones());
        assert_eq!(scored.total(), 7.0);

        scored.extend(vec![(Genome8::zeros(), 0.5), (Genome8::zeros(), 0.25)]);
        assert_eq!(scored.total(), 7.75);
        assert_eq!(scored.len(), 5);
    }

    #[test]
    fn test_best_and_worst() {
        let scored = sample();
        assert_eq!(scored.best().unwrap().1, 3.0);
        assert_eq!(scored.worst().unwrap().1, 1.0);

        let empty: ScoredGenomes<Genome8> = ScoredGenomes::default();
        assert!(empty.best().is_none());
        assert!(empty.mean().is_none());
    }

    #[test]
    fn test_next_generation() {
        let scored = sample();
        let next = scored
            .next_generation(vec![(Genome8::ones(), 8.0)], 5)
            .unwrap();
        assert_eq!(next.generation(), 5);
        assert_eq!(next.total(), 8.0);

        let same = scored.next_generation(Vec::new(), 4).unwrap();
        assert_eq!(same.generation(), 4);
        assert!(same.is_empty());

        let result = scored.next_generation(Vec::new(), 3);
        assert!(matches!(result, Err(EvolutionError::Configuration(_))));
    }

    #[test]
    fn test_roulette_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: ScoredGenomes<Genome8> = ScoredGenomes::new(0);
        assert_eq!(empty.roulette(&mut rng), Err(EvolutionError::EmptyPopulation));
    }

    #[test]
    fn test_roulette_skips_zero_scores() {
        let mut rng = StdRng::seed_from_u64(7);
        let scored = ScoredGenomes::from_pairs(
            vec![
                (Genome8::zeros(), 0.0),
                (Genome8::ones(), 1.0),
                (Genome8::zeros(), 0.0),
            ],
            0,
        );
        for _ in 0..500 {
            assert_eq!(scored.roulette(&mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_roulette_is_proportional() {
        let mut rng = StdRng::seed_from_u64(8);
        let scored = ScoredGenomes::from_pairs(
            vec![(Genome8::zeros(), 1.0), (Genome8::ones(), 3.0)],
            0,
        );
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| scored.roulette(&mut rng).unwrap() == 1)
            .count();
        assert_relative_eq!(hits as f64 / trials as f64, 0.75, epsilon = 0.02);
    }

    #[test]
    fn test_roulette_negative_scores_fall_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(9);
        let scored = ScoredGenomes::from_pairs(
            vec![(Genome8::zeros(), -1.0), (Genome8::ones(), 2.0)],
            0,
        );
        let mut seen = [false; 2];
        for _ in 0..200 {
            seen[scored.roulette(&mut rng).unwrap()] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_serialize_snapshot() {
        let scored = ScoredGenomes::from_pairs(vec![(Genome8::from_word(5), 2.0)], 1);
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"entries": [[5, 2.0]], "total": 2.0, "generation": 1})
        );
    }
}
