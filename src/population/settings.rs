//! Genetic algorithm settings
//!
//! [`GeneticSettings`] holds the operator rates the search loop reads
//! every generation, plus an opaque payload for domain extensions. Rates
//! are validated when the settings are built or deserialized, so the
//! rate-gated helpers never see an out-of-range probability.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::operators::probability::prob_value;
use crate::operators::traits::{CrossoverOperator, MutationOperator};

const DEFAULT_CROSSOVER_RATE: f64 = 0.9;
const DEFAULT_MUTATION_RATE: f64 = 0.1;
const DEFAULT_MAX_POPULATION: f64 = 1.0;

/// Immutable search configuration
///
/// `max_population` is carried as an opaque number; its meaning belongs
/// to the search loop. `payload` is never inspected here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawSettings<P>",
    bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>")
)]
pub struct GeneticSettings<P = ()> {
    crossover_rate: f64,
    mutation_rate: f64,
    max_population: f64,
    payload: P,
}

/// Unvalidated wire form of [`GeneticSettings`]
#[derive(Deserialize)]
struct RawSettings<P> {
    #[serde(default = "default_crossover_rate")]
    crossover_rate: f64,
    #[serde(default = "default_mutation_rate")]
    mutation_rate: f64,
    #[serde(default = "default_max_population")]
    max_population: f64,
    payload: P,
}

fn default_crossover_rate() -> f64 {
    DEFAULT_CROSSOVER_RATE
}

fn default_mutation_rate() -> f64 {
    DEFAULT_MUTATION_RATE
}

fn default_max_population() -> f64 {
    DEFAULT_MAX_POPULATION
}

impl<P> TryFrom<RawSettings<P>> for GeneticSettings<P> {
    type Error = EvolutionError;

    fn try_from(raw: RawSettings<P>) -> Result<Self, Self::Error> {
        GeneticSettings::try_new(
            raw.crossover_rate,
            raw.mutation_rate,
            raw.max_population,
            raw.payload,
        )
    }
}

fn validate_rate(name: &'static str, value: f64) -> EvoResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        log::debug!("rejected {name} = {value}");
        Err(EvolutionError::InvalidRate { name, value })
    }
}

fn validate_max_population(value: f64) -> EvoResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejected max_population = {value}");
        Err(EvolutionError::Configuration(format!(
            "max_population must be finite, got {value}"
        )))
    }
}

impl<P> GeneticSettings<P> {
    /// Default rates around `payload`
    pub fn new(payload: P) -> Self {
        Self {
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_population: DEFAULT_MAX_POPULATION,
            payload,
        }
    }

    /// Build with explicit values, validating each one
    pub fn try_new(
        crossover_rate: f64,
        mutation_rate: f64,
        max_population: f64,
        payload: P,
    ) -> EvoResult<Self> {
        Ok(Self {
            crossover_rate: validate_rate("crossover_rate", crossover_rate)?,
            mutation_rate: validate_rate("mutation_rate", mutation_rate)?,
            max_population: validate_max_population(max_population)?,
            payload,
        })
    }

    /// Set the crossover rate
    pub fn with_crossover_rate(mut self, rate: f64) -> EvoResult<Self> {
        self.crossover_rate = validate_rate("crossover_rate", rate)?;
        Ok(self)
    }

    /// Set the mutation rate
    pub fn with_mutation_rate(mut self, rate: f64) -> EvoResult<Self> {
        self.mutation_rate = validate_rate("mutation_rate", rate)?;
        Ok(self)
    }

    /// Set the max population value
    pub fn with_max_population(mut self, value: f64) -> EvoResult<Self> {
        self.max_population = validate_max_population(value)?;
        Ok(self)
    }

    /// Probability that crossover fires
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Probability that mutation fires
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Opaque population bound for the search loop
    pub fn max_population(&self) -> f64 {
        self.max_population
    }

    /// The user payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the settings, returning the payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Swap the payload for another, keeping the rates
    pub fn map_payload<Q, F>(self, f: F) -> GeneticSettings<Q>
    where
        F: FnOnce(P) -> Q,
    {
        GeneticSettings {
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            max_population: self.max_population,
            payload: f(self.payload),
        }
    }

    /// One draw: `true` with probability `crossover_rate`
    pub fn should_crossover<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        prob_value(rng, self.crossover_rate, false, true)
    }

    /// One draw: `true` with probability `mutation_rate`
    pub fn should_mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        prob_value(rng, self.mutation_rate, false, true)
    }

    /// Mutate `genome` at the configured rate, otherwise return a copy
    pub fn maybe_mutate<G, M, R>(&self, genome: &G, operator: &M, rng: &mut R) -> G
    where
        G: Clone,
        M: MutationOperator<G> + ?Sized,
        R: Rng + ?Sized,
    {
        if self.should_mutate(rng) {
            operator.mutate(genome, rng)
        } else {
            genome.clone()
        }
    }

    /// Cross the parents at the configured rate, otherwise return copies
    pub fn maybe_crossover<G, C, R>(
        &self,
        parent1: &G,
        parent2: &G,
        operator: &C,
        rng: &mut R,
    ) -> (G, G)
    where
        G: Clone,
        C: CrossoverOperator<G> + ?Sized,
        R: Rng + ?Sized,
    {
        if self.should_crossover(rng) {
            operator.crossover(parent1, parent2, rng)
        } else {
            (parent1.clone(), parent2.clone())
        }
    }
}

impl<P: Default> Default for GeneticSettings<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
