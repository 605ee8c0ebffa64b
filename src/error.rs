//! Error types for genekit
//!
//! Genome operations are total over their documented index domain and
//! panic on violated preconditions; the errors here cover the checked
//! entry points and configuration.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Gene index outside `[0, length)`
    #[error("Index {index} out of range for genome of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// Range bound outside `[0, length)`
    #[error("Range {start}..={end} out of range for genome of length {length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Genome text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// A probability outside `[0, 1]`
    #[error("Invalid rate for {name}: {value} (must be in [0, 1])")]
    InvalidRate { name: &'static str, value: f64 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::IndexOutOfRange {
            index: 9,
            length: 8,
        };
        assert_eq!(
            err.to_string(),
            "Index 9 out of range for genome of length 8"
        );

        let err = GenomeError::InvalidRange {
            start: 2,
            end: 16,
            length: 16,
        };
        assert_eq!(
            err.to_string(),
            "Range 2..=16 out of range for genome of length 16"
        );

        let err = GenomeError::DimensionMismatch {
            expected: 10,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 10, got 5");
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = EvolutionError::InvalidRate {
            name: "mutation_rate",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid rate for mutation_rate: 1.5 (must be in [0, 1])"
        );
    }

    #[test]
    fn test_evolution_error_from_genome_error() {
        let genome_err = GenomeError::Parse("bad digit".to_string());
        let evo_err: EvolutionError = genome_err.into();
        assert!(matches!(evo_err, EvolutionError::Genome(_)));
    }
}
