//! Genetic operators
//!
//! This module provides the rate-gated decision helpers and the
//! crossover and mutation operators built on the genome capabilities.

pub mod crossover;
pub mod mutation;
pub mod probability;
pub mod traits;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::probability::*;
    pub use super::traits::*;
}
