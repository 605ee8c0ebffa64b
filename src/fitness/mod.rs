//! Fitness evaluation
//!
//! This module provides the fitness abstraction and a few boolean
//! benchmarks.

pub mod benchmarks;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::traits::*;
}
