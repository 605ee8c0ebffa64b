//! Genome abstractions and implementations
//!
//! This module provides the layered genome capability traits, their
//! default bodies, and the bit-packed fixed-width genome.

pub mod defaults;
pub mod packed;
pub mod traits;
pub mod word;

pub mod prelude {
    pub use super::packed::*;
    pub use super::traits::*;
    pub use super::word::BinaryWord;
}
