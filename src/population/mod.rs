//! Population and configuration records
//!
//! This module provides the scored population snapshot and the search
//! settings record.

pub mod scored;
pub mod settings;

pub mod prelude {
    pub use super::scored::*;
    pub use super::settings::*;
}
