//! Lazy Cartesian-product enumeration of wildcard substitutions.

mod core;
mod generator;
mod state;
mod types;

pub use self::core::CombinationIterator;
pub use generator::{candidate_count, generate};
pub use types::{Candidate, Combination};
