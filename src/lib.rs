//! Probabilistic interleaving and multileaving.
//!
//! Rankings from competing rankers are merged into one list by rank-biased sampling
//! without replacement; clicks on the merged list are then credited back to the rankers
//! that contributed the clicked documents.

pub mod config;
pub mod distribution;
pub mod error;
pub mod evaluation;
pub mod interleaving;
pub mod logging;
pub mod ranking;

pub use config::InterleavingConfig;
pub use distribution::{breakpoints, weight, WeightedSampler};
pub use error::{InterleavingError, Result};
pub use evaluation::{evaluate, Scoreboard};
pub use interleaving::{InterleavingMethod, Probabilistic, DEFAULT_TAU};
pub use ranking::Ranking;
