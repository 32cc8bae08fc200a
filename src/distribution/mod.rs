pub mod cumulative;
pub mod registry;
pub mod sampler;
pub mod weights;

use std::sync::Arc;

use crate::error::Result;

pub use cumulative::CumulativeDistributionCache;
pub use registry::{tables_for, DistributionTables};
pub use sampler::{choose_index, choose_one, WeightedSampler};
pub use weights::RankWeightTable;

/// `1 / rank^tau` from the shared table for `tau`.
pub fn weight(tau: f64, rank: usize) -> Result<f64> {
    tables_for(tau)?.weight(rank)
}

/// Cumulative breakpoints for a list of length `n` from the shared table for `tau`.
pub fn breakpoints(tau: f64, n: usize) -> Result<Arc<[f64]>> {
    tables_for(tau)?.breakpoints(n)
}
