use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::distribution::RankWeightTable;
use crate::error::{InterleavingError, Result};

/// Cumulative breakpoints per list length.
///
/// The entry for length `n` is built once from `w(1)..w(n)` and shared afterwards.
/// Position `i` is selected with probability `bp[i] - bp[i - 1]` (or `bp[0]` at `i = 0`).
#[derive(Debug, Default)]
pub struct CumulativeDistributionCache {
    entries: RwLock<HashMap<usize, Arc<[f64]>>>,
}

impl CumulativeDistributionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoints(&self, n: usize, weights: &RankWeightTable) -> Result<Arc<[f64]>> {
        if n == 0 {
            return Err(InterleavingError::invalid(
                "breakpoints need a list length of at least 1",
            ));
        }

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(&n) {
                return Ok(Arc::clone(hit));
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have filled the slot between the two locks.
        if let Some(hit) = entries.get(&n) {
            return Ok(Arc::clone(hit));
        }

        let built: Arc<[f64]> = cumulate(&weights.prefix(n)).into();
        trace!(tau = weights.tau(), n, "built cumulative breakpoints");
        entries.insert(n, Arc::clone(&built));
        Ok(built)
    }

    pub fn cached_lengths(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn cumulate(weights: &[f64]) -> Vec<f64> {
    let Some((_, head)) = weights.split_last() else {
        return Vec::new();
    };

    let total: f64 = weights.iter().sum();
    let mut running = 0.0;
    let mut breakpoints = Vec::with_capacity(weights.len());
    for weight in head {
        running += weight;
        breakpoints.push(running / total);
    }
    // Pinned so rounding in the sum can never leave mass uncovered.
    breakpoints.push(1.0);
    breakpoints
}

#[cfg(test)]
mod tests {
    use super::cumulate;

    #[test]
    fn single_weight_is_certain() {
        assert_eq!(cumulate(&[0.25]), vec![1.0]);
    }

    #[test]
    fn uniform_weights_split_evenly() {
        let breakpoints = cumulate(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(breakpoints, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn empty_weights_build_nothing() {
        assert!(cumulate(&[]).is_empty());
    }
}
