use std::sync::{PoisonError, RwLock};

use crate::error::{validate_tau, InterleavingError, Result};

/// Rank-biased sampling weights `1 / r^tau`.
///
/// Entries are filled on first request and never touched again, so a weight read twice
/// is the same bits both times.
#[derive(Debug)]
pub struct RankWeightTable {
    tau: f64,
    // weights[r - 1] holds w(r)
    weights: RwLock<Vec<f64>>,
}

impl RankWeightTable {
    pub fn new(tau: f64) -> Result<Self> {
        Ok(Self {
            tau: validate_tau(tau)?,
            weights: RwLock::new(Vec::new()),
        })
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn weight(&self, rank: usize) -> Result<f64> {
        if rank < 1 {
            return Err(InterleavingError::invalid(format!(
                "rank must be at least 1, got {}",
                rank
            )));
        }
        Ok(self.prefix(rank)[rank - 1])
    }

    /// Weights for ranks `1..=n`, in rank order.
    pub fn prefix(&self, n: usize) -> Vec<f64> {
        {
            let weights = self.weights.read().unwrap_or_else(PoisonError::into_inner);
            if weights.len() >= n {
                return weights[..n].to_vec();
            }
        }

        let mut weights = self.weights.write().unwrap_or_else(PoisonError::into_inner);
        while weights.len() < n {
            let rank = weights.len() + 1;
            weights.push(1.0 / (rank as f64).powf(self.tau));
        }
        weights[..n].to_vec()
    }

    /// Number of ranks memoized so far.
    pub fn memoized(&self) -> usize {
        self.weights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
