use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::distribution::{CumulativeDistributionCache, RankWeightTable};
use crate::error::{validate_tau, Result};

/// Weight and breakpoint tables for one tau.
#[derive(Debug)]
pub struct DistributionTables {
    weights: RankWeightTable,
    cumulative: CumulativeDistributionCache,
}

impl DistributionTables {
    fn new(tau: f64) -> Result<Self> {
        Ok(Self {
            weights: RankWeightTable::new(tau)?,
            cumulative: CumulativeDistributionCache::new(),
        })
    }

    pub fn tau(&self) -> f64 {
        self.weights.tau()
    }

    pub fn weight(&self, rank: usize) -> Result<f64> {
        self.weights.weight(rank)
    }

    pub fn breakpoints(&self, n: usize) -> Result<Arc<[f64]>> {
        self.cumulative.breakpoints(n, &self.weights)
    }

    pub fn weights(&self) -> &RankWeightTable {
        &self.weights
    }

    pub fn cumulative(&self) -> &CumulativeDistributionCache {
        &self.cumulative
    }
}

// Keyed by the bit pattern of tau; tau is validated finite and positive first, so
// equal values always share one key.
static REGISTRY: OnceLock<Mutex<HashMap<u64, Arc<DistributionTables>>>> = OnceLock::new();

/// Process-wide tables for `tau`, created on first use and never evicted.
pub fn tables_for(tau: f64) -> Result<Arc<DistributionTables>> {
    let tau = validate_tau(tau)?;
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = registry.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(tables) = guard.get(&tau.to_bits()) {
        return Ok(Arc::clone(tables));
    }

    let tables = Arc::new(DistributionTables::new(tau)?);
    guard.insert(tau.to_bits(), Arc::clone(&tables));
    debug!(tau, registered = guard.len(), "registered distribution tables");
    Ok(tables)
}
