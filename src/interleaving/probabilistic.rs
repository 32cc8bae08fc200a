use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::InterleavingConfig;
use crate::distribution::WeightedSampler;
use crate::error::{InterleavingError, Result};
use crate::interleaving::working::WorkingLists;
use crate::interleaving::InterleavingMethod;
use crate::ranking::Ranking;

pub const DEFAULT_TAU: f64 = 3.0;

/// Probabilistic interleaving.
///
/// Every merged position comes from one source ranking, and the document is drawn from
/// that ranking's not-yet-used documents with probability proportional to `1 / r^tau`
/// of its current rank `r`.
#[derive(Debug, Clone)]
pub struct Probabilistic<R = StdRng> {
    sampler: WeightedSampler,
    rng: R,
}

impl Probabilistic<StdRng> {
    pub fn new(tau: f64) -> Result<Self> {
        Self::with_rng(tau, StdRng::from_entropy())
    }

    pub fn seeded(tau: f64, seed: u64) -> Result<Self> {
        Self::with_rng(tau, StdRng::seed_from_u64(seed))
    }

    /// Same impression key, same merged ranking.
    pub fn for_impression(tau: f64, impression_key: &str) -> Result<Self> {
        Self::seeded(tau, impression_seed(impression_key))
    }

    pub fn from_config(config: &InterleavingConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::seeded(config.tau, seed),
            None => Self::new(config.tau),
        }
    }
}

impl<R: Rng> Probabilistic<R> {
    pub fn with_rng(tau: f64, rng: R) -> Result<Self> {
        Ok(Self {
            sampler: WeightedSampler::new(tau)?,
            rng,
        })
    }

    pub fn tau(&self) -> f64 {
        self.sampler.tau()
    }

    fn draw_into<'a, D: Clone + Eq + Hash>(
        &mut self,
        working: &mut WorkingLists<'a, D>,
        ranker: usize,
        result: &mut Ranking<D>,
    ) -> Result<()> {
        let candidates = working.remaining(ranker);
        if candidates.is_empty() {
            return Err(InterleavingError::InternalInvariantViolation(format!(
                "ranking {} ran out after {} merged documents",
                ranker,
                result.len()
            )));
        }

        let document: &'a D = *self.sampler.sample(candidates, &mut self.rng)?;
        result.push(document.clone(), ranker);
        working.take(document);
        Ok(())
    }
}

impl<R: Rng> InterleavingMethod for Probabilistic<R> {
    fn interleave<D>(&mut self, a: &[D], b: &[D]) -> Result<Ranking<D>>
    where
        D: Clone + Eq + Hash,
    {
        let mut working = WorkingLists::new([a, b])?;
        let k = working.shortest();
        let mut result = Ranking::with_rankers(2);

        while result.len() < k {
            let ranker = self.rng.gen_range(0..2);
            self.draw_into(&mut working, ranker, &mut result)?;
        }

        debug!(tau = self.tau(), k, "interleaved two rankings");
        Ok(result)
    }

    fn multileave<D>(&mut self, lists: &[Vec<D>]) -> Result<Ranking<D>>
    where
        D: Clone + Eq + Hash,
    {
        if lists.len() < 2 {
            return Err(InterleavingError::invalid(format!(
                "multileaving needs at least two rankings, got {}",
                lists.len()
            )));
        }

        let mut working = WorkingLists::new(lists.iter().map(Vec::as_slice))?;
        let k = working.shortest();
        let mut result = Ranking::with_rankers(lists.len());
        let mut order: Vec<usize> = (0..lists.len()).collect();

        'rounds: while result.len() < k {
            order.shuffle(&mut self.rng);
            for &ranker in &order {
                self.draw_into(&mut working, ranker, &mut result)?;
                // Stop mid-round once the merged ranking is full.
                if result.len() >= k {
                    break 'rounds;
                }
            }
        }

        debug!(
            tau = self.tau(),
            k,
            rankers = lists.len(),
            "multileaved rankings"
        );
        Ok(result)
    }
}

/// Stable 64-bit seed derived from the SHA-256 of `key`.
pub fn impression_seed(key: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
