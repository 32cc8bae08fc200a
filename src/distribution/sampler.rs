use std::sync::Arc;

use rand::Rng;

use crate::distribution::{tables_for, DistributionTables};
use crate::error::{InterleavingError, Result};

/// Index of the first breakpoint strictly above `draw`.
pub fn choose_index(breakpoints: &[f64], draw: f64) -> Result<usize> {
    breakpoints
        .iter()
        .position(|&breakpoint| draw < breakpoint)
        .ok_or_else(|| {
            InterleavingError::InternalInvariantViolation(format!(
                "draw {} is not below any of {} breakpoints",
                draw,
                breakpoints.len()
            ))
        })
}

/// Picks one candidate for a uniform `draw` in `[0, 1)`.
pub fn choose_one<'a, T>(candidates: &'a [T], breakpoints: &[f64], draw: f64) -> Result<&'a T> {
    if candidates.is_empty() {
        return Err(InterleavingError::invalid("no candidates to choose from"));
    }
    if candidates.len() != breakpoints.len() {
        return Err(InterleavingError::invalid(format!(
            "{} candidates but {} breakpoints",
            candidates.len(),
            breakpoints.len()
        )));
    }

    let index = choose_index(breakpoints, draw)?;
    candidates.get(index).ok_or_else(|| {
        InterleavingError::InternalInvariantViolation(format!(
            "breakpoint index {} outside {} candidates",
            index,
            candidates.len()
        ))
    })
}

/// Rank-biased sampler over the shared tables of one tau.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    tables: Arc<DistributionTables>,
}

impl WeightedSampler {
    pub fn new(tau: f64) -> Result<Self> {
        Ok(Self {
            tables: tables_for(tau)?,
        })
    }

    pub fn tau(&self) -> f64 {
        self.tables.tau()
    }

    pub fn tables(&self) -> &DistributionTables {
        &self.tables
    }

    pub fn sample<'a, T, R>(&self, candidates: &'a [T], rng: &mut R) -> Result<&'a T>
    where
        R: Rng + ?Sized,
    {
        if candidates.is_empty() {
            return Err(InterleavingError::invalid("cannot sample from an empty list"));
        }
        let breakpoints = self.tables.breakpoints(candidates.len())?;
        let draw: f64 = rng.gen();
        choose_one(candidates, &breakpoints, draw)
    }
}
