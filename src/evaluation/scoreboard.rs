use serde::{Deserialize, Serialize};

use crate::error::{InterleavingError, Result};
use crate::evaluation::evaluate;
use crate::ranking::Ranking;

/// Win tallies for a set of rankers across many impressions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: Vec<u64>,
    ties: u64,
    impressions: u64,
}

impl Scoreboard {
    pub fn new(number_of_rankers: usize) -> Self {
        Self {
            wins: vec![0; number_of_rankers],
            ties: 0,
            impressions: 0,
        }
    }

    pub fn record(&mut self, outcome: &[u8]) -> Result<()> {
        if outcome.len() != self.wins.len() {
            return Err(InterleavingError::invalid(format!(
                "outcome covers {} rankers, scoreboard tracks {}",
                outcome.len(),
                self.wins.len()
            )));
        }
        if let Some(bad) = outcome.iter().find(|&&value| value > 1) {
            return Err(InterleavingError::invalid(format!(
                "outcome entries must be 0 or 1, got {}",
                bad
            )));
        }

        if outcome.iter().all(|&value| value == 0) {
            self.ties += 1;
        } else {
            for (wins, &value) in self.wins.iter_mut().zip(outcome) {
                *wins += u64::from(value);
            }
        }
        self.impressions += 1;
        Ok(())
    }

    /// Evaluates `clicks` on `ranking`, records the outcome and returns it.
    pub fn record_clicks<D>(&mut self, ranking: &Ranking<D>, clicks: &[usize]) -> Result<Vec<u8>> {
        let outcome = evaluate(ranking, clicks)?;
        self.record(&outcome)?;
        Ok(outcome)
    }

    pub fn number_of_rankers(&self) -> usize {
        self.wins.len()
    }

    pub fn wins(&self) -> &[u64] {
        &self.wins
    }

    pub fn ties(&self) -> u64 {
        self.ties
    }

    pub fn impressions(&self) -> u64 {
        self.impressions
    }

    pub fn win_rate(&self, ranker: usize) -> Option<f64> {
        if self.impressions == 0 {
            return None;
        }
        self.wins
            .get(ranker)
            .map(|&wins| wins as f64 / self.impressions as f64)
    }

    /// Rankers with the most wins; empty until somebody has won.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.wins.iter().copied().max().unwrap_or(0);
        if best == 0 {
            return Vec::new();
        }
        self.wins
            .iter()
            .enumerate()
            .filter(|&(_, &wins)| wins == best)
            .map(|(ranker, _)| ranker)
            .collect()
    }
}
