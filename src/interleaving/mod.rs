pub mod probabilistic;
mod working;

use std::hash::Hash;

use crate::error::Result;
use crate::evaluation;
use crate::ranking::Ranking;

pub use probabilistic::{impression_seed, Probabilistic, DEFAULT_TAU};

/// A way of merging rankings so that clicks can be credited back to their sources.
pub trait InterleavingMethod {
    /// Merges two rankings into one of length `min(a.len(), b.len())`.
    fn interleave<D>(&mut self, a: &[D], b: &[D]) -> Result<Ranking<D>>
    where
        D: Clone + Eq + Hash;

    /// Merges two or more rankings into one as long as the shortest input.
    fn multileave<D>(&mut self, lists: &[Vec<D>]) -> Result<Ranking<D>>
    where
        D: Clone + Eq + Hash;

    /// Win vector for `clicks` on a ranking this method produced.
    ///
    /// - `[1, 0, 0]`: the first ranker won
    /// - `[0, 1, 1]`: the second and third rankers tied for the win
    /// - `[0, 0, 0]`: tie
    fn evaluate<D>(&self, ranking: &Ranking<D>, clicks: &[usize]) -> Result<Vec<u8>> {
        evaluation::evaluate(ranking, clicks)
    }
}
