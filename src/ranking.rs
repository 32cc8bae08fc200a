use serde::{Deserialize, Serialize};

use crate::error::{InterleavingError, Result};

/// A merged ranking plus, for every position, the source ranking that supplied it.
///
/// `rank_to_ranker_index` always has one entry per document and every entry is below
/// `number_of_rankers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RankingRecord<D>",
    bound(deserialize = "D: Deserialize<'de>")
)]
pub struct Ranking<D> {
    documents: Vec<D>,
    number_of_rankers: usize,
    rank_to_ranker_index: Vec<usize>,
}

/// Unvalidated wire form of a [`Ranking`].
#[derive(Debug, Clone, Deserialize)]
pub struct RankingRecord<D> {
    pub documents: Vec<D>,
    pub number_of_rankers: usize,
    pub rank_to_ranker_index: Vec<usize>,
}

impl<D> TryFrom<RankingRecord<D>> for Ranking<D> {
    type Error = InterleavingError;

    fn try_from(record: RankingRecord<D>) -> Result<Self> {
        Ranking::from_parts(
            record.documents,
            record.number_of_rankers,
            record.rank_to_ranker_index,
        )
    }
}

impl<D> Ranking<D> {
    pub(crate) fn with_rankers(number_of_rankers: usize) -> Self {
        Self {
            documents: Vec::new(),
            number_of_rankers,
            rank_to_ranker_index: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, document: D, ranker_index: usize) {
        self.documents.push(document);
        self.rank_to_ranker_index.push(ranker_index);
    }

    pub fn from_parts(
        documents: Vec<D>,
        number_of_rankers: usize,
        rank_to_ranker_index: Vec<usize>,
    ) -> Result<Self> {
        if documents.len() != rank_to_ranker_index.len() {
            return Err(InterleavingError::invalid(format!(
                "{} documents but {} ranker attributions",
                documents.len(),
                rank_to_ranker_index.len()
            )));
        }
        if let Some(bad) = rank_to_ranker_index
            .iter()
            .find(|&&index| index >= number_of_rankers)
        {
            return Err(InterleavingError::invalid(format!(
                "ranker index {} out of range for {} rankers",
                bad, number_of_rankers
            )));
        }

        Ok(Self {
            documents,
            number_of_rankers,
            rank_to_ranker_index,
        })
    }

    pub fn documents(&self) -> &[D] {
        &self.documents
    }

    pub fn number_of_rankers(&self) -> usize {
        self.number_of_rankers
    }

    pub fn rank_to_ranker_index(&self) -> &[usize] {
        &self.rank_to_ranker_index
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<(&D, usize)> {
        let document = self.documents.get(position)?;
        let ranker = self.rank_to_ranker_index.get(position)?;
        Some((document, *ranker))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&D, usize)> + '_ {
        self.documents
            .iter()
            .zip(self.rank_to_ranker_index.iter().copied())
    }

    pub fn into_documents(self) -> Vec<D> {
        self.documents
    }
}
