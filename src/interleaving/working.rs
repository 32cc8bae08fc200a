use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{InterleavingError, Result};

/// Mutable views over the caller's source rankings.
///
/// Chosen documents go into one shared `taken` set; a list is compacted only when it is
/// about to be sampled, which keeps the surviving documents in their original order.
pub(crate) struct WorkingLists<'a, D> {
    lists: Vec<Vec<&'a D>>,
    taken: HashSet<&'a D>,
}

impl<'a, D: Eq + Hash> WorkingLists<'a, D> {
    pub(crate) fn new<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [D]>,
    {
        let mut lists = Vec::new();
        for (index, source) in sources.into_iter().enumerate() {
            if source.is_empty() {
                return Err(InterleavingError::invalid(format!(
                    "ranking {} is empty",
                    index
                )));
            }

            let mut seen = HashSet::with_capacity(source.len());
            if !source.iter().all(|document| seen.insert(document)) {
                return Err(InterleavingError::invalid(format!(
                    "ranking {} lists a document more than once",
                    index
                )));
            }

            lists.push(source.iter().collect());
        }

        Ok(Self {
            lists,
            taken: HashSet::new(),
        })
    }

    pub(crate) fn shortest(&self) -> usize {
        self.lists.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Documents of list `index` not yet taken, in rank order.
    pub(crate) fn remaining(&mut self, index: usize) -> &[&'a D] {
        let taken = &self.taken;
        match self.lists.get_mut(index) {
            Some(list) => {
                list.retain(|document| !taken.contains(document));
                list.as_slice()
            }
            None => &[],
        }
    }

    /// Marks `document` as used; a document that is already taken or absent from a
    /// list is simply ignored.
    pub(crate) fn take(&mut self, document: &'a D) {
        self.taken.insert(document);
    }
}
