//! Fuzzy ranking over model display names and ids.
//!
//! Uses `nucleo-matcher` scoring with fzf-style pattern syntax, so a query of
//! several words must match every word somewhere in the key.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::store::CatalogueStore;

pub struct SearchIndex<'a> {
    store: &'a CatalogueStore,
}

impl<'a> SearchIndex<'a> {
    pub fn new(store: &'a CatalogueStore) -> Self {
        Self { store }
    }

    /// Indices of the entries matching `query`, best match first.
    ///
    /// An entry's score is the better of its name and id scores. Entries
    /// with equal scores keep catalogue order. A blank query matches
    /// everything in catalogue order.
    pub fn rank(&self, query: &str) -> Vec<usize> {
        let query = query.trim();
        if query.is_empty() {
            return (0..self.store.len()).collect();
        }

        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<(u32, usize)> = self
            .store
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let name = pattern.score(Utf32Str::new(&entry.model_name, &mut buf), &mut matcher);
                let id = pattern.score(Utf32Str::new(&entry.model_id, &mut buf), &mut matcher);
                name.max(id).map(|score| (score, index))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, index)| index).collect()
    }
}
