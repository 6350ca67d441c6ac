use llmdex_types::{CatalogueEntry, EntryId};

use crate::query::QueryState;
use crate::search::SearchIndex;
use crate::sort::SortMode;
use crate::store::CatalogueStore;

/// Upper bound on rows kept in a view, independent of page size.
pub const MAX_VIEW_ROWS: usize = 500;

/// The searched, filtered, sorted and capped projection of a store.
///
/// Holds positions into the store it was derived from; it is only
/// meaningful together with that store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    rows: Vec<usize>,
    matched: usize,
}

/// Derive the view for `state`.
///
/// Pipeline: fuzzy search (if any) → structural filters → sort → cap.
/// Searching first means a `Default` sort keeps best-match-first order.
pub fn derive(store: &CatalogueStore, state: &QueryState) -> DerivedView {
    let candidates = SearchIndex::new(store).rank(&state.search);
    let predicates = state.filters.predicates();

    let mut rows: Vec<usize> = candidates
        .into_iter()
        .filter(|&index| {
            store
                .get(index)
                .is_some_and(|entry| predicates.iter().all(|p| p.admits(entry)))
        })
        .collect();

    if state.sort != SortMode::Default {
        let entries = store.entries();
        rows.sort_by(|&a, &b| state.sort.compare(&entries[a], &entries[b]));
    }

    let matched = rows.len();
    rows.truncate(MAX_VIEW_ROWS);
    DerivedView { rows, matched }
}

impl DerivedView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that matched before the cap was applied.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn is_truncated(&self) -> bool {
        self.matched > self.rows.len()
    }

    pub fn entry<'s>(&self, store: &'s CatalogueStore, position: usize) -> Option<&'s CatalogueEntry> {
        self.rows.get(position).and_then(|&index| store.get(index))
    }

    pub fn entries<'s>(
        &'s self,
        store: &'s CatalogueStore,
    ) -> impl Iterator<Item = &'s CatalogueEntry> + 's {
        self.rows.iter().filter_map(move |&index| store.get(index))
    }

    pub fn position_of(&self, store: &CatalogueStore, id: &EntryId) -> Option<usize> {
        self.entries(store).position(|entry| entry.has_id(id))
    }

    /// Where the selection lands after a recomputation: on the previously
    /// selected entry if it survived, otherwise on the first row, or nowhere
    /// when the view is empty.
    pub fn relocate(&self, store: &CatalogueStore, previous: Option<&EntryId>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        previous
            .and_then(|id| self.position_of(store, id))
            .or(Some(0))
    }
}
