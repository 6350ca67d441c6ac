// Engine module - pure query processing over the loaded catalogue
// This layer sits between normalized entries (types) and the interactive session (cli)

pub mod query;
pub mod search;
pub mod sort;
pub mod store;
pub mod view;

pub use query::{Filters, Flag, Predicate, QueryState, TriState, parse_context, parse_cost, parse_tags};
pub use search::SearchIndex;
pub use sort::{Direction, SortKey, SortMode};
pub use store::{CatalogueStore, ProviderSummary};
pub use view::{DerivedView, MAX_VIEW_ROWS, derive};
