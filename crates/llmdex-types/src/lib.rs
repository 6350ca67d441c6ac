pub mod entry;
pub mod id;

pub use entry::{Capabilities, CatalogueEntry, Costs, Limits, Modalities};
pub use id::EntryId;
