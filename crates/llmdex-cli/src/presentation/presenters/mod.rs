pub mod detail;
pub mod table;

pub use detail::{DetailSection, EntryDetail, present_detail};
pub use table::{FULL_COLUMNS, compact_line, full_row};
