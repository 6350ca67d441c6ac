pub mod detail;
pub mod table;

pub use detail::DetailView;
pub use table::TableView;
