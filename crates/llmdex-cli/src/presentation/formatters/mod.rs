pub mod number;
pub mod text;

pub use number::{MISSING, format_cost, format_tokens, format_tokens_exact};
pub use text::{join_tags, or_missing, truncate, yes_no};
