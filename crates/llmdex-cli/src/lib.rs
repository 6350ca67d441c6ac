// NOTE: llmdex Architecture Rationale
//
// Why one QueryState owned by the session (not per-widget state)?
// - Every front-end (rich pane, prompt loop, static listing) reads the same view
// - A tier can fail halfway and the next tier continues with the same query
// - Commands are plain values, so dispatch stays synchronous and atomic
//
// Why recompute the whole view on every command?
// - Catalogues are a few thousand rows; a full derive is sub-millisecond
// - No incremental bookkeeping means no stale rows after a filter change
// - Selection survives by identity (provider + model id), not by row index
//
// Why a fallback chain instead of feature flags?
// - Terminals lie about their capabilities; failing over beats crashing
// - Order is fixed and one-directional: rich -> prompt -> static

mod args;
mod commands;
pub mod clipboard;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod session;
pub mod types;

pub use args::Cli;
pub use commands::run;
