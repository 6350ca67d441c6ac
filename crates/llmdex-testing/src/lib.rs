//! Testing infrastructure for llmdex unit and integration tests.
//!
//! - `fixtures`: a small catalogue document and hand-built entries
//! - `TestWorld`: isolated environment for running the `llmdex` binary

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
