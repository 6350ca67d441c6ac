//! Everything llmdex does before a session starts: resolve configuration,
//! fetch the catalogue once, and normalize it into flat entries.

pub mod config;
pub mod error;
pub mod normalize;
pub mod source;

pub use config::{Config, EnvSnapshot, Overrides, ResolvedConfig, UiMode};
pub use error::{Error, Result};
pub use normalize::{normalize, parse_catalogue};
pub use source::{DEFAULT_SOURCE, Source};
