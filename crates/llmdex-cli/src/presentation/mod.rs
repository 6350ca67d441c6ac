//! # Presentation layer
//!
//! ```text
//! [ Handler ] --> [ SessionController ] <-- Command -- [ Frontend (tier) ]
//!                        |                                   ^
//!                        +-- DerivedView --> [ Presenter ] --+--> [ View ]
//! ```
//!
//! * `guard` picks the tier and walks the fallback chain.
//! * `presenters` turn entries into rows and detail sections (no styling).
//! * `views` lay those out as text; `renderers/tui/views` as ratatui widgets.
//! * `renderers` are the tiers themselves plus the one-shot console writer.
//! * `formatters` hold the shared number and text helpers.

pub mod formatters;
pub mod guard;
pub mod presenters;
pub mod renderers;
pub mod views;

pub use guard::{
    RenderFeatures, TerminalCapabilityGuard, TerminalProfile, Tier, TierFactory, TierReport,
};
pub use renderers::{ConsoleRenderer, Frontend, OutputFormat, PresentationError, TerminalFactory};
