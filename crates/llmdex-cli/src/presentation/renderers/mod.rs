pub mod console;
pub mod prompt;
pub mod traits;
pub mod tui;

pub use console::{ConsoleRenderer, OutputFormat, STATIC_LIMIT, StaticListing};
pub use prompt::PromptLoop;
pub use traits::{Frontend, PresentationError};
pub use tui::RichPane;

use crate::presentation::guard::{RenderFeatures, Tier, TierFactory};

/// Builds real frontends on the process's stdin / stdout.
#[derive(Debug, Default)]
pub struct TerminalFactory;

impl TierFactory for TerminalFactory {
    fn build(
        &mut self,
        tier: Tier,
        features: RenderFeatures,
    ) -> Result<Box<dyn Frontend>, PresentationError> {
        match tier {
            Tier::Rich => Ok(Box::new(RichPane::new(features)?)),
            Tier::Prompt => Ok(Box::new(PromptLoop::new(
                std::io::stdin().lock(),
                std::io::stdout(),
                features,
            ))),
            Tier::Static => Ok(Box::new(StaticListing::new(std::io::stdout(), features))),
        }
    }
}
