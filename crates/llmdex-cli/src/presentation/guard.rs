//! Terminal capability guard.
//!
//! Decides which presentation tier to start from before any UI is built,
//! then walks the fallback chain `Rich -> Prompt -> Static` until one tier
//! runs the session to completion. The chain only ever moves down.
//!
//! Signals come from a [`TerminalProfile`] captured once at startup and from
//! the resolved configuration; nothing here reads the environment directly.

use std::fmt;
use std::sync::LazyLock;

use is_terminal::IsTerminal;
use regex::Regex;

use llmdex_runtime::UiMode;

use crate::presentation::renderers::{Frontend, PresentationError};
use crate::session::SessionController;

static HOSTILE_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ghostty|kitty|wezterm|alacritty|foot").unwrap());

static MULTIPLEXER_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(screen|tmux)([.-]|$)").unwrap());

const HOSTILE_TERM_PROGRAMS: [&str; 4] = ["ghostty", "wezterm", "vscode", "apple_terminal"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Rich,
    Prompt,
    Static,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Rich => write!(f, "rich"),
            Tier::Prompt => write!(f, "prompt"),
            Tier::Static => write!(f, "static"),
        }
    }
}

/// Rendering features a tier may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFeatures {
    /// Box-drawing borders and symbol markers; ASCII otherwise.
    pub unicode: bool,
    pub color: bool,
    pub alternate_screen: bool,
}

impl RenderFeatures {
    pub const FULL: RenderFeatures = RenderFeatures {
        unicode: true,
        color: true,
        alternate_screen: true,
    };

    pub const REDUCED: RenderFeatures = RenderFeatures {
        unicode: false,
        color: false,
        alternate_screen: false,
    };

    /// Line-oriented output: colour only, never the alternate screen.
    pub fn text(color: bool) -> Self {
        RenderFeatures {
            unicode: true,
            color,
            alternate_screen: false,
        }
    }

    pub fn is_reduced(&self) -> bool {
        *self == Self::REDUCED
    }
}

impl fmt::Display for RenderFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reduced() {
            write!(f, "reduced")
        } else if *self == Self::FULL {
            write!(f, "full")
        } else {
            write!(
                f,
                "unicode={} color={} alt-screen={}",
                self.unicode, self.color, self.alternate_screen
            )
        }
    }
}

/// What the terminal says about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalProfile {
    pub term: Option<String>,
    pub term_program: Option<String>,
    pub stdin_tty: bool,
    pub stdout_tty: bool,
}

impl TerminalProfile {
    pub fn capture() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            term: read("TERM"),
            term_program: read("TERM_PROGRAM"),
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Why the rich tier cannot work at all, if it cannot.
    pub fn rich_blocker(&self) -> Option<String> {
        if !self.stdout_tty {
            return Some("stdout is not a terminal".to_string());
        }
        if !self.stdin_tty {
            return Some("stdin is not a terminal".to_string());
        }
        match self.term.as_deref() {
            None => Some("TERM is not set".to_string()),
            Some(term) if term.eq_ignore_ascii_case("dumb") => Some("TERM is dumb".to_string()),
            Some(_) => None,
        }
    }

    /// Why the prompt loop cannot work, if it cannot.
    pub fn prompt_blocker(&self) -> Option<String> {
        if !self.stdin_tty {
            return Some("stdin is not a terminal".to_string());
        }
        if !self.stdout_tty {
            return Some("stdout is not a terminal".to_string());
        }
        None
    }

    /// A terminal identity known to mis-report its capabilities.
    pub fn hostile_identity(&self) -> Option<String> {
        if let Some(term) = self.term.as_deref() {
            if HOSTILE_TERM.is_match(term) {
                return Some(format!("TERM={}", term));
            }
            if MULTIPLEXER_TERM.is_match(term) && !term.contains("256") {
                return Some(format!("TERM={} without 256 colours", term));
            }
        }
        if let Some(program) = self.term_program.as_deref()
            && HOSTILE_TERM_PROGRAMS
                .iter()
                .any(|p| p.eq_ignore_ascii_case(program.trim()))
        {
            return Some(format!("TERM_PROGRAM={}", program));
        }
        None
    }
}

/// Tiers to try, in order, and the feature set the rich tier starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPlan {
    pub chain: Vec<Tier>,
    pub rich_features: RenderFeatures,
    pub text_features: RenderFeatures,
}

/// Builds the frontend for a tier. Construction failures are reported as
/// `PresentationError` and move the guard along the chain.
pub trait TierFactory {
    fn build(
        &mut self,
        tier: Tier,
        features: RenderFeatures,
    ) -> Result<Box<dyn Frontend>, PresentationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierAttempt {
    pub tier: Tier,
    pub features: RenderFeatures,
    pub failure: Option<String>,
}

/// Outcome of a guarded session: which tier ended it and what failed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierReport {
    pub used: Option<Tier>,
    pub attempts: Vec<TierAttempt>,
}

impl TierReport {
    pub fn is_exhausted(&self) -> bool {
        self.used.is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TierAttempt> {
        self.attempts.iter().filter(|a| a.failure.is_some())
    }
}

pub struct TerminalCapabilityGuard {
    profile: TerminalProfile,
    ui: UiMode,
    keep_terminal_identity: bool,
}

impl TerminalCapabilityGuard {
    pub fn new(profile: TerminalProfile, ui: UiMode, keep_terminal_identity: bool) -> Self {
        Self {
            profile,
            ui,
            keep_terminal_identity,
        }
    }

    pub fn plan(&self) -> TierPlan {
        let mut chain = Vec::with_capacity(3);

        let rich = match self.ui {
            UiMode::Table => false,
            UiMode::Rich => true,
            UiMode::Auto => match self.profile.rich_blocker() {
                Some(reason) => {
                    tracing::debug!(%reason, "skipping rich tier");
                    false
                }
                None => true,
            },
        };
        if rich {
            chain.push(Tier::Rich);
        }

        match self.profile.prompt_blocker() {
            Some(reason) => tracing::debug!(%reason, "skipping prompt tier"),
            None => chain.push(Tier::Prompt),
        }
        chain.push(Tier::Static);

        let rich_features = match self.profile.hostile_identity() {
            Some(reason) if !self.keep_terminal_identity => {
                tracing::info!(%reason, "terminal identity is unreliable; starting with reduced features");
                RenderFeatures::REDUCED
            }
            _ => RenderFeatures::FULL,
        };

        TierPlan {
            chain,
            rich_features,
            text_features: RenderFeatures::text(self.profile.stdout_tty),
        }
    }

    /// Walk the chain until a tier runs the session to completion.
    ///
    /// A rich construction failure is retried once with reduced features.
    /// Any other failure moves to the next tier with the session untouched.
    pub fn run(&self, factory: &mut dyn TierFactory, session: &mut SessionController) -> TierReport {
        let plan = self.plan();
        let mut report = TierReport::default();

        for tier in plan.chain {
            let feature_sets: &[RenderFeatures] = match tier {
                Tier::Rich if plan.rich_features == RenderFeatures::FULL => {
                    &[RenderFeatures::FULL, RenderFeatures::REDUCED]
                }
                Tier::Rich => &[RenderFeatures::REDUCED],
                Tier::Prompt | Tier::Static => std::slice::from_ref(&plan.text_features),
            };

            for &features in feature_sets {
                let mut frontend = match factory.build(tier, features) {
                    Ok(frontend) => frontend,
                    Err(e) => {
                        tracing::warn!(%tier, %features, error = %e, "presentation tier failed to start");
                        report.attempts.push(TierAttempt {
                            tier,
                            features,
                            failure: Some(e.to_string()),
                        });
                        continue;
                    }
                };

                // Report what actually ran; a factory may hand back a simpler tier.
                let running = frontend.tier();
                tracing::debug!(tier = %running, %features, "presentation tier started");
                let outcome = frontend.run(session);
                drop(frontend);

                match outcome {
                    Ok(()) => {
                        report.attempts.push(TierAttempt {
                            tier: running,
                            features,
                            failure: None,
                        });
                        report.used = Some(running);
                        tracing::info!(tier = %running, %features, "session ended");
                        return report;
                    }
                    Err(e) => {
                        tracing::warn!(tier = %running, error = %e, "presentation tier failed");
                        report.attempts.push(TierAttempt {
                            tier: running,
                            features,
                            failure: Some(e.to_string()),
                        });
                        if session.is_terminated() {
                            report.used = Some(running);
                            return report;
                        }
                        break;
                    }
                }
            }
        }

        tracing::warn!("every presentation tier failed");
        report
    }
}
