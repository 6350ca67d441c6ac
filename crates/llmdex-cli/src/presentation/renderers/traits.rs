use std::fmt;

use crate::presentation::guard::Tier;
use crate::session::SessionController;

/// A presentation tier bound to the terminal.
///
/// `run` drives the session until it terminates. An `Err` means the tier
/// broke; the session is left intact so a lower tier can pick it up.
pub trait Frontend {
    fn tier(&self) -> Tier;

    fn run(&mut self, session: &mut SessionController) -> Result<(), PresentationError>;
}

#[derive(Debug)]
pub enum PresentationError {
    /// The tier cannot work in this environment.
    Unavailable(String),
    Io(std::io::Error),
}

impl fmt::Display for PresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationError::Unavailable(reason) => write!(f, "unavailable: {}", reason),
            PresentationError::Io(err) => write!(f, "terminal I/O error: {}", err),
        }
    }
}

impl std::error::Error for PresentationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresentationError::Io(err) => Some(err),
            PresentationError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::Io(err)
    }
}
