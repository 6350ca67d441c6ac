use std::fmt;

/// Result type for llmdex-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur before a session starts
#[derive(Debug)]
pub enum Error {
    /// The catalogue could not be reached or read
    SourceUnavailable { location: String, reason: String },

    /// The catalogue server answered with a non-success status
    BadStatus { location: String, status: u16 },

    /// IO operation failed
    Io(std::io::Error),

    /// Catalogue body is not valid JSON
    Json(serde_json::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable { location, reason } => {
                write!(f, "Catalogue unavailable at {}: {}", location, reason)
            }
            Error::BadStatus { location, status } => {
                write!(f, "Catalogue request to {} failed with HTTP {}", location, status)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Catalogue is not valid JSON: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::SourceUnavailable { .. } | Error::BadStatus { .. } | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
