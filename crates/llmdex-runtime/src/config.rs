use crate::source::{DEFAULT_SOURCE, Source};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which presentation tier a session should start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    Rich,
    Table,
    #[default]
    Auto,
}

impl FromStr for UiMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich" | "tui" => Ok(UiMode::Rich),
            "table" | "prompt" => Ok(UiMode::Table),
            "auto" => Ok(UiMode::Auto),
            other => Err(format!("unknown ui mode: {}", other)),
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiMode::Rich => write!(f, "rich"),
            UiMode::Table => write!(f, "table"),
            UiMode::Auto => write!(f, "auto"),
        }
    }
}

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ui: Option<UiMode>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub keep_terminal_identity: Option<bool>,
}

impl Config {
    /// Load from `path`; a missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("llmdex").join("config.toml"))
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub ui: Option<UiMode>,
    pub page_size: Option<usize>,
    pub keep_terminal_identity: bool,
    pub config_path: Option<PathBuf>,
}

/// The environment variables llmdex reads, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub source: Option<String>,
    pub ui: Option<String>,
    pub keep_term: Option<String>,
    pub config: Option<String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            source: read("LLMDEX_SOURCE"),
            ui: read("LLMDEX_UI"),
            keep_term: read("LLMDEX_KEEP_TERM"),
            config: read("LLMDEX_CONFIG"),
        }
    }
}

/// Settings after applying precedence: flag > environment > file > default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub source: Source,
    pub ui: UiMode,
    pub page_size: usize,
    pub timeout: Duration,
    pub keep_terminal_identity: bool,
}

impl ResolvedConfig {
    /// Read the config file named by the flag, the environment, or the
    /// default location, then resolve.
    pub fn load(overrides: &Overrides, env: &EnvSnapshot) -> Result<Self> {
        let path = overrides
            .config_path
            .clone()
            .or_else(|| env.config.as_ref().map(PathBuf::from))
            .or_else(Config::default_path);

        let file = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading config file");
                Config::load_from(&path)?
            }
            None => Config::default(),
        };

        Ok(Self::resolve(overrides, env, &file))
    }

    pub fn resolve(overrides: &Overrides, env: &EnvSnapshot, file: &Config) -> Self {
        let source = overrides
            .source
            .clone()
            .or_else(|| env.source.clone())
            .or_else(|| file.source.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let env_ui = env.ui.as_deref().and_then(|raw| match raw.parse::<UiMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!("ignoring LLMDEX_UI: {}", e);
                None
            }
        });
        let ui = overrides.ui.or(env_ui).or(file.ui).unwrap_or_default();

        let page_size = overrides
            .page_size
            .or(file.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1);

        let keep_terminal_identity = overrides.keep_terminal_identity
            || env.keep_term.as_deref().is_some_and(is_truthy)
            || file.keep_terminal_identity.unwrap_or(false);

        Self {
            source: Source::parse(&source),
            ui,
            page_size,
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            keep_terminal_identity,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
