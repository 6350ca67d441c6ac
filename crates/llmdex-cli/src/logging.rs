//! Tracing subscriber setup.
//!
//! Directive priority (highest first): `LLMDEX_LOG`, `RUST_LOG`, `--log-level`.
//! Logs go to stderr unless `--log-file` is given; the rich UI owns the
//! terminal, so long sessions are best logged to a file.

use crate::types::LogLevel;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let filter = build_filter(level);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        None => {
            let use_ansi = std::io::stderr().is_terminal();
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(false)
                .without_time()
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}

fn build_filter(level: LogLevel) -> EnvFilter {
    for var in ["LLMDEX_LOG", "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var)
            && let Ok(filter) = EnvFilter::try_new(&directives)
        {
            return filter;
        }
    }
    EnvFilter::new(level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_receives_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llmdex.log");

        init(LogLevel::Info, Some(&path)).unwrap();
        tracing::info!(rows = 3, "view derived");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("view derived"));
    }
}
