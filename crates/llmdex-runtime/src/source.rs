use crate::normalize::parse_catalogue;
use crate::{Error, Result};
use llmdex_types::CatalogueEntry;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const DEFAULT_SOURCE: &str = "https://models.dev/api.json";

/// Where the catalogue comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(String),
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` locations are fetched; anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Http(trimmed.to_string())
        } else {
            Source::File(PathBuf::from(trimmed))
        }
    }

    /// Read the raw catalogue body. One attempt, no retry.
    pub fn fetch(&self, timeout: Duration) -> Result<String> {
        match self {
            Source::Http(url) => fetch_http(url, timeout),
            Source::File(path) => {
                std::fs::read_to_string(path).map_err(|e| Error::SourceUnavailable {
                    location: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Fetch and normalize the catalogue.
    pub fn load(&self, timeout: Duration) -> Result<Vec<CatalogueEntry>> {
        let started = Instant::now();
        tracing::info!(source = %self, "fetching catalogue");

        let body = self.fetch(timeout)?;
        let entries = parse_catalogue(&body)?;

        tracing::info!(
            entries = entries.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalogue loaded"
        );
        Ok(entries)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch_http(url: &str, timeout: Duration) -> Result<String> {
    let unavailable = |reason: String| Error::SourceUnavailable {
        location: url.to_string(),
        reason,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("llmdex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| unavailable(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::BadStatus {
            location: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| unavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distinguishes_urls_from_paths() {
        assert_eq!(
            Source::parse("HTTPS://models.dev/api.json"),
            Source::Http("HTTPS://models.dev/api.json".to_string())
        );
        assert_eq!(
            Source::parse(" ./api.json "),
            Source::File(PathBuf::from("./api.json"))
        );
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("missing.json"));
        let err = source.load(Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(
            &path,
            r#"{"acme": {"name": "Acme", "models": {"m1": {"name": "Model One"}}}}"#,
        )
        .unwrap();

        let entries = Source::File(path).load(Duration::from_secs(1)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].model_name, "Model One");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(&path, "<html>oops</html>").unwrap();
        let err = Source::File(path).load(Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
