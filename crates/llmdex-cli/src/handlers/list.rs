use std::io::Write;

use anyhow::Result;
use llmdex_engine::{CatalogueStore, QueryState, derive};
use llmdex_runtime::ResolvedConfig;
use llmdex_types::CatalogueEntry;

use crate::presentation::{ConsoleRenderer, OutputFormat};

/// One-shot output: load, derive once, print, exit.
pub fn handle(
    config: &ResolvedConfig,
    query: QueryState,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    let store = CatalogueStore::new(config.source.load(config.timeout)?);

    if let Some(provider) = &query.filters.provider
        && !store.has_provider(provider)
    {
        tracing::warn!(%provider, "no such provider in the catalogue");
    }

    let view = derive(&store, &query);
    if view.is_truncated() {
        tracing::warn!(
            "showing {} of {} matching models; narrow the query to see the rest",
            view.len(),
            view.matched()
        );
    }

    let rows: Vec<&CatalogueEntry> = view
        .entries(&store)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let mut out = std::io::stdout().lock();
    ConsoleRenderer::detect().render(&mut out, format, &rows)?;
    out.flush()?;
    Ok(())
}
