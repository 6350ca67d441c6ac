use super::args::Cli;
use super::handlers;
use crate::presentation::OutputFormat;
use anyhow::Result;
use llmdex_engine::{QueryState, TriState};
use llmdex_runtime::{EnvSnapshot, Overrides, ResolvedConfig};

pub fn run(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        source: cli.source.clone(),
        ui: cli.ui.map(Into::into),
        page_size: cli.page_size,
        keep_terminal_identity: cli.keep_term,
        config_path: cli.config.clone(),
    };
    let config = ResolvedConfig::load(&overrides, &EnvSnapshot::capture())?;
    tracing::debug!(source = %config.source, ui = %config.ui, "configuration resolved");

    let query = seed_query(&cli, config.page_size);

    match output_format(&cli) {
        Some(format) => handlers::list::handle(&config, query, format, cli.limit),
        None => handlers::browse::handle(&config, query),
    }
}

fn output_format(cli: &Cli) -> Option<OutputFormat> {
    if cli.json {
        Some(OutputFormat::Json)
    } else if cli.compact {
        Some(OutputFormat::Compact)
    } else if cli.list {
        Some(OutputFormat::Table)
    } else {
        None
    }
}

/// The query both paths start from. Flags only ever narrow the view.
fn seed_query(cli: &Cli, page_size: usize) -> QueryState {
    let mut query = QueryState::new().with_page_size(page_size);
    query.search = cli.search.clone().unwrap_or_default();

    let filters = &mut query.filters;
    filters.provider = cli
        .provider
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_ascii_lowercase);
    let require = |flag: bool| if flag { TriState::Yes } else { TriState::Any };
    filters.tool_call = require(cli.tool);
    filters.reasoning = require(cli.reasoning);
    filters.open_weights = require(cli.open_weights);
    filters.min_context = cli.min_context;
    filters.max_input_cost = cli.max_input_cost.filter(|c| c.is_finite() && *c >= 0.0);
    filters.max_output_cost = cli.max_output_cost.filter(|c| c.is_finite() && *c >= 0.0);

    if let Some(sort) = cli.sort {
        query.sort = sort.into();
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use llmdex_engine::{Direction, SortKey, SortMode};

    #[test]
    fn test_flags_seed_the_query() {
        let cli = Cli::try_parse_from([
            "llmdex",
            "-s",
            "sonnet",
            "-p",
            "Anthropic",
            "--tool",
            "--max-input-cost",
            "5",
            "--sort",
            "input-cost",
        ])
        .unwrap();
        let query = seed_query(&cli, 15);

        assert_eq!(query.search, "sonnet");
        assert_eq!(query.filters.provider.as_deref(), Some("anthropic"));
        assert_eq!(query.filters.tool_call, TriState::Yes);
        assert_eq!(query.filters.reasoning, TriState::Any);
        assert_eq!(query.filters.max_input_cost, Some(5.0));
        assert_eq!(query.sort, SortMode::By(SortKey::InputCost, Direction::Asc));
        assert_eq!(query.page_size, 15);
        assert_eq!(output_format(&cli), None);
    }

    #[test]
    fn test_output_flags_select_format() {
        let cli = Cli::try_parse_from(["llmdex", "--list"]).unwrap();
        assert_eq!(output_format(&cli), Some(OutputFormat::Table));
        let cli = Cli::try_parse_from(["llmdex", "--compact"]).unwrap();
        assert_eq!(output_format(&cli), Some(OutputFormat::Compact));
    }
}
