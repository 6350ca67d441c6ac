use crate::types::{LogLevel, SortArg, UiArg};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llmdex")]
#[command(about = "Explore the AI model catalogue: search, filter, sort and compare models", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Fuzzy search on model name and id")]
    pub search: Option<String>,

    #[arg(short, long, help = "Only models from this provider id")]
    pub provider: Option<String>,

    #[arg(long, help = "Only models that support tool calling")]
    pub tool: bool,

    #[arg(long, help = "Only models with reasoning support")]
    pub reasoning: bool,

    #[arg(long, help = "Only models with open weights")]
    pub open_weights: bool,

    #[arg(long, value_name = "TOKENS", help = "Minimum context window (e.g. 128000 or 128k)", value_parser = parse_context_arg)]
    pub min_context: Option<u64>,

    #[arg(long, value_name = "USD", help = "Maximum input cost per million tokens")]
    pub max_input_cost: Option<f64>,

    #[arg(long, value_name = "USD", help = "Maximum output cost per million tokens")]
    pub max_output_cost: Option<f64>,

    #[arg(long, help = "Sort order")]
    pub sort: Option<SortArg>,

    #[arg(long, conflicts_with = "compact", help = "Print matching models as JSON and exit")]
    pub json: bool,

    #[arg(long, help = "Print one `provider:name:id` line per model and exit")]
    pub compact: bool,

    #[arg(long, conflicts_with_all = ["json", "compact"], help = "Print matching models as a table and exit")]
    pub list: bool,

    #[arg(long, value_name = "N", help = "Maximum rows for --json/--compact/--list")]
    pub limit: Option<usize>,

    #[arg(long, help = "Interactive UI: rich, table or auto [env: LLMDEX_UI]")]
    pub ui: Option<UiArg>,

    #[arg(long, value_name = "URL|PATH", help = "Catalogue location [env: LLMDEX_SOURCE]")]
    pub source: Option<String>,

    #[arg(long, value_name = "PATH", help = "Config file [env: LLMDEX_CONFIG]")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "N", help = "Rows per page in the table UI")]
    pub page_size: Option<usize>,

    #[arg(long, help = "Trust the terminal's identity; never start the rich UI in reduced mode [env: LLMDEX_KEEP_TERM]")]
    pub keep_term: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, value_name = "PATH", help = "Write logs to a file instead of stderr")]
    pub log_file: Option<PathBuf>,
}

fn parse_context_arg(raw: &str) -> Result<u64, String> {
    llmdex_engine::parse_context(raw).ok_or_else(|| format!("invalid token count: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_and_compact_conflict() {
        let result = Cli::try_parse_from(["llmdex", "--json", "--compact"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_context_accepts_suffix() {
        let cli = Cli::try_parse_from(["llmdex", "--min-context", "128k", "--compact"]).unwrap();
        assert_eq!(cli.min_context, Some(128_000));
        assert!(cli.compact);
    }
}
