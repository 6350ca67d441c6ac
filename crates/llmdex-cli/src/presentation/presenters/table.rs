use llmdex_types::CatalogueEntry;

use crate::presentation::formatters::{
    format_cost, format_tokens, join_tags, or_missing, yes_no,
};

/// Column set shared by `--list`, the prompt loop and the static listing.
pub const FULL_COLUMNS: [&str; 19] = [
    "PROVIDER",
    "NAME",
    "PROVIDER ID",
    "MODEL ID",
    "TOOL",
    "REASONING",
    "INPUT",
    "OUTPUT",
    "IN $/M",
    "OUT $/M",
    "CACHE R",
    "CACHE W",
    "CONTEXT",
    "MAX OUT",
    "TEMP",
    "WEIGHTS",
    "KNOWLEDGE",
    "RELEASE",
    "UPDATED",
];

pub fn full_row(entry: &CatalogueEntry) -> Vec<String> {
    vec![
        entry.provider_name.clone(),
        entry.model_name.clone(),
        entry.provider_id.clone(),
        entry.model_id.clone(),
        yes_no(entry.capabilities.tool_call).to_string(),
        yes_no(entry.capabilities.reasoning).to_string(),
        join_tags(&entry.modalities.input),
        join_tags(&entry.modalities.output),
        format_cost(entry.cost.input),
        format_cost(entry.cost.output),
        format_cost(entry.cost.cache_read),
        format_cost(entry.cost.cache_write),
        format_tokens(entry.limit.context),
        format_tokens(entry.limit.output),
        yes_no(entry.capabilities.temperature).to_string(),
        if entry.capabilities.open_weights { "open" } else { "closed" }.to_string(),
        or_missing(entry.knowledge.as_deref()),
        or_missing(entry.release_date.as_deref()),
        or_missing(entry.last_updated.as_deref()),
    ]
}

/// `provider:name:id`
pub fn compact_line(entry: &CatalogueEntry) -> String {
    format!(
        "{}:{}:{}",
        entry.provider_id, entry.model_name, entry.model_id
    )
}
