//! Detail projection of a single entry.
//!
//! Produces fixed sections in a fixed order. Both the rich pane and the
//! prompt loop render these; neither keeps extra state about the entry.

use llmdex_types::CatalogueEntry;

use crate::presentation::formatters::{
    format_cost, format_tokens_exact, join_tags, or_missing, yes_no,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl DetailSection {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            fields: Vec::new(),
        }
    }

    fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }
}

pub struct EntryDetail {
    pub heading: String,
    pub id: String,
    pub sections: Vec<DetailSection>,
}

pub fn present_detail(entry: &CatalogueEntry) -> EntryDetail {
    let caps = &entry.capabilities;
    let cost = |value: Option<f64>| match value {
        Some(_) => format!("${} / 1M", format_cost(value)),
        None => format_cost(None),
    };

    let sections = vec![
        DetailSection::new("Capabilities")
            .field("Tool calling", yes_no(caps.tool_call))
            .field("Reasoning", yes_no(caps.reasoning))
            .field("Attachments", yes_no(caps.attachment))
            .field("Temperature", yes_no(caps.temperature))
            .field("Open weights", yes_no(caps.open_weights)),
        DetailSection::new("Modalities")
            .field("Input", join_tags(&entry.modalities.input))
            .field("Output", join_tags(&entry.modalities.output)),
        DetailSection::new("Costs")
            .field("Input", cost(entry.cost.input))
            .field("Output", cost(entry.cost.output))
            .field("Cache read", cost(entry.cost.cache_read))
            .field("Cache write", cost(entry.cost.cache_write)),
        DetailSection::new("Limits")
            .field("Context", format_tokens_exact(entry.limit.context))
            .field("Output", format_tokens_exact(entry.limit.output)),
        DetailSection::new("Metadata")
            .field("Provider", format!("{} ({})", entry.provider_name, entry.provider_id))
            .field("Knowledge", or_missing(entry.knowledge.as_deref()))
            .field("Released", or_missing(entry.release_date.as_deref()))
            .field("Updated", or_missing(entry.last_updated.as_deref())),
    ];

    EntryDetail {
        heading: entry.model_name.clone(),
        id: entry.model_id.clone(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmdex_testing::fixtures::sample_entry;

    #[test]
    fn test_sections_are_fixed() {
        let detail = present_detail(&sample_entry("acme", "rocket"));
        let titles: Vec<_> = detail.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Capabilities", "Modalities", "Costs", "Limits", "Metadata"]
        );
        assert_eq!(detail.id, "rocket");
    }

    #[test]
    fn test_unknown_cost_is_placeholder() {
        let mut entry = sample_entry("acme", "rocket");
        entry.cost.input = None;
        entry.cost.output = Some(15.0);
        let detail = present_detail(&entry);
        let costs = &detail.sections[2];
        assert_eq!(costs.fields[0], ("Input", "-".to_string()));
        assert_eq!(costs.fields[1], ("Output", "$15 / 1M".to_string()));
    }
}
