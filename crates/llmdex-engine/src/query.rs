use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use llmdex_types::{CatalogueEntry, EntryId};
use serde::{Deserialize, Serialize};

use crate::sort::SortMode;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A boolean filter that can also be switched off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    /// Any → Yes → No → Any
    pub fn cycle(self) -> Self {
        match self {
            TriState::Any => TriState::Yes,
            TriState::Yes => TriState::No,
            TriState::No => TriState::Any,
        }
    }

    pub fn admits(self, value: bool) -> bool {
        match self {
            TriState::Any => true,
            TriState::Yes => value,
            TriState::No => !value,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "*" | "all" => Some(TriState::Any),
            "y" | "yes" | "true" | "on" | "1" => Some(TriState::Yes),
            "n" | "no" | "false" | "off" | "0" => Some(TriState::No),
            _ => None,
        }
    }

    pub fn is_any(self) -> bool {
        self == TriState::Any
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Any => write!(f, "any"),
            TriState::Yes => write!(f, "yes"),
            TriState::No => write!(f, "no"),
        }
    }
}

/// Boolean capability a tri-state filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    ToolCall,
    Reasoning,
    OpenWeights,
    Temperature,
}

impl Flag {
    pub fn read(self, entry: &CatalogueEntry) -> bool {
        match self {
            Flag::ToolCall => entry.capabilities.tool_call,
            Flag::Reasoning => entry.capabilities.reasoning,
            Flag::OpenWeights => entry.capabilities.open_weights,
            Flag::Temperature => entry.capabilities.temperature,
        }
    }
}

/// Structural filters. Every slot is a conjunctive predicate; an unset slot
/// admits everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub provider: Option<String>,
    pub tool_call: TriState,
    pub reasoning: TriState,
    pub open_weights: TriState,
    pub temperature: TriState,
    pub min_context: Option<u64>,
    pub max_input_cost: Option<f64>,
    pub max_output_cost: Option<f64>,
    pub modalities_in: BTreeSet<String>,
    pub modalities_out: BTreeSet<String>,
}

/// One active filter slot, evaluated against a single entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate<'a> {
    Provider(&'a str),
    Flag(Flag, TriState),
    MinContext(u64),
    MaxInputCost(f64),
    MaxOutputCost(f64),
    ModalitiesIn(&'a BTreeSet<String>),
    ModalitiesOut(&'a BTreeSet<String>),
}

impl Predicate<'_> {
    /// Missing numeric data never satisfies a bound.
    pub fn admits(&self, entry: &CatalogueEntry) -> bool {
        match *self {
            Predicate::Provider(id) => entry.provider_id == id,
            Predicate::Flag(flag, state) => state.admits(flag.read(entry)),
            Predicate::MinContext(min) => entry.limit.context.is_some_and(|c| c >= min),
            Predicate::MaxInputCost(max) => entry.cost.input.is_some_and(|c| c <= max),
            Predicate::MaxOutputCost(max) => entry.cost.output.is_some_and(|c| c <= max),
            Predicate::ModalitiesIn(tags) => tags.iter().all(|t| entry.modalities.accepts(t)),
            Predicate::ModalitiesOut(tags) => tags.iter().all(|t| entry.modalities.produces(t)),
        }
    }
}

impl Filters {
    /// The set slots, in no meaningful order.
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::new();
        if let Some(provider) = &self.provider {
            predicates.push(Predicate::Provider(provider));
        }
        for (flag, state) in [
            (Flag::ToolCall, self.tool_call),
            (Flag::Reasoning, self.reasoning),
            (Flag::OpenWeights, self.open_weights),
            (Flag::Temperature, self.temperature),
        ] {
            if !state.is_any() {
                predicates.push(Predicate::Flag(flag, state));
            }
        }
        if let Some(min) = self.min_context {
            predicates.push(Predicate::MinContext(min));
        }
        if let Some(max) = self.max_input_cost {
            predicates.push(Predicate::MaxInputCost(max));
        }
        if let Some(max) = self.max_output_cost {
            predicates.push(Predicate::MaxOutputCost(max));
        }
        if !self.modalities_in.is_empty() {
            predicates.push(Predicate::ModalitiesIn(&self.modalities_in));
        }
        if !self.modalities_out.is_empty() {
            predicates.push(Predicate::ModalitiesOut(&self.modalities_out));
        }
        predicates
    }

    pub fn admits(&self, entry: &CatalogueEntry) -> bool {
        self.predicates().iter().all(|p| p.admits(entry))
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Short human summary of the active slots, e.g. `provider=acme tool=yes ctx>=8000`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(provider) = &self.provider {
            parts.push(format!("provider={}", provider));
        }
        for (name, state) in [
            ("tool", self.tool_call),
            ("reasoning", self.reasoning),
            ("weights", self.open_weights),
            ("temp", self.temperature),
        ] {
            if !state.is_any() {
                parts.push(format!("{}={}", name, state));
            }
        }
        if let Some(min) = self.min_context {
            parts.push(format!("ctx>={}", min));
        }
        if let Some(max) = self.max_input_cost {
            parts.push(format!("in<=${}", max));
        }
        if let Some(max) = self.max_output_cost {
            parts.push(format!("out<=${}", max));
        }
        if !self.modalities_in.is_empty() {
            parts.push(format!("in:{}", join_tags(&self.modalities_in)));
        }
        if !self.modalities_out.is_empty() {
            parts.push(format!("out:{}", join_tags(&self.modalities_out)));
        }
        parts.join(" ")
    }
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join("+")
}

/// Mutable query state for one session.
///
/// Any combination of values is valid; impossible combinations simply
/// derive an empty view.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub filters: Filters,
    pub sort: SortMode,
    pub selection: Option<EntryId>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Filters::default(),
            sort: SortMode::Default,
            selection: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_count(&self, view_len: usize) -> usize {
        view_len.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Keep `page_index` inside `[0, page_count - 1]`.
    pub fn clamp_page(&mut self, view_len: usize) {
        let last = self.page_count(view_len) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    /// Row positions of the current page within a view of `view_len` rows.
    pub fn page_range(&self, view_len: usize) -> Range<usize> {
        let size = self.page_size.max(1);
        let start = (self.page_index * size).min(view_len);
        let end = (start + size).min(view_len);
        start..end
    }
}

/// Parse a cost ceiling. Anything that is not a finite, non-negative number
/// (an optional leading `$` is allowed) yields `None`, meaning "unset".
pub fn parse_cost(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches('$');
    let value: f64 = trimmed.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a context floor such as `8000`, `128k` or `1m`. Invalid input yields `None`.
pub fn parse_context(input: &str) -> Option<u64> {
    let trimmed = input.trim().to_ascii_lowercase().replace('_', "");
    let (digits, multiplier) = match trimmed.chars().last()? {
        'k' => (&trimmed[..trimmed.len() - 1], 1_000),
        'm' => (&trimmed[..trimmed.len() - 1], 1_000_000),
        _ => (trimmed.as_str(), 1),
    };
    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier as f64).round() as u64)
}

/// Split a list of modality tags on commas, `+` or whitespace.
pub fn parse_tags(input: &str) -> BTreeSet<String> {
    input
        .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc, entry};

    #[test]
    fn test_tristate_cycles_through_all_values() {
        let s = TriState::Any;
        assert_eq!(s.cycle(), TriState::Yes);
        assert_eq!(s.cycle().cycle(), TriState::No);
        assert_eq!(s.cycle().cycle().cycle(), TriState::Any);
    }

    #[test]
    fn test_tristate_admits() {
        assert!(TriState::Any.admits(true) && TriState::Any.admits(false));
        assert!(TriState::Yes.admits(true) && !TriState::Yes.admits(false));
        assert!(TriState::No.admits(false) && !TriState::No.admits(true));
        assert_eq!(TriState::parse("Y"), Some(TriState::Yes));
        assert_eq!(TriState::parse("maybe"), None);
    }

    #[test]
    fn test_cost_ceiling_never_admits_unknown_cost() {
        let free_unknown = entry("Acme", "unknown");
        let filters = Filters {
            max_input_cost: Some(f64::MAX),
            ..Default::default()
        };
        assert!(!filters.admits(&free_unknown));

        let filters = Filters {
            max_output_cost: Some(1_000_000.0),
            ..Default::default()
        };
        assert!(!filters.admits(&free_unknown));
    }

    #[test]
    fn test_min_context_never_admits_unknown_context() {
        let filters = Filters {
            min_context: Some(0),
            ..Default::default()
        };
        assert!(!filters.admits(&entry("Acme", "unknown")));
    }

    #[test]
    fn test_modalities_are_supersets() {
        let mut e = entry("Acme", "vision");
        e.modalities.input = vec!["text".to_string(), "image".to_string()];
        let mut filters = Filters {
            modalities_in: parse_tags("image,text"),
            ..Default::default()
        };
        assert!(filters.admits(&e));

        filters.modalities_in.insert("audio".to_string());
        assert!(!filters.admits(&e));
    }

    #[test]
    fn test_empty_filters_admit_everything() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert!(abc().iter().all(|e| filters.admits(e)));
    }

    #[test]
    fn test_summary_lists_active_slots() {
        let filters = Filters {
            provider: Some("acme".to_string()),
            tool_call: TriState::Yes,
            min_context: Some(8000),
            ..Default::default()
        };
        assert_eq!(filters.summary(), "provider=acme tool=yes ctx>=8000");
    }

    #[test]
    fn test_parse_cost_rejects_garbage() {
        assert_eq!(parse_cost("3"), Some(3.0));
        assert_eq!(parse_cost(" $0.5 "), Some(0.5));
        assert_eq!(parse_cost("cheap"), None);
        assert_eq!(parse_cost("-1"), None);
        assert_eq!(parse_cost("NaN"), None);
        assert_eq!(parse_cost(""), None);
    }

    #[test]
    fn test_parse_context_suffixes() {
        assert_eq!(parse_context("8000"), Some(8000));
        assert_eq!(parse_context("128k"), Some(128_000));
        assert_eq!(parse_context("1M"), Some(1_000_000));
        assert_eq!(parse_context("1_000"), Some(1000));
        assert_eq!(parse_context("lots"), None);
        assert_eq!(parse_context(""), None);
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags("Text, image+audio");
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["audio", "image", "text"]
        );
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_page_clamping() {
        let mut state = QueryState::new().with_page_size(10);
        state.page_index = 7;
        state.clamp_page(25);
        assert_eq!(state.page_index, 2);
        assert_eq!(state.page_range(25), 20..25);

        state.clamp_page(0);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_range(0), 0..0);
    }

    #[test]
    fn test_page_size_is_never_zero() {
        let mut state = QueryState::new();
        state.set_page_size(0);
        assert_eq!(state.page_size, 1);
    }
}
