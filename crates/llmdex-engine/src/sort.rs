use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use llmdex_types::CatalogueEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Provider,
    InputCost,
    OutputCost,
    Context,
    Release,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Ordering applied after filtering. `Default` keeps the filter/search order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Default,
    By(SortKey, Direction),
}

use Direction::{Asc, Desc};
use SortKey::{Context, InputCost, OutputCost, Provider, Release, Updated};

impl SortMode {
    /// Cycle offered by the rich UI.
    pub const BASIC: [SortMode; 5] = [
        SortMode::Default,
        SortMode::By(Provider, Asc),
        SortMode::By(InputCost, Asc),
        SortMode::By(OutputCost, Asc),
        SortMode::By(Context, Desc),
    ];

    /// Cycle offered by the prompt UI: both directions per field plus dates.
    pub const EXTENDED: [SortMode; 13] = [
        SortMode::Default,
        SortMode::By(Provider, Asc),
        SortMode::By(Provider, Desc),
        SortMode::By(InputCost, Asc),
        SortMode::By(InputCost, Desc),
        SortMode::By(OutputCost, Asc),
        SortMode::By(OutputCost, Desc),
        SortMode::By(Context, Desc),
        SortMode::By(Context, Asc),
        SortMode::By(Release, Desc),
        SortMode::By(Release, Asc),
        SortMode::By(Updated, Desc),
        SortMode::By(Updated, Asc),
    ];

    /// Next mode in `cycle`, wrapping around. A mode missing from the
    /// cycle restarts it.
    pub fn next_in(self, cycle: &[SortMode]) -> SortMode {
        match cycle.iter().position(|m| *m == self) {
            Some(i) => cycle[(i + 1) % cycle.len()],
            None => cycle.first().copied().unwrap_or_default(),
        }
    }

    /// Comparator for this mode.
    ///
    /// Unknown values sink to the bottom in either direction; strings
    /// (names and dates) compare lexically.
    pub fn compare(self, a: &CatalogueEntry, b: &CatalogueEntry) -> Ordering {
        let SortMode::By(key, direction) = self else {
            return Ordering::Equal;
        };
        match key {
            Provider => direction.apply(a.provider_name.cmp(&b.provider_name)),
            InputCost => nulls_last(a.cost.input, b.cost.input, direction),
            OutputCost => nulls_last(a.cost.output, b.cost.output, direction),
            Context => nulls_last(a.limit.context, b.limit.context, direction),
            Release => nulls_last(
                a.release_date.as_deref(),
                b.release_date.as_deref(),
                direction,
            ),
            Updated => nulls_last(
                a.last_updated.as_deref(),
                b.last_updated.as_deref(),
                direction,
            ),
        }
    }

    /// Stable machine name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::By(Provider, Asc) => "provider",
            SortMode::By(Provider, Desc) => "provider-desc",
            SortMode::By(InputCost, Asc) => "input-cost",
            SortMode::By(InputCost, Desc) => "input-cost-desc",
            SortMode::By(OutputCost, Asc) => "output-cost",
            SortMode::By(OutputCost, Desc) => "output-cost-desc",
            SortMode::By(Context, Desc) => "context",
            SortMode::By(Context, Asc) => "context-asc",
            SortMode::By(Release, Desc) => "newest",
            SortMode::By(Release, Asc) => "oldest",
            SortMode::By(Updated, Desc) => "updated",
            SortMode::By(Updated, Asc) => "updated-oldest",
        }
    }
}

fn nulls_last<T: PartialOrd>(a: Option<T>, b: Option<T>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Default => "default",
            SortMode::By(Provider, Asc) => "provider (a-z)",
            SortMode::By(Provider, Desc) => "provider (z-a)",
            SortMode::By(InputCost, Asc) => "input cost (low-high)",
            SortMode::By(InputCost, Desc) => "input cost (high-low)",
            SortMode::By(OutputCost, Asc) => "output cost (low-high)",
            SortMode::By(OutputCost, Desc) => "output cost (high-low)",
            SortMode::By(Context, Desc) => "context (largest)",
            SortMode::By(Context, Asc) => "context (smallest)",
            SortMode::By(Release, Desc) => "release (newest)",
            SortMode::By(Release, Asc) => "release (oldest)",
            SortMode::By(Updated, Desc) => "updated (newest)",
            SortMode::By(Updated, Asc) => "updated (oldest)",
        };
        f.write_str(label)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(mode) = SortMode::EXTENDED
            .iter()
            .find(|m| m.name() == normalized)
        {
            return Ok(*mode);
        }
        match normalized.as_str() {
            "none" | "" => Ok(SortMode::Default),
            "provider-asc" => Ok(SortMode::By(Provider, Asc)),
            "input-cost-asc" | "input" => Ok(SortMode::By(InputCost, Asc)),
            "output-cost-asc" | "output" => Ok(SortMode::By(OutputCost, Asc)),
            "context-desc" | "ctx" => Ok(SortMode::By(Context, Desc)),
            "release" | "release-desc" => Ok(SortMode::By(Release, Desc)),
            "release-asc" => Ok(SortMode::By(Release, Asc)),
            "updated-desc" => Ok(SortMode::By(Updated, Desc)),
            "updated-asc" => Ok(SortMode::By(Updated, Asc)),
            _ => Err(format!("unknown sort mode: {}", s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc, entry};

    fn sorted_ids(mode: SortMode, entries: &mut [CatalogueEntry]) -> Vec<String> {
        entries.sort_by(|a, b| mode.compare(a, b));
        entries.iter().map(|e| e.model_id.clone()).collect()
    }

    #[test]
    fn test_input_cost_ascending_puts_unknown_last() {
        let mut entries = abc();
        assert_eq!(
            sorted_ids(SortMode::By(InputCost, Asc), &mut entries),
            vec!["a", "c", "b"]
        );
    }

    #[test]
    fn test_unknown_sinks_in_descending_too() {
        let mut entries = abc();
        assert_eq!(
            sorted_ids(SortMode::By(InputCost, Desc), &mut entries),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn test_context_descending() {
        let mut entries = abc();
        assert_eq!(
            sorted_ids(SortMode::By(Context, Desc), &mut entries),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_dates_compare_lexically() {
        let mut old = entry("Acme", "old");
        old.release_date = Some("2023-01-15".to_string());
        let mut new = entry("Acme", "new");
        new.release_date = Some("2024-06".to_string());
        let undated = entry("Acme", "undated");

        let mut entries = vec![undated, old, new];
        assert_eq!(
            sorted_ids(SortMode::By(Release, Desc), &mut entries),
            vec!["new", "old", "undated"]
        );
        assert_eq!(
            sorted_ids(SortMode::By(Release, Asc), &mut entries),
            vec!["old", "new", "undated"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut entries = vec![
            entry("Acme", "first"),
            entry("Zeta", "middle"),
            entry("Acme", "second"),
            entry("Acme", "third"),
        ];
        assert_eq!(
            sorted_ids(SortMode::By(Provider, Asc), &mut entries),
            vec!["first", "second", "third", "middle"]
        );
    }

    #[test]
    fn test_default_mode_keeps_order() {
        let mut entries = abc();
        entries.reverse();
        assert_eq!(
            sorted_ids(SortMode::Default, &mut entries),
            vec!["c", "b", "a"]
        );
    }

    #[test]
    fn test_basic_cycle_wraps() {
        let mut mode = SortMode::Default;
        let mut seen = Vec::new();
        for _ in 0..SortMode::BASIC.len() {
            mode = mode.next_in(&SortMode::BASIC);
            seen.push(mode);
        }
        assert_eq!(seen.last(), Some(&SortMode::Default));
        assert_eq!(seen[0], SortMode::By(Provider, Asc));
        assert_eq!(seen[3], SortMode::By(Context, Desc));
    }

    #[test]
    fn test_extended_mode_outside_basic_restarts_cycle() {
        let mode = SortMode::By(Release, Asc);
        assert_eq!(mode.next_in(&SortMode::BASIC), SortMode::Default);
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for mode in SortMode::EXTENDED {
            assert_eq!(mode.name().parse::<SortMode>(), Ok(mode));
        }
        assert_eq!("Input_Cost".parse::<SortMode>(), Ok(SortMode::By(InputCost, Asc)));
        assert!("price".parse::<SortMode>().is_err());
    }
}
