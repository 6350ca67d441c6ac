use serde::{Deserialize, Serialize};

use crate::EntryId;

/// One model offered by one provider.
///
/// Entries are produced once by the catalogue loader and never mutated
/// afterwards. Every optional field is already normalized: malformed or
/// missing data shows up as `None`, `false` or an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub provider_id: String,
    pub provider_name: String,
    pub model_id: String,
    pub model_name: String,
    pub capabilities: Capabilities,
    pub modalities: Modalities,
    pub cost: Costs,
    pub limit: Limits,
    pub knowledge: Option<String>,
    pub release_date: Option<String>,
    pub last_updated: Option<String>,
}

impl CatalogueEntry {
    pub fn id(&self) -> EntryId {
        EntryId::new(&self.provider_id, &self.model_id)
    }

    /// Cheap identity check that avoids allocating an `EntryId`.
    pub fn has_id(&self, id: &EntryId) -> bool {
        self.provider_id == id.provider_id && self.model_id == id.model_id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub tool_call: bool,
    pub reasoning: bool,
    pub attachment: bool,
    pub temperature: bool,
    pub open_weights: bool,
}

/// Medium tags (`text`, `image`, `audio`, ...) accepted and produced by a model.
///
/// Tags are stored lowercased and deduplicated, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modalities {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

impl Modalities {
    pub fn accepts(&self, tag: &str) -> bool {
        self.input.iter().any(|t| t == tag)
    }

    pub fn produces(&self, tag: &str) -> bool {
        self.output.iter().any(|t| t == tag)
    }
}

/// Prices in USD per million tokens. `None` means unknown, not free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    pub input: Option<f64>,
    pub output: Option<f64>,
    pub cache_read: Option<f64>,
    pub cache_write: Option<f64>,
}

/// Token limits. `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub context: Option<u64>,
    pub output: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CatalogueEntry {
        CatalogueEntry {
            provider_id: "acme".to_string(),
            provider_name: "Acme".to_string(),
            model_id: "rocket-1".to_string(),
            model_name: "Rocket 1".to_string(),
            capabilities: Capabilities::default(),
            modalities: Modalities {
                input: vec!["text".to_string(), "image".to_string()],
                output: vec!["text".to_string()],
            },
            cost: Costs::default(),
            limit: Limits::default(),
            knowledge: None,
            release_date: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_identity_is_provider_and_model() {
        let e = entry();
        assert_eq!(e.id(), EntryId::new("acme", "rocket-1"));
        assert!(e.has_id(&EntryId::new("acme", "rocket-1")));
        assert!(!e.has_id(&EntryId::new("zeta", "rocket-1")));
        assert_eq!(e.id().to_string(), "acme/rocket-1");
    }

    #[test]
    fn test_modality_lookup() {
        let e = entry();
        assert!(e.modalities.accepts("image"));
        assert!(!e.modalities.produces("image"));
    }

    #[test]
    fn test_unknown_cost_serializes_as_null() {
        let json = serde_json::to_value(entry()).unwrap();
        assert!(json["cost"]["input"].is_null());
        assert!(json["limit"]["context"].is_null());
    }
}
