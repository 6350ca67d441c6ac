//! Flatten the provider-keyed catalogue document into one entry per
//! (provider, model) pair.
//!
//! The document looks like:
//!
//! ```json
//! {
//!   "anthropic": {
//!     "name": "Anthropic",
//!     "models": {
//!       "claude-sonnet-4": {
//!         "name": "Claude Sonnet 4",
//!         "tool_call": true,
//!         "modalities": { "input": ["text", "image"], "output": ["text"] },
//!         "cost": { "input": 3, "output": 15, "cache_read": 0.3 },
//!         "limit": { "context": 200000, "output": 64000 },
//!         "release_date": "2025-05-22"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Optional fields that are missing or malformed become `None`, `false` or
//! an empty list. Only a non-object top level is an error.

use crate::{Error, Result};
use llmdex_types::{Capabilities, CatalogueEntry, Costs, Limits, Modalities};
use serde_json::Value;

pub fn parse_catalogue(body: &str) -> Result<Vec<CatalogueEntry>> {
    let value: Value = serde_json::from_str(body)?;
    normalize(&value)
}

pub fn normalize(document: &Value) -> Result<Vec<CatalogueEntry>> {
    let providers = document
        .as_object()
        .ok_or_else(|| Error::SourceUnavailable {
            location: "catalogue".to_string(),
            reason: "unexpected catalogue shape: expected an object keyed by provider id"
                .to_string(),
        })?;

    let mut entries = Vec::new();
    for (provider_id, provider) in providers {
        let provider_name = text(provider, "name").unwrap_or_else(|| provider_id.clone());
        let Some(models) = provider.get("models").and_then(Value::as_object) else {
            tracing::debug!(provider = %provider_id, "provider without models");
            continue;
        };

        for (model_id, model) in models {
            entries.push(normalize_model(provider_id, &provider_name, model_id, model));
        }
    }

    entries.sort_by(|a, b| {
        a.provider_id
            .cmp(&b.provider_id)
            .then_with(|| a.model_id.cmp(&b.model_id))
    });
    Ok(entries)
}

fn normalize_model(
    provider_id: &str,
    provider_name: &str,
    model_id: &str,
    model: &Value,
) -> CatalogueEntry {
    let cost = model.get("cost");
    let limit = model.get("limit");
    let modalities = model.get("modalities");

    CatalogueEntry {
        provider_id: provider_id.to_string(),
        provider_name: provider_name.to_string(),
        model_id: model_id.to_string(),
        model_name: text(model, "name").unwrap_or_else(|| model_id.to_string()),
        capabilities: Capabilities {
            tool_call: flag(model, "tool_call"),
            reasoning: flag(model, "reasoning"),
            attachment: flag(model, "attachment"),
            temperature: flag(model, "temperature"),
            open_weights: flag(model, "open_weights"),
        },
        modalities: Modalities {
            input: tags(modalities, "input"),
            output: tags(modalities, "output"),
        },
        cost: Costs {
            input: price(cost, "input"),
            output: price(cost, "output"),
            cache_read: price(cost, "cache_read"),
            cache_write: price(cost, "cache_write"),
        },
        limit: Limits {
            context: token_limit(limit, "context"),
            output: token_limit(limit, "output"),
        },
        knowledge: text(model, "knowledge"),
        release_date: text(model, "release_date"),
        last_updated: text(model, "last_updated"),
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn price(section: Option<&Value>, key: &str) -> Option<f64> {
    section?
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn token_limit(section: Option<&Value>, key: &str) -> Option<u64> {
    let raw = section?.get(key)?;
    raw.as_u64()
        .or_else(|| raw.as_f64().filter(|v| v.is_finite() && *v >= 1.0).map(|v| v as u64))
        .filter(|v| *v > 0)
}

fn tags(section: Option<&Value>, key: &str) -> Vec<String> {
    let Some(items) = section.and_then(|s| s.get(key)).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut out: Vec<String> = Vec::new();
    for tag in items.iter().filter_map(Value::as_str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_model_is_flattened() {
        let doc = json!({
            "anthropic": {
                "name": "Anthropic",
                "models": {
                    "claude-sonnet-4": {
                        "name": "Claude Sonnet 4",
                        "tool_call": true,
                        "reasoning": true,
                        "attachment": true,
                        "temperature": true,
                        "open_weights": false,
                        "modalities": {"input": ["text", "Image", "text"], "output": ["text"]},
                        "cost": {"input": 3, "output": 15, "cache_read": 0.3, "cache_write": 3.75},
                        "limit": {"context": 200000, "output": 64000},
                        "knowledge": "2025-03",
                        "release_date": "2025-05-22",
                        "last_updated": "2025-05-22"
                    }
                }
            }
        });

        let entries = normalize(&doc).unwrap();
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.provider_name, "Anthropic");
        assert_eq!(e.model_id, "claude-sonnet-4");
        assert!(e.capabilities.tool_call && e.capabilities.reasoning);
        assert!(!e.capabilities.open_weights);
        assert_eq!(e.modalities.input, vec!["text", "image"]);
        assert_eq!(e.cost.input, Some(3.0));
        assert_eq!(e.cost.cache_write, Some(3.75));
        assert_eq!(e.limit.context, Some(200_000));
        assert_eq!(e.knowledge.as_deref(), Some("2025-03"));
    }

    #[test]
    fn test_malformed_fields_become_empty() {
        let doc = json!({
            "odd": {
                "models": {
                    "weird": {
                        "tool_call": "yes",
                        "modalities": "text",
                        "cost": {"input": -1, "output": "cheap"},
                        "limit": {"context": 0, "output": null},
                        "release_date": ""
                    }
                }
            }
        });

        let e = &normalize(&doc).unwrap()[0];
        assert_eq!(e.provider_name, "odd");
        assert_eq!(e.model_name, "weird");
        assert!(!e.capabilities.tool_call);
        assert!(e.modalities.input.is_empty());
        assert_eq!(e.cost.input, None);
        assert_eq!(e.cost.output, None);
        assert_eq!(e.limit.context, None);
        assert_eq!(e.limit.output, None);
        assert_eq!(e.release_date, None);
    }

    #[test]
    fn test_entries_are_ordered_by_provider_then_model() {
        let doc = json!({
            "zeta": {"models": {"b": {}, "a": {}}},
            "acme": {"models": {"z": {}}},
            "empty": {"name": "No models"}
        });
        let ids: Vec<String> = normalize(&doc)
            .unwrap()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, vec!["acme/z", "zeta/a", "zeta/b"]);
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let err = normalize(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }
}
