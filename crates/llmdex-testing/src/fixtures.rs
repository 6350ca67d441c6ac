//! Sample catalogue data.
//!
//! `SAMPLE_CATALOGUE` is a trimmed document in the shape the real source
//! serves. It covers five providers, one model with no pricing or limits,
//! and a spread of capabilities so every filter has something to narrow.

use llmdex_types::{Capabilities, CatalogueEntry, Costs, Limits, Modalities};

pub const SAMPLE_CATALOGUE: &str = r#"{
  "anthropic": {
    "id": "anthropic",
    "name": "Anthropic",
    "models": {
      "claude-3-5-haiku": {
        "name": "Claude Haiku 3.5",
        "attachment": true,
        "reasoning": false,
        "tool_call": true,
        "temperature": true,
        "knowledge": "2024-07",
        "release_date": "2024-10-22",
        "last_updated": "2024-10-22",
        "modalities": { "input": ["text", "image"], "output": ["text"] },
        "open_weights": false,
        "cost": { "input": 0.8, "output": 4, "cache_read": 0.08, "cache_write": 1 },
        "limit": { "context": 200000, "output": 8192 }
      },
      "claude-sonnet-4": {
        "name": "Claude Sonnet 4",
        "attachment": true,
        "reasoning": true,
        "tool_call": true,
        "temperature": true,
        "knowledge": "2025-03",
        "release_date": "2025-05-22",
        "last_updated": "2025-05-22",
        "modalities": { "input": ["text", "image"], "output": ["text"] },
        "open_weights": false,
        "cost": { "input": 3, "output": 15, "cache_read": 0.3, "cache_write": 3.75 },
        "limit": { "context": 200000, "output": 64000 }
      }
    }
  },
  "google": {
    "id": "google",
    "name": "Google",
    "models": {
      "gemini-2.5-pro": {
        "name": "Gemini 2.5 Pro",
        "attachment": true,
        "reasoning": true,
        "tool_call": true,
        "temperature": true,
        "knowledge": "2025-01",
        "release_date": "2025-03-20",
        "last_updated": "2025-06-05",
        "modalities": { "input": ["text", "image", "audio", "video", "pdf"], "output": ["text"] },
        "open_weights": false,
        "cost": { "input": 1.25, "output": 10, "cache_read": 0.31 },
        "limit": { "context": 1048576, "output": 65536 }
      }
    }
  },
  "local": {
    "id": "local",
    "name": "Local Lab",
    "models": {
      "tiny-llama": {
        "name": "Tiny Llama",
        "tool_call": false,
        "open_weights": true,
        "modalities": { "input": ["text"], "output": ["text"] }
      }
    }
  },
  "mistral": {
    "id": "mistral",
    "name": "Mistral",
    "models": {
      "open-mistral-nemo": {
        "name": "Mistral Nemo",
        "attachment": false,
        "reasoning": false,
        "tool_call": true,
        "temperature": true,
        "knowledge": "2024-07",
        "release_date": "2024-07-01",
        "last_updated": "2024-07-01",
        "modalities": { "input": ["text"], "output": ["text"] },
        "open_weights": true,
        "cost": { "input": 0.15, "output": 0.15 },
        "limit": { "context": 128000, "output": 128000 }
      }
    }
  },
  "openai": {
    "id": "openai",
    "name": "OpenAI",
    "models": {
      "gpt-4o": {
        "name": "GPT-4o",
        "attachment": true,
        "reasoning": false,
        "tool_call": true,
        "temperature": true,
        "knowledge": "2023-09",
        "release_date": "2024-05-13",
        "last_updated": "2024-08-06",
        "modalities": { "input": ["text", "image"], "output": ["text"] },
        "open_weights": false,
        "cost": { "input": 2.5, "output": 10, "cache_read": 1.25 },
        "limit": { "context": 128000, "output": 16384 }
      },
      "o3-mini": {
        "name": "o3-mini",
        "attachment": false,
        "reasoning": true,
        "tool_call": true,
        "temperature": false,
        "knowledge": "2024-10",
        "release_date": "2025-01-29",
        "last_updated": "2025-01-29",
        "modalities": { "input": ["text"], "output": ["text"] },
        "open_weights": false,
        "cost": { "input": 1.1, "output": 4.4, "cache_read": 0.55 },
        "limit": { "context": 200000, "output": 100000 }
      }
    }
  }
}"#;

/// Every entry of [`SAMPLE_CATALOGUE`], normalized and in catalogue order
/// (provider id, then model id).
pub fn sample_entries() -> Vec<CatalogueEntry> {
    llmdex_runtime::parse_catalogue(SAMPLE_CATALOGUE).expect("sample catalogue is valid")
}

/// A fully populated entry. Tests knock fields out to exercise the
/// missing-data paths.
pub fn sample_entry(provider_id: &str, model_id: &str) -> CatalogueEntry {
    CatalogueEntry {
        provider_id: provider_id.to_string(),
        provider_name: title_case(provider_id),
        model_id: model_id.to_string(),
        model_name: title_case(model_id),
        capabilities: Capabilities {
            tool_call: true,
            reasoning: false,
            attachment: true,
            temperature: true,
            open_weights: false,
        },
        modalities: Modalities {
            input: vec!["text".to_string(), "image".to_string()],
            output: vec!["text".to_string()],
        },
        cost: Costs {
            input: Some(3.0),
            output: Some(15.0),
            cache_read: Some(0.3),
            cache_write: None,
        },
        limit: Limits {
            context: Some(200_000),
            output: Some(8_192),
        },
        knowledge: Some("2025-01".to_string()),
        release_date: Some("2025-02-01".to_string()),
        last_updated: Some("2025-03-01".to_string()),
    }
}

fn title_case(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalogue_normalizes() {
        let entries = sample_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].model_id, "claude-3-5-haiku");
        assert_eq!(entries[2].model_id, "gemini-2.5-pro");

        let bare = entries.iter().find(|e| e.model_id == "tiny-llama").unwrap();
        assert_eq!(bare.cost, Costs::default());
        assert_eq!(bare.limit, Limits::default());
        assert!(bare.capabilities.open_weights);
    }

    #[test]
    fn test_sample_entry_names() {
        let entry = sample_entry("acme", "rocket-1");
        assert_eq!(entry.provider_name, "Acme");
        assert_eq!(entry.model_name, "Rocket 1");
    }
}
