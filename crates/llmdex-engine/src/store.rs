use llmdex_types::CatalogueEntry;

/// The catalogue loaded for one session. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogueStore {
    entries: Vec<CatalogueEntry>,
}

/// One provider as offered by the provider picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    pub model_count: usize,
}

impl CatalogueStore {
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogueEntry> {
        self.entries.get(index)
    }

    /// Distinct providers ordered by display name, then id.
    pub fn providers(&self) -> Vec<ProviderSummary> {
        let mut providers: Vec<ProviderSummary> = Vec::new();
        for entry in &self.entries {
            match providers.iter_mut().find(|p| p.id == entry.provider_id) {
                Some(existing) => existing.model_count += 1,
                None => providers.push(ProviderSummary {
                    id: entry.provider_id.clone(),
                    name: entry.provider_name.clone(),
                    model_count: 1,
                }),
            }
        }
        providers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        providers
    }

    pub fn has_provider(&self, provider_id: &str) -> bool {
        self.entries.iter().any(|e| e.provider_id == provider_id)
    }
}

impl From<Vec<CatalogueEntry>> for CatalogueStore {
    fn from(entries: Vec<CatalogueEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc, entry};

    #[test]
    fn test_providers_are_grouped_and_counted() {
        let mut entries = abc();
        entries.push(entry("Beta", "x"));
        let store = CatalogueStore::new(entries);

        let providers = store.providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Beta", "Zeta"]);
        assert_eq!(providers[0].model_count, 2);
        assert_eq!(providers[2].id, "zeta");
    }

    #[test]
    fn test_has_provider() {
        let store = CatalogueStore::new(abc());
        assert!(store.has_provider("zeta"));
        assert!(!store.has_provider("nope"));
    }
}
