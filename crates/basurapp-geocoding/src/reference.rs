use basurapp_core::{builtin_reference_addresses, GeocodingResult, ReferenceAddress};

use crate::normalize::normalize_address;

fn normalize_keys(entries: Vec<ReferenceAddress>) -> Vec<ReferenceAddress> {
    entries
        .into_iter()
        .map(|mut entry| {
            entry.key = normalize_address(&entry.key);
            entry
        })
        .collect()
}

/// Offline lookup against known points of interest.
#[derive(Debug, Clone)]
pub struct ReferenceMatcher {
    entries: Vec<ReferenceAddress>,
}

impl Default for ReferenceMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceMatcher {
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_reference_addresses())
    }

    /// Keys are normalized on the way in so they compare like input does.
    #[must_use]
    pub fn new(entries: Vec<ReferenceAddress>) -> Self {
        Self {
            entries: normalize_keys(entries),
        }
    }

    /// Appends entries after the existing ones; earlier entries win on overlap.
    #[must_use]
    pub fn with_extra(mut self, extra: Vec<ReferenceAddress>) -> Self {
        self.entries.extend(normalize_keys(extra));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matches when the normalized address contains a key, or a key contains
    /// the address's first comma-separated segment. An empty segment never
    /// matches.
    #[must_use]
    pub fn lookup(&self, address: &str) -> Option<GeocodingResult> {
        let normalized = normalize_address(address);
        let head = normalized.split(',').next().unwrap_or_default().trim();

        let entry = self.entries.iter().find(|entry| {
            normalized.contains(entry.key.as_str())
                || (!head.is_empty() && entry.key.contains(head))
        })?;

        tracing::debug!(key = %entry.key, "address resolved from reference table");
        Some(GeocodingResult::matched(
            entry.coordinates,
            entry.formatted_address.clone(),
            Vec::new(),
        ))
    }
}
