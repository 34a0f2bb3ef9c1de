//! MapTiler geocoding API response types.
//!
//! Forward and reverse endpoints share the same GeoJSON-like envelope: a
//! `features` array whose entries carry a `center`, a `place_name`, and
//! optional context and ranking metadata. Every field except `features` is
//! defaulted so partially-populated features still deserialize.

use basurapp_core::LngLat;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    /// `[lng, lat]`. Kept as a raw vector so a short or empty array skips
    /// the feature instead of failing the whole response.
    #[serde(default)]
    pub center: Vec<f64>,
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub relevance: Option<f64>,
}

/// One level of the administrative hierarchy around a feature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextEntry {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub kind: Option<String>,
}

impl Feature {
    /// Returns the feature centre, or `None` when the array is malformed.
    #[must_use]
    pub fn center(&self) -> Option<LngLat> {
        match self.center.as_slice() {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some(LngLat::new(*lng, *lat)),
            _ => None,
        }
    }

    /// Exact street addresses rank ahead of POIs and places.
    #[must_use]
    pub fn is_address(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.kind.as_deref())
            .is_some_and(|kind| kind == "address")
            || self.place_type.iter().any(|t| t == "address")
    }

    /// Provider relevance, with missing or non-finite scores treated as zero.
    #[must_use]
    pub fn relevance(&self) -> f64 {
        self.relevance.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_feature() {
        let json = serde_json::json!({
            "features": [{
                "center": [-73.12, 7.11],
                "place_name": "Calle 45, Bucaramanga, Santander, Colombia",
                "context": [{ "text": "Bucaramanga" }, { "text": "Santander" }],
                "properties": { "kind": "address" },
                "place_type": ["address"],
                "relevance": 0.9
            }]
        });
        let collection: FeatureCollection = serde_json::from_value(json).unwrap();
        let feature = &collection.features[0];
        assert_eq!(feature.center(), Some(LngLat::new(-73.12, 7.11)));
        assert!(feature.is_address());
        assert!((feature.relevance() - 0.9).abs() < f64::EPSILON);
        assert_eq!(feature.context.len(), 2);
    }

    #[test]
    fn tolerates_sparse_feature() {
        let json = serde_json::json!({ "features": [{ "place_name": "Girón" }] });
        let collection: FeatureCollection = serde_json::from_value(json).unwrap();
        let feature = &collection.features[0];
        assert_eq!(feature.center(), None);
        assert!(!feature.is_address());
        assert!(feature.relevance().abs() < f64::EPSILON);
    }

    #[test]
    fn missing_features_is_empty() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn kind_alone_marks_address() {
        let feature = Feature {
            properties: Some(FeatureProperties {
                kind: Some("address".to_string()),
            }),
            ..Feature::default()
        };
        assert!(feature.is_address());
    }
}
