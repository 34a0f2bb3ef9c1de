//! Coverage filtering and ranking of provider candidates.
//!
//! A feature is in coverage when its centre lies inside the bounding region
//! and either an administrative context entry or the place name mentions a
//! known locality. Survivors are ranked address-first, then by relevance.

use basurapp_core::{BoundingRegion, GeocodingResult, LngLat};

use crate::types::Feature;

/// Localities recognised in a feature's administrative context.
pub const CONTEXT_LOCALITIES: &[&str] = &[
    "santander",
    "bucaramanga",
    "floridablanca",
    "girón",
    "giron",
    "piedecuesta",
];

/// Localities recognised in a feature's place name.
pub const NAME_LOCALITIES: &[&str] = &[
    "santander",
    "bucaramanga",
    "floridablanca",
    "girón",
    "giron",
    "piedecuesta",
    "lebrija",
    "rionegro",
    "los santos",
];

/// Number of runner-up place names returned as "did you mean" suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// A feature that passed the coverage filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub coordinates: LngLat,
    pub place_name: String,
    pub is_address: bool,
    pub relevance: f64,
}

fn mentions_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

fn in_coverage(feature: &Feature) -> bool {
    let has_context = feature
        .context
        .iter()
        .filter_map(|c| c.text.as_deref())
        .any(|text| mentions_any(text, CONTEXT_LOCALITIES));

    has_context || mentions_any(&feature.place_name, NAME_LOCALITIES)
}

/// Keeps the features inside `region` that also mention a known locality.
///
/// Features without a usable centre are dropped.
#[must_use]
pub fn filter_candidates(features: Vec<Feature>, region: &BoundingRegion) -> Vec<Candidate> {
    features
        .into_iter()
        .filter_map(|feature| {
            let Some(coordinates) = feature.center() else {
                tracing::debug!(
                    place_name = %feature.place_name,
                    "skipping feature with malformed center"
                );
                return None;
            };
            if !region.contains(coordinates) || !in_coverage(&feature) {
                return None;
            }
            Some(Candidate {
                coordinates,
                is_address: feature.is_address(),
                relevance: feature.relevance(),
                place_name: feature.place_name,
            })
        })
        .collect()
}

/// Stable sort: address-typed candidates first, then descending relevance.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.is_address
            .cmp(&a.is_address)
            .then_with(|| b.relevance.total_cmp(&a.relevance))
    });
}

/// Ranks `candidates` and builds a valid result from the best one, with up to
/// [`MAX_SUGGESTIONS`] runner-up names. Returns `None` for an empty set.
#[must_use]
pub fn best_match(mut candidates: Vec<Candidate>) -> Option<GeocodingResult> {
    rank_candidates(&mut candidates);
    let mut ranked = candidates.into_iter();
    let top = ranked.next()?;
    let suggestions = ranked
        .take(MAX_SUGGESTIONS)
        .map(|c| c.place_name)
        .collect();
    Some(GeocodingResult::matched(
        top.coordinates,
        top.place_name,
        suggestions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContextEntry, FeatureProperties};

    fn feature(name: &str, center: [f64; 2], context: &[&str]) -> Feature {
        Feature {
            center: center.to_vec(),
            place_name: name.to_string(),
            context: context
                .iter()
                .map(|t| ContextEntry {
                    text: Some((*t).to_string()),
                })
                .collect(),
            ..Feature::default()
        }
    }

    fn candidate(name: &str, is_address: bool, relevance: f64) -> Candidate {
        Candidate {
            coordinates: LngLat::new(-73.1, 7.1),
            place_name: name.to_string(),
            is_address,
            relevance,
        }
    }

    #[test]
    fn keeps_in_region_feature_with_context_locality() {
        let features = vec![feature("Calle 45 #23-67", [-73.12, 7.11], &["Bucaramanga"])];
        let kept = filter_candidates(features, &BoundingRegion::SANTANDER);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].coordinates, LngLat::new(-73.12, 7.11));
    }

    #[test]
    fn keeps_in_region_feature_with_name_locality() {
        let features = vec![feature("Parque principal, Lebrija", [-73.22, 7.11], &[])];
        assert_eq!(
            filter_candidates(features, &BoundingRegion::SANTANDER).len(),
            1
        );
    }

    #[test]
    fn name_only_localities_do_not_count_in_context() {
        let features = vec![feature("Vereda El Llanito", [-73.22, 7.11], &["Lebrija"])];
        assert!(filter_candidates(features, &BoundingRegion::SANTANDER).is_empty());
    }

    #[test]
    fn drops_in_region_feature_without_locality() {
        let features = vec![feature("Vereda El Llanito", [-73.5, 7.0], &["Colombia"])];
        assert!(filter_candidates(features, &BoundingRegion::SANTANDER).is_empty());
    }

    #[test]
    fn drops_out_of_region_feature_even_with_locality_name() {
        let features = vec![
            feature("Calle 10, Santander de Quilichao, Cauca", [-76.48, 3.01], &["Cauca"]),
            feature("Calle 10, Bogotá", [-74.07, 4.6], &["Bogotá"]),
        ];
        assert!(filter_candidates(features, &BoundingRegion::SANTANDER).is_empty());
    }

    #[test]
    fn drops_feature_with_malformed_center() {
        let mut bad = feature("Bucaramanga", [-73.1, 7.1], &[]);
        bad.center = vec![-73.1];
        assert!(filter_candidates(vec![bad], &BoundingRegion::SANTANDER).is_empty());
    }

    #[test]
    fn locality_match_is_case_insensitive() {
        let features = vec![feature("CARRERA 27, FLORIDABLANCA", [-73.09, 7.06], &[])];
        assert_eq!(
            filter_candidates(features, &BoundingRegion::SANTANDER).len(),
            1
        );
    }

    #[test]
    fn address_outranks_poi_regardless_of_relevance() {
        let mut candidates = vec![candidate("poi", false, 1.0), candidate("address", true, 0.1)];
        rank_candidates(&mut candidates);
        assert_eq!(candidates[0].place_name, "address");
    }

    #[test]
    fn relevance_breaks_ties_descending() {
        let mut candidates = vec![
            candidate("low", true, 0.3),
            candidate("high", true, 0.9),
            candidate("mid", true, 0.6),
        ];
        rank_candidates(&mut candidates);
        let order: Vec<_> = candidates.iter().map(|c| c.place_name.as_str()).collect();
        assert_eq!(order, ["high", "mid", "low"]);
    }

    #[test]
    fn ranking_is_stable_for_equal_keys() {
        let mut candidates = vec![candidate("first", false, 0.5), candidate("second", false, 0.5)];
        rank_candidates(&mut candidates);
        assert_eq!(candidates[0].place_name, "first");
    }

    #[test]
    fn best_match_takes_top_and_three_suggestions() {
        let candidates = vec![
            candidate("e", false, 0.1),
            candidate("a", true, 0.9),
            candidate("b", true, 0.8),
            candidate("c", false, 0.9),
            candidate("d", false, 0.5),
        ];
        let result = best_match(candidates).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.formatted_address, "a");
        assert_eq!(result.suggestions, ["b", "c", "d"]);
    }

    #[test]
    fn best_match_of_nothing_is_none() {
        assert!(best_match(Vec::new()).is_none());
    }

    #[test]
    fn poi_feature_is_ranked_after_address_feature() {
        let mut address = feature("Calle 36 #27-52, Bucaramanga", [-73.12, 7.12], &[]);
        address.place_type = vec!["address".to_string()];
        address.relevance = Some(0.2);
        let mut poi = feature("Centro Comercial Cabecera, Bucaramanga", [-73.1, 7.11], &[]);
        poi.properties = Some(FeatureProperties {
            kind: Some("poi".to_string()),
        });
        poi.relevance = Some(1.0);

        let candidates = filter_candidates(vec![poi, address], &BoundingRegion::SANTANDER);
        let result = best_match(candidates).unwrap();
        assert_eq!(result.formatted_address, "Calle 36 #27-52, Bucaramanga");
        assert_eq!(result.suggestions, ["Centro Comercial Cabecera, Bucaramanga"]);
    }
}
