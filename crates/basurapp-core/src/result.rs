use serde::{Deserialize, Serialize};

use crate::geo::LngLat;

/// Outcome of a single address validation attempt.
///
/// A rejected result always carries [`LngLat::ORIGIN`]; use
/// [`GeocodingResult::location`] rather than reading `coordinates` directly
/// when a usable position is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodingResult {
    pub coordinates: LngLat,
    pub formatted_address: String,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl GeocodingResult {
    #[must_use]
    pub fn matched(
        coordinates: LngLat,
        formatted_address: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            coordinates,
            formatted_address: formatted_address.into(),
            is_valid: true,
            suggestions,
        }
    }

    /// Builds an invalid result that echoes the caller's original input.
    #[must_use]
    pub fn rejected(input: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            coordinates: LngLat::ORIGIN,
            formatted_address: input.into(),
            is_valid: false,
            suggestions,
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<LngLat> {
        self.is_valid.then_some(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_carries_origin_and_input() {
        let result = GeocodingResult::rejected("Calle 10, Bogotá", vec!["hint".to_string()]);
        assert!(!result.is_valid);
        assert!(result.coordinates.is_origin());
        assert_eq!(result.formatted_address, "Calle 10, Bogotá");
        assert_eq!(result.location(), None);
    }

    #[test]
    fn matched_exposes_location() {
        let point = LngLat::new(-73.08, 7.06);
        let result = GeocodingResult::matched(point, "Floridablanca", Vec::new());
        assert!(result.is_valid);
        assert_eq!(result.location(), Some(point));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = GeocodingResult::rejected("x", vec!["a".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["formattedAddress"], "x");
        assert_eq!(json["coordinates"], serde_json::json!([0.0, 0.0]));
        assert_eq!(json["suggestions"][0], "a");
    }
}
