//! HTTP client for the MapTiler geocoding API.
//!
//! [`MapTilerClient::search`] and [`MapTilerClient::reverse`] are the typed,
//! fallible layer. [`MapTilerClient::validate`] and
//! [`MapTilerClient::describe`] run the full address-validation flow and fold
//! every error into a degraded result; they back the [`Geocoder`] impl.

use std::time::Duration;

use basurapp_core::{BoundingRegion, GeocoderSettings, GeocodingResult, LngLat};
use reqwest::{Client, Url};

use crate::error::GeocodingError;
use crate::filter::{best_match, filter_candidates};
use crate::geocoder::{
    out_of_area_hints, service_error_hints, GeocodeFuture, Geocoder, REVERSE_ERROR_LABEL,
    REVERSE_UNKNOWN_LABEL,
};
use crate::normalize::normalize_address;
use crate::reference::ReferenceMatcher;
use crate::types::{Feature, FeatureCollection};

const DEFAULT_USER_AGENT: &str = "basurapp/0.1 (address-validation)";

/// Default number of features requested from the provider.
pub const DEFAULT_RESULT_LIMIT: u32 = 15;

/// Bucaramanga city centre; biases provider ranking toward the metro area.
pub const DEFAULT_PROXIMITY: LngLat = LngLat::new(-73.1198, 7.1193);

/// Client for the MapTiler geocoding API.
///
/// Use [`MapTilerClient::new`] with loaded settings, or
/// [`MapTilerClient::with_base_url`] to point at a mock server in tests.
pub struct MapTilerClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
    result_limit: u32,
    proximity: LngLat,
    region: BoundingRegion,
    references: ReferenceMatcher,
}

impl MapTilerClient {
    /// Creates a client from configuration.
    ///
    /// A client without an API key still answers from the reference table;
    /// provider lookups then fail with [`GeocodingError::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// - [`GeocodingError::InvalidBaseUrl`] if the base URL cannot carry paths.
    /// - [`GeocodingError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(settings: &GeocoderSettings) -> Result<Self, GeocodingError> {
        let mut client = Self::build(
            settings.api_key.clone(),
            settings.timeout_secs,
            &settings.user_agent,
            &settings.base_url,
        )?;
        client.result_limit = settings.result_limit;
        client.proximity = settings.proximity;
        Ok(client)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`MapTilerClient::new`].
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodingError> {
        Self::build(
            Some(api_key.to_owned()),
            timeout_secs,
            DEFAULT_USER_AGENT,
            base_url,
        )
    }

    /// Replaces the reference table consulted before any network call.
    #[must_use]
    pub fn with_references(mut self, references: ReferenceMatcher) -> Self {
        self.references = references;
        self
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build(
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // One trailing slash so appended segments land under the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GeocodingError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GeocodingError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key,
            base_url: parsed,
            result_limit: DEFAULT_RESULT_LIMIT,
            proximity: DEFAULT_PROXIMITY,
            region: BoundingRegion::SANTANDER,
            references: ReferenceMatcher::builtin(),
        })
    }

    /// Runs the full validation flow for a free-text address.
    ///
    /// Reference table first, then a provider search over the normalized
    /// address, then coverage filtering and ranking. Transport and decoding
    /// failures yield an invalid result with the service-error hint; an empty
    /// or fully out-of-coverage answer yields the out-of-area hints.
    pub async fn validate(&self, address: &str) -> GeocodingResult {
        if let Some(hit) = self.references.lookup(address) {
            return hit;
        }

        let normalized = normalize_address(address);
        let features = match self.search(&normalized).await {
            Ok(features) => features,
            Err(error) => {
                tracing::warn!(%error, address, "geocoding request failed");
                return GeocodingResult::rejected(address, service_error_hints());
            }
        };

        let returned = features.len();
        let candidates = filter_candidates(features, &self.region);
        let in_coverage = candidates.len();
        if let Some(result) = best_match(candidates) {
            tracing::debug!(
                address,
                returned,
                in_coverage,
                matched = %result.formatted_address,
                "address validated"
            );
            return result;
        }

        tracing::warn!(address, returned, "no geocoding candidates inside coverage area");
        GeocodingResult::rejected(address, out_of_area_hints())
    }

    /// Resolves a coordinate pair to a display name, or a fixed fallback label.
    pub async fn describe(&self, coordinates: LngLat) -> String {
        match self.reverse(coordinates).await {
            Ok(features) => features
                .into_iter()
                .next()
                .map(|f| f.place_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| REVERSE_UNKNOWN_LABEL.to_string()),
            Err(error) => {
                tracing::warn!(%error, %coordinates, "reverse geocoding failed");
                REVERSE_ERROR_LABEL.to_string()
            }
        }
    }

    /// Forward search for an already-normalized query.
    ///
    /// # Errors
    ///
    /// - [`GeocodingError::MissingApiKey`] if the client has no API key.
    /// - [`GeocodingError::Http`] on network failure.
    /// - [`GeocodingError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GeocodingError::Deserialize`] if the body is not a feature collection.
    pub async fn search(&self, normalized: &str) -> Result<Vec<Feature>, GeocodingError> {
        self.require_api_key()?;
        self.request_features(self.forward_url(normalized)).await
    }

    /// Reverse lookup for a coordinate pair.
    ///
    /// # Errors
    ///
    /// Same as [`MapTilerClient::search`].
    pub async fn reverse(&self, coordinates: LngLat) -> Result<Vec<Feature>, GeocodingError> {
        self.require_api_key()?;
        self.request_features(self.reverse_url(coordinates)).await
    }

    fn require_api_key(&self) -> Result<(), GeocodingError> {
        if self.api_key.is_some() {
            Ok(())
        } else {
            Err(GeocodingError::MissingApiKey)
        }
    }

    fn forward_url(&self, normalized: &str) -> Url {
        let mut url = self.endpoint_url(&format!("{normalized}.json"));
        let mut query = url.query_pairs_mut();
        if let Some(key) = &self.api_key {
            query.append_pair("key", key);
        }
        query
            .append_pair("limit", &self.result_limit.to_string())
            .append_pair("proximity", &self.proximity.to_string())
            .append_pair("country", "CO")
            .append_pair("types", "address,poi,place")
            .append_pair("language", "es")
            .append_pair("autocomplete", "false");
        drop(query);
        url
    }

    fn reverse_url(&self, coordinates: LngLat) -> Url {
        let mut url = self.endpoint_url(&format!("{coordinates}.json"));
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        url
    }

    /// `{base}/geocoding/{segment}` with `segment` percent-encoded.
    fn endpoint_url(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs that cannot carry segments are rejected in `build`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("geocoding").push(segment);
        }
        url
    }

    /// Sends a GET, asserts a 2xx status, and decodes the feature collection.
    ///
    /// Errors carry the URL path only; the query string holds the API key.
    async fn request_features(&self, url: Url) -> Result<Vec<Feature>, GeocodingError> {
        let path = url.path().to_string();
        tracing::debug!(%path, "sending geocoding request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %body, "geocoding provider error body");
            return Err(GeocodingError::UnexpectedStatus {
                status: status.as_u16(),
                path,
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Deserialize {
                context: path,
                source: e,
            })?;
        Ok(collection.features)
    }
}

impl Geocoder for MapTilerClient {
    fn geocode<'a>(&'a self, address: &'a str) -> GeocodeFuture<'a, GeocodingResult> {
        Box::pin(self.validate(address))
    }

    fn reverse_geocode(&self, coordinates: LngLat) -> GeocodeFuture<'_, String> {
        Box::pin(self.describe(coordinates))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
