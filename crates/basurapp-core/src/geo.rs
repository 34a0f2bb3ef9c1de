//! Coordinate and bounding-region primitives.
//!
//! Coordinates are always held in `(longitude, latitude)` order, the order
//! the geocoding provider uses for its `center` arrays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A longitude/latitude pair in decimal degrees.
///
/// Serializes as a two-element `[lng, lat]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Sentinel carried by every rejected geocoding result.
    pub const ORIGIN: Self = Self { lng: 0.0, lat: 0.0 };

    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.lng == 0.0 && self.lat == 0.0
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(value: LngLat) -> Self {
        [value.lng, value.lat]
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLngLatError {
    #[error("expected \"lng,lat\", got {0:?}")]
    Shape(String),
    #[error("invalid number {0:?}")]
    Number(String),
    #[error("coordinate out of range: {0}")]
    Range(String),
}

impl FromStr for LngLat {
    type Err = ParseLngLatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng_raw, lat_raw) = s
            .split_once(',')
            .ok_or_else(|| ParseLngLatError::Shape(s.to_string()))?;

        let parse = |raw: &str| -> Result<f64, ParseLngLatError> {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseLngLatError::Number(raw.trim().to_string()))
        };

        let lng = parse(lng_raw)?;
        let lat = parse(lat_raw)?;
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return Err(ParseLngLatError::Range(s.to_string()));
        }
        Ok(Self { lng, lat })
    }
}

/// An axis-aligned longitude/latitude rectangle used as an accept filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingRegion {
    /// Department of Santander, Colombia.
    pub const SANTANDER: Self = Self {
        min_lng: -74.2,
        max_lng: -72.3,
        min_lat: 5.8,
        max_lat: 7.8,
    };

    /// Inclusive on every edge.
    #[must_use]
    pub fn contains(&self, point: LngLat) -> bool {
        point.lng >= self.min_lng
            && point.lng <= self.max_lng
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}
