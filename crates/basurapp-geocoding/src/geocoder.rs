use std::future::Future;
use std::pin::Pin;

use basurapp_core::{GeocodingResult, LngLat};

pub type GeocodeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Returned by reverse geocoding when the provider has no feature for a point.
pub const REVERSE_UNKNOWN_LABEL: &str = "Ubicación desconocida";

/// Returned by reverse geocoding when the provider call fails.
pub const REVERSE_ERROR_LABEL: &str = "Error al obtener ubicación";

/// Guidance shown when the provider answered but nothing was in coverage.
#[must_use]
pub fn out_of_area_hints() -> Vec<String> {
    vec![
        "La dirección debe estar ubicada en Santander, Colombia".to_string(),
        "Intenta con formato: Calle/Carrera + Número + Barrio + Ciudad".to_string(),
        "Ejemplo: Calle 45 #23-67, Bucaramanga, Santander".to_string(),
    ]
}

/// Guidance shown when the provider could not be reached or answered badly.
#[must_use]
pub fn service_error_hints() -> Vec<String> {
    vec![
        "Error al validar la dirección. Intenta con una dirección más específica.".to_string(),
    ]
}

/// Resolves addresses to coordinates and back.
///
/// Implementations never fail: provider errors degrade to an invalid
/// [`GeocodingResult`] (forward) or a fixed fallback label (reverse).
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(&'a self, address: &'a str) -> GeocodeFuture<'a, GeocodingResult>;

    fn reverse_geocode(&self, coordinates: LngLat) -> GeocodeFuture<'_, String>;
}
