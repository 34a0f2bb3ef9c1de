//! Geocoding command handlers.

use anyhow::Context;
use basurapp_core::{load_reference_addresses, AppConfig, GeocodingResult, LngLat};
use basurapp_geocoding::{Geocoder, MapTilerClient, ReferenceMatcher};

/// Builds the provider client, with any extra reference addresses from
/// `BASURAPP_REFERENCE_PATH` appended to the built-in table.
pub(crate) fn build_geocoder(config: &AppConfig) -> anyhow::Result<MapTilerClient> {
    let mut matcher = ReferenceMatcher::builtin();
    if let Some(path) = &config.reference_path {
        let extra = load_reference_addresses(path)
            .with_context(|| format!("loading reference addresses from {}", path.display()))?;
        tracing::debug!(count = extra.len(), path = %path.display(), "loaded reference addresses");
        matcher = matcher.with_extra(extra);
    }

    let client = MapTilerClient::new(&config.geocoder).context("building geocoding client")?;
    if !client.has_api_key() {
        tracing::warn!("MAPTILER_API_KEY is not set; only reference addresses will resolve");
    }
    Ok(client.with_references(matcher))
}

/// Renders a result for terminal output, one line per entry.
pub(crate) fn format_result(result: &GeocodingResult) -> String {
    let mut lines = Vec::with_capacity(result.suggestions.len() + 3);
    if let Some(location) = result.location() {
        lines.push(format!("✓ {}", result.formatted_address));
        lines.push(format!("  coordinates: {location}"));
        if !result.suggestions.is_empty() {
            lines.push("  did you mean:".to_string());
        }
    } else {
        lines.push(format!("✗ address not found: {}", result.formatted_address));
    }
    lines.extend(result.suggestions.iter().map(|s| format!("  - {s}")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub(crate) async fn run_geocode(config: &AppConfig, address: &str, json: bool) -> anyhow::Result<()> {
    let geocoder = build_geocoder(config)?;
    let result = geocoder.geocode(address).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result));
    }
    Ok(())
}

pub(crate) async fn run_reverse(config: &AppConfig, coordinates: LngLat) -> anyhow::Result<()> {
    let geocoder = build_geocoder(config)?;
    println!("{}", geocoder.reverse_geocode(coordinates).await);
    Ok(())
}
