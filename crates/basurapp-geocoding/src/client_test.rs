use super::*;

fn test_client(base_url: &str) -> MapTilerClient {
    MapTilerClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn forward_url_targets_geocoding_path() {
    let client = test_client("https://api.maptiler.com");
    let url = client.forward_url("calle 45");
    assert_eq!(url.path(), "/geocoding/calle%2045.json");
}

#[test]
fn forward_url_carries_provider_parameters() {
    let client = test_client("https://api.maptiler.com/");
    let url = client.forward_url("calle 45");
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let expected = [
        ("key", "test-key"),
        ("limit", "15"),
        ("proximity", "-73.1198,7.1193"),
        ("country", "CO"),
        ("types", "address,poi,place"),
        ("language", "es"),
        ("autocomplete", "false"),
    ];
    assert_eq!(pairs.len(), expected.len());
    for ((k, v), (ek, ev)) in pairs.iter().zip(expected) {
        assert_eq!(k, ek);
        assert_eq!(v, ev);
    }
}

#[test]
fn forward_url_encodes_number_sign_and_slash() {
    let client = test_client("https://api.maptiler.com");
    let url = client.forward_url("calle 4 #11-79 apartamento 2/3");
    assert_eq!(
        url.path(),
        "/geocoding/calle%204%20%2311-79%20apartamento%202%2F3.json"
    );
    assert!(url.fragment().is_none());
}

#[test]
fn forward_url_keeps_base_path_prefix() {
    let client = test_client("http://localhost:8080/proxy/");
    let url = client.forward_url("giron");
    assert_eq!(url.path(), "/proxy/geocoding/giron.json");
}

#[test]
fn reverse_url_uses_lng_lat_segment() {
    let client = test_client("https://api.maptiler.com");
    let url = client.reverse_url(LngLat::new(-73.1198, 7.1193));
    assert_eq!(
        url.as_str(),
        "https://api.maptiler.com/geocoding/-73.1198,7.1193.json?key=test-key"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    let result = MapTilerClient::with_base_url("test-key", 30, "not a url");
    assert!(matches!(result, Err(GeocodingError::InvalidBaseUrl { .. })));
}

#[test]
fn rejects_base_url_without_paths() {
    let result = MapTilerClient::with_base_url("test-key", 30, "mailto:ops@example.com");
    assert!(matches!(result, Err(GeocodingError::InvalidBaseUrl { .. })));
}

#[tokio::test]
async fn missing_api_key_still_resolves_reference_addresses() {
    let settings = GeocoderSettings {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 15,
        user_agent: DEFAULT_USER_AGENT.to_string(),
        result_limit: 15,
        proximity: DEFAULT_PROXIMITY,
    };
    let client = MapTilerClient::new(&settings).unwrap();
    assert!(!client.has_api_key());

    let known = client
        .validate("Colegio Técnico Industrial José Elías Puyana")
        .await;
    assert!(known.is_valid);

    let unknown = client.validate("Calle 45, Bucaramanga").await;
    assert!(!unknown.is_valid);
    assert!(unknown.coordinates.is_origin());
    assert_eq!(unknown.suggestions, service_error_hints());

    assert!(matches!(
        client.search("calle 45").await,
        Err(GeocodingError::MissingApiKey)
    ));
    assert_eq!(
        client.describe(LngLat::new(-73.1, 7.1)).await,
        REVERSE_ERROR_LABEL
    );
}

#[test]
fn new_applies_limit_and_proximity() {
    let settings = GeocoderSettings {
        api_key: Some("k".to_string()),
        base_url: "https://api.maptiler.com/".to_string(),
        timeout_secs: 15,
        user_agent: DEFAULT_USER_AGENT.to_string(),
        result_limit: 5,
        proximity: LngLat::new(-73.05, 7.0),
    };
    let client = MapTilerClient::new(&settings).unwrap();
    let url = client.forward_url("giron");
    let query = url.query().unwrap_or_default();
    assert!(query.contains("limit=5"), "{query}");
    assert!(query.contains("proximity=-73.05%2C7"), "{query}");
}
