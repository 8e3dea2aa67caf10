use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should be valid");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.geocoder_base_url,
        "https://nominatim.openstreetmap.org/"
    );
    assert_eq!(cfg.geocoder_user_agent, "CrispCleaningApp/1.0");
    assert_eq!(cfg.geocoder_timeout_secs, 30);
    assert_eq!(cfg.geocoder_zoom, 18);
    assert_eq!(cfg.location_timeout_ms, 10_000);
    assert!(cfg.device_coordinates.is_none());
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("CRISP_LOG_LEVEL", "debug");
    map.insert("CRISP_GEOCODER_BASE_URL", "http://localhost:8080");
    map.insert("CRISP_GEOCODER_USER_AGENT", "crisp-test/0.1");
    map.insert("CRISP_GEOCODER_TIMEOUT_SECS", "5");
    map.insert("CRISP_GEOCODER_ZOOM", "16");
    map.insert("CRISP_LOCATION_TIMEOUT_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.geocoder_base_url, "http://localhost:8080");
    assert_eq!(cfg.geocoder_user_agent, "crisp-test/0.1");
    assert_eq!(cfg.geocoder_timeout_secs, 5);
    assert_eq!(cfg.geocoder_zoom, 16);
    assert_eq!(cfg.location_timeout_ms, 2500);
}

#[test]
fn log_level_reads_without_validating_geocoder_settings() {
    let mut map = HashMap::new();
    map.insert("CRISP_LOG_LEVEL", "crisp_geo=debug");
    map.insert("CRISP_GEOCODER_TIMEOUT_SECS", "soon");
    assert_eq!(log_level(lookup_from_map(&map)), "crisp_geo=debug");
    assert!(build_app_config(lookup_from_map(&map)).is_err());

    let empty: HashMap<&str, &str> = HashMap::new();
    assert_eq!(log_level(lookup_from_map(&empty)), "info");
}

#[test]
fn build_app_config_ignores_unrelated_vars() {
    let mut map = HashMap::new();
    map.insert("CRISP_ENV", "staging");
    let cfg = build_app_config(lookup_from_map(&map)).expect("unknown vars are not read");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_rejects_invalid_geocoder_timeout() {
    let mut map = HashMap::new();
    map.insert("CRISP_GEOCODER_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRISP_GEOCODER_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CRISP_GEOCODER_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_out_of_range_zoom() {
    let mut map = HashMap::new();
    map.insert("CRISP_GEOCODER_ZOOM", "300");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRISP_GEOCODER_ZOOM"),
        "expected InvalidEnvVar(CRISP_GEOCODER_ZOOM), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_location_timeout() {
    let mut map = HashMap::new();
    map.insert("CRISP_LOCATION_TIMEOUT_MS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRISP_LOCATION_TIMEOUT_MS"),
        "expected InvalidEnvVar(CRISP_LOCATION_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_device_coordinates() {
    let mut map = HashMap::new();
    map.insert("CRISP_DEVICE_LAT", "-33.8688");
    map.insert("CRISP_DEVICE_LON", " 151.2093 ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let coords = cfg.device_coordinates.expect("coordinates should be set");
    assert!((coords.lat - -33.8688).abs() < f64::EPSILON);
    assert!((coords.lon - 151.2093).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_requires_both_device_coordinates() {
    let mut map = HashMap::new();
    map.insert("CRISP_DEVICE_LAT", "-33.8688");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CRISP_DEVICE_LON"),
        "expected MissingEnvVar(CRISP_DEVICE_LON), got: {result:?}"
    );

    let mut map = HashMap::new();
    map.insert("CRISP_DEVICE_LON", "151.2093");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CRISP_DEVICE_LAT"),
        "expected MissingEnvVar(CRISP_DEVICE_LAT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_latitude_out_of_range() {
    let mut map = HashMap::new();
    map.insert("CRISP_DEVICE_LAT", "91");
    map.insert("CRISP_DEVICE_LON", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRISP_DEVICE_LAT"),
        "expected InvalidEnvVar(CRISP_DEVICE_LAT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unparsable_longitude() {
    let mut map = HashMap::new();
    map.insert("CRISP_DEVICE_LAT", "10");
    map.insert("CRISP_DEVICE_LON", "east");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRISP_DEVICE_LON"),
        "expected InvalidEnvVar(CRISP_DEVICE_LON), got: {result:?}"
    );
}
