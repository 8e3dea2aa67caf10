use crate::app_config::{AppConfig, DeviceCoordinates};
use crate::ConfigError;

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary does that once at startup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or only one of the device
/// coordinate variables is set.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Read the log filter from `CRISP_LOG_LEVEL`, defaulting to `info`.
///
/// Kept apart from [`load_app_config_from_env`] so commands that never touch
/// the geocoder can start logging without validating its settings.
#[must_use]
pub fn log_level_from_env() -> String {
    log_level(|key| std::env::var(key))
}

fn log_level<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("CRISP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        or_default(var, default)
            .parse::<u8>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_coord = |var: &str, raw: &str, limit: f64| -> Result<f64, ConfigError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value.abs() > limit {
            return Err(invalid(var, format!("must be within ±{limit}")));
        }
        Ok(value)
    };

    let log_level = log_level(&lookup);

    let geocoder_base_url = or_default(
        "CRISP_GEOCODER_BASE_URL",
        "https://nominatim.openstreetmap.org/",
    );
    let geocoder_user_agent = or_default("CRISP_GEOCODER_USER_AGENT", "CrispCleaningApp/1.0");
    let geocoder_timeout_secs = parse_u64("CRISP_GEOCODER_TIMEOUT_SECS", "30")?;
    let geocoder_zoom = parse_u8("CRISP_GEOCODER_ZOOM", "18")?;
    let location_timeout_ms = parse_u64("CRISP_LOCATION_TIMEOUT_MS", "10000")?;

    let device_coordinates = match (lookup("CRISP_DEVICE_LAT"), lookup("CRISP_DEVICE_LON")) {
        (Ok(lat), Ok(lon)) => Some(DeviceCoordinates {
            lat: parse_coord("CRISP_DEVICE_LAT", &lat, 90.0)?,
            lon: parse_coord("CRISP_DEVICE_LON", &lon, 180.0)?,
        }),
        (Ok(_), Err(_)) => return Err(ConfigError::MissingEnvVar("CRISP_DEVICE_LON".into())),
        (Err(_), Ok(_)) => return Err(ConfigError::MissingEnvVar("CRISP_DEVICE_LAT".into())),
        (Err(_), Err(_)) => None,
    };

    Ok(AppConfig {
        log_level,
        geocoder_base_url,
        geocoder_user_agent,
        geocoder_timeout_secs,
        geocoder_zoom,
        location_timeout_ms,
        device_coordinates,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
