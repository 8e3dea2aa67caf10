use thiserror::Error;

/// Failures while acquiring the device position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission denied by user")]
    PermissionDenied,

    #[error("Location information is unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,

    /// The host has no location source at all.
    #[error("Geolocation is not supported on this device")]
    Unsupported,

    /// Any other provider failure, with the provider's message.
    #[error("Failed to get location: {0}")]
    Failure(String),
}

/// Failures from the reverse-geocoding service.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Reverse geocoding failed: {reason} (HTTP {status})")]
    RequestFailed { status: u16, reason: String },

    /// The response carried no `address` object.
    #[error("No address data found")]
    NoData,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Error returned by address resolution, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Stage 1 failed; no geocoding request was made.
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Stage 2 failed.
    #[error("Failed to reverse geocode: {0}")]
    ReverseGeocode(#[from] GeocodeError),
}
