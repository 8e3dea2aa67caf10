/// A fixed device position supplied through configuration, used in place of
/// a platform location service on hosts that have none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceCoordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Root of the Nominatim-compatible reverse-geocoding service.
    pub geocoder_base_url: String,
    /// Client identifier sent as `User-Agent` on every geocoder request.
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    /// Nominatim `zoom` level; 18 resolves down to building level.
    pub geocoder_zoom: u8,
    /// Upper bound on how long the location stage may take.
    pub location_timeout_ms: u64,
    pub device_coordinates: Option<DeviceCoordinates>,
}
