//! HTTP client for a Nominatim-compatible reverse-geocoding service.
//!
//! Wraps `reqwest` with the service's query conventions, a client identifier
//! `User-Agent`, and typed error handling. Non-2xx responses surface as
//! [`GeocodeError::RequestFailed`]; bodies without address data surface as
//! [`GeocodeError::NoData`].

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::normalize::normalize_address;
use crate::types::{Address, Coordinates, ReverseResponse};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const DEFAULT_USER_AGENT: &str = "CrispCleaningApp/1.0";

/// Building-level detail.
const DEFAULT_ZOOM: u8 = 18;

/// Second stage of address resolution: coordinates in, address out.
pub trait ReverseGeocoder {
    fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<Address, GeocodeError>> + Send;
}

/// Client for the Nominatim `/reverse` endpoint.
///
/// Use [`NominatimClient::new`] for the public OpenStreetMap instance or
/// [`NominatimClient::with_base_url`] to point at a self-hosted server or a
/// mock server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
    zoom: u8,
}

impl NominatimClient {
    /// Creates a client pointed at the public OpenStreetMap Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// An empty `user_agent` falls back to `CrispCleaningApp/1.0`; Nominatim's
    /// usage policy rejects anonymous clients.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let user_agent = if user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            user_agent
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("reverse")` appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            zoom: DEFAULT_ZOOM,
        })
    }

    /// Overrides the `zoom` detail level sent with each request.
    #[must_use]
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Looks up the address nearest to `coordinates`.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::RequestFailed`] on a non-2xx status.
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeocodeError::NoData`] if the body has no address.
    pub async fn reverse(&self, coordinates: Coordinates) -> Result<Address, GeocodeError> {
        let url = self.build_url(coordinates)?;
        tracing::debug!(lat = coordinates.lat, lon = coordinates.lon, "reverse geocoding");

        let body = self.request_json(&url).await?;
        if body.is_null() || body.get("address").is_none_or(serde_json::Value::is_null) {
            return Err(GeocodeError::NoData);
        }

        let response: ReverseResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse(lat={}, lon={})", coordinates.lat, coordinates.lon),
                source: e,
            })?;

        normalize_address(response)
    }

    /// Builds the `/reverse` URL with percent-encoded query parameters.
    fn build_url(&self, coordinates: Coordinates) -> Result<Url, GeocodeError> {
        let mut url =
            self.base_url
                .join("reverse")
                .map_err(|e| GeocodeError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &coordinates.lat.to_string())
            .append_pair("lon", &coordinates.lon.to_string())
            .append_pair("zoom", &self.zoom.to_string())
            .append_pair("addressdetails", "1");
        Ok(url)
    }

    /// Sends a GET request, maps a non-2xx status to
    /// [`GeocodeError::RequestFailed`], and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeocodeError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::RequestFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Address, GeocodeError> {
        self.reverse(coordinates).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
