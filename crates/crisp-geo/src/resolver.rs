//! Two-stage address resolution: device position, then reverse geocoding.

use crate::client::ReverseGeocoder;
use crate::error::{GeoError, LocationError};
use crate::location::LocationProvider;
use crate::types::{Address, Coordinates, PositionOptions};

/// Acquires the device position from `locator`, bounded by `options.timeout`.
///
/// # Errors
///
/// Returns the provider's [`LocationError`], or [`LocationError::Timeout`]
/// when the provider does not answer in time.
pub async fn get_current_location<L>(
    locator: &L,
    options: &PositionOptions,
) -> Result<Coordinates, LocationError>
where
    L: LocationProvider + Sync,
{
    match tokio::time::timeout(options.timeout, locator.current_position(options)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(LocationError::Timeout),
    }
}

/// Resolves the device's current position into a human-readable address.
///
/// A location failure aborts before any geocoding request is made.
///
/// # Errors
///
/// - [`GeoError::Location`] when stage 1 fails.
/// - [`GeoError::ReverseGeocode`] when stage 2 fails.
pub async fn get_current_address<L, G>(
    locator: &L,
    geocoder: &G,
    options: &PositionOptions,
) -> Result<Address, GeoError>
where
    L: LocationProvider + Sync,
    G: ReverseGeocoder + Sync,
{
    let coordinates = get_current_location(locator, options)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "could not acquire device location"))?;
    tracing::debug!(
        lat = coordinates.lat,
        lon = coordinates.lon,
        "acquired device location"
    );

    let address = geocoder
        .reverse_geocode(coordinates)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "reverse geocoding failed"))?;
    tracing::debug!(full_address = %address.full_address, "resolved address");
    Ok(address)
}

/// A location provider and geocoder bundled with the options to use them
/// with.
pub struct AddressResolver<L, G> {
    locator: L,
    geocoder: G,
    options: PositionOptions,
}

impl<L, G> AddressResolver<L, G>
where
    L: LocationProvider + Sync,
    G: ReverseGeocoder + Sync,
{
    pub fn new(locator: L, geocoder: G) -> Self {
        Self {
            locator,
            geocoder,
            options: PositionOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// See [`get_current_address`].
    ///
    /// # Errors
    ///
    /// Same as [`get_current_address`].
    pub async fn get_current_address(&self) -> Result<Address, GeoError> {
        get_current_address(&self.locator, &self.geocoder, &self.options).await
    }
}
