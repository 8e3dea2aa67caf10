//! Device location sources.
//!
//! A [`LocationProvider`] is the first stage of address resolution. Hosts
//! plug in whatever location service they have; this crate ships a fixed
//! provider for configured coordinates and one that reports the host has no
//! location source.

use std::future::Future;

use crate::error::LocationError;
use crate::types::{Coordinates, PositionOptions};

/// Source of the device's current position.
pub trait LocationProvider {
    /// Acquires a position honouring `options` where the source can.
    ///
    /// Providers need not enforce `options.timeout`; the resolver bounds the
    /// call itself.
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Returns the same coordinates on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    coordinates: Coordinates,
}

impl FixedLocationProvider {
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        let Coordinates { lat, lon } = self.coordinates;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::PositionUnavailable);
        }
        Ok(self.coordinates)
    }
}

/// Stand-in for hosts without any location source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationProvider;

impl LocationProvider for UnavailableLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_provider_returns_its_coordinates() {
        let coords = Coordinates {
            lat: 51.5007,
            lon: -0.1246,
        };
        let provider = FixedLocationProvider::new(coords);
        let got = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap();
        assert_eq!(got, coords);
    }

    #[tokio::test]
    async fn fixed_provider_rejects_impossible_coordinates() {
        let provider = FixedLocationProvider::new(Coordinates {
            lat: 123.0,
            lon: 0.0,
        });
        let err = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, LocationError::PositionUnavailable);
    }

    #[tokio::test]
    async fn unavailable_provider_reports_unsupported() {
        let err = UnavailableLocationProvider
            .current_position(&PositionOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, LocationError::Unsupported);
    }

    #[test]
    fn default_options_demand_a_fresh_high_accuracy_fix() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout.as_millis(), 10_000);
        assert!(options.maximum_age.is_zero());
    }
}
