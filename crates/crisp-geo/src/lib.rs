//! Current-address lookup for the Crisp Cleaning booking wizard.
//!
//! Resolution runs in two independently failable stages: a
//! [`LocationProvider`] supplies the device position, then a
//! [`ReverseGeocoder`] (normally [`NominatimClient`]) turns it into an
//! [`Address`].

pub mod client;
pub mod error;
pub mod location;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use client::{NominatimClient, ReverseGeocoder};
pub use error::{GeoError, GeocodeError, LocationError};
pub use location::{FixedLocationProvider, LocationProvider, UnavailableLocationProvider};
pub use resolver::{get_current_address, get_current_location, AddressResolver};
pub use types::{Address, Coordinates, PositionOptions};
