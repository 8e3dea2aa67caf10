//! Location and address types, plus the Nominatim `reverse` response shape.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// How a [`LocationProvider`](crate::LocationProvider) should acquire a fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// Upper bound on the whole acquisition; enforced by the resolver.
    pub timeout: Duration,
    /// Oldest cached fix the provider may return. Zero demands a fresh one.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// A resolved, human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub full_address: String,
    /// Position reported by the geocoder, which may be snapped to the nearest
    /// feature rather than the raw device fix.
    pub coordinates: Coordinates,
}

// ---------------------------------------------------------------------------
// Nominatim /reverse
// ---------------------------------------------------------------------------

/// Body of a Nominatim `/reverse?format=json&addressdetails=1` response.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Option<RawAddress>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub lat: Option<CoordinateValue>,
    #[serde(default)]
    pub lon: Option<CoordinateValue>,
}

/// Nominatim's `address` object. Which keys appear depends on the place type.
#[derive(Debug, Default, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Nominatim returns `lat`/`lon` as strings; some compatible servers send
/// numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    /// Returns the numeric value, or NaN when the text is not a number.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}
