//! Turns a Nominatim `reverse` response into an [`Address`].

use crate::error::GeocodeError;
use crate::types::{Address, Coordinates, RawAddress, ReverseResponse};

/// Returns the first candidate that is present and non-empty.
fn first_present(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .find_map(|c| c.as_deref().filter(|s| !s.is_empty()))
        .map(str::to_owned)
}

/// Joins the parts of an address into one line:
/// `"{house_number} {street}, {city}, {state}, {postcode}, {country}"`,
/// skipping anything absent. A house number without a street is dropped.
#[must_use]
pub fn compose_full_address(
    street: Option<&str>,
    house_number: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    postcode: Option<&str>,
    country: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);
    match (house_number, street) {
        (Some(number), Some(street)) => parts.push(format!("{number} {street}")),
        (None, Some(street)) => parts.push(street.to_owned()),
        _ => {}
    }
    parts.extend(
        [city, state, postcode, country]
            .into_iter()
            .flatten()
            .map(str::to_owned),
    );
    parts.join(", ")
}

/// Converts a [`ReverseResponse`] into an [`Address`].
///
/// City falls back through town, village, municipality and county; state
/// falls back to region. When none of the structured parts are present the
/// service's own `display_name` becomes the full address.
///
/// # Errors
///
/// Returns [`GeocodeError::NoData`] when the response has no `address`.
pub fn normalize_address(response: ReverseResponse) -> Result<Address, GeocodeError> {
    let ReverseResponse {
        address,
        display_name,
        lat,
        lon,
    } = response;
    let raw: RawAddress = address.ok_or(GeocodeError::NoData)?;

    let street = first_present(&[&raw.road, &raw.street]);
    let house_number = first_present(&[&raw.house_number]);
    let city = first_present(&[
        &raw.city,
        &raw.town,
        &raw.village,
        &raw.municipality,
        &raw.county,
    ]);
    let state = first_present(&[&raw.state, &raw.region]);
    let postcode = first_present(&[&raw.postcode]);
    let country = first_present(&[&raw.country]);

    let composed = compose_full_address(
        street.as_deref(),
        house_number.as_deref(),
        city.as_deref(),
        state.as_deref(),
        postcode.as_deref(),
        country.as_deref(),
    );
    let full_address = if composed.is_empty() {
        display_name.unwrap_or_default()
    } else {
        composed
    };

    let coordinates = Coordinates {
        lat: lat.map_or(f64::NAN, |v| v.to_f64()),
        lon: lon.map_or(f64::NAN, |v| v.to_f64()),
    };

    Ok(Address {
        street,
        house_number,
        city,
        state,
        postcode,
        country,
        full_address,
        coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(value: serde_json::Value) -> ReverseResponse {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn composes_full_address_from_all_parts() {
        let address = normalize_address(response(serde_json::json!({
            "lat": "-33.8567844",
            "lon": "151.2152967",
            "display_name": "Sydney Opera House, Bennelong Point, Sydney, NSW, 2000, Australia",
            "address": {
                "house_number": "2",
                "road": "Macquarie Street",
                "city": "Sydney",
                "state": "New South Wales",
                "postcode": "2000",
                "country": "Australia"
            }
        })))
        .unwrap();

        assert_eq!(
            address.full_address,
            "2 Macquarie Street, Sydney, New South Wales, 2000, Australia"
        );
        assert_eq!(address.house_number.as_deref(), Some("2"));
        assert_eq!(address.street.as_deref(), Some("Macquarie Street"));
        assert!((address.coordinates.lat - -33.856_784_4).abs() < 1e-9);
        assert!((address.coordinates.lon - 151.215_296_7).abs() < 1e-9);
    }

    #[test]
    fn street_without_house_number_stands_alone() {
        let address = normalize_address(response(serde_json::json!({
            "lat": "1", "lon": "2",
            "address": { "street": "High Street", "town": "Marlow" }
        })))
        .unwrap();
        assert_eq!(address.full_address, "High Street, Marlow");
        assert_eq!(address.city.as_deref(), Some("Marlow"));
    }

    #[test]
    fn road_is_preferred_over_street() {
        let address = normalize_address(response(serde_json::json!({
            "address": { "road": "A Road", "street": "B Street" }
        })))
        .unwrap();
        assert_eq!(address.street.as_deref(), Some("A Road"));
    }

    #[test]
    fn house_number_without_street_is_not_composed() {
        let address = normalize_address(response(serde_json::json!({
            "address": { "house_number": "12", "village": "Ambleside" }
        })))
        .unwrap();
        assert_eq!(address.full_address, "Ambleside");
        assert_eq!(address.house_number.as_deref(), Some("12"));
    }

    #[test]
    fn city_falls_back_through_smaller_settlements() {
        let address = normalize_address(response(serde_json::json!({
            "address": { "municipality": "Gemeente Texel", "county": "Noord-Holland" }
        })))
        .unwrap();
        assert_eq!(address.city.as_deref(), Some("Gemeente Texel"));

        let address = normalize_address(response(serde_json::json!({
            "address": { "county": "Kerry", "region": "Munster" }
        })))
        .unwrap();
        assert_eq!(address.city.as_deref(), Some("Kerry"));
        assert_eq!(address.state.as_deref(), Some("Munster"));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let address = normalize_address(response(serde_json::json!({
            "address": { "road": "", "street": "Fallback Lane", "city": "", "town": "Hobart" }
        })))
        .unwrap();
        assert_eq!(address.street.as_deref(), Some("Fallback Lane"));
        assert_eq!(address.city.as_deref(), Some("Hobart"));
        assert!(address.postcode.is_none());
    }

    #[test]
    fn falls_back_to_display_name_without_structured_parts() {
        let address = normalize_address(response(serde_json::json!({
            "lat": "0", "lon": "0",
            "display_name": "Null Island",
            "address": { "ocean": "Atlantic" }
        })))
        .unwrap();
        assert_eq!(address.full_address, "Null Island");
        assert!(address.street.is_none());
        assert!(address.city.is_none());
    }

    #[test]
    fn missing_address_is_no_data() {
        let err = normalize_address(response(serde_json::json!({
            "error": "Unable to geocode"
        })))
        .unwrap_err();
        assert!(matches!(err, GeocodeError::NoData));
    }

    #[test]
    fn numeric_and_garbage_coordinates() {
        let address = normalize_address(response(serde_json::json!({
            "lat": 48.8584, "lon": "east",
            "address": { "city": "Paris" }
        })))
        .unwrap();
        assert!((address.coordinates.lat - 48.8584).abs() < f64::EPSILON);
        assert!(address.coordinates.lon.is_nan());
    }
}
