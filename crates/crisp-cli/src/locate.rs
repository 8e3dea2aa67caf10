//! `locate` command handler.

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use crisp_core::AppConfig;
use crisp_geo::{
    get_current_address, Address, Coordinates, FixedLocationProvider, LocationProvider,
    NominatimClient, PositionOptions, UnavailableLocationProvider,
};

/// Shown when resolution fails, matching the booking form's fallback.
const MANUAL_ENTRY_HINT: &str = "Could not fetch location. Please enter manually.";

#[derive(Debug, Args)]
pub(crate) struct LocateArgs {
    /// Device latitude; overrides CRISP_DEVICE_LAT
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Device longitude; overrides CRISP_DEVICE_LON
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Print the address as JSON
    #[arg(long)]
    pub json: bool,
}

/// Picks the device position source: explicit flags first, then configured
/// coordinates. `None` means the host has no location source.
pub(crate) fn device_coordinates(config: &AppConfig, args: &LocateArgs) -> Option<Coordinates> {
    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
        _ => config
            .device_coordinates
            .map(|c| Coordinates { lat: c.lat, lon: c.lon }),
    }
}

fn position_options(config: &AppConfig) -> PositionOptions {
    PositionOptions {
        timeout: Duration::from_millis(config.location_timeout_ms),
        ..PositionOptions::default()
    }
}

async fn resolve<L>(
    locator: &L,
    geocoder: &NominatimClient,
    options: &PositionOptions,
) -> anyhow::Result<Address>
where
    L: LocationProvider + Sync,
{
    match get_current_address(locator, geocoder, options).await {
        Ok(address) => Ok(address),
        Err(err) => {
            eprintln!("{MANUAL_ENTRY_HINT}");
            Err(err).context("address lookup failed")
        }
    }
}

/// Resolve the current device address and print it.
///
/// # Errors
///
/// Returns an error if the geocoder client cannot be built or if either
/// resolution stage fails.
pub(crate) async fn run_locate(config: &AppConfig, args: &LocateArgs) -> anyhow::Result<()> {
    let geocoder = NominatimClient::with_base_url(
        &config.geocoder_user_agent,
        config.geocoder_timeout_secs,
        &config.geocoder_base_url,
    )?
    .with_zoom(config.geocoder_zoom);
    let options = position_options(config);

    let address = match device_coordinates(config, args) {
        Some(coords) => resolve(&FixedLocationProvider::new(coords), &geocoder, &options).await?,
        None => resolve(&UnavailableLocationProvider, &geocoder, &options).await?,
    };
    tracing::info!(full_address = %address.full_address, "address resolved");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&address)?);
    } else {
        println!("{}", address.full_address);
        println!(
            "({:.6}, {:.6})",
            address.coordinates.lat, address.coordinates.lon
        );
    }
    Ok(())
}
