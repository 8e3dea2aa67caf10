//! Fixed price catalogue for cleaning quotes.
//!
//! Every option a customer can pick is a closed enum whose price (or discount
//! rate) comes from an exhaustive `match`, so adding a variant without a price
//! is a compile error. Display names are the exact strings the booking wizard
//! shows and accepts.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::PricingError;

/// Rate of the opt-in action-taker discount, in percent.
pub const ACTION_TAKER_DISCOUNT_PERCENT: u32 = 30;

/// The kind of clean being booked; sets the base price of the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CleaningType {
    Regular,
    Deep,
    Vacate,
}

impl CleaningType {
    pub const ALL: [CleaningType; 3] = [Self::Regular, Self::Deep, Self::Vacate];

    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::Regular => Decimal::from(45),
            Self::Deep => Decimal::from(135),
            Self::Vacate => Decimal::from(280),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Deep => "Deep",
            Self::Vacate => "Vacate",
        }
    }
}

/// A billable area of the home, priced per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeArea {
    Bedroom,
    Bathroom,
    Kitchen,
    Other,
}

impl HomeArea {
    pub const ALL: [HomeArea; 4] = [Self::Bedroom, Self::Bathroom, Self::Kitchen, Self::Other];

    #[must_use]
    pub fn unit_price(self) -> Decimal {
        match self {
            Self::Bedroom | Self::Other => Decimal::from(20),
            Self::Bathroom => Decimal::from(45),
            Self::Kitchen => Decimal::from(35),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::Other => "Other",
        }
    }
}

/// An optional add-on service with a flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Extra {
    Windows,
    Walls,
    Cabinets,
    Organisation,
    Blinds,
    #[serde(rename = "Oven/Stovetops")]
    OvenStovetops,
    Fridge,
    Dishwasher,
    Garage,
    Microwave,
    Laundry,
    #[serde(rename = "Tiles/Flooring")]
    TilesFlooring,
}

impl Extra {
    pub const ALL: [Extra; 12] = [
        Self::Windows,
        Self::Walls,
        Self::Cabinets,
        Self::Organisation,
        Self::Blinds,
        Self::OvenStovetops,
        Self::Fridge,
        Self::Dishwasher,
        Self::Garage,
        Self::Microwave,
        Self::Laundry,
        Self::TilesFlooring,
    ];

    #[must_use]
    pub fn price(self) -> Decimal {
        let dollars = match self {
            Self::Microwave => 10,
            Self::Dishwasher => 25,
            Self::Windows | Self::Cabinets | Self::Fridge => 30,
            Self::Blinds | Self::OvenStovetops | Self::Laundry | Self::TilesFlooring => 35,
            Self::Walls | Self::Organisation | Self::Garage => 40,
        };
        Decimal::from(dollars)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Walls => "Walls",
            Self::Cabinets => "Cabinets",
            Self::Organisation => "Organisation",
            Self::Blinds => "Blinds",
            Self::OvenStovetops => "Oven/Stovetops",
            Self::Fridge => "Fridge",
            Self::Dishwasher => "Dishwasher",
            Self::Garage => "Garage",
            Self::Microwave => "Microwave",
            Self::Laundry => "Laundry",
            Self::TilesFlooring => "Tiles/Flooring",
        }
    }
}

/// How often the clean recurs; recurring bookings earn a percentage discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Frequency {
    #[serde(rename = "One time")]
    OneTime,
    Weekly,
    Fortnightly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Self::OneTime,
        Self::Weekly,
        Self::Fortnightly,
        Self::Monthly,
    ];

    #[must_use]
    pub fn discount_percent(self) -> u32 {
        match self {
            Self::OneTime => 0,
            Self::Weekly => 15,
            Self::Fortnightly => 10,
            Self::Monthly => 5,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OneTime => "One time",
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Finds the catalogue entry whose display name matches `value`.
///
/// Matching ignores ASCII case and surrounding whitespace so hand-typed names
/// like `"one time"` resolve.
fn lookup_by_name<T: Copy>(
    all: &[T],
    name: impl Fn(T) -> &'static str,
    kind: &'static str,
    value: &str,
) -> Result<T, PricingError> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|item| name(*item).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| PricingError::UnknownOption {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for CleaningType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_by_name(&Self::ALL, Self::name, "cleaning type", s)
    }
}

impl FromStr for HomeArea {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_by_name(&Self::ALL, Self::name, "home area", s)
    }
}

impl FromStr for Extra {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_by_name(&Self::ALL, Self::name, "extra", s)
    }
}

impl FromStr for Frequency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_by_name(&Self::ALL, Self::name, "frequency", s)
    }
}

/// Deserializes through `FromStr` so JSON requests accept the same
/// case-insensitive names as the command line.
fn deserialize_by_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = PricingError>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for CleaningType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_by_name(deserializer)
    }
}

impl<'de> Deserialize<'de> for Extra {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_by_name(deserializer)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_by_name(deserializer)
    }
}

impl fmt::Display for CleaningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HomeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
