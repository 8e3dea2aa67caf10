use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CleaningType, Extra, Frequency, HomeArea};

/// Counts of billable areas in the home. Absent counts price as zero.
///
/// Counts are signed and the engine does not clamp them; keeping them
/// non-negative is the caller's job (see [`HomeDetails::adjust`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<i64>,
}

impl HomeDetails {
    /// Returns the count for `area`, treating an absent count as zero.
    #[must_use]
    pub fn count(&self, area: HomeArea) -> i64 {
        self.slot(area).unwrap_or(0)
    }

    /// Sets the count for `area` verbatim.
    pub fn set(&mut self, area: HomeArea, count: i64) {
        *self.slot_mut(area) = Some(count);
    }

    /// Steps the count for `area` by `delta`, flooring the result at zero the
    /// way the booking wizard's +/- controls do.
    pub fn adjust(&mut self, area: HomeArea, delta: i64) {
        let next = self.count(area).saturating_add(delta).max(0);
        self.set(area, next);
    }

    fn slot(&self, area: HomeArea) -> Option<i64> {
        match area {
            HomeArea::Bedroom => self.bedrooms,
            HomeArea::Bathroom => self.bathrooms,
            HomeArea::Kitchen => self.kitchens,
            HomeArea::Other => self.other,
        }
    }

    fn slot_mut(&mut self, area: HomeArea) -> &mut Option<i64> {
        match area {
            HomeArea::Bedroom => &mut self.bedrooms,
            HomeArea::Bathroom => &mut self.bathrooms,
            HomeArea::Kitchen => &mut self.kitchens,
            HomeArea::Other => &mut self.other,
        }
    }
}

/// A quote request as assembled by the booking wizard.
///
/// `cleaning_type` and `frequency` are optional only so that an incomplete
/// request can be represented; pricing one fails with
/// [`PricingError::MissingField`](crate::PricingError::MissingField).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub cleaning_type: Option<CleaningType>,
    #[serde(default)]
    pub home_details: HomeDetails,
    /// Selected add-ons in the order they were picked.
    #[serde(default)]
    pub extras: Vec<Extra>,
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub action_taker_discount: bool,
}

impl PricingRequest {
    #[must_use]
    pub fn new(cleaning_type: CleaningType, frequency: Frequency) -> Self {
        Self {
            cleaning_type: Some(cleaning_type),
            frequency: Some(frequency),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_home_details(mut self, home_details: HomeDetails) -> Self {
        self.home_details = home_details;
        self
    }

    /// Adds `extra` unless it is already selected.
    #[must_use]
    pub fn with_extra(mut self, extra: Extra) -> Self {
        if !self.extras.contains(&extra) {
            self.extras.push(extra);
        }
        self
    }

    #[must_use]
    pub fn with_action_taker_discount(mut self, enabled: bool) -> Self {
        self.action_taker_discount = enabled;
        self
    }

    /// Selects `extra` if absent, deselects it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle_extra(&mut self, extra: Extra) -> bool {
        if let Some(pos) = self.extras.iter().position(|e| *e == extra) {
            self.extras.remove(pos);
            false
        } else {
            self.extras.push(extra);
            true
        }
    }
}

/// One applied percentage discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLine {
    pub name: String,
    pub percentage: u32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<DiscountLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_taker: Option<DiscountLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLine {
    pub name: String,
    pub price: Decimal,
}

/// Home-details portion of the breakdown: the counts as supplied, plus their
/// priced sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDetailsBreakdown {
    #[serde(flatten)]
    pub counts: HomeDetails,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasBreakdown {
    pub items: Vec<PriceLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub cleaning_type: PriceLine,
    pub home_details: HomeDetailsBreakdown,
    pub extras: ExtrasBreakdown,
}

/// An itemized quote.
///
/// `total` is `subtotal - total_discount` rounded to cents; the discount
/// amounts themselves are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub subtotal: Decimal,
    pub discounts: Discounts,
    pub total_discount: Decimal,
    pub total: Decimal,
    pub breakdown: Breakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_floors_counts_at_zero() {
        let mut details = HomeDetails::default();
        details.adjust(HomeArea::Bedroom, 1);
        details.adjust(HomeArea::Bedroom, 1);
        assert_eq!(details.bedrooms, Some(2));

        details.adjust(HomeArea::Kitchen, -1);
        assert_eq!(details.kitchens, Some(0));

        details.adjust(HomeArea::Bedroom, -5);
        assert_eq!(details.count(HomeArea::Bedroom), 0);
    }

    #[test]
    fn set_stores_counts_verbatim() {
        let mut details = HomeDetails::default();
        details.set(HomeArea::Other, -3);
        assert_eq!(details.count(HomeArea::Other), -3);
        assert_eq!(details.count(HomeArea::Bathroom), 0);
    }

    #[test]
    fn toggle_extra_adds_then_removes() {
        let mut request = PricingRequest::new(CleaningType::Regular, Frequency::OneTime);
        assert!(request.toggle_extra(Extra::Windows));
        assert!(request.toggle_extra(Extra::Fridge));
        assert_eq!(request.extras, vec![Extra::Windows, Extra::Fridge]);

        assert!(!request.toggle_extra(Extra::Windows));
        assert_eq!(request.extras, vec![Extra::Fridge]);
    }

    #[test]
    fn with_extra_ignores_duplicates() {
        let request = PricingRequest::new(CleaningType::Deep, Frequency::Weekly)
            .with_extra(Extra::Garage)
            .with_extra(Extra::Garage);
        assert_eq!(request.extras, vec![Extra::Garage]);
    }
}
