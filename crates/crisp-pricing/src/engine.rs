//! Quote computation.
//!
//! [`calculate_pricing`] is a pure function: the booking wizard calls it on
//! every input change and throws the previous result away.

use rust_decimal::Decimal;

use crate::catalog::{Extra, HomeArea, ACTION_TAKER_DISCOUNT_PERCENT};
use crate::error::PricingError;
use crate::types::{
    Breakdown, DiscountLine, Discounts, ExtrasBreakdown, HomeDetails, HomeDetailsBreakdown,
    PriceLine, PricingRequest, PricingResponse,
};

/// Computes an itemized quote for `request`.
///
/// Discounts stack sequentially: the frequency discount comes off the
/// subtotal, then the action-taker discount (if opted in) comes off what is
/// left. Only the final total is rounded to cents.
///
/// # Errors
///
/// Returns [`PricingError::MissingField`] when `cleaningType` or `frequency`
/// is absent. Nothing else fails.
pub fn calculate_pricing(request: &PricingRequest) -> Result<PricingResponse, PricingError> {
    let cleaning_type = request
        .cleaning_type
        .ok_or(PricingError::MissingField("cleaningType"))?;
    let frequency = request
        .frequency
        .ok_or(PricingError::MissingField("frequency"))?;

    let base_price = cleaning_type.price();
    let home_details_total = home_details_total(&request.home_details);

    let extra_items: Vec<PriceLine> = distinct_extras(&request.extras)
        .map(|extra| PriceLine {
            name: extra.name().to_string(),
            price: extra.price(),
        })
        .collect();
    let extras_total: Decimal = extra_items.iter().map(|item| item.price).sum();

    let subtotal = base_price + home_details_total + extras_total;

    let mut discounts = Discounts::default();
    let mut total_discount = Decimal::ZERO;

    let frequency_percent = frequency.discount_percent();
    if frequency_percent > 0 {
        let amount = percent_of(subtotal, frequency_percent);
        discounts.frequency = Some(DiscountLine {
            name: format!("{frequency} discount"),
            percentage: frequency_percent,
            amount,
        });
        total_discount += amount;
    }

    if request.action_taker_discount {
        let amount = percent_of(subtotal - total_discount, ACTION_TAKER_DISCOUNT_PERCENT);
        discounts.action_taker = Some(DiscountLine {
            name: "Action taker discount".to_string(),
            percentage: ACTION_TAKER_DISCOUNT_PERCENT,
            amount,
        });
        total_discount += amount;
    }

    let total = round_to_cents(subtotal - total_discount);

    tracing::debug!(
        cleaning_type = %cleaning_type,
        frequency = %frequency,
        %subtotal,
        %total_discount,
        %total,
        "computed quote"
    );

    Ok(PricingResponse {
        subtotal,
        discounts,
        total_discount,
        total,
        breakdown: Breakdown {
            cleaning_type: PriceLine {
                name: cleaning_type.name().to_string(),
                price: base_price,
            },
            home_details: HomeDetailsBreakdown {
                counts: request.home_details.clone(),
                total: home_details_total,
            },
            extras: ExtrasBreakdown {
                items: extra_items,
                total: extras_total,
            },
        },
    })
}

/// Sums per-unit charges over every home area. Negative counts subtract.
fn home_details_total(details: &HomeDetails) -> Decimal {
    HomeArea::ALL
        .iter()
        .map(|area| Decimal::from(details.count(*area)) * area.unit_price())
        .sum()
}

/// Yields each extra once, in first-selected order.
fn distinct_extras(extras: &[Extra]) -> impl Iterator<Item = Extra> + '_ {
    extras
        .iter()
        .enumerate()
        .filter(|(i, extra)| !extras[..*i].contains(*extra))
        .map(|(_, extra)| *extra)
}

fn percent_of(amount: Decimal, percent: u32) -> Decimal {
    amount * Decimal::from(percent) / Decimal::ONE_HUNDRED
}

/// Rounds to two decimal places with half a cent always going up (towards
/// positive infinity, so `-0.125` becomes `-0.12`), always carrying scale 2 so
/// whole-dollar totals render as e.g. `130.00`.
/// `RoundingStrategy` has no mode for this.
fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        ((amount * Decimal::ONE_HUNDRED) + Decimal::new(5, 1)).floor() / Decimal::ONE_HUNDRED;
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
