//! `quote` and `prices` command handlers.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use crisp_pricing::{
    calculate_pricing, CleaningType, Extra, Frequency, HomeArea, HomeDetails, PricingRequest,
    PricingResponse, ACTION_TAKER_DISCOUNT_PERCENT,
};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Cleaning type: Regular, Deep, or Vacate
    #[arg(long = "type", conflicts_with = "request")]
    pub cleaning_type: Option<CleaningType>,
    /// Frequency: "One time", Weekly, Fortnightly, or Monthly
    #[arg(long, conflicts_with = "request")]
    pub frequency: Option<Frequency>,
    #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
    pub bedrooms: Option<i64>,
    #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
    pub bathrooms: Option<i64>,
    #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
    pub kitchens: Option<i64>,
    #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
    pub other: Option<i64>,
    /// Add-on service; repeat for several (e.g. --extra Windows --extra Fridge)
    #[arg(long = "extra", conflicts_with = "request")]
    pub extras: Vec<Extra>,
    /// Apply the action-taker discount
    #[arg(long, conflicts_with = "request")]
    pub action_taker: bool,
    /// Read a JSON pricing request from this file instead of flags
    #[arg(long)]
    pub request: Option<PathBuf>,
    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    /// Assembles a request from the individual flags.
    pub(crate) fn to_request(&self) -> PricingRequest {
        let mut request = PricingRequest {
            cleaning_type: self.cleaning_type,
            frequency: self.frequency,
            home_details: HomeDetails {
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                kitchens: self.kitchens,
                other: self.other,
            },
            action_taker_discount: self.action_taker,
            ..PricingRequest::default()
        };
        for extra in &self.extras {
            request = request.with_extra(*extra);
        }
        request
    }
}

fn load_request(args: &QuoteArgs) -> anyhow::Result<PricingRequest> {
    let Some(path) = &args.request else {
        return Ok(args.to_request());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse pricing request in {}", path.display()))
}

/// Price a cleaning job and print the quote.
///
/// # Errors
///
/// Returns an error if the request file cannot be read or parsed, or if the
/// request is missing its cleaning type or frequency.
pub(crate) fn run_quote(args: &QuoteArgs) -> anyhow::Result<()> {
    let request = load_request(args)?;
    let quote = calculate_pricing(&request).context("could not price request")?;
    tracing::info!(total = %quote.total, "quote ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{}", render_quote(&quote));
    }
    Ok(())
}

/// Print every catalogue price.
pub(crate) fn run_prices() {
    print!("{}", render_catalogue());
}

pub(crate) fn format_money(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount.abs())
    }
}

const WIDTH: usize = 32;

fn line(out: &mut String, label: &str, amount: &str) {
    let _ = writeln!(out, "{label:<WIDTH$}{amount:>12}");
}

/// Formats a quote as an itemized receipt.
pub(crate) fn render_quote(quote: &PricingResponse) -> String {
    let mut out = String::new();
    let breakdown = &quote.breakdown;

    line(
        &mut out,
        &format!("{} clean", breakdown.cleaning_type.name),
        &format_money(breakdown.cleaning_type.price),
    );

    let counts = &breakdown.home_details.counts;
    for area in HomeArea::ALL {
        let count = counts.count(area);
        if count != 0 {
            line(
                &mut out,
                &format!("  {area} x{count}"),
                &format_money(Decimal::from(count) * area.unit_price()),
            );
        }
    }

    for item in &breakdown.extras.items {
        line(&mut out, &format!("  {}", item.name), &format_money(item.price));
    }

    line(&mut out, "Subtotal", &format_money(quote.subtotal));
    for discount in [&quote.discounts.frequency, &quote.discounts.action_taker]
        .into_iter()
        .flatten()
    {
        line(
            &mut out,
            &format!("{} ({}%)", discount.name, discount.percentage),
            &format_money(-discount.amount),
        );
    }
    line(&mut out, "Total", &format_money(quote.total));
    out
}

/// Formats the full price catalogue.
pub(crate) fn render_catalogue() -> String {
    let mut out = String::from("Cleaning types\n");
    for cleaning_type in CleaningType::ALL {
        line(
            &mut out,
            &format!("  {cleaning_type}"),
            &format_money(cleaning_type.price()),
        );
    }
    out.push_str("Per room\n");
    for area in HomeArea::ALL {
        line(&mut out, &format!("  {area}"), &format_money(area.unit_price()));
    }
    out.push_str("Extras\n");
    for extra in Extra::ALL {
        line(&mut out, &format!("  {extra}"), &format_money(extra.price()));
    }
    out.push_str("Frequency discounts\n");
    for frequency in Frequency::ALL {
        line(
            &mut out,
            &format!("  {frequency}"),
            &format!("{}%", frequency.discount_percent()),
        );
    }
    line(
        &mut out,
        "Action taker discount",
        &format!("{ACTION_TAKER_DISCOUNT_PERCENT}%"),
    );
    out
}
