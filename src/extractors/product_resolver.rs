//! Embedded product resolution
//!
//! Product information is stored as a schema.org `Product` inside the actor's
//! `attachment` (merchant listing structured data), with one or more `offers`.

use serde_json::Value;

use super::link_resolver::resolve_link;
use super::{field, str_field, Offer, ProductSnapshot};

/// First attachment whose `type` is `Product`
pub fn find_embedded_product(attachments: Option<&Value>) -> Option<&Value> {
    let entries = attachments?.as_array()?;
    let product = entries.iter().find(|entry| is_product(entry));
    if product.is_none() {
        tracing::trace!(attachments = entries.len(), "no embedded product");
    }
    product
}

fn is_product(entry: &Value) -> bool {
    entry.get("type").and_then(Value::as_str) == Some("Product")
}

/// Select the offer for `currency`, falling back to the first offer.
///
/// A single non-array `offers` value is accepted only if it is itself a
/// well-formed offer.
pub fn resolve_offer(offers: &Value, currency: &str) -> Option<Offer> {
    match offers {
        Value::Array(entries) => {
            let valid: Vec<Offer> = entries.iter().filter_map(parse_offer).collect();
            if valid.len() < entries.len() {
                tracing::debug!(
                    skipped = entries.len() - valid.len(),
                    "ignoring malformed offers"
                );
            }
            let index = valid
                .iter()
                .position(|offer| offer.price_currency == currency)
                .unwrap_or(0);
            valid.into_iter().nth(index)
        }
        other => {
            let offer = parse_offer(other);
            if offer.is_none() {
                tracing::debug!("offers is neither an offer nor a list of offers");
            }
            offer
        }
    }
}

fn parse_offer(value: &Value) -> Option<Offer> {
    if !value.is_object() {
        return None;
    }
    let price = match field(value, "price")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|price| price.is_finite())?;
    let price_currency = str_field(value, "priceCurrency")?;

    Some(Offer {
        price,
        price_currency,
        url: resolve_link(Some(value)),
    })
}

/// Resolve display fields of a `Product` entry
pub fn build_product_snapshot(product: &Value, currency: &str) -> ProductSnapshot {
    let mut snapshot = ProductSnapshot {
        name: str_field(product, "name"),
        description: str_field(product, "description"),
        image: resolve_link(field(product, "image")),
        ..Default::default()
    };

    if let Some(offer) = field(product, "offers").and_then(|offers| resolve_offer(offers, currency)) {
        snapshot.url = offer.url;
        snapshot.price = Some(offer.price);
        snapshot.price_currency = Some(offer.price_currency);
    }

    snapshot
}
