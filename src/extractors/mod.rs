//! Actor snapshot extraction modules
//!
//! Leaves first: field classification, link resolution, product resolution,
//! and the snapshot builder that composes them.

mod field_classifier;
mod link_resolver;
mod product_resolver;
mod snapshot_builder;
mod summary;

pub use field_classifier::*;
pub use link_resolver::*;
pub use product_resolver::*;
pub use snapshot_builder::*;
pub use summary::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Options controlling how a snapshot is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotOptions {
    /// Preferred offer currency (ISO 4217 code)
    pub currency: String,
    /// Whether to overlay an embedded product onto the snapshot
    pub include_product: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            include_product: true,
        }
    }
}

impl SnapshotOptions {
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }
}

/// Snapshot request from C++
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotRequest {
    pub actor: Value,
    #[serde(flatten)]
    pub options: SnapshotOptions,
}

/// A price/currency pair, optionally linked to a purchase URL
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub price: f64,
    pub price_currency: String,
    pub url: Option<String>,
}

/// Display fields resolved from an embedded `Product` attachment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSnapshot {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub price: Option<f64>,
    pub price_currency: Option<String>,
}

/// Flattened, display-ready projection of an actor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub preferred_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Empty string when the actor has no icon at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Empty string when the actor has no icon at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,
}

/// Look up a key, treating JSON `null` as missing
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    field(value, key).and_then(Value::as_str).map(String::from)
}
