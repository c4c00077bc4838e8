//! Actor snapshot builder
//!
//! Composes link and product resolution into a single [`DisplaySnapshot`].
//! Pure: no I/O, input is only borrowed. Malformed data degrades to absent
//! fields instead of failing.

use serde_json::Value;
use url::Url;

use super::link_resolver::{resolve_alt_text, resolve_link};
use super::product_resolver::{build_product_snapshot, find_embedded_product};
use super::{field, str_field, DisplaySnapshot, SnapshotOptions};
use crate::error::{Result, SnapshotError};

/// Build the display snapshot of an actor, overlaying its embedded product
pub fn build_snapshot(actor: &Value, options: &SnapshotOptions) -> DisplaySnapshot {
    let mut snapshot = build_profile_snapshot(actor);
    if !options.include_product {
        return snapshot;
    }

    let Some(entry) = find_embedded_product(field(actor, "attachment")) else {
        return snapshot;
    };
    let product = build_product_snapshot(entry, &options.currency);
    tracing::trace!(id = %snapshot.id, currency = %options.currency, "overlaying embedded product");

    let summary = snapshot.summary.take();

    snapshot.name = product.name.or_else(|| str_field(actor, "name"));
    snapshot.url = product.url.or_else(|| resolve_link(field(actor, "url")));
    snapshot.image_url = product.image.or_else(|| resolve_link(field(actor, "image")));
    snapshot.image_alt = product
        .description
        .or_else(|| resolve_alt_text(field(actor, "image"), summary.as_deref()));
    snapshot.summary = summary.or_else(|| snapshot.image_alt.clone());
    snapshot.price = product.price;
    snapshot.price_currency = product.price_currency;

    snapshot
}

/// Profile fields only: identity, domain and icon, no product overlay
pub fn build_profile_snapshot(actor: &Value) -> DisplaySnapshot {
    let id = str_field(actor, "id").unwrap_or_default();
    let summary = str_field(actor, "summary");
    let icon = field(actor, "icon");

    let (icon_url, icon_alt) = match icon {
        Some(_) => (resolve_link(icon), resolve_alt_text(icon, summary.as_deref())),
        None => (Some(String::new()), Some(String::new())),
    };

    DisplaySnapshot {
        domain: domain_of(&id),
        kind: str_field(actor, "type").unwrap_or_default(),
        name: str_field(actor, "name"),
        preferred_username: str_field(actor, "preferredUsername").unwrap_or_default(),
        url: str_field(actor, "url"),
        followers: str_field(actor, "followers"),
        following: str_field(actor, "following"),
        summary,
        icon_url,
        icon_alt,
        id,
        ..Default::default()
    }
}

/// Decode an actor document and build its snapshot
pub fn snapshot_from_json(json: &str, options: &SnapshotOptions) -> Result<DisplaySnapshot> {
    let actor: Value = serde_json::from_str(json).map_err(SnapshotError::InvalidJson)?;
    Ok(build_snapshot(&actor, options))
}

/// Host of an absolute actor id, if it is one
fn domain_of(id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    match Url::parse(id) {
        Ok(url) => url.host_str().map(String::from),
        Err(e) => {
            tracing::debug!(id, error = %e, "actor id is not an absolute URL, domain dropped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Value {
        json!({
            "id": "https://example.org/users/alice",
            "type": "Person",
            "name": "Alice",
            "preferredUsername": "alice",
            "url": "https://example.org/@alice",
            "summary": "<p>Hello</p>",
            "followers": "https://example.org/users/alice/followers",
            "following": "https://example.org/users/alice/following",
            "icon": {"type": "Image", "mediaType": "image/png", "url": "https://example.org/alice.png"}
        })
    }

    #[test]
    fn test_profile_snapshot() {
        let snapshot = build_profile_snapshot(&alice());
        assert_eq!(snapshot.id, "https://example.org/users/alice");
        assert_eq!(snapshot.kind, "Person");
        assert_eq!(snapshot.preferred_username, "alice");
        assert_eq!(snapshot.domain.as_deref(), Some("example.org"));
        assert_eq!(snapshot.icon_url.as_deref(), Some("https://example.org/alice.png"));
        // No name on the icon, so alt text falls back to summary
        assert_eq!(snapshot.icon_alt.as_deref(), Some("<p>Hello</p>"));
        assert_eq!(
            snapshot.followers.as_deref(),
            Some("https://example.org/users/alice/followers")
        );
        assert_eq!(snapshot.image_url, None);
    }

    #[test]
    fn test_domain_ignores_port() {
        let actor = json!({"id": "http://localhost:8080/users/bob", "type": "Person"});
        let snapshot = build_profile_snapshot(&actor);
        assert_eq!(snapshot.domain.as_deref(), Some("localhost"));
    }

    #[test]
    fn test_domain_absent_for_relative_or_hostless_id() {
        assert_eq!(build_profile_snapshot(&json!({"id": "alice"})).domain, None);
        assert_eq!(build_profile_snapshot(&json!({"id": "urn:uuid:1234"})).domain, None);
        assert_eq!(build_profile_snapshot(&json!({})).domain, None);
    }

    #[test]
    fn test_missing_icon_yields_empty_strings() {
        let mut actor = alice();
        actor.as_object_mut().unwrap().remove("icon");
        let snapshot = build_profile_snapshot(&actor);
        assert_eq!(snapshot.icon_url.as_deref(), Some(""));
        assert_eq!(snapshot.icon_alt.as_deref(), Some(""));

        actor["icon"] = Value::Null;
        assert_eq!(build_profile_snapshot(&actor).icon_url.as_deref(), Some(""));
    }

    #[test]
    fn test_unresolvable_icon_is_absent() {
        let mut actor = alice();
        actor["icon"] = json!(12);
        let snapshot = build_profile_snapshot(&actor);
        assert_eq!(snapshot.icon_url, None);
        assert_eq!(snapshot.icon_alt.as_deref(), Some("<p>Hello</p>"));
    }

    #[test]
    fn test_product_overlay() {
        let mut actor = alice();
        actor["type"] = json!("Service");
        actor["attachment"] = json!([
            {"type": "PropertyValue", "name": "Shop", "value": "open"},
            {
                "type": "Product",
                "name": "Mug",
                "description": "A ceramic mug",
                "image": "https://example.org/mug.png",
                "offers": [
                    {"price": 9, "priceCurrency": "EUR"},
                    {"price": 10, "priceCurrency": "USD", "url": "https://example.org/buy"}
                ]
            }
        ]);

        let snapshot = build_snapshot(&actor, &SnapshotOptions::default());
        assert_eq!(snapshot.name.as_deref(), Some("Mug"));
        assert_eq!(snapshot.url.as_deref(), Some("https://example.org/buy"));
        assert_eq!(snapshot.image_url.as_deref(), Some("https://example.org/mug.png"));
        assert_eq!(snapshot.image_alt.as_deref(), Some("A ceramic mug"));
        assert_eq!(snapshot.summary.as_deref(), Some("<p>Hello</p>"));
        assert_eq!(snapshot.price, Some(10.0));
        assert_eq!(snapshot.price_currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_product_falls_back_to_actor_fields() {
        let actor = json!({
            "id": "https://shop.example/actors/store",
            "type": "Service",
            "name": "Store",
            "preferredUsername": "store",
            "url": [
                {"type": "Link", "href": "https://shop.example/store", "mediaType": "text/html"}
            ],
            "image": {"type": "Image", "url": "https://shop.example/banner.png", "name": "Banner"},
            "attachment": [{"type": "Product"}]
        });

        let snapshot = build_snapshot(&actor, &SnapshotOptions::default());
        assert_eq!(snapshot.name.as_deref(), Some("Store"));
        assert_eq!(snapshot.url.as_deref(), Some("https://shop.example/store"));
        assert_eq!(snapshot.image_url.as_deref(), Some("https://shop.example/banner.png"));
        assert_eq!(snapshot.image_alt.as_deref(), Some("Banner"));
        // No actor summary, so it is derived from the image alt text
        assert_eq!(snapshot.summary.as_deref(), Some("Banner"));
        assert_eq!(snapshot.price, None);
        assert_eq!(snapshot.price_currency, None);
    }

    #[test]
    fn test_include_product_disabled() {
        let mut actor = alice();
        actor["attachment"] = json!([{"type": "Product", "name": "Mug"}]);
        let options = SnapshotOptions {
            include_product: false,
            ..Default::default()
        };
        let snapshot = build_snapshot(&actor, &options);
        assert_eq!(snapshot.name.as_deref(), Some("Alice"));
        assert_eq!(snapshot, build_profile_snapshot(&actor));
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot = snapshot_from_json(
            r#"{"id": "https://example.org/users/carol", "type": "Person", "preferredUsername": "carol"}"#,
            &SnapshotOptions::default(),
        )
        .unwrap();
        assert_eq!(snapshot.preferred_username, "carol");
        assert_eq!(snapshot.domain.as_deref(), Some("example.org"));

        let err = snapshot_from_json("{not json", &SnapshotOptions::default()).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidJson(_)));
    }

    #[test]
    fn test_build_is_idempotent() {
        let actor = alice();
        let options = SnapshotOptions::default();
        assert_eq!(build_snapshot(&actor, &options), build_snapshot(&actor, &options));
    }
}
