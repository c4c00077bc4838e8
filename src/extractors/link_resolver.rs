//! Link and alt-text resolution
//!
//! When several link objects are given, only an explicit `text/html` entry is
//! accepted. A list with no HTML-typed entry resolves to nothing, even if it
//! holds other links.

use serde_json::Value;

use super::field_classifier::{classify, LinkField, LinkObject};

/// Pick a single URL out of a link-bearing field
pub fn resolve_link(term: Option<&Value>) -> Option<String> {
    match classify(term) {
        LinkField::Text(s) | LinkField::TextList(s) => Some(s.to_string()),
        LinkField::LinkList(entries) => LinkField::first_html(entries)
            .and_then(|link| link.href())
            .map(String::from),
        LinkField::Link(link) => link.href().or_else(|| link.url()).map(String::from),
        LinkField::Unrecognised => None,
    }
}

/// Pick alt text out of a link-bearing field, falling back to `fallback`.
///
/// An href-led link list with no HTML-typed name yields `None` rather than the
/// fallback.
pub fn resolve_alt_text(term: Option<&Value>, fallback: Option<&str>) -> Option<String> {
    match classify(term) {
        LinkField::LinkList(entries) => {
            let first = entries.first().and_then(Value::as_object).map(LinkObject::new);
            match first {
                Some(first) if first.has_href() => LinkField::first_html(entries)
                    .and_then(|link| link.name())
                    .map(String::from),
                Some(first) if first.has_name() => first.name().map(String::from),
                _ => fallback.map(String::from),
            }
        }
        LinkField::Link(link) if link.has_name() => link.name().map(String::from),
        _ => fallback.map(String::from),
    }
}
