//! Shape classification for loosely-typed ActivityStreams fields
//!
//! `url`, `icon`, `image` and friends may hold a bare string, a Link/Image
//! object, or an array of either. Everything downstream matches on
//! [`LinkField`] instead of probing the JSON again.

use serde_json::{Map, Value};

/// Borrowed view over a JSON object that looks like an AS Link or Image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkObject<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> LinkObject<'a> {
    /// Wrap any JSON object, whether or not it carries `href`/`url`
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// An object is link-shaped when it exposes `href` or `url`
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        if fields.contains_key("href") || fields.contains_key("url") {
            Some(Self { fields })
        } else {
            None
        }
    }

    pub fn has_href(&self) -> bool {
        self.fields.contains_key("href")
    }

    pub fn has_name(&self) -> bool {
        self.fields.contains_key("name")
    }

    pub fn href(&self) -> Option<&'a str> {
        self.str_field("href")
    }

    pub fn url(&self) -> Option<&'a str> {
        self.str_field("url")
    }

    pub fn media_type(&self) -> Option<&'a str> {
        self.str_field("mediaType")
    }

    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    pub fn is_html(&self) -> bool {
        self.media_type() == Some("text/html")
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Classified shape of a link-bearing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkField<'a> {
    /// A bare URL string
    Text(&'a str),
    /// A single link-shaped object
    Link(LinkObject<'a>),
    /// A non-empty array led by a string; carries that first string
    TextList(&'a str),
    /// A non-empty array led by a link-shaped object; carries every entry
    LinkList(&'a [Value]),
    /// Missing, null, empty array, or anything else
    Unrecognised,
}

impl<'a> LinkField<'a> {
    /// First entry of a link list tagged `text/html`, if any.
    ///
    /// Only the first HTML-typed entry is considered, even when it lacks the
    /// key the caller is after.
    pub fn first_html(entries: &'a [Value]) -> Option<LinkObject<'a>> {
        entries
            .iter()
            .filter_map(Value::as_object)
            .map(LinkObject::new)
            .find(LinkObject::is_html)
    }
}

/// Classify a raw field. Never fails; unknown shapes are `Unrecognised`.
pub fn classify(term: Option<&Value>) -> LinkField<'_> {
    let Some(term) = term else {
        return LinkField::Unrecognised;
    };

    match term {
        Value::String(s) => LinkField::Text(s),
        Value::Object(_) => match LinkObject::from_value(term) {
            Some(link) => LinkField::Link(link),
            None => LinkField::Unrecognised,
        },
        Value::Array(items) => match items.first() {
            Some(Value::String(s)) => LinkField::TextList(s),
            Some(first) if LinkObject::from_value(first).is_some() => LinkField::LinkList(items),
            _ => LinkField::Unrecognised,
        },
        _ => LinkField::Unrecognised,
    }
}
