//! Eventbrite API response types.
//!
//! Event objects and search pages are kept as raw JSON: their nesting varies
//! with which optional fields (venue, address, end time) the API chose to
//! include, and a single oddly-typed field must not sink a whole page.

use serde::Deserialize;

/// A single event object exactly as returned by `/events/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawEvent(pub serde_json::Value);

impl RawEvent {
    /// Looks up a string at a JSON pointer such as `/name/text`.
    ///
    /// Missing keys, `null`, and non-string values all yield `None`.
    #[must_use]
    pub fn str_at(&self, pointer: &str) -> Option<String> {
        self.0
            .pointer(pointer)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }

    #[must_use]
    pub fn bool_at(&self, pointer: &str) -> Option<bool> {
        self.0.pointer(pointer).and_then(serde_json::Value::as_bool)
    }
}

/// One page of `/events/search` results, read leniently.
///
/// Any JSON body is accepted. `events` that is missing, `null` or not an
/// array counts as an empty page.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub events: Vec<RawEvent>,
    /// Truthiness of `pagination.has_more_items`; missing means no more pages.
    pub has_more_items: bool,
}

impl SearchPage {
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        let has_more_items = value
            .pointer("/pagination/has_more_items")
            .is_some_and(is_truthy);
        let events = match value {
            serde_json::Value::Object(mut map) => match map.remove("events") {
                Some(serde_json::Value::Array(items)) => items.into_iter().map(RawEvent).collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self {
            events,
            has_more_items,
        }
    }
}

/// `false`, `null`, zero and empty strings, arrays or objects are falsy.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}
