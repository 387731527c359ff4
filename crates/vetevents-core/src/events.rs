//! Flat event records and the run's terminal payload.
//!
//! [`ResultPayload`] is what ends up in `events.json`: either the generated
//! shape with events and warnings, or the failed shape carrying only the
//! stringified error.

use serde::{Deserialize, Serialize};

/// Data source tag written into every generated payload.
pub const SOURCE_EVENTBRITE: &str = "eventbrite";

/// An event flattened out of the API's nested response shape.
///
/// Every field is independently optional and serialized as `null` when
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    /// Region-local start as returned by the API, e.g. `2025-07-04T10:00:00`.
    pub start: Option<String>,
    pub end: Option<String>,
    pub is_free: Option<bool>,
    pub status: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue_name: Option<String>,
    pub address: Option<String>,
}

/// Successful run output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPayload {
    pub generated: bool,
    pub source: String,
    pub query: String,
    pub regions: Vec<String>,
    pub within: String,
    pub count: usize,
    pub events: Vec<NormalizedEvent>,
    pub warnings: Vec<String>,
}

/// Failed run output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedPayload {
    pub generated: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultPayload {
    Generated(GeneratedPayload),
    Failed(FailedPayload),
}

impl ResultPayload {
    /// Builds the success shape. `count` is always `events.len()`.
    #[must_use]
    pub fn generated(
        query: &str,
        regions: &[String],
        within: &str,
        events: Vec<NormalizedEvent>,
        warnings: Vec<String>,
    ) -> Self {
        Self::Generated(GeneratedPayload {
            generated: true,
            source: SOURCE_EVENTBRITE.to_string(),
            query: query.to_string(),
            regions: regions.to_vec(),
            within: within.to_string(),
            count: events.len(),
            events,
            warnings,
        })
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed(FailedPayload {
            generated: false,
            error: error.into(),
        })
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Events to render; empty for the failed shape.
    #[must_use]
    pub fn events(&self) -> &[NormalizedEvent] {
        match self {
            Self::Generated(p) => &p.events,
            Self::Failed(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str) -> NormalizedEvent {
        NormalizedEvent {
            name: Some(name.to_owned()),
            start: Some("2025-07-04T10:00:00".to_owned()),
            ..NormalizedEvent::default()
        }
    }

    #[test]
    fn generated_count_matches_events() {
        let payload = ResultPayload::generated(
            "veteran",
            &["Montana".to_owned()],
            "500mi",
            vec![event("a"), event("b")],
            vec![],
        );
        let ResultPayload::Generated(p) = payload else {
            panic!("expected generated payload");
        };
        assert!(p.generated);
        assert_eq!(p.source, "eventbrite");
        assert_eq!(p.count, 2);
    }

    #[test]
    fn failed_payload_serializes_to_two_keys() {
        let payload = ResultPayload::failed("EVENTBRITE_TOKEN is not set");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"generated": false, "error": "EVENTBRITE_TOKEN is not set"})
        );
        assert!(payload.events().is_empty());
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let value = serde_json::to_value(NormalizedEvent::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert!(obj.values().all(serde_json::Value::is_null));
        assert!(obj.contains_key("venue_name"));
        assert!(obj.contains_key("is_free"));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = ResultPayload::generated(
            "veteran",
            &["Montana".to_owned(), "Wyoming".to_owned()],
            "500mi",
            vec![event("a")],
            vec!["404:Wyoming:not found".to_owned()],
        );
        let text = serde_json::to_string_pretty(&payload).unwrap();
        let parsed: ResultPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, payload);

        let failed = ResultPayload::failed("boom");
        let parsed: ResultPayload =
            serde_json::from_str(&serde_json::to_string(&failed).unwrap()).unwrap();
        assert!(!parsed.is_generated());
    }
}
