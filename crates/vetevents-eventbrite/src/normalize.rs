//! Flattening of raw Eventbrite event objects into [`NormalizedEvent`]s.

use vetevents_core::NormalizedEvent;

use crate::types::RawEvent;

/// Maps one raw event onto the flat record shape.
///
/// Never fails: anything missing, `null`, or of an unexpected JSON type
/// becomes `None`.
#[must_use]
pub fn normalize_event(raw: &RawEvent) -> NormalizedEvent {
    NormalizedEvent {
        id: raw.str_at("/id"),
        name: raw.str_at("/name/text"),
        url: raw.str_at("/url"),
        start: raw.str_at("/start/local"),
        end: raw.str_at("/end/local"),
        is_free: raw.bool_at("/is_free"),
        status: raw.str_at("/status"),
        city: raw.str_at("/venue/address/city"),
        state: raw.str_at("/venue/address/region"),
        venue_name: raw.str_at("/venue/name"),
        address: raw.str_at("/venue/address/localized_address_display"),
    }
}

/// Normalizes a batch, preserving length and order.
#[must_use]
pub fn normalize_events(raw: &[RawEvent]) -> Vec<NormalizedEvent> {
    raw.iter().map(normalize_event).collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
