use std::collections::HashSet;

use vetevents_core::NormalizedEvent;

/// Drops events whose `(name, start)` pair was already seen, keeping the
/// first occurrence and the original order.
///
/// `None` is compared like any other value: two events that both lack a
/// name and a start collapse into one.
pub(crate) fn dedupe_by_name_start(events: Vec<NormalizedEvent>) -> Vec<NormalizedEvent> {
    let mut seen: HashSet<(Option<String>, Option<String>)> = HashSet::new();
    events
        .into_iter()
        .filter(|e| seen.insert((e.name.clone(), e.start.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, name: Option<&str>, start: Option<&str>) -> NormalizedEvent {
        NormalizedEvent {
            id: Some(id.to_owned()),
            name: name.map(str::to_owned),
            start: start.map(str::to_owned),
            ..NormalizedEvent::default()
        }
    }

    fn ids(events: &[NormalizedEvent]) -> Vec<&str> {
        events.iter().filter_map(|e| e.id.as_deref()).collect()
    }

    #[test]
    fn first_occurrence_wins() {
        let mut later = event("2", Some("Stand Down"), Some("2025-07-04T10:00:00"));
        later.city = Some("Cheyenne".to_owned());
        let events = vec![
            event("1", Some("Stand Down"), Some("2025-07-04T10:00:00")),
            event("3", Some("Job Fair"), Some("2025-07-05T09:00:00")),
            later,
        ];
        let unique = dedupe_by_name_start(events);
        assert_eq!(ids(&unique), vec!["1", "3"]);
        assert!(unique[0].city.is_none());
    }

    #[test]
    fn same_name_different_start_are_distinct() {
        let events = vec![
            event("1", Some("Coffee"), Some("2025-07-04T10:00:00")),
            event("2", Some("Coffee"), Some("2025-07-11T10:00:00")),
        ];
        assert_eq!(dedupe_by_name_start(events).len(), 2);
    }

    #[test]
    fn events_missing_name_and_start_collapse() {
        let events = vec![
            event("1", None, None),
            event("2", None, None),
            event("3", None, Some("2025-07-04T10:00:00")),
        ];
        assert_eq!(ids(&dedupe_by_name_start(events)), vec!["1", "3"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(dedupe_by_name_start(Vec::new()).is_empty());
    }
}
