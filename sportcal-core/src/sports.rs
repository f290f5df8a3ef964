//! Sport filter options.

use std::collections::BTreeSet;

use crate::event::Event;

/// Distinct sports across `events`, sorted lexicographically.
pub fn available_sports(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.sport.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Normalize a filter value: blank means "show all".
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|sport| !sport.is_empty())
        .map(str::to_string)
}
