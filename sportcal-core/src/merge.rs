//! Working-set assembly from baseline and stored events.

use std::collections::HashSet;

use crate::event::Event;

/// Concatenate `baseline` then `stored`, keeping the first event seen for
/// each id. Baseline entries therefore win over stored entries sharing an id,
/// and display order follows the baseline.
pub fn merge(baseline: &[Event], stored: &[Event]) -> Vec<Event> {
    let mut seen = HashSet::new();
    baseline
        .iter()
        .chain(stored)
        .filter(|event| seen.insert(event.id))
        .cloned()
        .collect()
}
