//! User-added events in the persistent store.

use serde_json::Value;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::StoreError;
use crate::event::Event;

/// Persistent store key holding the JSON array of user-added events.
pub const EVENTS_KEY: &str = "events";

/// Append-only event list over a key-value store.
///
/// Reads fail soft: a missing, malformed or non-array value reads as empty.
pub struct EventStore<S> {
    store: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(store: S) -> Self {
        EventStore { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load every valid stored event. Never fails.
    pub fn load(&self) -> Vec<Event> {
        let values = match self.read_raw() {
            Ok(values) => values,
            Err(e) => {
                warn!("Could not load stored events: {e}");
                return Vec::new();
            }
        };

        values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Event>(value) {
                Ok(event) if event.is_complete() => Some(event),
                Ok(event) => {
                    warn!(
                        id = event.id,
                        "Skipping stored event with empty {}",
                        event.missing_fields().join(", ")
                    );
                    None
                }
                Err(e) => {
                    warn!("Skipping malformed stored event: {e}");
                    None
                }
            })
            .collect()
    }

    /// Append one event to the stored list.
    ///
    /// If the current value is corrupt it is replaced by a list holding only
    /// `event`. A failed write is retried the same way; only when that also
    /// fails is an error returned.
    pub fn append(&mut self, event: &Event) -> Result<(), StoreError> {
        let value = serde_json::to_value(event)?;

        let stored = match self.read_raw() {
            Ok(mut values) => {
                values.push(value.clone());
                values
            }
            Err(e) => {
                warn!("Replacing unreadable stored events: {e}");
                vec![value.clone()]
            }
        };

        if let Err(e) = self.write(&stored) {
            warn!("Could not persist event {}: {e}", event.id);
            return self.write(&[value]);
        }

        debug!(id = event.id, count = stored.len(), "Persisted event");
        Ok(())
    }

    /// Raw array entries, kept as JSON so unknown entries survive an append.
    fn read_raw(&self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.store.get(EVENTS_KEY)? else {
            debug!("No stored events under '{EVENTS_KEY}'");
            return Ok(Vec::new());
        };

        let corrupt = |reason: String| StoreError::Corrupt {
            key: EVENTS_KEY.to_string(),
            reason,
        };

        match serde_json::from_str::<Value>(&raw).map_err(|e| corrupt(e.to_string()))? {
            Value::Array(values) => Ok(values),
            other => Err(corrupt(format!("expected an array, found {}", json_kind(&other)))),
        }
    }

    fn write(&mut self, values: &[Value]) -> Result<(), StoreError> {
        let content = serde_json::to_string(values)?;
        self.store.set(EVENTS_KEY, &content)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
