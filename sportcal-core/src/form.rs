//! Add-event form: validation and event construction.

use chrono::Utc;

use crate::error::ValidationError;
use crate::event::{DEFAULT_VENUE, Event};

/// Raw input from the add-event form. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub date: String,
    pub time: String,
    pub sport: String,
    pub teams: String,
    pub venue: String,
    pub description: String,
}

impl EventForm {
    /// Required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("date", &self.date),
            ("time", &self.time),
            ("sport", &self.sport),
            ("teams", &self.teams),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Build the event this form describes, assigning `id`.
    pub fn to_event(&self, id: i64) -> Result<Event, ValidationError> {
        self.validate()?;

        let venue = self.venue.trim();
        Ok(Event {
            id,
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            sport: self.sport.trim().to_string(),
            teams: self.teams.trim().to_string(),
            venue: (if venue.is_empty() { DEFAULT_VENUE } else { venue }).to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = EventForm::default();
    }
}

/// Clock-derived event ids that strictly increase within a session.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Start above every id in `existing`.
    pub fn above<'a>(existing: impl IntoIterator<Item = &'a Event>) -> Self {
        IdGenerator {
            last: existing.into_iter().map(|e| e.id).max(),
        }
    }

    /// Next id for a wall-clock reading of `now_ms` milliseconds.
    ///
    /// `None` once the last id handed out is `i64::MAX`.
    pub fn next_id_at(&mut self, now_ms: i64) -> Option<i64> {
        let id = match self.last {
            Some(last) if last >= now_ms => last.checked_add(1)?,
            _ => now_ms,
        };
        self.last = Some(id);
        Some(id)
    }

    pub fn next_id(&mut self) -> Option<i64> {
        self.next_id_at(Utc::now().timestamp_millis())
    }
}
