//! Handing one selected event to the detail view through the session store.

use chrono::NaiveDate;
use tracing::{error, warn};

use crate::error::StoreError;
use crate::event::Event;
use crate::store::KeyValueStore;

/// Session store key holding the selected event.
pub const SELECTED_EVENT_KEY: &str = "selectedEvent";

/// Store `event` as the current selection.
pub fn select<S: KeyValueStore>(session: &mut S, event: &Event) -> Result<(), StoreError> {
    let json = serde_json::to_string(event)?;
    session.set(SELECTED_EVENT_KEY, &json)
}

/// Labeled fields of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub id: i64,
    pub sport: String,
    pub teams: String,
    /// Long form, e.g. `"Friday, July 18, 2025"`.
    pub date: String,
    pub time: String,
    pub venue: String,
    pub description: String,
}

impl EventDetail {
    /// `(heading, lines)` sections in display order.
    pub fn sections(&self) -> Vec<(&'static str, Vec<&str>)> {
        vec![
            ("Teams", vec![self.teams.as_str()]),
            ("Date & Time", vec![self.date.as_str(), self.time.as_str()]),
            ("Venue", vec![self.venue.as_str()]),
            ("Description", vec![self.description.as_str()]),
        ]
    }
}

/// What the detail page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Event(EventDetail),
    /// Nothing has been selected this session.
    NoSelection,
    /// The stored selection could not be read.
    Error(String),
}

/// Read the current selection and format it for display. Never fails.
pub fn display_detail<S: KeyValueStore>(session: &S) -> DetailView {
    let raw = match session.get(SELECTED_EVENT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DetailView::NoSelection,
        Err(e) => {
            error!("Could not read selected event: {e}");
            return DetailView::Error(e.to_string());
        }
    };

    let event: Event = match serde_json::from_str(&raw) {
        Ok(event) => event,
        Err(e) => {
            error!("Could not display event detail: {e}");
            return DetailView::Error(e.to_string());
        }
    };

    match long_date(&event.date) {
        Some(date) => DetailView::Event(EventDetail {
            id: event.id,
            sport: event.sport,
            teams: event.teams,
            date,
            time: event.time,
            venue: event.venue,
            description: event.description,
        }),
        None => {
            warn!(id = event.id, "Selected event has an invalid date '{}'", event.date);
            DetailView::Error(format!("Invalid date '{}'", event.date))
        }
    }
}

/// Format a `YYYY-MM-DD` calendar date as `"Friday, July 18, 2025"`.
///
/// The date is taken as a plain calendar day, with no timezone conversion.
pub fn long_date(date: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(date.format("%A, %B %-d, %Y").to_string())
}
