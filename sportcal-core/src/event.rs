//! The sporting event record.
//!
//! Events are append-only: they are created from baseline data or from the
//! add-event form and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Venue shown when the form leaves it blank.
pub const DEFAULT_VENUE: &str = "TBD";

fn default_venue() -> String {
    DEFAULT_VENUE.to_string()
}

/// A scheduled sporting fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Millisecond timestamp for user-added events, small integers for fixtures.
    pub id: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub sport: String,
    pub teams: String,
    #[serde(default = "default_venue")]
    pub venue: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Names of the required fields that are empty.
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

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: {} ({})", self.date, self.time, self.teams, self.sport)
    }
}

/// Compiled-in events used when no baseline source is reachable.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            date: "2025-07-18".to_string(),
            time: "18:30".to_string(),
            sport: "Football".to_string(),
            teams: "Salzburg vs. Sturm".to_string(),
            venue: "Red Bull Arena".to_string(),
            description: "Austrian Football League match".to_string(),
        },
        Event {
            id: 2,
            date: "2025-10-23".to_string(),
            time: "09:45".to_string(),
            sport: "Ice Hockey".to_string(),
            teams: "KAC vs. Capitals".to_string(),
            venue: "Stadthalle Klagenfurt".to_string(),
            description: "Championship game".to_string(),
        },
        Event {
            id: 3,
            date: "2025-11-21".to_string(),
            time: "15:00".to_string(),
            sport: "Basketball".to_string(),
            teams: "Lakers vs. Bulls".to_string(),
            venue: "Staples Center".to_string(),
            description: "NBA game".to_string(),
        },
    ]
}
