//! Calendar page controller.
//!
//! `CalendarPage` is the single owner of the working set, the displayed month
//! and the sport filter for one page load. The displayed month and filter are
//! kept in the session store between page loads as `ViewState`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::detail;
use crate::error::{SportCalError, SportCalResult, StoreError};
use crate::event::Event;
use crate::form::{EventForm, IdGenerator};
use crate::grid::{self, GridModel};
use crate::merge::merge;
use crate::month::MonthCursor;
use crate::sports::{available_sports, normalize_filter};
use crate::store::{EventStore, KeyValueStore};

/// Session store key holding the displayed month and filter.
pub const VIEW_STATE_KEY: &str = "calendarView";

/// Displayed month and sport filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(flatten)]
    pub month: MonthCursor,
    #[serde(default)]
    pub filter: Option<String>,
}

impl ViewState {
    /// The month containing `today`, showing all sports.
    pub fn starting_at(today: NaiveDate) -> Self {
        ViewState {
            month: MonthCursor::containing(today),
            filter: None,
        }
    }

    /// Restore from the session store; falls back to `starting_at(today)`.
    pub fn restore<S: KeyValueStore>(session: &S, today: NaiveDate) -> Self {
        let raw = match session.get(VIEW_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::starting_at(today),
            Err(e) => {
                warn!("Could not read calendar view: {e}");
                return Self::starting_at(today);
            }
        };

        match serde_json::from_str::<ViewState>(&raw) {
            Ok(state) if state.month.is_representable() => state,
            Ok(_) | Err(_) => {
                warn!("Ignoring corrupt calendar view state");
                Self::starting_at(today)
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, session: &mut S) -> Result<(), StoreError> {
        session.set(VIEW_STATE_KEY, &serde_json::to_string(self)?)
    }
}

pub struct CalendarPage {
    events: Vec<Event>,
    view: ViewState,
    ids: IdGenerator,
}

impl CalendarPage {
    /// Assemble the working set from `baseline` and the stored events.
    pub fn new(baseline: &[Event], stored: &[Event], view: ViewState) -> Self {
        let events = merge(baseline, stored);
        debug!(
            baseline = baseline.len(),
            stored = stored.len(),
            merged = events.len(),
            "Assembled working set"
        );
        let ids = IdGenerator::above(&events);
        CalendarPage { events, view, ids }
    }

    /// Like `new`, reading the stored events from `store`.
    pub fn load<S: KeyValueStore>(baseline: &[Event], store: &EventStore<S>, view: ViewState) -> Self {
        Self::new(baseline, &store.load(), view)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn month(&self) -> MonthCursor {
        self.view.month
    }

    pub fn filter(&self) -> Option<&str> {
        self.view.filter.as_deref()
    }

    pub fn prev_month(&mut self) {
        self.view.month = self.view.month.prev();
    }

    pub fn next_month(&mut self) {
        self.view.month = self.view.month.next();
    }

    pub fn show_month(&mut self, month: MonthCursor) {
        self.view.month = month;
    }

    /// Restrict markers to one sport. `None` or blank shows all.
    pub fn set_filter(&mut self, sport: Option<&str>) {
        self.view.filter = normalize_filter(sport);
    }

    pub fn sports(&self) -> Vec<String> {
        available_sports(&self.events)
    }

    pub fn render(&self, today: NaiveDate) -> GridModel {
        grid::render(self.view.month, &self.events, self.filter(), today)
    }

    pub fn find(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Submit the add-event form.
    ///
    /// On success the event joins the working set, is persisted, the form is
    /// cleared and the calendar moves to the event's month. A persistence
    /// failure is logged and does not fail the submission; the working set
    /// stays authoritative for this page.
    ///
    /// Fails without touching anything if the form is incomplete or the
    /// working set already holds an event with id `i64::MAX`.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        form: &mut EventForm,
        store: &mut EventStore<S>,
    ) -> SportCalResult<Event> {
        form.validate()?;
        let id = self.ids.next_id().ok_or(SportCalError::IdsExhausted(i64::MAX))?;
        let event = form.to_event(id)?;

        self.events.push(event.clone());
        if let Err(e) = store.append(&event) {
            warn!("Could not persist new event {}: {e}", event.id);
        }

        form.clear();
        if let Ok(month) = MonthCursor::parse(&event.date) {
            self.view.month = month;
        }

        Ok(event)
    }

    /// Hand the event with `id` to the detail view.
    pub fn select<S: KeyValueStore>(&self, id: i64, session: &mut S) -> SportCalResult<&Event> {
        let event = self.find(id).ok_or(SportCalError::EventNotFound(id))?;
        detail::select(session, event)?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{DetailView, display_detail};
    use crate::event::sample_events;
    use crate::store::{EVENTS_KEY, MemoryStore};

    /// Reads as empty and refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Persistence {
                key: key.to_string(),
                source: std::io::Error::other("quota exceeded"),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn page() -> CalendarPage {
        CalendarPage::new(&sample_events(), &[], ViewState::starting_at(today()))
    }

    fn form(date: &str, sport: &str) -> EventForm {
        EventForm {
            date: date.to_string(),
            time: "19:00".to_string(),
            sport: sport.to_string(),
            teams: "Home vs. Away".to_string(),
            ..EventForm::default()
        }
    }

    #[test]
    fn test_navigation_wraps_year() {
        let mut page = page();
        page.show_month(MonthCursor::new(2025, 11));
        page.next_month();
        assert_eq!(page.month(), MonthCursor::new(2026, 0));
        page.prev_month();
        page.prev_month();
        assert_eq!(page.month(), MonthCursor::new(2025, 10));
    }

    #[test]
    fn test_submit_updates_working_set_store_and_month() {
        let mut page = page();
        let mut store = EventStore::new(MemoryStore::new());
        let mut form = form("2026-02-14", "Volleyball");

        let event = page.submit(&mut form, &mut store).unwrap();

        assert_eq!(form, EventForm::default());
        assert_eq!(page.month(), MonthCursor::new(2026, 1));
        assert_eq!(page.find(event.id), Some(&event));
        assert_eq!(store.load(), vec![event.clone()]);
        assert!(page.sports().contains(&"Volleyball".to_string()));

        let grid = page.render(today());
        assert_eq!(grid.day(14).unwrap().markers[0].event_id, event.id);
    }

    #[test]
    fn test_invalid_submit_changes_nothing() {
        let mut page = page();
        let mut store = EventStore::new(MemoryStore::new());
        let mut form = form("2026-02-14", "");

        let Err(SportCalError::Validation(err)) = page.submit(&mut form, &mut store) else {
            panic!("expected a validation error");
        };

        assert_eq!(err.missing, vec!["sport"]);
        assert_eq!(form.date, "2026-02-14");
        assert_eq!(page.events().len(), 3);
        assert_eq!(page.month(), MonthCursor::new(2025, 6));
        assert_eq!(store.inner().get(EVENTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_submitted_ids_strictly_increase() {
        let mut page = page();
        let mut store = EventStore::new(MemoryStore::new());

        let ids: Vec<i64> = (0..5)
            .map(|_| page.submit(&mut form("2025-07-20", "Golf"), &mut store).unwrap().id)
            .collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_submit_refuses_when_ids_are_exhausted() {
        let raw = r#"[{"id":9223372036854775807,"date":"2025-07-01","time":"12:00","sport":"Golf","teams":"A vs. B"}]"#;
        let mut store = EventStore::new(MemoryStore::with_value(EVENTS_KEY, raw));
        let mut page = CalendarPage::load(&sample_events(), &store, ViewState::starting_at(today()));
        let mut form = form("2026-02-14", "Volleyball");

        assert!(matches!(
            page.submit(&mut form, &mut store),
            Err(SportCalError::IdsExhausted(i64::MAX))
        ));
        assert_eq!(form.sport, "Volleyball");
        assert_eq!(page.events().len(), 4);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_submit_survives_a_store_that_rejects_every_write() {
        let mut page = page();
        let mut store = EventStore::new(ReadOnlyStore);
        let mut form = form("2026-02-14", "Volleyball");

        let event = page.submit(&mut form, &mut store).unwrap();

        assert_eq!(form, EventForm::default());
        assert_eq!(page.month(), MonthCursor::new(2026, 1));
        assert_eq!(page.find(event.id), Some(&event));
        assert!(store.load().is_empty());
        assert_eq!(page.render(today()).day(14).unwrap().markers[0].event_id, event.id);
    }

    #[test]
    fn test_stored_events_join_working_set_after_baseline() {
        let mut stored = sample_events();
        stored[0].id = 1;
        stored[0].teams = "Shadowed".to_string();
        stored[1].id = 500;

        let page = CalendarPage::new(&sample_events(), &stored, ViewState::starting_at(today()));
        let ids: Vec<i64> = page.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 500]);
        assert_eq!(page.find(1).unwrap().teams, "Salzburg vs. Sturm");
    }

    #[test]
    fn test_filter_applies_to_render() {
        let mut page = page();
        page.show_month(MonthCursor::new(2025, 6));

        page.set_filter(Some("Ice Hockey"));
        assert!(!page.render(today()).day(18).unwrap().has_events());

        page.set_filter(Some(""));
        assert_eq!(page.filter(), None);
        assert!(page.render(today()).day(18).unwrap().has_events());
    }

    #[test]
    fn test_select_hands_off_to_detail_view() {
        let page = page();
        let mut session = MemoryStore::new();

        page.select(2, &mut session).unwrap();
        let DetailView::Event(detail) = display_detail(&session) else {
            panic!("expected event detail");
        };
        assert_eq!(detail.teams, "KAC vs. Capitals");
        assert_eq!(detail.date, "Thursday, October 23, 2025");

        assert!(matches!(
            page.select(404, &mut session),
            Err(SportCalError::EventNotFound(404))
        ));
    }

    #[test]
    fn test_view_state_round_trip_and_fallback() {
        let mut session = MemoryStore::new();
        assert_eq!(ViewState::restore(&session, today()), ViewState::starting_at(today()));

        let state = ViewState {
            month: MonthCursor::new(2024, 1),
            filter: Some("Football".to_string()),
        };
        state.save(&mut session).unwrap();
        assert_eq!(ViewState::restore(&session, today()), state);

        session.set(VIEW_STATE_KEY, r#"{"year":2025,"month":12}"#).unwrap();
        assert_eq!(ViewState::restore(&session, today()), ViewState::starting_at(today()));

        session.set(VIEW_STATE_KEY, r#"{"year":300000,"month":1}"#).unwrap();
        assert_eq!(ViewState::restore(&session, today()), ViewState::starting_at(today()));

        session.set(VIEW_STATE_KEY, "garbage").unwrap();
        assert_eq!(ViewState::restore(&session, today()), ViewState::starting_at(today()));
    }
}
