//! Declarative month grid.
//!
//! `render` produces a `GridModel` that a presentation layer draws; it never
//! touches the terminal itself.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;
use crate::month::{MonthCursor, date_key};

/// One clickable event entry in a day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub event_id: i64,
    /// The event's sport.
    pub label: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    /// `YYYY-MM-DD`
    pub date: String,
    pub today: bool,
    pub markers: Vec<Marker>,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Placeholder before the 1st of the month.
    Empty,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    pub month: MonthCursor,
    /// Leading placeholders followed by one cell per day, Sunday-first rows.
    pub cells: Vec<Cell>,
}

impl GridModel {
    /// `"July 2025"`
    pub fn title(&self) -> String {
        self.month.to_string()
    }

    pub fn leading_empty(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, Cell::Empty))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            Cell::Day(day) => Some(day),
            Cell::Empty => None,
        })
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day == day)
    }

    /// Rows of seven cells; the final row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(7)
    }
}

/// Build the grid for `month`.
///
/// Only events whose `date` equals a day's key are attached to it; a
/// non-empty `filter` further restricts markers to that sport. `today` marks
/// its cell when it falls inside the displayed month.
pub fn render(
    month: MonthCursor,
    events: &[Event],
    filter: Option<&str>,
    today: NaiveDate,
) -> GridModel {
    let filter = filter.filter(|sport| !sport.is_empty());
    let today_day = month.contains(today).then(|| today.day());

    let mut cells: Vec<Cell> = (0..month.first_weekday()).map(|_| Cell::Empty).collect();

    for day in 1..=month.days() {
        let date = date_key(month.year, month.month, day);
        let markers = events
            .iter()
            .filter(|event| event.date == date)
            .filter(|event| filter.is_none_or(|sport| event.sport == sport))
            .map(|event| Marker {
                event_id: event.id,
                label: event.sport.clone(),
                time: event.time.clone(),
            })
            .collect();

        cells.push(Cell::Day(DayCell {
            day,
            date,
            today: today_day == Some(day),
            markers,
        }));
    }

    GridModel { month, cells }
}
