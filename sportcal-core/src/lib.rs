//! Core logic for the sportcal calendar.
//!
//! - `event`: the `Event` record and the compiled-in sample fixtures
//! - `store`: persistent and transient key-value stores, `EventStore`
//! - `merge`, `sports`: working-set assembly and the sport filter
//! - `month`, `grid`: month arithmetic and the declarative month grid
//! - `form`, `detail`: the add-event form and the detail-view handoff
//! - `page`: the calendar page controller that owns all of the above

pub mod baseline;
pub mod config;
pub mod detail;
pub mod error;
pub mod event;
pub mod form;
pub mod grid;
pub mod merge;
pub mod month;
pub mod page;
pub mod sports;
pub mod store;

pub use event::Event;
