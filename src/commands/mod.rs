pub mod add;
pub mod detail;
pub mod end_session;
pub mod show;
pub mod sports;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sportcal_core::baseline;
use sportcal_core::config::SportCalConfig;
use sportcal_core::page::{CalendarPage, ViewState};
use sportcal_core::store::{EventStore, FileStore};
use tracing::debug;

use crate::utils::tui::create_spinner;

/// Everything one page load needs, loaded once per command.
pub struct PageContext {
    pub page: CalendarPage,
    pub store: EventStore<FileStore>,
    pub session: FileStore,
}

impl PageContext {
    /// Read the stored events and view state, fetch the baseline and merge.
    pub async fn load(cfg: &SportCalConfig, today: NaiveDate) -> Result<Self> {
        let store = EventStore::new(cfg.persistent_store()?);
        let session = cfg.session_store()?;
        let view = ViewState::restore(&session, today);

        let baseline = match cfg.baseline_source() {
            Some(source) => {
                let spinner = create_spinner(format!("Loading events from {source}"));
                let events = baseline::load(Some(&source)).await;
                spinner.finish_and_clear();
                events
            }
            None => baseline::load(None).await,
        };

        let page = CalendarPage::load(&baseline, &store, view);
        debug!(
            events = page.events().len(),
            month = %page.month(),
            "Loaded calendar page"
        );

        Ok(Self {
            page,
            store,
            session,
        })
    }

    /// Remember the displayed month and filter for the next page load.
    pub fn save_view(&mut self) -> Result<()> {
        self.page
            .view()
            .save(&mut self.session)
            .context("Failed to save calendar view")
    }
}
