//! Baseline events from an external JSON document.
//!
//! The document is shaped `{ "events": [Event, ...] }` and is read once per
//! page load, either over HTTP or from a local file. Any failure falls back to
//! the compiled-in sample events.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::FetchError;
use crate::event::{Event, sample_events};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineSource {
    Url(Url),
    File(PathBuf),
}

impl BaselineSource {
    /// `http(s)://` values are URLs, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => BaselineSource::Url(url),
            _ => BaselineSource::File(PathBuf::from(shellexpand::tilde(s).into_owned())),
        }
    }
}

impl std::fmt::Display for BaselineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BaselineSource::Url(url) => write!(f, "{url}"),
            BaselineSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Deserialize)]
struct BaselineDocument {
    events: Option<Vec<Event>>,
}

/// Parse a baseline document.
pub fn parse_document(content: &str) -> Result<Vec<Event>, FetchError> {
    let document: BaselineDocument = serde_json::from_str(content)?;
    document.events.ok_or(FetchError::MissingEvents)
}

/// Fetch and parse the baseline events from `source`.
pub async fn fetch(source: &BaselineSource) -> Result<Vec<Event>, FetchError> {
    let content = match source {
        BaselineSource::Url(url) => {
            let response = reqwest::get(url.clone()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }
            response.text().await?
        }
        BaselineSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    parse_document(&content)
}

/// Baseline events, or the sample events when `source` is missing or fails.
pub async fn load(source: Option<&BaselineSource>) -> Vec<Event> {
    let Some(source) = source else {
        debug!("No baseline source configured, using sample events");
        return sample_events();
    };

    match fetch(source).await {
        Ok(events) => {
            info!(count = events.len(), "Loaded baseline events from {source}");
            events
        }
        Err(e) => {
            warn!("Could not load baseline events from {source}: {e}");
            sample_events()
        }
    }
}
