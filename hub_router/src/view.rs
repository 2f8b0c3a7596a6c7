//! Collaborators the router drives.
//!
//! Implementations live in `web_app` (browser) and in the test fakes. All of
//! them are single-threaded; futures returned by [`ContentFetcher`] are not
//! required to be `Send`.

use serde::{Deserialize, Serialize};

use crate::errors::FetchError;

/// Loads page markup from a content path.
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// The document surface the router writes to.
pub trait PageView {
    /// Replaces the content region's markup.
    fn replace_content(&self, html: &str);
    fn set_title(&self, title: &str);
    /// Highlights the navigation links pointing at `page` and clears the rest.
    /// An empty `page` clears every link.
    fn mark_active(&self, page: &str);
    fn scroll_to_top(&self);
}

/// Browser history with push/replace-state.
pub trait History {
    fn push(&self, state: &HistoryState, fragment: &str);
    fn replace(&self, state: &HistoryState, fragment: &str);
}

/// State stored with each history entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn new(page: &str) -> Self {
        Self {
            page: page.to_string(),
        }
    }

    /// Decodes a JSON-serialized history state; anything else is `None`.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    pub fn to_json(&self) -> String {
        // A struct with one string field cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"page\":{:?}}}", self.page))
    }
}
