//! Collaborators that read pages from disk and record instead of drawing.

use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use hub_router::{ContentFetcher, FetchError, History, HistoryState, LoadingIndicator, PageView};
use tracing::{debug, info};

/// Serves page paths relative to a site directory.
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ContentFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path);
        debug!(path = %full.display(), "reading page");
        tokio::fs::read_to_string(&full).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::Http { status: 404 },
            ErrorKind::PermissionDenied => FetchError::Http { status: 403 },
            _ => FetchError::Network(e.to_string()),
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingView {
    content: Rc<RefCell<String>>,
    title: Rc<RefCell<String>>,
}

impl RecordingView {
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }
}

impl PageView for RecordingView {
    fn replace_content(&self, html: &str) {
        *self.content.borrow_mut() = html.to_string();
    }

    fn set_title(&self, title: &str) {
        info!(title, "title");
        *self.title.borrow_mut() = title.to_string();
    }

    fn mark_active(&self, page: &str) {
        debug!(page, "active nav link");
    }

    fn scroll_to_top(&self) {}
}

/// In-memory session history.
#[derive(Default)]
pub struct LogHistory {
    entries: RefCell<Vec<String>>,
}

impl LogHistory {
    /// Fragments of every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for LogHistory {
    fn push(&self, state: &HistoryState, fragment: &str) {
        debug!(state = %state.to_json(), fragment, "history push");
        self.entries.borrow_mut().push(fragment.to_string());
    }

    fn replace(&self, state: &HistoryState, fragment: &str) {
        debug!(state = %state.to_json(), fragment, "history replace");
        let mut entries = self.entries.borrow_mut();
        entries.pop();
        entries.push(fragment.to_string());
    }
}

pub struct LogLoader;

impl LoadingIndicator for LogLoader {
    fn show(&self) {
        debug!("loading");
    }

    fn hide(&self) {
        debug!("loaded");
    }
}
