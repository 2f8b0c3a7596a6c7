//! In-memory collaborators shared by the router integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use hub_router::{
    ContentFetcher, FetchError, History, HistoryState, InitializerRegistry, LoadingIndicator,
    PageView, RouteTable, RouterConfig, Teardown, ViewRouter,
};

pub type TestRouter = ViewRouter<FakeFetcher, FakeView, FakeHistory, FakeLoader>;

/// Serves canned responses; a gated path waits until its sender fires.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    pages: Rc<RefCell<HashMap<String, Result<String, FetchError>>>>,
    gates: Rc<RefCell<HashMap<String, oneshot::Receiver<()>>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeFetcher {
    pub fn serve(&self, path: &str, html: &str) {
        self.pages
            .borrow_mut()
            .insert(path.to_string(), Ok(html.to_string()));
    }

    pub fn fail(&self, path: &str, error: FetchError) {
        self.pages.borrow_mut().insert(path.to_string(), Err(error));
    }

    /// The next fetch of `path` blocks until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ContentFetcher for FakeFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(path.to_string());
        let gate = self.gates.borrow_mut().remove(path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.pages
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or(Err(FetchError::Http { status: 404 }))
    }
}

#[derive(Clone, Default)]
pub struct FakeView {
    pub content: Rc<RefCell<String>>,
    pub title: Rc<RefCell<String>>,
    pub active: Rc<RefCell<Option<String>>>,
    pub scrolls: Rc<Cell<u32>>,
    pub replacements: Rc<Cell<u32>>,
}

impl FakeView {
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }
}

impl PageView for FakeView {
    fn replace_content(&self, html: &str) {
        *self.content.borrow_mut() = html.to_string();
        self.replacements.set(self.replacements.get() + 1);
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn mark_active(&self, page: &str) {
        *self.active.borrow_mut() = Some(page.to_string());
    }

    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

/// Records entries and tracks the fragment the user would see.
#[derive(Clone)]
pub struct FakeHistory {
    pub entries: Rc<RefCell<Vec<HistoryState>>>,
    pub fragment: Rc<RefCell<String>>,
}

impl Default for FakeHistory {
    fn default() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            fragment: Rc::new(RefCell::new(String::new())),
        }
    }
}

impl FakeHistory {
    pub fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn last(&self) -> Option<HistoryState> {
        self.entries.borrow().last().cloned()
    }
}

impl History for FakeHistory {
    fn push(&self, state: &HistoryState, fragment: &str) {
        self.entries.borrow_mut().push(state.clone());
        *self.fragment.borrow_mut() = fragment.to_string();
    }

    fn replace(&self, state: &HistoryState, fragment: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.pop();
        entries.push(state.clone());
        *self.fragment.borrow_mut() = fragment.to_string();
    }
}

#[derive(Clone, Default)]
pub struct FakeLoader {
    pub shows: Rc<Cell<u32>>,
    pub hides: Rc<Cell<u32>>,
    pub visible: Rc<Cell<bool>>,
}

impl LoadingIndicator for FakeLoader {
    fn show(&self) {
        self.shows.set(self.shows.get() + 1);
        self.visible.set(true);
    }

    fn hide(&self) {
        self.hides.set(self.hides.get() + 1);
        self.visible.set(false);
    }
}

/// Counts initializer runs and teardowns per page.
#[derive(Clone, Default)]
pub struct InitLog {
    pub runs: Rc<RefCell<HashMap<String, u32>>>,
    pub teardowns: Rc<RefCell<Vec<String>>>,
}

impl InitLog {
    pub fn runs(&self, name: &str) -> u32 {
        self.runs.borrow().get(name).copied().unwrap_or(0)
    }

    fn recorder(&self, name: &'static str) -> impl Fn(&str) -> Option<Teardown> + 'static {
        let log = self.clone();
        move |page: &str| {
            *log.runs.borrow_mut().entry(name.to_string()).or_default() += 1;
            let teardowns = log.teardowns.clone();
            let label = format!("{}@{}", name, page);
            Some(Box::new(move || teardowns.borrow_mut().push(label)) as Teardown)
        }
    }
}

pub struct Harness {
    pub router: TestRouter,
    pub fetcher: FakeFetcher,
    pub view: FakeView,
    pub history: FakeHistory,
    pub loader: FakeLoader,
    pub inits: InitLog,
}

/// Router over the default site config with every page served as
/// `<h1>{id}</h1>` and a 404 page.
pub fn harness() -> Harness {
    let config = RouterConfig::default();
    let routes = RouteTable::from_config(&config).expect("default config is valid");

    let fetcher = FakeFetcher::default();
    for route in &config.routes {
        fetcher.serve(&route.path, &page_html(&route.id));
    }
    fetcher.serve(&config.not_found_path, NOT_FOUND_HTML);

    let inits = InitLog::default();
    let mut registry = InitializerRegistry::new();
    registry.register_common("menu", inits.recorder("menu"));
    registry.register("dashboard", "dashboard", inits.recorder("dashboard"));
    registry.register("gallery", "gallery", inits.recorder("gallery"));

    let view = FakeView::default();
    let history = FakeHistory::default();
    let loader = FakeLoader::default();
    let router = ViewRouter::new(
        routes,
        fetcher.clone(),
        view.clone(),
        history.clone(),
        loader.clone(),
        registry,
    );

    Harness {
        router,
        fetcher,
        view,
        history,
        loader,
        inits,
    }
}

pub const NOT_FOUND_HTML: &str = "<h1>404</h1>";

pub fn page_html(page: &str) -> String {
    format!("<h1>{}</h1>", page)
}
