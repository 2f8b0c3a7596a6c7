//! Navigation state machine.
//!
//! Every attempt walks `Loading → {Loaded | NotFound | Error}`. Attempts are
//! numbered; a completion whose number is no longer the newest is discarded
//! without touching the view, the title, the history or the initializers.

use std::cell::{Cell, RefCell};

use crate::errors::RouterError;
use crate::initializers::InitializerRegistry;
use crate::loading::{LoadingIndicator, LoadingTracker};
use crate::routes::{fragment_for, RouteTable};
use crate::view::{ContentFetcher, History, HistoryState, PageView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Idle,
    Loading,
    Loaded,
    NotFound,
    Error,
}

/// Result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Loaded { page: String },
    /// The error page (or the inline panel) was rendered instead of `page`.
    /// `errors` holds the cause first, then a `RenderFailure` when the error
    /// page itself was unavailable.
    Failed {
        page: String,
        state: RouteState,
        errors: Vec<RouterError>,
    },
    /// A newer attempt started before this one finished.
    Superseded { page: String },
}

impl NavigationOutcome {
    pub fn page(&self) -> &str {
        match self {
            NavigationOutcome::Loaded { page }
            | NavigationOutcome::Failed { page, .. }
            | NavigationOutcome::Superseded { page } => page,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, NavigationOutcome::Loaded { .. })
    }

    /// Whether the synthesized inline panel was shown.
    pub fn rendered_inline(&self) -> bool {
        match self {
            NavigationOutcome::Failed { errors, .. } => errors
                .iter()
                .any(|e| matches!(e, RouterError::RenderFailure { .. })),
            _ => false,
        }
    }
}

/// Events that start a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Application start with the current URL fragment.
    Start(String),
    /// Click on an element carrying a page id.
    Link(String),
    /// Back/forward with the state stored in the history entry.
    PopState(Option<HistoryState>),
    /// The URL fragment changed.
    HashChange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// The browser already moved the URL (back/forward, typed fragment).
    Keep,
}

pub struct ViewRouter<F, V, H, L> {
    routes: RouteTable,
    fetcher: F,
    view: V,
    history: H,
    loading: LoadingTracker<L>,
    initializers: InitializerRegistry,
    state: Cell<RouteState>,
    attempt: Cell<u64>,
    /// Page loaded by the last back/forward, until its `hashchange` echo arrives.
    pending_pop: RefCell<Option<String>>,
    current: RefCell<Option<String>>,
}

impl<F, V, H, L> ViewRouter<F, V, H, L>
where
    F: ContentFetcher,
    V: PageView,
    H: History,
    L: LoadingIndicator,
{
    pub fn new(
        routes: RouteTable,
        fetcher: F,
        view: V,
        history: H,
        indicator: L,
        initializers: InitializerRegistry,
    ) -> Self {
        Self {
            routes,
            fetcher,
            view,
            history,
            loading: LoadingTracker::new(indicator),
            initializers,
            state: Cell::new(RouteState::Idle),
            attempt: Cell::new(0),
            pending_pop: RefCell::new(None),
            current: RefCell::new(None),
        }
    }

    /// Loads `page`, pushing a history entry on success.
    pub async fn navigate_to(&self, page: &str) -> NavigationOutcome {
        self.load(page, HistoryMode::Push).await
    }

    /// Initial navigation from the URL fragment present at startup.
    pub async fn start(&self, fragment: &str) -> NavigationOutcome {
        let page = self.routes.initial_page(fragment).to_string();
        self.load(&page, HistoryMode::Replace).await
    }

    /// Back/forward: the page stored in the entry, or the default page.
    pub async fn handle_pop_state(&self, state: Option<HistoryState>) -> NavigationOutcome {
        let page = match state {
            Some(state) => state.page,
            None => self.routes.default_page().to_string(),
        };
        *self.pending_pop.borrow_mut() = Some(page.clone());
        self.load(&page, HistoryMode::Keep).await
    }

    /// Navigates when the new fragment names a known route. Browsers fire
    /// `hashchange` right after `popstate` on back/forward; that one echo of
    /// the popped page is dropped here.
    pub async fn handle_hash_change(&self, fragment: &str) -> Option<NavigationOutcome> {
        let popped = self.pending_pop.borrow_mut().take();
        let page = self.routes.page_for_fragment(fragment)?;
        if popped.as_deref() == Some(page) {
            tracing::debug!(page, "hash change echoing back/forward ignored");
            return None;
        }
        Some(self.load(page, HistoryMode::Keep).await)
    }

    pub async fn dispatch(&self, request: NavigationRequest) -> Option<NavigationOutcome> {
        match request {
            NavigationRequest::Start(fragment) => Some(self.start(&fragment).await),
            NavigationRequest::Link(page) => Some(self.navigate_to(&page).await),
            NavigationRequest::PopState(state) => Some(self.handle_pop_state(state).await),
            NavigationRequest::HashChange(fragment) => self.handle_hash_change(&fragment).await,
        }
    }

    pub fn state(&self) -> RouteState {
        self.state.get()
    }

    /// The page whose content is displayed, `None` while an error panel is up.
    pub fn current_page(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn loading(&self) -> &LoadingTracker<L> {
        &self.loading
    }

    pub fn initializers(&self) -> &InitializerRegistry {
        &self.initializers
    }

    fn begin_attempt(&self, page: &str) -> u64 {
        let ticket = self.attempt.get() + 1;
        self.attempt.set(ticket);
        self.state.set(RouteState::Loading);
        ticket
    }

    fn is_newest(&self, ticket: u64) -> bool {
        self.attempt.get() == ticket
    }

    async fn load(&self, page: &str, mode: HistoryMode) -> NavigationOutcome {
        let ticket = self.begin_attempt(page);
        let _loading = self.loading.begin();
        tracing::debug!(page, attempt = ticket, "navigation started");

        let Some(path) = self.routes.path(page) else {
            tracing::warn!(page, "page not found");
            let cause = RouterError::RouteNotFound(page.to_string());
            return self
                .render_error_page(ticket, page, RouteState::NotFound, cause)
                .await;
        };

        let fetched = self.fetcher.fetch(path).await;
        if !self.is_newest(ticket) {
            tracing::debug!(page, attempt = ticket, "stale navigation discarded");
            return NavigationOutcome::Superseded {
                page: page.to_string(),
            };
        }

        match fetched {
            Ok(html) => {
                self.view.replace_content(&html);
                self.view.set_title(self.routes.title(page));

                let state = HistoryState::new(page);
                let fragment = fragment_for(page);
                match mode {
                    HistoryMode::Push => self.history.push(&state, &fragment),
                    HistoryMode::Replace => self.history.replace(&state, &fragment),
                    HistoryMode::Keep => {}
                }

                self.initializers.run(page);
                self.view.mark_active(page);
                self.view.scroll_to_top();

                *self.current.borrow_mut() = Some(page.to_string());
                self.state.set(RouteState::Loaded);
                tracing::debug!(page, "page loaded");
                NavigationOutcome::Loaded {
                    page: page.to_string(),
                }
            }
            Err(source) => {
                tracing::warn!(page, path, error = %source, "error loading page");
                let cause = RouterError::FetchFailure {
                    path: path.to_string(),
                    source,
                };
                self.render_error_page(ticket, page, RouteState::Error, cause)
                    .await
            }
        }
    }

    async fn render_error_page(
        &self,
        ticket: u64,
        page: &str,
        state: RouteState,
        cause: RouterError,
    ) -> NavigationOutcome {
        let path = self.routes.not_found_path();
        let fetched = self.fetcher.fetch(path).await;
        if !self.is_newest(ticket) {
            return NavigationOutcome::Superseded {
                page: page.to_string(),
            };
        }

        // The old page's markup is about to go away with its bindings.
        self.initializers.teardown();

        let mut errors = vec![cause];
        match fetched {
            Ok(html) => self.view.replace_content(&html),
            Err(source) => {
                tracing::warn!(path, error = %source, "error page unavailable, rendering inline panel");
                self.view
                    .replace_content(&inline_not_found(self.routes.default_page()));
                errors.push(RouterError::RenderFailure {
                    path: path.to_string(),
                    source,
                });
            }
        }
        self.view.set_title(self.routes.not_found_title());
        self.view.mark_active("");

        *self.current.borrow_mut() = None;
        self.state.set(state);
        NavigationOutcome::Failed {
            page: page.to_string(),
            state,
            errors,
        }
    }
}

/// Markup shown when neither the page nor the error page could be fetched.
pub fn inline_not_found(home: &str) -> String {
    format!(
        r#"<section class="min-h-screen flex items-center justify-center">
    <div class="text-center">
        <h1 class="text-4xl font-bold text-orange-500 mb-4">404 - Page Not Found</h1>
        <p class="text-gray-300 mb-6">The page you're looking for doesn't exist.</p>
        <button data-page="{}" class="btn btn-primary">Go to Homepage</button>
    </div>
</section>"#,
        home
    )
}
