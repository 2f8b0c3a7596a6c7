//! Wires browser navigation events into the router.

use std::rc::Rc;

use hub_router::{ContentFetcher, NavigationOutcome, NavigationRequest, RouterConfig, ViewRouter};
use leptos::ev;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_use::{use_document, use_event_listener, use_window};
use wasm_bindgen_futures::spawn_local;

use crate::browser::{current_fragment, history_state_from_js, BrowserFetcher, BrowserHistory, DomPageView};
use crate::components::OverlayHandle;
use crate::dom;

pub type SiteRouter = ViewRouter<BrowserFetcher, DomPageView, BrowserHistory, OverlayHandle>;

/// Handle to the single router instance, shared through context.
#[derive(Clone, Copy)]
pub struct Navigator {
    router: StoredValue<Option<Rc<SiteRouter>>, LocalStorage>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            router: StoredValue::new_local(None),
        }
    }

    pub fn install(&self, router: SiteRouter) {
        self.router.set_value(Some(Rc::new(router)));
    }

    pub fn router(&self) -> Option<Rc<SiteRouter>> {
        self.router.get_value()
    }

    /// Loads `page` and pushes a history entry.
    pub fn navigate(&self, page: &str) {
        self.dispatch(NavigationRequest::Link(page.to_string()));
    }

    pub fn dispatch(&self, request: NavigationRequest) {
        let Some(router) = self.router() else {
            log::warn!("Navigation before the router was installed: {:?}", request);
            return;
        };
        spawn_local(async move {
            if let Some(outcome) = router.dispatch(request).await {
                report(&outcome);
            }
        });
    }
}

fn report(outcome: &NavigationOutcome) {
    match outcome {
        NavigationOutcome::Loaded { page } => log::debug!("Loaded page {}", page),
        NavigationOutcome::Superseded { page } => log::debug!("Navigation to {} superseded", page),
        NavigationOutcome::Failed { page, state, errors } => {
            for error in errors {
                log::error!("Navigation to {} failed ({:?}): {}", page, state, error);
            }
        }
    }
}

/// Delegated `[data-page]` clicks, back/forward, and fragment edits.
pub fn setup_navigation(navigator: Navigator) {
    let _ = use_event_listener(use_document(), ev::click, move |event| {
        if let Some(link) = dom::closest_from_event(&event, "[data-page]") {
            event.prevent_default();
            let page = link.get_attribute("data-page").unwrap_or_default();
            navigator.dispatch(NavigationRequest::Link(page));
        }
    });

    let _ = use_event_listener(use_window(), ev::popstate, move |event| {
        navigator.dispatch(NavigationRequest::PopState(history_state_from_js(&event.state())));
    });

    let _ = use_event_listener(use_window(), ev::hashchange, move |_| {
        navigator.dispatch(NavigationRequest::HashChange(current_fragment()));
    });
}

/// Loads the header and footer fragments into `#header` and `#footer`.
pub async fn load_shell(fetcher: &impl ContentFetcher, config: &RouterConfig) {
    for (region, path) in [("header", &config.header_path), ("footer", &config.footer_path)] {
        let Some(target) = dom::by_id(region) else {
            log::warn!("No #{} region for {}", region, path);
            continue;
        };
        match fetcher.fetch(path).await {
            Ok(html) => target.set_inner_html(&html),
            Err(e) => log::error!("Error loading {}: {}", region, e),
        }
    }
}
