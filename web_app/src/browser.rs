//! Browser implementations of the router's collaborators.

use hub_router::{link_targets_page, ContentFetcher, FetchError, History, HistoryState, PageView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Fetches page fragments relative to the document URL.
#[derive(Clone, Copy, Default)]
pub struct BrowserFetcher;

impl ContentFetcher for BrowserFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let window = dom::window().ok_or_else(|| FetchError::Network("window unavailable".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| FetchError::Network(dom::js_error_text(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
            });
        }

        let text = response
            .text()
            .map_err(|e| FetchError::Network(dom::js_error_text(&e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Network(dom::js_error_text(&e)))?;
        text.as_string()
            .ok_or_else(|| FetchError::Network("response body is not text".to_string()))
    }
}

/// Writes into the content region and document chrome.
pub struct DomPageView {
    content_region: String,
}

impl DomPageView {
    pub fn new(content_region: &str) -> Self {
        Self {
            content_region: content_region.to_string(),
        }
    }
}

impl PageView for DomPageView {
    fn replace_content(&self, html: &str) {
        match dom::by_id(&self.content_region) {
            Some(region) => region.set_inner_html(html),
            None => log::error!("Content region #{} not found", self.content_region),
        }
    }

    fn set_title(&self, title: &str) {
        if let Some(doc) = dom::document() {
            doc.set_title(title);
        }
    }

    fn mark_active(&self, page: &str) {
        for link in dom::query_all(".navbar-link, .mobile-menu-link") {
            let href = link.get_attribute("href");
            let data_page = link.get_attribute("data-page");
            let active = link_targets_page(href.as_deref(), data_page.as_deref(), page);
            dom::set_class(&link, "active", active);
        }
    }

    fn scroll_to_top(&self) {
        scroll_to(0.0);
    }
}

/// Smooth-scrolls the window to `top`.
pub fn scroll_to(top: f64) {
    if let Some(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `window.history` with `{ page }` entries.
#[derive(Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn write(&self, state: &HistoryState, fragment: &str, replace: bool) {
        let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
            log::warn!("History API unavailable");
            return;
        };
        let value = match js_sys::JSON::parse(&state.to_json()) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to encode history state: {}", dom::js_error_text(&e));
                JsValue::NULL
            }
        };
        let result = if replace {
            history.replace_state_with_url(&value, "", Some(fragment))
        } else {
            history.push_state_with_url(&value, "", Some(fragment))
        };
        if let Err(e) = result {
            log::error!("Failed to update history: {}", dom::js_error_text(&e));
        }
    }
}

impl History for BrowserHistory {
    fn push(&self, state: &HistoryState, fragment: &str) {
        self.write(state, fragment, false);
    }

    fn replace(&self, state: &HistoryState, fragment: &str) {
        self.write(state, fragment, true);
    }
}

/// Decodes the state object a popstate event carries.
pub fn history_state_from_js(value: &JsValue) -> Option<HistoryState> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(value).ok()?;
    HistoryState::from_json(&String::from(json))
}

/// The current URL fragment including `#`, or empty.
pub fn current_fragment() -> String {
    dom::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
