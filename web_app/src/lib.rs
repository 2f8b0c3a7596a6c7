use std::rc::Rc;

use hub_router::{NavigationRequest, RouteTable, RouterConfig, ViewRouter};
use leptos::ev;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use leptos_use::{use_clipboard, use_debounce_fn, use_document, use_event_listener, use_throttle_fn, use_window, UseClipboardReturn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod browser;
mod components;
mod dom;
mod initializers;
mod navigation;
mod prefs;
mod utils;

use browser::{current_fragment, BrowserFetcher, BrowserHistory, DomPageView};
use components::{Lightbox, LightboxManager, LoadingOverlay, OverlayHandle, ToastContainer, ToastManager};
use initializers::{build_registry, InitContext};
use navigation::{load_shell, setup_navigation, Navigator};
use prefs::Preferences;

/// Site routes and shell fragments, baked in at build time.
const SITE_CONFIG: &str = include_str!("../site.json");

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

fn site_config() -> RouterConfig {
    match RouterConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid site.json, using built-in routes: {}", e);
            RouterConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let toasts = ToastManager::new();
    provide_context(toasts);
    let lightbox = LightboxManager::new();
    provide_context(lightbox);
    let overlay = OverlayHandle::new();
    provide_context(overlay);
    let navigator = Navigator::new();
    provide_context(navigator);
    let prefs = Preferences::new();
    provide_context(prefs);

    let config = site_config();
    let registry = build_registry(InitContext {
        navigator,
        toasts,
        lightbox,
        route_ids: Rc::new(config.routes.iter().map(|route| route.id.clone()).collect()),
    });
    match RouteTable::from_config(&config) {
        Ok(routes) => navigator.install(ViewRouter::new(
            routes,
            BrowserFetcher,
            DomPageView::new(&config.content_region),
            BrowserHistory,
            overlay,
            registry,
        )),
        Err(e) => log::error!("Router not started: {}", e),
    }

    setup_navigation(navigator);
    setup_page_controls(prefs, toasts);

    spawn_local(async move {
        load_shell(&BrowserFetcher, &config).await;
        utils::stamp_current_date();
        prefs.apply();
        utils::update_back_to_top();
        navigator.dispatch(NavigationRequest::Start(current_fragment()));
        log::info!("Indian Army Hub initialized");
    });

    view! {
        <LoadingOverlay/>
        <ToastContainer/>
        <Lightbox/>
    }
}

/// Header and footer controls that live outside the routed content:
/// theme and language toggles, back-to-top, and `data-copy` buttons.
fn setup_page_controls(prefs: Preferences, toasts: ToastManager) {
    let UseClipboardReturn { is_supported, copy, .. } = use_clipboard();

    let _ = use_event_listener(use_document(), ev::click, move |event| {
        if dom::closest_from_event(&event, "#themeToggle").is_some() {
            prefs.toggle_theme();
        } else if dom::closest_from_event(&event, "#langToggle").is_some() {
            prefs.toggle_language();
        } else if dom::closest_from_event(&event, "#backToTop").is_some() {
            event.prevent_default();
            utils::scroll_to_top();
        } else if let Some(source) = dom::closest_from_event(&event, "[data-copy]") {
            let text = source
                .get_attribute("data-copy")
                .filter(|value| !value.is_empty())
                .or_else(|| source.text_content())
                .unwrap_or_default();
            if is_supported.get_untracked() {
                copy(&text);
                toasts.success("Copied to clipboard!");
            } else {
                toasts.error("Failed to copy to clipboard");
            }
        }
    });

    let on_resize = use_debounce_fn(initializers::refresh_open_heights, 150.0);
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        on_resize();
    });

    let on_scroll = use_throttle_fn(utils::update_back_to_top, 100.0);
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        on_scroll();
    });
}
