use hub_router::Teardown;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::InitContext;
use crate::browser::scroll_to;
use crate::dom::{self, bind};

const DEFAULT_NAVBAR_HEIGHT: f64 = 70.0;

pub fn setup(ctx: &InitContext) -> Option<Teardown> {
    let mut bindings = Vec::new();

    for anchor in dom::query_all("a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let id = href.trim_start_matches('#').to_string();
        if id.is_empty() || ctx.is_route(&id) {
            continue;
        }
        bind(&mut bindings, &anchor, "click", move |event| {
            let Some(target) = dom::by_id(&id) else {
                return;
            };
            event.prevent_default();

            let offset = dom::window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            scroll_to(target.get_bounding_client_rect().top() + offset - navbar_height());
            push_hash(&href);
            mark_active(&href);
        });
    }

    let window = dom::window()?;
    bind(&mut bindings, &window, "scroll", |_| highlight_active_section());
    highlight_active_section();

    dom::into_teardown(bindings)
}

fn navbar_height() -> f64 {
    dom::query(".navbar")
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .filter(|height| *height > 0.0)
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT)
}

/// Adds the section hash to the URL without a navigation; the entry keeps
/// the current page state so back returns to the same page.
fn push_hash(hash: &str) {
    let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = history.state().unwrap_or(JsValue::NULL);
    let _ = history.push_state_with_url(&state, "", Some(hash));
}

fn mark_active(hash: &str) {
    for link in dom::query_all(".navbar-link, .mobile-menu-link") {
        let active = link.get_attribute("href").as_deref() == Some(hash);
        dom::set_class(&link, "active", active);
    }
}

fn highlight_active_section() {
    let Some(scroll_y) = dom::window().and_then(|w| w.scroll_y().ok()) else {
        return;
    };
    let position = scroll_y + 100.0;
    let header = navbar_height();

    for section in dom::query_all("section[id]") {
        let Ok(section) = section.dyn_into::<HtmlElement>() else {
            continue;
        };
        let top = section.offset_top() as f64 - header;
        let height = section.offset_height() as f64;
        if position >= top && position < top + height {
            mark_active(&format!("#{}", section.id()));
        }
    }
}
