//! Page-level helpers: query string, back-to-top, footer date.

use wasm_bindgen::prelude::*;
use web_common::{format_calendar_date, DateFormat};

use crate::browser::scroll_to;
use crate::dom;

/// `#backToTop` shows once the page is scrolled past this offset.
const BACK_TO_TOP_OFFSET: f64 = 300.0;

fn current_href() -> Option<String> {
    dom::window()?.location().href().ok()
}

pub fn query_param(name: &str) -> Option<String> {
    web_common::get_query_param(&current_href()?, name)
}

pub fn set_query_param(name: &str, value: &str) {
    if let Some(href) = current_href() {
        match web_common::set_query_param(&href, name, value) {
            Ok(url) => replace_url(&url),
            Err(e) => log::warn!("Cannot update query parameter {}: {}", name, e),
        }
    }
}

pub fn remove_query_param(name: &str) {
    if let Some(href) = current_href() {
        match web_common::remove_query_param(&href, name) {
            Ok(url) => replace_url(&url),
            Err(e) => log::warn!("Cannot remove query parameter {}: {}", name, e),
        }
    }
}

/// Swaps the URL in place, keeping the entry's `{ page }` state.
fn replace_url(url: &str) {
    let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = history.state().unwrap_or(JsValue::NULL);
    if let Err(e) = history.replace_state_with_url(&state, "", Some(url)) {
        log::error!("Failed to replace URL: {}", dom::js_error_text(&e));
    }
}

pub fn update_back_to_top() {
    let Some(button) = dom::by_id("backToTop") else {
        return;
    };
    let scrolled = dom::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    dom::set_class(&button, "visible", scrolled > BACK_TO_TOP_OFFSET);
}

pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Fills every `[data-current-date]` with today's date. The attribute value
/// may name a format (`yyyy-mm-dd`); anything else uses `dd/mm/yyyy`.
pub fn stamp_current_date() {
    let today = js_sys::Date::new_0();
    for element in dom::query_all("[data-current-date]") {
        let format = element
            .get_attribute("data-current-date")
            .and_then(|value| value.parse::<DateFormat>().ok())
            .unwrap_or_default();
        let text = format_calendar_date(
            today.get_full_year() as i32,
            today.get_month() + 1,
            today.get_date(),
            format,
        );
        if let Some(text) = text {
            element.set_text_content(Some(&text));
        }
    }
}
