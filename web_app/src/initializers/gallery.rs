use std::time::Duration;

use hub_router::Teardown;
use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use web_common::{initial_filter, matches_filter, GalleryItem, FILTER_ALL, FILTER_PARAM};
use web_sys::{Element, HtmlImageElement};

use super::InitContext;
use crate::dom::{self, bind};
use crate::utils;

/// Matches the CSS fade before a filtered-out item is hidden.
const HIDE_DELAY_MS: u64 = 300;

pub fn setup(ctx: &InitContext) -> Option<Teardown> {
    let elements = dom::query_all(".gallery-item");
    let buttons = dom::query_all(".filter-button");
    if elements.is_empty() && buttons.is_empty() {
        return None;
    }

    let items: Vec<GalleryItem> = elements.iter().map(describe).collect();
    let mut bindings = Vec::new();

    let lightbox = ctx.lightbox;
    for (index, element) in elements.iter().enumerate() {
        let items = items.clone();
        bind(&mut bindings, element, "click", move |_| lightbox.open(items.clone(), index));
    }

    for button in &buttons {
        let filter = button.get_attribute("data-filter").unwrap_or_else(|| FILTER_ALL.to_string());
        let others = buttons.clone();
        let pressed = button.clone();
        bind(&mut bindings, button, "click", move |_| {
            apply_filter(&filter);
            mark_active(&others, &pressed);
            if filter == FILTER_ALL {
                utils::remove_query_param(FILTER_PARAM);
            } else {
                utils::set_query_param(FILTER_PARAM, &filter);
            }
        });
    }

    let restored = utils::query_param(FILTER_PARAM);
    let filter = initial_filter(restored.as_deref());
    if filter != FILTER_ALL {
        apply_filter(filter);
        if let Some(button) = buttons
            .iter()
            .find(|b| b.get_attribute("data-filter").as_deref() == Some(filter))
        {
            mark_active(&buttons, button);
        }
    }

    dom::into_teardown_with(bindings, move || lightbox.close())
}

fn describe(element: &Element) -> GalleryItem {
    let image = element
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok());
    GalleryItem {
        src: image.as_ref().map(HtmlImageElement::src).unwrap_or_default(),
        alt: image.as_ref().map(HtmlImageElement::alt).unwrap_or_default(),
        title: dom::child_text(element, ".gallery-title").unwrap_or_default(),
        category: dom::child_text(element, ".gallery-category").unwrap_or_default(),
    }
}

fn apply_filter(filter: &str) {
    for item in dom::query_all(".gallery-item") {
        let categories = item.get_attribute("data-category").unwrap_or_default();
        if matches_filter(&categories, filter) {
            dom::set_class(&item, "filtered-out", false);
            dom::set_style(&item, "display", "block");
            dom::set_style(&item, "opacity", "1");
            dom::set_style(&item, "transform", "scale(1)");
        } else {
            dom::set_class(&item, "filtered-out", true);
            dom::set_style(&item, "opacity", "0");
            dom::set_style(&item, "transform", "scale(0.8)");
            set_timeout(
                move || {
                    // a later filter may have brought it back
                    if item.class_list().contains("filtered-out") {
                        dom::set_style(&item, "display", "none");
                    }
                },
                Duration::from_millis(HIDE_DELAY_MS),
            );
        }
    }
}

fn mark_active(buttons: &[Element], active: &Element) {
    for button in buttons {
        dom::set_class(button, "active", button == active);
    }
}
