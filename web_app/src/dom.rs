//! Small DOM helpers shared by the page initializers.
//!
//! Listeners are bound through [`EventBinding`], which removes itself when
//! dropped, so an initializer's teardown is just dropping its bindings.

use hub_router::Teardown;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` under the document.
pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Some(doc) => query_all_in(doc.as_ref(), selector),
        None => Vec::new(),
    }
}

/// Every element matching `selector` under `root`.
pub fn query_all_in(root: &web_sys::Node, selector: &str) -> Vec<Element> {
    let list = if let Some(element) = root.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else if let Some(doc) = root.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else {
        return Vec::new();
    };

    let Ok(list) = list else {
        log::warn!("Invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Replaces one class with another, e.g. an icon swap.
pub fn swap_class(element: &Element, from: &str, to: &str) {
    let classes = element.class_list();
    let _ = classes.remove_1(from);
    let _ = classes.add_1(to);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

/// Locks page scrolling while an overlay is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

/// The element (or an ancestor) matching `selector` for an event target.
pub fn closest_from_event(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// A registered event listener; dropping it unregisters the listener.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| log::error!("Failed to bind {} listener: {:?}", event, e))
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Binds `handler` to `event` on `target`, pushing the binding onto `bindings`.
pub fn bind(
    bindings: &mut Vec<EventBinding>,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    if let Some(binding) = EventBinding::new(target, event, handler) {
        bindings.push(binding);
    }
}

/// Teardown that drops the bindings, or `None` when nothing was bound.
pub fn into_teardown(bindings: Vec<EventBinding>) -> Option<Teardown> {
    if bindings.is_empty() {
        return None;
    }
    Some(Box::new(move || drop(bindings)))
}

/// Teardown that drops the bindings and then runs `cleanup`.
pub fn into_teardown_with(bindings: Vec<EventBinding>, cleanup: impl FnOnce() + 'static) -> Option<Teardown> {
    Some(Box::new(move || {
        drop(bindings);
        cleanup();
    }))
}

/// Text content of the first descendant matching `selector`.
pub fn child_text(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
}

pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}
