use hub_router::Teardown;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node};

use crate::dom::{self, bind};

pub fn setup() -> Option<Teardown> {
    let (Some(button), Some(menu)) = (dom::by_id("mobileMenuBtn"), dom::by_id("mobileMenu")) else {
        return None;
    };
    let doc = dom::document()?;
    let mut bindings = Vec::new();

    let (toggle_menu, toggle_button) = (menu.clone(), button.clone());
    bind(&mut bindings, &button, "click", move |_| {
        let open = toggle_menu.class_list().toggle("active").unwrap_or(false);
        set_open(&toggle_menu, &toggle_button, open);
    });

    for link in dom::query_all(".mobile-menu-link") {
        let (menu, button) = (menu.clone(), button.clone());
        bind(&mut bindings, &link, "click", move |_| set_open(&menu, &button, false));
    }

    let (outside_menu, outside_button) = (menu.clone(), button.clone());
    bind(&mut bindings, &doc, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = outside_menu.contains(target.as_ref()) || outside_button.contains(target.as_ref());
        if !inside && is_open(&outside_menu) {
            set_open(&outside_menu, &outside_button, false);
        }
    });

    bind(&mut bindings, &doc, "keydown", move |event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if escape && is_open(&menu) {
            set_open(&menu, &button, false);
        }
    });

    dom::into_teardown(bindings)
}

fn is_open(menu: &Element) -> bool {
    menu.class_list().contains("active")
}

fn set_open(menu: &Element, button: &Element, open: bool) {
    dom::set_class(menu, "active", open);
    dom::set_body_scroll_locked(open);
    if let Some(icon) = button.query_selector("i").ok().flatten() {
        if open {
            dom::swap_class(&icon, "fa-bars", "fa-times");
        } else {
            dom::swap_class(&icon, "fa-times", "fa-bars");
        }
    }
}
