use hub_router::Teardown;
use wasm_bindgen::JsCast;
use web_common::REMEMBERED_USERNAME_KEY;
use web_sys::{Element, HtmlInputElement, Storage};

use crate::dom::{self, bind};

pub fn setup() -> Option<Teardown> {
    let form = dom::by_id("loginForm")?;
    let mut bindings = Vec::new();

    let input = |selector: &str| {
        form.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    };

    if let (Some(remember), Some(username)) = (input("#remember"), input("#username")) {
        let storage = local_storage();
        if let Some(saved) = storage
            .as_ref()
            .and_then(|s| s.get_item(REMEMBERED_USERNAME_KEY).ok().flatten())
        {
            username.set_value(&saved);
            remember.set_checked(true);
        }

        let checkbox = remember.clone();
        bind(&mut bindings, &remember, "change", move |_| {
            let Some(storage) = storage.as_ref() else {
                return;
            };
            let result = if checkbox.checked() {
                storage.set_item(REMEMBERED_USERNAME_KEY, &username.value())
            } else {
                storage.remove_item(REMEMBERED_USERNAME_KEY)
            };
            if let Err(e) = result {
                log::warn!("Cannot update remembered username: {}", dom::js_error_text(&e));
            }
        });
    }

    let toggle = input("#password").and_then(|password| password_toggle(&mut bindings, password));

    dom::into_teardown_with(bindings, move || {
        if let Some(toggle) = toggle {
            toggle.remove();
        }
    })
}

/// Adds an eye button that flips the password field between hidden and shown.
fn password_toggle(bindings: &mut Vec<dom::EventBinding>, password: HtmlInputElement) -> Option<Element> {
    let parent = password.parent_element()?;
    let toggle = dom::document()?.create_element("button").ok()?;
    let _ = toggle.set_attribute("type", "button");
    let _ = toggle.set_attribute("aria-label", "Show password");
    toggle.set_class_name("absolute right-3 top-1/2 transform -translate-y-1/2 text-gray-400");
    toggle.set_inner_html("<i class=\"fas fa-eye\"></i>");
    let _ = parent.class_list().add_1("relative");
    parent.append_child(&toggle).ok()?;

    let button = toggle.clone();
    bind(bindings, &toggle, "click", move |_| {
        let hidden = password.type_() == "password";
        password.set_type(if hidden { "text" } else { "password" });
        let icon = if hidden { "fa-eye-slash" } else { "fa-eye" };
        button.set_inner_html(&format!("<i class=\"fas {}\"></i>", icon));
    });

    Some(toggle)
}

fn local_storage() -> Option<Storage> {
    dom::window()?.local_storage().ok().flatten()
}
