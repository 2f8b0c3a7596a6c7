//! Field validation and simulated submission for the site's forms.

use std::time::Duration;

use hub_router::Teardown;
use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use web_common::{
    validate_field, validate_newsletter_email, FieldKind, FieldRules, SubmissionKind, FORM_IDS,
    NEWSLETTER_FORM_ID, NEWSLETTER_MESSAGE_MS, NEWSLETTER_SUCCESS, REQUIRED_FIELDS,
};
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::InitContext;
use crate::components::ToastManager;
use crate::navigation::Navigator;
use crate::dom::{self, bind, EventBinding};

pub fn setup(ctx: &InitContext) -> Option<Teardown> {
    let mut bindings = Vec::new();

    for id in FORM_IDS {
        if let Some(form) = dom::by_id(id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
            bind_form(&mut bindings, form, ctx);
        }
    }
    if let Some(form) = dom::by_id(NEWSLETTER_FORM_ID) {
        bind_newsletter(&mut bindings, &form);
    }

    dom::into_teardown(bindings)
}

fn bind_form(bindings: &mut Vec<EventBinding>, form: HtmlFormElement, ctx: &InitContext) {
    let controls = dom::query_all_in(&form, REQUIRED_FIELDS);

    for control in &controls {
        let on_blur = control.clone();
        bind(bindings, control, "blur", move |_| {
            validate_control(&on_blur);
        });
        let on_input = control.clone();
        bind(bindings, control, "input", move |_| clear_error(&on_input));
    }

    let (navigator, toasts) = (ctx.navigator, ctx.toasts);
    let submitted = form.clone();
    bind(bindings, &form, "submit", move |event| {
        event.prevent_default();
        // Every control reports its error, so no short-circuit here.
        let valid = controls
            .iter()
            .fold(true, |valid, control| validate_control(control) && valid);
        if !valid {
            return;
        }
        match submitted.id().parse::<SubmissionKind>() {
            Ok(kind) => simulate_submission(&submitted, kind, toasts, navigator),
            Err(e) => log::warn!("{}", e),
        }
    });
}

/// Shows a busy button for the kind's delay, then reports success and resets.
fn simulate_submission(
    form: &HtmlFormElement,
    kind: SubmissionKind,
    toasts: ToastManager,
    navigator: Navigator,
) {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };
    if button.disabled() {
        return;
    }

    let original = button.inner_html();
    button.set_inner_html(&format!("<i class=\"fas fa-spinner fa-spin\"></i> {}", kind.busy_label()));
    button.set_disabled(true);
    log::debug!("Submitting {}", kind.form_id());

    let form = form.clone();
    set_timeout(
        move || {
            toasts.success(kind.success_message());
            form.reset();
            button.set_inner_html(&original);
            button.set_disabled(false);

            if let Some(follow_up) = kind.follow_up() {
                set_timeout(
                    move || navigator.navigate(follow_up.page),
                    Duration::from_millis(follow_up.delay_ms as u64),
                );
            }
        },
        Duration::from_millis(kind.delay_ms() as u64),
    );
}

fn bind_newsletter(bindings: &mut Vec<EventBinding>, form: &Element) {
    let Some(input) = form.query_selector("input[type=\"email\"]").ok().flatten() else {
        return;
    };
    if form.query_selector("button[type=\"submit\"]").ok().flatten().is_none() {
        return;
    }

    let on_blur = input.clone();
    bind(bindings, &input, "blur", move |_| {
        check_newsletter(&on_blur);
    });
    let on_input = input.clone();
    bind(bindings, &input, "input", move |_| clear_error(&on_input));

    let submitted = form.clone();
    bind(bindings, form, "submit", move |event| {
        event.prevent_default();
        if !check_newsletter(&input) {
            return;
        }
        set_value(&input, "");
        show_form_message(&submitted, NEWSLETTER_SUCCESS);
        let form = submitted.clone();
        set_timeout(
            move || clear_form_message(&form),
            Duration::from_millis(NEWSLETTER_MESSAGE_MS as u64),
        );
    });
}

fn check_newsletter(input: &Element) -> bool {
    match validate_newsletter_email(&value_of(input)) {
        Ok(()) => {
            clear_error(input);
            true
        }
        Err(e) => {
            show_error(input, &e.to_string());
            false
        }
    }
}

fn validate_control(control: &Element) -> bool {
    match validate_field(&rules_for(control), &value_of(control)) {
        Ok(()) => {
            clear_error(control);
            true
        }
        Err(e) => {
            show_error(control, &e.to_string());
            false
        }
    }
}

fn rules_for(control: &Element) -> FieldRules {
    let name = control
        .get_attribute("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| control.id());
    let kind = FieldKind::from_input_type(&control.get_attribute("type").unwrap_or_default());
    let length = |attr: &str| control.get_attribute(attr).and_then(|v| v.trim().parse().ok());

    FieldRules {
        name,
        kind,
        required: control.has_attribute("required"),
        min_length: length("minlength"),
        max_length: length("maxlength"),
        pattern: control.get_attribute("pattern"),
        title: control.get_attribute("title"),
    }
}

fn value_of(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn set_value(control: &Element, value: &str) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

fn show_error(control: &Element, message: &str) {
    clear_error(control);
    let (Some(doc), Some(parent)) = (dom::document(), control.parent_element()) else {
        return;
    };
    let Ok(error) = doc.create_element("div") else {
        return;
    };
    error.set_class_name("error-message text-red-400 text-sm mt-1");
    error.set_text_content(Some(message));
    let _ = control.class_list().add_1("border-red-500");
    let _ = parent.append_child(&error);
}

fn clear_error(control: &Element) {
    let _ = control.class_list().remove_1("border-red-500");
    if let Some(parent) = control.parent_element() {
        if let Some(error) = parent.query_selector(".error-message").ok().flatten() {
            error.remove();
        }
    }
}

fn show_form_message(form: &Element, message: &str) {
    clear_form_message(form);
    let Some(doc) = dom::document() else {
        return;
    };
    if let Ok(note) = doc.create_element("div") {
        note.set_class_name("form-message text-green-400 text-sm mt-2");
        note.set_text_content(Some(message));
        let _ = form.append_child(&note);
    }
}

fn clear_form_message(form: &Element) {
    if let Some(note) = form.query_selector(".form-message").ok().flatten() {
        note.remove();
    }
}
