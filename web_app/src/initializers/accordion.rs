use std::cell::RefCell;
use std::rc::Rc;

use hub_router::Teardown;
use web_common::AccordionState;
use web_sys::Element;

use crate::dom::{self, bind};

pub fn setup() -> Option<Teardown> {
    let questions = dom::query_all(".faq-question");
    if questions.is_empty() {
        return None;
    }

    let state = Rc::new(RefCell::new(AccordionState::new(questions.len())));
    let questions = Rc::new(questions);
    render(&questions, &state.borrow());

    let mut bindings = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        let (questions, state) = (questions.clone(), state.clone());
        bind(&mut bindings, question, "click", move |_| {
            state.borrow_mut().toggle(index);
            render(&questions, &state.borrow());
        });
    }

    dom::into_teardown(bindings)
}

fn render(questions: &[Element], state: &AccordionState) {
    for (index, question) in questions.iter().enumerate() {
        let Some(answer) = question.next_element_sibling() else {
            continue;
        };
        let open = state.is_open(index);
        dom::set_class(&answer, "active", open);
        if open {
            dom::set_style(&answer, "max-height", &format!("{}px", answer.scroll_height()));
        } else {
            dom::clear_style(&answer, "max-height");
        }
        if let Some(icon) = question.query_selector("i").ok().flatten() {
            let previous = if open { "fa-chevron-down" } else { "fa-chevron-up" };
            dom::swap_class(&icon, previous, state.icon(index));
        }
    }
}

/// Recomputes open answer heights after the viewport changes size.
pub fn refresh_open_heights() {
    for question in dom::query_all(".faq-question") {
        if let Some(answer) = question.next_element_sibling() {
            if answer.class_list().contains("active") {
                dom::set_style(&answer, "max-height", &format!("{}px", answer.scroll_height()));
            }
        }
    }
}
