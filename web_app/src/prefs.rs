//! Theme and language toggles persisted in local storage.

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use web_common::{Language, Theme, LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};

use crate::dom;

#[derive(Clone, Copy)]
pub struct Preferences {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
    pub language: Signal<Language>,
    set_language: WriteSignal<Language>,
}

impl Preferences {
    /// Reads the stored preferences and keeps the document in sync with them.
    pub fn new() -> Self {
        let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);
        let (language, set_language, _) =
            use_local_storage::<Language, FromToStringCodec>(LANGUAGE_STORAGE_KEY);

        Effect::new(move |_| apply_theme(theme.get()));
        Effect::new(move |_| apply_language(language.get()));

        Self {
            theme,
            set_theme,
            language,
            set_language,
        }
    }

    pub fn toggle_theme(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }

    pub fn toggle_language(&self) {
        self.set_language.update(|language| *language = language.toggled());
    }

    /// Re-applies both preferences, e.g. after the header markup arrives.
    pub fn apply(&self) {
        apply_theme(self.theme.get_untracked());
        apply_language(self.language.get_untracked());
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(icon) = dom::query("#themeToggle i") {
        icon.set_class_name(theme.icon());
    }
}

fn apply_language(language: Language) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("lang", language.as_str());
        let _ = root.set_attribute("dir", language.dir());
    }
    if let Some(toggle) = dom::by_id("langToggle") {
        toggle.set_text_content(Some(language.toggle_label()));
    }
    for (key, text) in language.translations() {
        for element in dom::query_all(&format!("[data-translate=\"{}\"]", key)) {
            element.set_text_content(Some(text));
        }
    }
}
