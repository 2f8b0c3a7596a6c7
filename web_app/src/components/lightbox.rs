//! Gallery lightbox modal.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};
use web_common::{GalleryCursor, GalleryItem, ModalSize};

use crate::dom;

#[derive(Clone, Copy)]
pub struct LightboxManager {
    items: RwSignal<Vec<GalleryItem>>,
    cursor: RwSignal<Option<GalleryCursor>>,
    size: RwSignal<ModalSize>,
}

impl LightboxManager {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            cursor: RwSignal::new(None),
            size: RwSignal::new(ModalSize::Xl),
        }
    }

    /// Opens at `index`; an empty gallery leaves the lightbox closed.
    pub fn open(&self, items: Vec<GalleryItem>, index: usize) {
        let cursor = GalleryCursor::new(index, items.len());
        self.items.set(items);
        self.cursor.set(cursor);
    }

    pub fn close(&self) {
        self.cursor.set(None);
    }

    pub fn next(&self) {
        self.cursor.update(|cursor| *cursor = cursor.map(GalleryCursor::next));
    }

    pub fn prev(&self) {
        self.cursor.update(|cursor| *cursor = cursor.map(GalleryCursor::prev));
    }

    pub fn set_size(&self, size: ModalSize) {
        self.size.set(size);
    }

    pub fn is_open(&self) -> bool {
        self.cursor.with(Option::is_some)
    }

    fn current(&self) -> Option<GalleryItem> {
        let index = self.cursor.get()?.index();
        self.items.with(|items| items.get(index).cloned())
    }

    /// Escape closes, arrows step. Ignored while closed.
    fn handle_key(&self, key: &str) {
        let Some(cursor) = self.cursor.get_untracked() else {
            return;
        };
        if key == "Escape" {
            self.close();
        } else if let Some(stepped) = cursor.step_for_key(key) {
            self.cursor.set(Some(stepped));
        }
    }
}

#[component]
pub fn Lightbox() -> impl IntoView {
    let lightbox = use_context::<LightboxManager>().expect("LightboxManager not found");

    Effect::new(move |was_open: Option<bool>| {
        let open = lightbox.is_open();
        if was_open.is_some() || open {
            dom::set_body_scroll_locked(open);
        }
        open
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |event| {
        lightbox.handle_key(&event.key());
    });

    let field = move |pick: fn(GalleryItem) -> String| move || lightbox.current().map(pick).unwrap_or_default();

    view! {
        <Show when=move || lightbox.is_open()>
            <div
                id="galleryModal"
                class="gallery-modal active"
                on:click=move |event| {
                    if event.target() == event.current_target() {
                        lightbox.close();
                    }
                }
            >
                <div class=move || format!("modal-content {}", lightbox.size.get().class())>
                    <button class="modal-close" aria-label="Close" on:click=move |_| lightbox.close()>
                        <i class="fas fa-times"></i>
                    </button>
                    <button class="modal-nav modal-prev" aria-label="Previous" on:click=move |_| lightbox.prev()>
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <button class="modal-nav modal-next" aria-label="Next" on:click=move |_| lightbox.next()>
                        <i class="fas fa-chevron-right"></i>
                    </button>
                    <img class="modal-image" src=field(|item| item.src) alt=field(|item| item.alt) />
                    <div class="modal-info">
                        <h3 class="modal-title">{field(|item| item.title)}</h3>
                        <p class="modal-description">{field(|item| item.category)}</p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
