//! Full-page loading overlay shown while a page fragment is fetched.

use hub_router::LoadingIndicator;
use leptos::prelude::*;

/// Visibility switch the router drives through [`LoadingIndicator`].
///
/// `created` latches on the first show; from then on the overlay stays in
/// the DOM and only its display changes.
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    visible: RwSignal<bool>,
    created: RwSignal<bool>,
}

impl OverlayHandle {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            created: RwSignal::new(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_created(&self) -> bool {
        self.created.get()
    }

    pub fn display(&self) -> &'static str {
        if self.is_visible() {
            "flex"
        } else {
            "none"
        }
    }
}

impl LoadingIndicator for OverlayHandle {
    fn show(&self) {
        if !self.created.get_untracked() {
            self.created.set(true);
        }
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }
}

/// Mounted on the first show, then hidden and shown in place.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let overlay = use_context::<OverlayHandle>().expect("OverlayHandle not found");

    view! {
        <Show when=move || overlay.is_created()>
            <div
                id="page-loader"
                class="fixed inset-0 bg-black bg-opacity-70 items-center justify-center z-50"
                style:display=move || overlay.display()
            >
                <div class="text-center">
                    <div class="w-16 h-16 border-4 border-orange-500 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                    <p class="text-white">"Loading..."</p>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_created_once_then_toggled() {
        let overlay = OverlayHandle::new();
        assert!(!overlay.is_created());
        assert_eq!(overlay.display(), "none");

        overlay.show();
        assert!(overlay.is_created());
        assert_eq!(overlay.display(), "flex");

        overlay.hide();
        assert!(overlay.is_created(), "hiding keeps the overlay mounted");
        assert_eq!(overlay.display(), "none");

        overlay.show();
        assert!(overlay.is_created());
        assert_eq!(overlay.display(), "flex");
    }
}
