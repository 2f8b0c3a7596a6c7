//! Page initializers registered with the router.
//!
//! Each one binds listeners for the freshly rendered page and returns a
//! teardown that unbinds them before the next page loads.

mod accordion;
mod dashboard;
mod forms;
mod gallery;
mod login;
mod mobile_menu;
mod smooth_scroll;

use std::rc::Rc;

use hub_router::InitializerRegistry;

use crate::components::{LightboxManager, ToastManager};
use crate::navigation::Navigator;

pub use accordion::refresh_open_heights;

/// What initializers may reach beyond the DOM.
#[derive(Clone)]
pub struct InitContext {
    pub navigator: Navigator,
    pub toasts: ToastManager,
    pub lightbox: LightboxManager,
    /// Routed page ids; in-page anchors naming one are left to the router.
    pub route_ids: Rc<Vec<String>>,
}

impl InitContext {
    pub fn is_route(&self, id: &str) -> bool {
        self.route_ids.iter().any(|route| route == id)
    }
}

pub fn build_registry(ctx: InitContext) -> InitializerRegistry {
    let mut registry = InitializerRegistry::new();

    registry.register_common("mobile-menu", |_| mobile_menu::setup());
    let scroll_ctx = ctx.clone();
    registry.register_common("smooth-scroll", move |_| smooth_scroll::setup(&scroll_ctx));
    registry.register_common("faq-accordion", |_| accordion::setup());
    let form_ctx = ctx.clone();
    registry.register_common("forms", move |_| forms::setup(&form_ctx));

    let gallery_ctx = ctx;
    registry.register("gallery", "gallery", move |_| gallery::setup(&gallery_ctx));
    registry.register("dashboard", "dashboard", |_| dashboard::setup());
    registry.register("login", "login", |_| login::setup());

    registry
}
