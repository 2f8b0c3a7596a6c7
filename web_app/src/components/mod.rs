mod lightbox;
mod loading;
mod toast;

pub use lightbox::{Lightbox, LightboxManager};
pub use loading::{LoadingOverlay, OverlayHandle};
pub use toast::{ToastContainer, ToastManager};
