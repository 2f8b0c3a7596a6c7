//! Shared UI helpers for the Army Hub web application.
//!
//! Everything here is plain Rust with no browser dependency, so the rules
//! the page initializers apply (validation messages, accordion and gallery
//! state, toast styling, preference toggles) are tested natively.
//! `web_app` turns them into DOM updates.
//!
//! # Usage
//!
//! ```rust
//! use web_common::{validate_field, FieldKind, FieldRules};
//!
//! let rules = FieldRules::new("email", FieldKind::Email).required();
//! assert!(validate_field(&rules, "cadet@example.com").is_ok());
//! ```

mod accordion;
mod dashboard;
mod format;
mod forms;
mod gallery;
mod notify;
mod prefs;
mod query;
mod validation;

pub use accordion::*;
pub use dashboard::*;
pub use format::*;
pub use forms::*;
pub use gallery::*;
pub use notify::*;
pub use prefs::*;
pub use query::*;
pub use validation::*;
