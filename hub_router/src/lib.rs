//! View router for the Army Hub static site.
//!
//! The router turns a page identifier into fetched HTML injected into a
//! content region, keeps the URL fragment and document title in step with the
//! displayed page, and re-runs the page-scoped initializers after every load.
//!
//! # Architecture
//!
//! - `routes` - the immutable route table (page id → content path, title)
//! - `config` - serde configuration the route table is built from
//! - `view` - collaborator traits (fetcher, page view, history)
//! - `loading` - loading indicator trait and the call-balanced tracker
//! - `initializers` - page initializer registry with teardown cycle
//! - `router` - the navigation state machine
//!
//! The crate has no browser dependency. `web_app` provides the browser
//! implementations of the collaborator traits; tests use in-memory fakes.

pub mod config;
pub mod errors;
pub mod initializers;
pub mod loading;
pub mod router;
pub mod routes;
pub mod view;

pub use config::{RouteEntry, RouterConfig};
pub use errors::*;
pub use initializers::{InitializerRegistry, Teardown};
pub use loading::{LoadingGuard, LoadingIndicator, LoadingTracker};
pub use router::{NavigationOutcome, NavigationRequest, RouteState, ViewRouter};
pub use routes::{fragment_for, link_targets_page, RouteTable};
pub use view::{ContentFetcher, History, HistoryState, PageView};
