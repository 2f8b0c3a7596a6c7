use hub_router::Teardown;
use web_common::{progress_width, DashboardStats};

use crate::dom;

/// Fills progress bars and the statistics cards. Binds nothing.
pub fn setup() -> Option<Teardown> {
    for bar in dom::query_all(".progress-bar") {
        let value = bar.get_attribute("data-value").unwrap_or_default();
        dom::set_style(&bar, "width", &progress_width(&value));
    }

    for (key, text) in DashboardStats::default().entries() {
        if let Some(element) = dom::query(&format!(".stat-{}", key)) {
            element.set_text_content(Some(&text));
        }
    }

    log::debug!("Dashboard initialized");
    None
}
