//! Immutable route table.

use std::collections::BTreeMap;

use crate::config::RouterConfig;
use crate::errors::ConfigError;

/// Page id → content path and page id → title, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    paths: BTreeMap<String, String>,
    titles: BTreeMap<String, String>,
    default_page: String,
    default_title: String,
    not_found_path: String,
    not_found_title: String,
}

impl RouteTable {
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut paths = BTreeMap::new();
        let mut titles = BTreeMap::new();
        for route in &config.routes {
            paths.insert(route.id.clone(), route.path.clone());
            if let Some(title) = &route.title {
                titles.insert(route.id.clone(), title.clone());
            }
        }

        Ok(Self {
            paths,
            titles,
            default_page: config.default_page.clone(),
            default_title: config.default_title.clone(),
            not_found_path: config.not_found_path.clone(),
            not_found_title: config.not_found_title.clone(),
        })
    }

    pub fn contains(&self, page: &str) -> bool {
        self.paths.contains_key(page)
    }

    /// Content path for `page`, if it is routed.
    pub fn path(&self, page: &str) -> Option<&str> {
        self.paths.get(page).map(String::as_str)
    }

    /// Display title for `page`, falling back to the default title.
    pub fn title(&self, page: &str) -> &str {
        self.titles
            .get(page)
            .map(String::as_str)
            .unwrap_or(&self.default_title)
    }

    pub fn default_page(&self) -> &str {
        &self.default_page
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    pub fn not_found_path(&self) -> &str {
        &self.not_found_path
    }

    pub fn not_found_title(&self) -> &str {
        &self.not_found_title
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// The routed page named by a URL fragment (`#gallery` or `gallery`).
    pub fn page_for_fragment<'a>(&self, fragment: &'a str) -> Option<&'a str> {
        let page = fragment.strip_prefix('#').unwrap_or(fragment);
        self.contains(page).then_some(page)
    }

    /// Page to show when the app starts with `fragment` in the URL.
    pub fn initial_page<'a>(&'a self, fragment: &'a str) -> &'a str {
        self.page_for_fragment(fragment)
            .unwrap_or(&self.default_page)
    }
}

/// URL fragment for a page id.
pub fn fragment_for(page: &str) -> String {
    format!("#{}", page)
}

/// Whether a navigation link points at `page`.
///
/// Links are matched on their `data-page` attribute, a bare `href` equal to
/// the id, the `#id` fragment, or the legacy `pages/<id>.html` path.
pub fn link_targets_page(href: Option<&str>, data_page: Option<&str>, page: &str) -> bool {
    if page.is_empty() {
        return false;
    }
    if data_page == Some(page) {
        return true;
    }
    match href {
        Some(href) => {
            href == page
                || href.strip_prefix('#') == Some(page)
                || href == format!("pages/{}.html", page)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteEntry;

    #[test]
    fn test_titles_fall_back_to_default() {
        let mut config = RouterConfig::default();
        config.routes.push(RouteEntry {
            id: "archive".to_string(),
            path: "pages/archive.html".to_string(),
            title: None,
        });
        let table = RouteTable::from_config(&config).unwrap();

        assert_eq!(table.title("archive"), "Indian Army Hub");
        assert_eq!(table.title("home"), "Home | Indian Army Hub");
        assert_eq!(table.title("missing"), "Indian Army Hub");
    }

    #[test]
    fn test_fragment_resolution() {
        let table = RouteTable::from_config(&RouterConfig::default()).unwrap();

        assert_eq!(table.page_for_fragment("#gallery"), Some("gallery"));
        assert_eq!(table.page_for_fragment("faq"), Some("faq"));
        assert_eq!(table.page_for_fragment("#bogus"), None);
        assert_eq!(table.initial_page(""), "home");
        assert_eq!(table.initial_page("#bogus"), "home");
        assert_eq!(table.initial_page("#ranks"), "ranks");
    }

    #[test]
    fn test_link_matching() {
        assert!(link_targets_page(Some("gallery"), None, "gallery"));
        assert!(link_targets_page(Some("#gallery"), None, "gallery"));
        assert!(link_targets_page(Some("pages/gallery.html"), None, "gallery"));
        assert!(link_targets_page(Some("#"), Some("gallery"), "gallery"));
        assert!(!link_targets_page(Some("#faq"), Some("faq"), "gallery"));
        assert!(!link_targets_page(None, None, "gallery"));
    }

    #[test]
    fn test_empty_page_matches_no_link() {
        assert!(!link_targets_page(Some("#"), None, ""));
        assert!(!link_targets_page(Some(""), Some(""), ""));
    }
}
