use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A single route: page id, content path and optional display title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RouteEntry {
    pub fn new(id: &str, path: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            path: path.to_string(),
            title: Some(title.to_string()),
        }
    }
}

/// Site router configuration.
///
/// ```rust
/// use hub_router::RouterConfig;
///
/// let config = RouterConfig::from_json(r#"{
///     "default_page": "home",
///     "routes": [{ "id": "home", "path": "pages/home.html" }]
/// }"#).unwrap();
/// assert_eq!(config.content_region, "page-content");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Id of the element whose markup is replaced on navigation.
    pub content_region: String,
    pub default_page: String,
    pub default_title: String,
    pub not_found_path: String,
    pub not_found_title: String,
    /// Shell fragments loaded once at startup.
    pub header_path: String,
    pub footer_path: String,
    pub routes: Vec<RouteEntry>,
}

impl RouterConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_region.is_empty() {
            return Err(ConfigError::EmptyContentRegion);
        }
        if self.not_found_path.is_empty() {
            return Err(ConfigError::EmptyNotFoundPath);
        }
        if self.routes.is_empty() {
            return Err(ConfigError::NoRoutes);
        }

        let mut seen = HashSet::new();
        for (index, route) in self.routes.iter().enumerate() {
            if route.id.is_empty() {
                return Err(ConfigError::EmptyId(index));
            }
            if route.path.is_empty() {
                return Err(ConfigError::EmptyPath(route.id.clone()));
            }
            if !seen.insert(route.id.as_str()) {
                return Err(ConfigError::DuplicateRoute(route.id.clone()));
            }
        }

        if !seen.contains(self.default_page.as_str()) {
            return Err(ConfigError::UnknownDefaultPage(self.default_page.clone()));
        }
        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            content_region: "page-content".to_string(),
            default_page: "home".to_string(),
            default_title: "Indian Army Hub".to_string(),
            not_found_path: "pages/404.html".to_string(),
            not_found_title: "Page Not Found | Indian Army Hub".to_string(),
            header_path: "components/header.html".to_string(),
            footer_path: "components/footer.html".to_string(),
            routes: vec![
                RouteEntry::new("home", "pages/home.html", "Home | Indian Army Hub"),
                RouteEntry::new("ranks", "pages/ranks.html", "Ranks & Badges | Indian Army Hub"),
                RouteEntry::new("training", "pages/training.html", "Training Programs | Indian Army Hub"),
                RouteEntry::new("fitness", "pages/fitness.html", "Fitness Guide | Indian Army Hub"),
                RouteEntry::new("gallery", "pages/gallery.html", "Gallery | Indian Army Hub"),
                RouteEntry::new("contact", "pages/contact.html", "Contact | Indian Army Hub"),
                RouteEntry::new("join", "pages/join-army.html", "Join Indian Army | Indian Army Hub"),
                RouteEntry::new("events", "pages/events.html", "Events & Camps | Indian Army Hub"),
                RouteEntry::new("login", "pages/login.html", "Login | Indian Army Hub"),
                RouteEntry::new("dashboard", "pages/dashboard.html", "Dashboard | Indian Army Hub"),
                RouteEntry::new("about", "pages/about.html", "About Indian Army | Indian Army Hub"),
                RouteEntry::new("faq", "pages/faq.html", "FAQ | Indian Army Hub"),
            ],
        }
    }
}
