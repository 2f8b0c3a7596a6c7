use hub_router::{ConfigError, RouteEntry, RouteTable, RouterConfig};

#[test]
fn test_default_config_is_valid() {
    let config = RouterConfig::default();
    assert!(config.validate().is_ok());

    let table = RouteTable::from_config(&config).unwrap();
    assert_eq!(table.page_ids().count(), 12);
    assert_eq!(table.path("join"), Some("pages/join-army.html"));
    assert_eq!(table.path("bogus"), None);
    assert_eq!(table.default_page(), "home");
    assert_eq!(table.not_found_path(), "pages/404.html");
    assert_eq!(table.not_found_title(), "Page Not Found | Indian Army Hub");
}

#[test]
fn test_json_config_fills_defaults() {
    let json = r#"{
        "default_page": "start",
        "default_title": "Hub",
        "routes": [
            { "id": "start", "path": "pages/start.html", "title": "Start | Hub" },
            { "id": "notes", "path": "pages/notes.html" }
        ]
    }"#;

    let config = RouterConfig::from_json(json).unwrap();
    assert_eq!(config.content_region, "page-content");
    assert_eq!(config.not_found_path, "pages/404.html");

    let table = RouteTable::from_config(&config).unwrap();
    assert_eq!(table.title("start"), "Start | Hub");
    assert_eq!(table.title("notes"), "Hub");
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let result = RouterConfig::from_json("{ routes: ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validation_failures() {
    let mut config = RouterConfig::default();
    config.routes.clear();
    assert_eq!(config.validate(), Err(ConfigError::NoRoutes));

    let mut config = RouterConfig::default();
    config.routes.push(RouteEntry::new("home", "pages/other.html", "Other"));
    assert_eq!(config.validate(), Err(ConfigError::DuplicateRoute("home".to_string())));

    let mut config = RouterConfig::default();
    config.routes[2].path.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyPath("training".to_string())));

    let mut config = RouterConfig::default();
    config.routes[0].id.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyId(0)));

    let mut config = RouterConfig::default();
    config.default_page = "landing".to_string();
    assert_eq!(config.validate(), Err(ConfigError::UnknownDefaultPage("landing".to_string())));
    assert!(RouteTable::from_config(&config).is_err());

    let mut config = RouterConfig::default();
    config.content_region.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyContentRegion));
}
