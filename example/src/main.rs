//! Headless preview of the site: renders pages from a local checkout of
//! the static files and reports what the browser would show.
//!
//! ```text
//! hub_preview --site-dir ./site home gallery bogus
//! ```

mod headless;

use std::path::{Path, PathBuf};

use clap::Parser;
use headless::{FsFetcher, LogHistory, LogLoader, RecordingView};
use hub_router::{
    ConfigError, InitializerRegistry, NavigationOutcome, NavigationRequest, RouteTable, RouterConfig, Teardown,
    ViewRouter,
};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum PreviewError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid site config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "hub_preview")]
#[command(about = "Render site pages headlessly and report what the browser would show")]
struct Options {
    /// Directory holding site.json, pages/ and components/
    #[arg(long, env = "HUB_SITE_DIR", default_value = ".")]
    site_dir: PathBuf,

    /// Page ids to visit after the initial load
    pages: Vec<String>,
}

async fn load_config(site_dir: &Path) -> Result<RouterConfig, PreviewError> {
    let path = site_dir.join("site.json");
    match tokio::fs::read_to_string(&path).await {
        Ok(json) => Ok(RouterConfig::from_json(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no site.json, using built-in routes");
            Ok(RouterConfig::default())
        }
        Err(source) => Err(PreviewError::Io { path, source }),
    }
}

fn registry() -> InitializerRegistry {
    let mut registry = InitializerRegistry::new();
    registry.register_common("summary", |page: &str| {
        info!(page, "page initialized");
        let page = page.to_string();
        Some(Box::new(move || info!(page = %page, "page torn down")) as Teardown)
    });
    registry
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PreviewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = Options::parse();
    let config = load_config(&options.site_dir).await?;
    let routes = RouteTable::from_config(&config)?;

    let view = RecordingView::default();
    let router = ViewRouter::new(
        routes,
        FsFetcher::new(&options.site_dir),
        view.clone(),
        LogHistory::default(),
        LogLoader,
        registry(),
    );

    let mut outcomes = Vec::new();
    if let Some(outcome) = router.dispatch(NavigationRequest::Start(String::new())).await {
        outcomes.push(outcome);
    }
    for page in &options.pages {
        outcomes.push(router.navigate_to(page).await);
    }

    for outcome in &outcomes {
        match outcome {
            NavigationOutcome::Loaded { page } => info!(page = %page, "loaded"),
            NavigationOutcome::Superseded { page } => warn!(page = %page, "superseded"),
            NavigationOutcome::Failed { page, state, errors } => {
                for e in errors {
                    error!(page = %page, state = ?state, "{}", e);
                }
            }
        }
    }

    println!(
        "{}",
        serde_json::json!({
            "title": view.title(),
            "current_page": router.current_page(),
            "state": format!("{:?}", router.state()),
            "content_bytes": view.content().len(),
            "history": router.history().entries(),
        })
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_parse_site_dir_and_pages() {
        let options = Options::try_parse_from(["hub_preview", "--site-dir", "/srv/hub", "home", "faq"]).unwrap();
        assert_eq!(options.site_dir, PathBuf::from("/srv/hub"));
        assert_eq!(options.pages, vec!["home", "faq"]);
    }

    #[test]
    fn test_options_reject_missing_dir() {
        assert!(Options::try_parse_from(["hub_preview", "--site-dir"]).is_err());
    }
}
