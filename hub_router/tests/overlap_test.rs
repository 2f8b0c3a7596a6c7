/// Overlapping navigations: a slow fetch completing after a newer attempt
/// must not clobber the newer page.

mod common;

use common::{harness, page_html};
use hub_router::{FetchError, NavigationOutcome, RouteState};

#[tokio::test]
async fn test_stale_completion_is_discarded() {
    let h = harness();
    let release_gallery = h.fetcher.gate("pages/gallery.html");

    let slow = h.router.navigate_to("gallery");
    let fast = async {
        let outcome = h.router.navigate_to("faq").await;
        let _ = release_gallery.send(());
        outcome
    };
    let (slow_outcome, fast_outcome) = futures::join!(slow, fast);

    assert_eq!(slow_outcome, NavigationOutcome::Superseded { page: "gallery".to_string() });
    assert!(fast_outcome.is_loaded());
    assert_eq!(h.view.content(), page_html("faq"));
    assert_eq!(h.view.title(), "FAQ | Indian Army Hub");
    assert_eq!(h.history.fragment(), "#faq");
    assert_eq!(h.history.len(), 1, "only the newest attempt pushes history");
    assert_eq!(h.inits.runs("gallery"), 0);
    assert_eq!(h.router.state(), RouteState::Loaded);
    assert_eq!(h.router.current_page().as_deref(), Some("faq"));
}

#[tokio::test]
async fn test_indicator_stays_visible_until_last_attempt_settles() {
    let h = harness();
    let release_home = h.fetcher.gate("pages/home.html");
    let release_ranks = h.fetcher.gate("pages/ranks.html");

    let first = h.router.navigate_to("home");
    let second = h.router.navigate_to("ranks");
    let driver = async {
        // Both attempts are now suspended on their fetch.
        assert!(h.loader.visible.get());
        assert_eq!(h.router.loading().in_flight(), 2);
        let _ = release_home.send(());
        futures::pending!();
        let _ = release_ranks.send(());
    };
    let (first, second, _) = futures::join!(first, second, driver);

    assert_eq!(first, NavigationOutcome::Superseded { page: "home".to_string() });
    assert!(second.is_loaded());
    assert_eq!(h.loader.shows.get(), 1);
    assert_eq!(h.loader.hides.get(), 1);
    assert!(!h.loader.visible.get());
    assert_eq!(h.view.content(), page_html("ranks"));
}

#[tokio::test]
async fn test_stale_failure_does_not_render_error_page() {
    let h = harness();
    h.fetcher.fail("pages/events.html", FetchError::Network("timeout".to_string()));
    let release_events = h.fetcher.gate("pages/events.html");

    let failing = h.router.navigate_to("events");
    let newer = async {
        let outcome = h.router.navigate_to("about").await;
        let _ = release_events.send(());
        outcome
    };
    let (failing, newer) = futures::join!(failing, newer);

    assert!(matches!(failing, NavigationOutcome::Superseded { .. }));
    assert!(newer.is_loaded());
    assert_eq!(h.view.content(), page_html("about"));
    assert_eq!(h.router.state(), RouteState::Loaded);
    assert!(!h.fetcher.calls().contains(&"pages/404.html".to_string()));
}

#[tokio::test]
async fn test_newer_attempt_wins_even_when_it_fails() {
    let h = harness();
    h.fetcher.fail("pages/join-army.html", FetchError::Http { status: 502 });
    let release_home = h.fetcher.gate("pages/home.html");

    let older = h.router.navigate_to("home");
    let newer = async {
        let outcome = h.router.navigate_to("join").await;
        let _ = release_home.send(());
        outcome
    };
    let (older, newer) = futures::join!(older, newer);

    assert!(matches!(older, NavigationOutcome::Superseded { .. }));
    assert!(matches!(newer, NavigationOutcome::Failed { state: RouteState::Error, .. }));
    assert_eq!(h.view.title(), "Page Not Found | Indian Army Hub");
    assert_eq!(h.router.state(), RouteState::Error);
}
