use thiserror::Error;

/// Failure reported by a [`ContentFetcher`](crate::ContentFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP status {status}")]
    Http { status: u16 },
}

/// Navigation failures. None of these escape the router; they are logged and
/// reported inside [`NavigationOutcome`](crate::NavigationOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("page \"{0}\" is not in the route table")]
    RouteNotFound(String),
    #[error("failed to load {path}: {source}")]
    FetchFailure { path: String, source: FetchError },
    /// The error page itself could not be loaded; the inline panel was shown.
    #[error("error page {path} unavailable: {source}")]
    RenderFailure { path: String, source: FetchError },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("could not parse router config: {0}")]
    Parse(String),
    #[error("route table is empty")]
    NoRoutes,
    #[error("route #{0} has an empty id")]
    EmptyId(usize),
    #[error("route \"{0}\" has an empty path")]
    EmptyPath(String),
    #[error("duplicate route id \"{0}\"")]
    DuplicateRoute(String),
    #[error("default page \"{0}\" is not in the route table")]
    UnknownDefaultPage(String),
    #[error("content region id cannot be empty")]
    EmptyContentRegion,
    #[error("not-found path cannot be empty")]
    EmptyNotFoundPath,
}
