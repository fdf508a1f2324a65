//! Error types for Wayfinder.
//!
//! A single [`NavigationError`] covers both paths:
//!
//! - returned from `navigate`: lookup misses, redirect failures, cycle guards;
//! - reported through the side channel only: asynchronous processing and
//!   presentation failures, which happen after `navigate` has returned.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving a route.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Nothing is registered for the route.
    #[error("no registration for route: {0}")]
    NoRegistrationForRoute(String),

    /// A `RedirectWith` function refused; its error is passed through as-is.
    #[error(transparent)]
    Redirect(BoxError),

    /// A redirect chain came back to a route it already visited.
    #[error("redirect cycle detected at route {route} (chain: {})", chain.join(" -> "))]
    RedirectCycleDetected {
        /// The route that was visited twice.
        route: String,
        /// Routes resolved before the repeat, in order.
        chain: Vec<String>,
    },

    /// A redirect chain grew past the configured depth.
    #[error("redirect chain exceeded {0} hops")]
    RedirectDepthExceeded(usize),

    /// A `ProcessThenRedirect` future failed.
    #[error("asynchronous processing failed: {0}")]
    Process(#[source] BoxError),

    /// A `ProcessThenRedirect` future was cancelled before it finished.
    #[error("asynchronous processing was cancelled")]
    Cancelled,

    /// A template could not be instantiated.
    #[error("template {group}/{item} could not be instantiated: {source}")]
    Template {
        /// Template group name.
        group: String,
        /// Item name within the group.
        item: String,
        /// Loader error.
        #[source]
        source: BoxError,
    },

    /// No deep-link pattern matches the link.
    #[error("no deep link matches {0}")]
    NoDeepLinkMatch(String),
}

impl NavigationError {
    /// Whether this error can only be observed through the side channel,
    /// never as a `navigate` return value.
    pub fn is_detached(&self) -> bool {
        matches!(
            self,
            NavigationError::Process(_) | NavigationError::Cancelled | NavigationError::Template { .. }
        )
    }
}
