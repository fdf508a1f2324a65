//! Deep-link ingestion.
//!
//! Maps URL path patterns to routes using `matchit` syntax, e.g.
//! `/users/{id}` or `/files/{*path}`.

use matchit::{InsertError, Router as PathRouter};
use percent_encoding::percent_decode_str;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use url::Url;
use wayfinder_core::Route;

/// Errors building a deep-link table.
#[derive(Debug, Error)]
pub enum DeepLinkError {
    /// The pattern is malformed or conflicts with one already inserted.
    #[error("invalid deep link pattern {pattern}: {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Matcher error.
        #[source]
        source: InsertError,
    },
}

/// Table of deep-link patterns.
///
/// For `http`/`https` links the URL path is matched. For custom schemes the
/// host is treated as the first path segment, so `myapp://users/42` matches
/// `/users/{id}`.
pub struct DeepLinks<R> {
    router: PathRouter<R>,
    len: usize,
}

impl<R: Route> DeepLinks<R> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            router: PathRouter::new(),
            len: 0,
        }
    }

    /// Map `pattern` to `route`.
    pub fn insert(&mut self, pattern: impl Into<String>, route: R) -> Result<(), DeepLinkError> {
        let pattern = pattern.into();
        self.router
            .insert(pattern.clone(), route)
            .map_err(|source| DeepLinkError::InvalidPattern { pattern, source })?;
        self.len += 1;
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, pattern: impl Into<String>, route: R) -> Result<Self, DeepLinkError> {
        self.insert(pattern, route)?;
        Ok(self)
    }

    /// The route `link` points at, with its path captures.
    ///
    /// Captures are percent-decoded, like query values. A link whose
    /// captures do not decode to UTF-8 does not match.
    pub fn resolve(&self, link: &Url) -> Option<(R, Vec<(String, String)>)> {
        let path = link_path(link);
        let matched = self.router.at(&path).ok()?;
        let captures = matched
            .params
            .iter()
            .map(|(key, value)| {
                let decoded = percent_decode_str(value).decode_utf8().ok()?;
                Some((key.to_owned(), decoded.into_owned()))
            })
            .collect::<Option<Vec<_>>>();
        if captures.is_none() {
            debug!(%link, "deep link capture is not valid UTF-8");
        }
        Some((matched.value.clone(), captures?))
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<R: Route> Default for DeepLinks<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for DeepLinks<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepLinks").field("len", &self.len).finish()
    }
}

fn link_path(link: &Url) -> String {
    match (link.scheme(), link.host_str()) {
        ("http" | "https", _) | (_, None) => link.path().to_owned(),
        (_, Some(host)) => format!("/{host}{}", link.path()),
    }
}
