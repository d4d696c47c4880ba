//! Upstream endpoint addressing.
//!
//! An [`Endpoint`] is a list of path segments appended to the configured
//! base URL plus an optional, already encoded query string. Segments are
//! percent-encoded when resolved, so user-supplied values such as radio
//! types can be placed in the path safely.

use reqwest::Url;
use serde::Serialize;
use std::fmt;

use super::error::{ApiError, ApiResult};

/// A path (relative to the API base URL) and optional query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Option<String>,
}

impl Endpoint {
    /// The collection root, i.e. the base URL itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// An endpoint made of the given path segments.
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
            query: None,
        }
    }

    /// Attach a query string serialized from `query`.
    ///
    /// Field names are taken verbatim from the `Serialize` impl, so the
    /// upstream parameter spelling lives on the query struct's serde attributes.
    pub fn with_query<Q>(mut self, query: &Q) -> ApiResult<Self>
    where
        Q: Serialize + ?Sized,
    {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| ApiError::invalid_request(format!("failed to encode query: {}", e)))?;
        self.query = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
        Ok(self)
    }

    /// Resolve this endpoint against the API base URL.
    pub fn resolve(&self, base: &Url) -> ApiResult<Url> {
        let mut url = base.clone();

        if !self.segments.is_empty() {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::setup(format!("base URL cannot carry a path: {}", base)))?;
            path.pop_if_empty().extend(&self.segments);
        }

        url.set_query(self.query.as_deref());
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}
