use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ApiError, MALFORMED_RANGE};

/// A client-requested pagination window.
///
/// Carried on the request as [`PaginationMeta`]. `end` is the second element of the
/// `[start, end]` pair and is the value compared against the resource's maximum range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct RangeRequest {
    pub start: u64,
    pub end: u64,
}

impl RangeRequest {
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

impl From<[u64; 2]> for RangeRequest {
    fn from([start, end]: [u64; 2]) -> Self {
        Self { start, end }
    }
}

impl From<RangeRequest> for [u64; 2] {
    fn from(range: RangeRequest) -> Self {
        [range.start, range.end]
    }
}

impl fmt::Display for RangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Pagination metadata attached to a request by the range parser.
///
/// Its presence in the request extensions marks the request as targeting a
/// paginated collection. `range` is `None` when the client did not ask for a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub range: Option<RangeRequest>,
}

impl PaginationMeta {
    #[must_use]
    pub const fn with_range(range: RangeRequest) -> Self {
        Self { range: Some(range) }
    }
}

/// Facts about the collection being returned, supplied by the handler.
///
/// Handlers return it as a response part:
///
/// ```rust,ignore
/// async fn list() -> impl IntoResponse {
///     (Extension(CollectionContext::with_count(35)), Json(items))
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionContext {
    /// Total number of items in the collection, when known
    #[serde(default)]
    pub count: Option<u64>,
}

impl CollectionContext {
    #[must_use]
    pub const fn with_count(count: u64) -> Self {
        Self { count: Some(count) }
    }
}

/// Query parameters recognised on paginated collection endpoints.
///
/// # Pagination
/// The `range` parameter holds the requested window as `start-end`, for example:
/// ```text
/// GET /items?range=0-10
/// ```
/// The JSON array form `[0,10]` is accepted as well, but only the `start-end` form is
/// rewritten in the generated `Link` header.
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Requested window in the format "start-end".
    ///
    /// Example: `0-10`
    #[param(example = "0-10")]
    pub range: Option<String>,
}

impl RangeQuery {
    /// Turn the raw query into request metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] when `range` is present but malformed.
    pub fn into_meta(self) -> Result<PaginationMeta, ApiError> {
        let range = self.range.as_deref().map(parse_range).transpose()?;
        Ok(PaginationMeta { range })
    }
}

/// Parse a range parameter.
///
/// Accepts `"start-end"` and the JSON array form `"[start,end]"`.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] for anything else.
pub fn parse_range(raw: &str) -> Result<RangeRequest, ApiError> {
    let raw = raw.trim();

    if raw.starts_with('[') {
        return serde_json::from_str::<[u64; 2]>(raw)
            .map(RangeRequest::from)
            .map_err(|_| ApiError::bad_request(MALFORMED_RANGE));
    }

    raw.split_once('-')
        .and_then(|(start, end)| Some(RangeRequest::new(start.parse().ok()?, end.parse().ok()?)))
        .ok_or_else(|| ApiError::bad_request(MALFORMED_RANGE))
}
