//! # Axum Integration
//!
//! [`paginate`] parses the `range` query parameter, lets the handler run, then hands
//! the response to [`RangePaginationFormatter`]. Mount it on collection routes only:
//!
//! ```rust,ignore
//! use axum::{Extension, Json, Router, middleware, routing::get};
//! use rangecrate::{CollectionContext, PaginationState, ResourcePolicy, paginate};
//!
//! async fn list_items() -> impl IntoResponse {
//!     let items = vec!["a", "b"];
//!     (Extension(CollectionContext::with_count(35)), Json(items))
//! }
//!
//! let state = PaginationState::new(ResourcePolicy::new("items", 50));
//! let app = Router::new()
//!     .route("/items", get(list_items))
//!     .route_layer(middleware::from_fn_with_state(state, paginate));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    config::FormatterConfig,
    context::RequestContext,
    errors::{ApiError, MALFORMED_RANGE},
    formatter::RangePaginationFormatter,
    links::{LinkRewriter, LiteralRangeRewriter},
    models::{CollectionContext, PaginationMeta, RangeQuery},
    policy::ApiDescriptor,
};

type SharedRewriter = Arc<dyn LinkRewriter>;

/// Shared state for [`paginate`]: the resource policy and the formatter
#[derive(Clone)]
pub struct PaginationState {
    policy: Arc<dyn ApiDescriptor>,
    formatter: Arc<RangePaginationFormatter<SharedRewriter>>,
}

impl PaginationState {
    pub fn new(policy: impl ApiDescriptor + 'static) -> Self {
        let rewriter: SharedRewriter = Arc::new(LiteralRangeRewriter);
        Self {
            policy: Arc::new(policy),
            formatter: Arc::new(RangePaginationFormatter::default().with_rewriter(rewriter)),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        let rewriter = Arc::clone(self.formatter.rewriter());
        self.formatter = Arc::new(RangePaginationFormatter::new(config).with_rewriter(rewriter));
        self
    }

    /// Point sibling `Link` entries at other windows with `rewriter`
    #[must_use]
    pub fn with_rewriter(mut self, rewriter: impl LinkRewriter + 'static) -> Self {
        let rewriter: SharedRewriter = Arc::new(rewriter);
        let config = self.formatter.config().clone();
        self.formatter = Arc::new(RangePaginationFormatter::new(config).with_rewriter(rewriter));
        self
    }

    #[must_use]
    pub fn policy(&self) -> &dyn ApiDescriptor {
        self.policy.as_ref()
    }
}

/// Read pagination metadata from the request, falling back to the `range` query parameter
fn pagination_meta(request: &Request) -> Result<PaginationMeta, ApiError> {
    if let Some(meta) = request.extensions().get::<PaginationMeta>() {
        return Ok(*meta);
    }

    let Query(query) = Query::<RangeQuery>::try_from_uri(request.uri()).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected pagination query string");
        ApiError::bad_request(MALFORMED_RANGE)
    })?;
    query.into_meta()
}

/// Middleware decorating collection responses with range pagination headers.
///
/// The handler reports the collection size by returning
/// `Extension(CollectionContext::with_count(n))`; without it `Link` relations are
/// left out.
pub async fn paginate(
    State(state): State<PaginationState>,
    mut request: Request,
    next: Next,
) -> Response {
    let meta = match pagination_meta(&request) {
        Ok(meta) => meta,
        Err(err) => return err.into_response(),
    };
    request.extensions_mut().insert(meta);

    let context = RequestContext::from_request(&request);
    let response = next.run(request).await;

    let collection = response
        .extensions()
        .get::<CollectionContext>()
        .copied()
        .unwrap_or_default();

    state
        .formatter
        .format(response, &context, state.policy(), collection)
        .unwrap_or_else(IntoResponse::into_response)
}
