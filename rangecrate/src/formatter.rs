//! # Range Pagination Formatter
//!
//! Decorates the response of a paginated collection endpoint:
//!
//! ```text
//! GET /items?range=10-10          (max range 10, 35 items)
//!
//! Content-Range: 10-10/35
//! Accept-Range: items 10
//! Link: <discovery>, <http://api.test/items?range=10-10>; rel="self", <...range=0-10>; rel="first", ...
//! ```
//!
//! A request whose `end` exceeds the resource's maximum gets a fresh `400` instead.

use axum::{
    http::header::{CONTENT_RANGE, LINK},
    response::{IntoResponse, Response},
};

use crate::{
    config::FormatterConfig,
    context::RequestContext,
    errors::ApiError,
    headers::{ACCEPT_RANGE, HeaderSet, merge_headers},
    host::build_host_url,
    links::{LinkRewriter, LiteralRangeRewriter, PageDescriptor, build_link_value},
    models::{CollectionContext, RangeRequest},
    policy::ApiDescriptor,
};

/// Adds `Content-Range`, `Accept-Range` and `Link` headers to collection responses.
///
/// Stateless between calls; share one instance across requests.
#[derive(Debug, Clone)]
pub struct RangePaginationFormatter<R = LiteralRangeRewriter> {
    config: FormatterConfig,
    rewriter: R,
}

impl RangePaginationFormatter {
    #[must_use]
    pub const fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            rewriter: LiteralRangeRewriter,
        }
    }
}

impl Default for RangePaginationFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl<R: LinkRewriter> RangePaginationFormatter<R> {
    /// Swap the strategy used to point `Link` entries at sibling windows
    #[must_use]
    pub fn with_rewriter<T: LinkRewriter>(self, rewriter: T) -> RangePaginationFormatter<T> {
        RangePaginationFormatter {
            config: self.config,
            rewriter,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    #[must_use]
    pub const fn rewriter(&self) -> &R {
        &self.rewriter
    }

    /// Decorate `response` for `request`.
    ///
    /// - no pagination metadata on the request: `response` is returned untouched
    /// - otherwise the discovery link from `policy` is merged in, then
    /// - `end > max_range`: `response` is dropped and replaced by the range error `400`
    /// - `end <= max_range`: range headers are merged in
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] when a computed value (resource name,
    /// discovery link, URL) cannot be used as a header value.
    pub fn format<P: ApiDescriptor + ?Sized>(
        &self,
        response: Response,
        request: &RequestContext,
        policy: &P,
        collection: CollectionContext,
    ) -> Result<Response, ApiError> {
        let Some(meta) = request.meta else {
            return Ok(response);
        };

        let discovery = HeaderSet::new().with(LINK, policy.discovery_link(request));
        let mut response = merge_headers(&discovery, response)?;

        if let Some(range) = meta.range {
            if range.end > policy.max_range() {
                return Ok(ApiError::range_exceeded(range.end, policy.max_range()).into_response());
            }

            let headers = self.build_range_headers(range, request, policy, collection.count);
            response = merge_headers(&headers, response)?;
        }

        Ok(response)
    }

    /// Compute `Content-Range`, `Accept-Range` and, when `count` is known, `Link`.
    #[must_use]
    pub fn build_range_headers<P: ApiDescriptor + ?Sized>(
        &self,
        range: RangeRequest,
        request: &RequestContext,
        policy: &P,
        count: Option<u64>,
    ) -> HeaderSet {
        let content_range = match count {
            Some(count) => format!("{range}/{count}"),
            None => range.to_string(),
        };

        let mut headers = HeaderSet::new()
            .with(CONTENT_RANGE, content_range)
            .with(
                ACCEPT_RANGE,
                format!("{} {}", policy.resource_name(), policy.max_range()),
            );

        if let Some(count) = count {
            let host_url = build_host_url(request, &self.config);
            let pages = PageDescriptor::compute(range, policy.max_range(), count);
            let link = build_link_value(&self.rewriter, &host_url, range, &pages);
            tracing::trace!(%range, count, link = %link, "Built pagination links");
            headers.push(LINK, link);
        }

        headers
    }
}
