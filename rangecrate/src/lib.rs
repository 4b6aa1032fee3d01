//! # rangecrate
//!
//! Range-based pagination headers for Axum collection APIs.
//!
//! Given a request for `GET /items?range=10-10` on a resource allowing windows of 10
//! items, and a collection of 35 items, the response gains:
//!
//! ```text
//! Content-Range: 10-10/35
//! Accept-Range: items 10
//! Link: <http://api.test/items?range=10-10>; rel="self", <http://api.test/items?range=0-10>; rel="first",
//!       <http://api.test/items?range=20-10>; rel="next", <http://api.test/items?range=25-10>; rel="last"
//! ```
//!
//! Requests asking for more than the resource allows are answered with
//! `400 {"error":"range error","error_description":"Requested range not allowed"}`.
//!
//! Use [`RangePaginationFormatter`] directly, or mount the [`paginate`] middleware.

pub mod config;
pub mod context;
pub mod errors;
pub mod formatter;
pub mod headers;
pub mod host;
pub mod links;
pub mod middleware;
pub mod models;
pub mod policy;

pub use config::FormatterConfig;
pub use context::RequestContext;
pub use errors::ApiError;
pub use formatter::RangePaginationFormatter;
pub use headers::{ACCEPT_RANGE, HeaderSet, merge_headers};
pub use links::{LinkRewriter, LiteralRangeRewriter, PageDescriptor, PageWindow, Relation};
pub use middleware::{PaginationState, paginate};
pub use models::{CollectionContext, PaginationMeta, RangeQuery, RangeRequest, parse_range};
pub use policy::{ApiDescriptor, ResourcePolicy};
