use axum::{
    extract::OriginalUri,
    http::{Extensions, HeaderMap, Request, Uri, header::HOST, request::Parts},
};

use crate::models::PaginationMeta;

/// The parts of an incoming request the formatter reads.
///
/// Captured before the request is handed to the handler, so the formatter can run
/// after the request body has been consumed. Inside nested routers the URI is taken
/// from [`OriginalUri`], so links keep the full path.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub uri: Uri,
    /// Raw `Host` header, used when `uri` is in origin form
    pub host: Option<String>,
    /// `None` when the request did not go through the range parser
    pub meta: Option<PaginationMeta>,
}

impl RequestContext {
    #[must_use]
    pub fn new(uri: Uri) -> Self {
        Self {
            uri,
            host: None,
            meta: None,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub const fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        Self::capture(&parts.uri, &parts.headers, &parts.extensions)
    }

    #[must_use]
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::capture(request.uri(), request.headers(), request.extensions())
    }

    fn capture(uri: &Uri, headers: &HeaderMap, extensions: &Extensions) -> Self {
        let uri = extensions
            .get::<OriginalUri>()
            .map_or(uri, |OriginalUri(original)| original);

        Self {
            uri: uri.clone(),
            host: headers
                .get(HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
            meta: extensions.get::<PaginationMeta>().copied(),
        }
    }
}
