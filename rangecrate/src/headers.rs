use axum::{
    http::{HeaderName, HeaderValue, header::LINK},
    response::Response,
};
use hyper::HeaderMap;

use crate::errors::ApiError;

/// `Accept-Range` is not a registered header, so `http` has no constant for it
pub const ACCEPT_RANGE: HeaderName = HeaderName::from_static("accept-range");

/// Ordered list of headers to merge into a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, String)>,
}

impl HeaderSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: HeaderName, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    #[must_use]
    pub fn with(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First value stored under `name`
    #[must_use]
    pub fn get(&self, name: &HeaderName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &str)> {
        self.entries.iter().map(|(name, value)| (name, value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge `headers` into `response`.
///
/// `Link` accumulates: when the response already has one, the new value becomes
/// `"{existing}, {new}"`. Only the first existing `Link` value is read, and it replaces
/// all of them. Every other header is overwritten. Identical `Link` values are not
/// deduplicated.
///
/// # Errors
///
/// Returns [`ApiError::InvalidHeader`] if a value is not a valid header value.
pub fn merge_headers(headers: &HeaderSet, mut response: Response) -> Result<Response, ApiError> {
    merge_into(headers, response.headers_mut())?;
    Ok(response)
}

fn merge_into(headers: &HeaderSet, target: &mut HeaderMap) -> Result<(), ApiError> {
    for (name, value) in headers.iter() {
        let merged = match target.get(LINK) {
            Some(existing) if name == LINK => {
                let mut bytes = existing.as_bytes().to_vec();
                bytes.extend_from_slice(b", ");
                bytes.extend_from_slice(value.as_bytes());
                HeaderValue::from_bytes(&bytes)
            }
            _ => HeaderValue::from_str(value),
        }
        .map_err(|err| ApiError::invalid_header(name.as_str(), err))?;

        target.insert(name.clone(), merged);
    }

    Ok(())
}
