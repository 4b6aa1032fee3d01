use axum::http::uri::Authority;

use crate::{config::FormatterConfig, context::RequestContext};

/// Port implied by a scheme, if it has a well-known one
fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        _ => None,
    }
}

/// Build the URL of the current request: `scheme://host[:port]path[?query]`.
///
/// Scheme and authority come from the request URI when it is absolute, otherwise
/// from `config.default_scheme` and the `Host` header. A port is only written when
/// it is explicit and differs from the scheme's default. Path and query are copied
/// verbatim.
#[must_use]
pub fn build_host_url(request: &RequestContext, config: &FormatterConfig) -> String {
    let uri = &request.uri;
    let scheme = uri.scheme_str().unwrap_or(&config.default_scheme);

    let host_authority = request
        .host
        .as_deref()
        .and_then(|host| host.parse::<Authority>().ok());
    let authority = uri.authority().or(host_authority.as_ref());

    let mut url = format!("{scheme}://");
    if let Some(authority) = authority {
        url.push_str(authority.host());
        if let Some(port) = authority
            .port_u16()
            .filter(|port| default_port(scheme) != Some(*port))
        {
            url.push(':');
            url.push_str(&port.to_string());
        }
    }

    url.push_str(uri.path());
    if let Some(query) = uri.query().filter(|query| !query.is_empty()) {
        url.push('?');
        url.push_str(query);
    }

    url
}
