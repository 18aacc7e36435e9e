use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap},
    response::Response,
};
use tracing::instrument;
use url::Url;

use crate::{app_state::AppState, error::ProxyError};

/// Path prefix stripped before forwarding.
pub const API_PREFIX: &str = "/api";

/// Largest request body buffered for forwarding.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Upstream URL for a request path under `/api`, keeping the query string.
///
/// `/api` maps to the upstream root; `/api/x/y` maps to `<upstream>/x/y`.
pub fn upstream_url(upstream: &Url, path: &str, query: Option<&str>) -> Result<Url, url::ParseError> {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let rest = if rest.is_empty() { "/" } else { rest };

    let mut url = Url::parse(&format!(
        "{}{}",
        upstream.as_str().trim_end_matches('/'),
        rest
    ))?;
    url.set_query(query);
    Ok(url)
}

/// Copies headers that describe the message itself; connection-level headers, `Host` and
/// `Content-Length` are left for the client library to set.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(&name.as_str())
            || *name == header::HOST
            || *name == header::CONTENT_LENGTH
        {
            continue;
        }
        forwarded.append(name.clone(), value.clone());
    }
    forwarded
}

#[instrument(skip(state, request), fields(method = %request.method(), path = %request.uri().path()))]
pub async fn forward(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.upstream, parts.uri.path(), parts.uri.query())?;
    let body = to_bytes(body, MAX_BODY_BYTES).await?;

    let upstream_response = state
        .client
        .request(parts.method, url.clone())
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream_response.status();
    tracing::debug!(%url, %status, "upstream responded");

    let headers = forwardable_headers(upstream_response.headers());
    let body = upstream_response.bytes().await?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
