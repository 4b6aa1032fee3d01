use axum::{
    Extension, Json, Router,
    http::{HeaderValue, header::LINK},
    middleware,
    response::IntoResponse,
    routing::get,
};
use rangecrate::{CollectionContext, PaginationMeta, PaginationState, ResourcePolicy, paginate};

pub const TOTAL_ITEMS: u64 = 35;
pub const MAX_RANGE: u64 = 10;
pub const DISCOVERY: &str = "<http://api.test/items/schema>; rel=\"describedby\"";
pub const HANDLER_LINK: &str = "<http://api.test/docs>; rel=\"help\"";

/// Route crate logs through the test harness; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .compact()
        .try_init();
}

pub fn items_policy() -> ResourcePolicy {
    ResourcePolicy::new("items", MAX_RANGE).with_discovery_link(DISCOVERY)
}

fn window(meta: PaginationMeta) -> Vec<u64> {
    let (start, end) = meta
        .range
        .map_or((0, MAX_RANGE), |range| (range.start, range.end));
    (start..TOTAL_ITEMS).take(usize::try_from(end).unwrap_or(usize::MAX)).collect()
}

async fn list_items(Extension(meta): Extension<PaginationMeta>) -> impl IntoResponse {
    (
        Extension(CollectionContext::with_count(TOTAL_ITEMS)),
        Json(window(meta)),
    )
}

async fn list_uncounted(Extension(meta): Extension<PaginationMeta>) -> impl IntoResponse {
    Json(window(meta))
}

async fn list_with_link(Extension(meta): Extension<PaginationMeta>) -> impl IntoResponse {
    (
        [(LINK, HeaderValue::from_static(HANDLER_LINK))],
        Extension(CollectionContext::with_count(TOTAL_ITEMS)),
        Json(window(meta)),
    )
}

async fn plain() -> &'static str {
    "plain"
}

pub fn setup_test_app() -> Router {
    let state = PaginationState::new(items_policy());

    let collections = Router::new()
        .route("/items", get(list_items))
        .route("/uncounted", get(list_uncounted))
        .route("/linked", get(list_with_link))
        .route_layer(middleware::from_fn_with_state(state, paginate));

    let api = Router::new().route("/plain", get(plain)).merge(collections);

    Router::new().nest("/api/v1", api)
}

/// Split a `Link` value into `(url, rel)` pairs
pub fn parse_links(value: &str) -> Vec<(String, String)> {
    value
        .split(", <")
        .filter_map(|entry| {
            let entry = entry.trim_start_matches('<');
            let (url, params) = entry.split_once(">; ")?;
            let rel = params.strip_prefix("rel=\"")?.strip_suffix('"')?;
            Some((url.to_string(), rel.to_string()))
        })
        .collect()
}
