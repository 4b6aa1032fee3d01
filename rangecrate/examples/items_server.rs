//! Minimal paginated collection served with Axum
//!
//! ```bash
//! cargo run --example items_server
//! ```
//!
//! Then try:
//! - <http://localhost:3000/items?range=0-10>
//! - <http://localhost:3000/items?range=20-10>
//! - <http://localhost:3000/items?range=0-100> (rejected, max range is 25)

use axum::{
    Extension, Json, Router,
    middleware,
    response::IntoResponse,
    routing::get,
};
use rangecrate::{CollectionContext, PaginationMeta, PaginationState, ResourcePolicy, paginate};

const ITEMS: u64 = 137;

async fn list_items(Extension(meta): Extension<PaginationMeta>) -> impl IntoResponse {
    let (start, size) = meta
        .range
        .map_or((0, 25), |range| (range.start, range.end));
    let items: Vec<String> = (start..ITEMS.min(start.saturating_add(size)))
        .map(|id| format!("item-{id}"))
        .collect();

    (Extension(CollectionContext::with_count(ITEMS)), Json(items))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let policy = ResourcePolicy::new("items", 25)
        .with_discovery_link("<http://localhost:3000/items>; rel=\"collection\"");

    let app = Router::new()
        .route("/items", get(list_items))
        .route_layer(middleware::from_fn_with_state(
            PaginationState::new(policy),
            paginate,
        ));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Listening on http://localhost:3000/items");
    axum::serve(listener, app).await?;

    Ok(())
}
