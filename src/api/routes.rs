//! API route configuration.

use crate::api::handlers::{
    click_handler, create_link_handler, delete_link_handler, get_link_handler,
    list_links_handler, reorder_all_handler, reorder_link_handler, stats_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Link management and statistics routes.
///
/// # Endpoints
///
/// - `GET    /links`               - List links in display order
/// - `POST   /links`               - Create a link
/// - `GET    /links/stats`         - Click totals, optionally windowed by creation date
/// - `PUT    /links/order`         - Rearrange links in one transaction
/// - `GET    /links/{id}`          - Fetch one link
/// - `PUT    /links/{id}`          - Partially update a link
/// - `DELETE /links/{id}`          - Delete a link
/// - `PUT    /links/{id}/reorder`  - Set one link's order
/// - `POST   /links/{id}/click`    - Record a click (`/clicks` is an alias)
///
/// Static segments (`stats`, `order`) take precedence over `{id}`.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/stats", get(stats_handler))
        .route("/links/order", put(reorder_all_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/links/{id}/reorder", put(reorder_link_handler))
        .route("/links/{id}/click", post(click_handler))
        .route("/links/{id}/clicks", post(click_handler))
}
