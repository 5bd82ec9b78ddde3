//! Route definitions for the order API.
//!
//! Mounted at `/orders` by [`crate::router::build_app_router`].

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{order_items, orders};
use crate::state::AppState;

/// Order routes.
///
/// ```text
/// POST   /                       -> create_order
/// GET    /{id}                   -> get_order
/// PUT    /{id}                   -> update_order
/// DELETE /{id}                   -> delete_order
/// POST   /{id}/items             -> add_item
/// PUT    /{id}/items/{item_id}   -> update_item
/// DELETE /{id}/items/{item_id}   -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create_order))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/{id}/items", post(order_items::add_item))
        .route(
            "/{id}/items/{item_id}",
            put(order_items::update_item).delete(order_items::delete_item),
        )
}
