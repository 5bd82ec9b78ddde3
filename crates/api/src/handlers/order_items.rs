//! Handlers for the order item endpoints.
//!
//! Item mutation always matches on both the item id and the owning order
//! id taken from the path, so a valid item id can never reach an item
//! belonging to another order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ordersvc_core::order::{validate_quantity, validate_status, STATUS_PENDING};
use ordersvc_db::models::order_item::{NewOrderItem, OrderItemInput, UpdateOrderItemRequest};
use ordersvc_db::repositories::{OrderHeaderRepo, OrderItemRepo};

use crate::error::{parse_id, AppError, AppResult};
use crate::resolve;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /orders/{id}/items
///
/// Add one item to an existing order. The order must exist; the product
/// reference is checked for well-formedness only.
pub async fn add_item(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(input): Json<OrderItemInput>,
) -> AppResult<impl IntoResponse> {
    let order_id = parse_id(&order_id)?;

    OrderHeaderRepo::find_by_id(&state.pool, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No order found with id {order_id}")))?;

    let product_id = parse_id(&input.product_id)?;

    let mut errors = Vec::new();
    if let Err(e) = validate_quantity(input.quantity) {
        errors.push(e);
    }
    let status = input.status.as_deref().unwrap_or(STATUS_PENDING);
    if let Err(e) = validate_status(status) {
        errors.push(e);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let item = OrderItemRepo::create(
        &state.pool,
        &NewOrderItem {
            order_id,
            product_id,
            quantity: input.quantity,
            status: status.to_string(),
        },
    )
    .await?;

    tracing::info!(order_id = %order_id, item_id = %item.id, "Order item added");

    let detail = resolve::resolve_item(&state.pool, item).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(detail))))
}

/// PUT /orders/{id}/items/{item_id}
///
/// Update an item's quantity and/or status. Only supplied fields change.
pub async fn update_item(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(String, String)>,
    Json(input): Json<UpdateOrderItemRequest>,
) -> AppResult<impl IntoResponse> {
    let order_id = parse_id(&order_id)?;
    let item_id = parse_id(&item_id)?;

    let mut errors = Vec::new();
    if let Some(quantity) = input.quantity {
        if let Err(e) = validate_quantity(quantity) {
            errors.push(e);
        }
    }
    if let Some(ref status) = input.status {
        if let Err(e) = validate_status(status) {
            errors.push(e);
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let item = OrderItemRepo::update_for_order(
        &state.pool,
        item_id,
        order_id,
        input.quantity,
        input.status.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "No order item found with id {item_id} for order {order_id}"
        ))
    })?;

    tracing::info!(order_id = %order_id, item_id = %item_id, "Order item updated");

    let detail = resolve::resolve_item(&state.pool, item).await?;
    Ok(Json(DataResponse::new(detail)))
}

/// DELETE /orders/{id}/items/{item_id}
///
/// Delete an item, matching on both ids.
pub async fn delete_item(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let order_id = parse_id(&order_id)?;
    let item_id = parse_id(&item_id)?;

    let deleted = OrderItemRepo::delete_for_order(&state.pool, item_id, order_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "No order item found with id {item_id} for order {order_id}"
        )));
    }

    tracing::info!(order_id = %order_id, item_id = %item_id, "Order item deleted");

    Ok(Json(MessageResponse::new("Order item deleted successfully")))
}
