//! Handlers for the order endpoints (header-level CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use futures::future::try_join_all;

use ordersvc_core::order::{validate_quantity, validate_status, STATUS_PENDING};
use ordersvc_core::types::DbId;
use ordersvc_db::models::order_header::{CreateOrderRequest, NewOrderHeader, UpdateOrderRequest};
use ordersvc_db::models::order_item::{NewOrderItem, OrderItemInput};
use ordersvc_db::repositories::{OrderHeaderRepo, OrderItemRepo};

use crate::error::{parse_id, AppError, AppResult};
use crate::resolve;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /orders
///
/// Create an order header, then insert the supplied items concurrently.
/// The three top-level references must be well-formed ids (existence is
/// not checked). Item failures abort the request with a server error but
/// do NOT roll back the already-persisted header; callers observing a 500
/// here may find the header without its items.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let (Ok(customer_id), Ok(shipping_id), Ok(billing_id)) = (
        input.customer_id.parse::<DbId>(),
        input.shipping_contact_mech_id.parse::<DbId>(),
        input.billing_contact_mech_id.parse::<DbId>(),
    ) else {
        return Err(AppError::BadRequest(
            "One or more provided IDs are invalid".into(),
        ));
    };

    let header = OrderHeaderRepo::create(
        &state.pool,
        &NewOrderHeader {
            order_date: input.order_date,
            customer_id,
            shipping_contact_mech_id: shipping_id,
            billing_contact_mech_id: billing_id,
        },
    )
    .await?;

    if let Some(items) = &input.order_items {
        if !items.is_empty() {
            let new_items = prepare_items(header.id, items).map_err(AppError::Internal)?;
            try_join_all(
                new_items
                    .iter()
                    .map(|item| OrderItemRepo::create(&state.pool, item)),
            )
            .await?;
        }
    }

    tracing::info!(order_id = %header.id, customer_id = %customer_id, "Order created");

    let detail = resolve::resolve_order(&state.pool, header).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(detail))))
}

/// GET /orders/{id}
///
/// Return the order with customer/shipping/billing resolved, plus all of
/// its items with their products resolved.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let header = OrderHeaderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No order found with id {id}")))?;

    let detail = resolve::resolve_order(&state.pool, header).await?;
    Ok(Json(DataResponse::new(detail)))
}

/// PUT /orders/{id}
///
/// Update the shipping and/or billing references. Only supplied fields
/// change; customer and order date are immutable.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let shipping_id = input
        .shipping_contact_mech_id
        .as_deref()
        .map(parse_id)
        .transpose()?;
    let billing_id = input
        .billing_contact_mech_id
        .as_deref()
        .map(parse_id)
        .transpose()?;

    let header = OrderHeaderRepo::update(&state.pool, id, shipping_id, billing_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No order found with id {id}")))?;

    tracing::info!(order_id = %id, "Order updated");

    let detail = resolve::resolve_order(&state.pool, header).await?;
    Ok(Json(DataResponse::new(detail)))
}

/// DELETE /orders/{id}
///
/// Delete the order's items first, then the header. The ordering means a
/// failure between the two steps leaves the order intact rather than
/// orphaning items; there is no atomicity across the two deletes.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    OrderHeaderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No order found with id {id}")))?;

    let items_deleted = OrderItemRepo::delete_by_order(&state.pool, id).await?;
    OrderHeaderRepo::delete(&state.pool, id).await?;

    tracing::info!(order_id = %id, items_deleted, "Order deleted");

    Ok(Json(MessageResponse::new("Order deleted successfully")))
}

/// Parse and validate the inline item list of an order-creation request.
///
/// Any failure here surfaces as a server error: by the time the items are
/// processed the header is already persisted, and the contract is to fail
/// the whole operation without compensation.
fn prepare_items(order_id: DbId, items: &[OrderItemInput]) -> Result<Vec<NewOrderItem>, String> {
    items
        .iter()
        .map(|item| {
            let product_id = item
                .product_id
                .parse::<DbId>()
                .map_err(|_| "Invalid product_id provided".to_string())?;

            validate_quantity(item.quantity)?;

            let status = item.status.as_deref().unwrap_or(STATUS_PENDING);
            validate_status(status)?;

            Ok(NewOrderItem {
                order_id,
                product_id,
                quantity: item.quantity,
                status: status.to_string(),
            })
        })
        .collect()
}
