//! Order item model and item-level wire DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ordersvc_core::types::{DbId, Timestamp};

/// A row from the `order_items` table. One product line within an order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire shape of an item, used both inline in `POST /orders` and as the
/// body of `POST /orders/{id}/items`.
#[derive(Debug, Deserialize)]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: i32,
    /// Defaults to `Pending`.
    pub status: Option<String>,
}

/// Request body for `PUT /orders/{id}/items/{item_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderItemRequest {
    pub quantity: Option<i32>,
    pub status: Option<String>,
}

/// Typed insert input for the repository.
#[derive(Debug)]
pub struct NewOrderItem {
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub status: String,
}
