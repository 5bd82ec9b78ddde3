//! Order header model and order-level wire DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ordersvc_core::types::{DbId, Timestamp};

use crate::models::order_item::OrderItemInput;

/// A row from the `order_headers` table. The aggregate root of an order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderHeader {
    pub id: DbId,
    pub order_date: Timestamp,
    pub customer_id: DbId,
    pub shipping_contact_mech_id: DbId,
    pub billing_contact_mech_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /orders`.
///
/// References arrive as raw strings and are parsed by the handler so a
/// malformed id yields a 400 rather than a body-deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub order_date: Option<Timestamp>,
    pub customer_id: String,
    pub shipping_contact_mech_id: String,
    pub billing_contact_mech_id: String,
    pub order_items: Option<Vec<OrderItemInput>>,
}

/// Request body for `PUT /orders/{id}`.
///
/// Only the shipping and billing references may change; customer and
/// order date are fixed at creation.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub shipping_contact_mech_id: Option<String>,
    pub billing_contact_mech_id: Option<String>,
}

/// Typed insert input for the repository.
#[derive(Debug)]
pub struct NewOrderHeader {
    /// Defaults to NOW() when `None`.
    pub order_date: Option<Timestamp>,
    pub customer_id: DbId,
    pub shipping_contact_mech_id: DbId,
    pub billing_contact_mech_id: DbId,
}
