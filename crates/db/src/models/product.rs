//! Product catalog model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ordersvc_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub product_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a product (seed/import path).
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub product_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
}
