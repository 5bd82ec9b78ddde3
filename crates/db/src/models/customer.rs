//! Customer model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ordersvc_core::types::{DbId, Timestamp};

/// A row from the `customers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a customer (seed/import path, no HTTP endpoint).
#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
}
