//! Contact mechanism model.
//!
//! A postal/phone/email record owned by one customer. The same record may
//! serve as both the shipping and billing reference of an order.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ordersvc_core::types::{DbId, Timestamp};

/// A row from the `contact_mechs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactMech {
    pub id: DbId,
    pub customer_id: DbId,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a contact mechanism (seed/import path).
#[derive(Debug, Deserialize)]
pub struct CreateContactMech {
    pub customer_id: DbId,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}
