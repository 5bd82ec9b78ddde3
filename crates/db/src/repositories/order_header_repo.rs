//! Repository for the `order_headers` table.

use sqlx::PgPool;

use ordersvc_core::types::DbId;

use crate::models::order_header::{NewOrderHeader, OrderHeader};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, order_date, customer_id, shipping_contact_mech_id, \
                       billing_contact_mech_id, created_at, updated_at";

/// Provides CRUD operations for order headers.
pub struct OrderHeaderRepo;

impl OrderHeaderRepo {
    /// Insert a new order header, returning the created row.
    ///
    /// If `order_date` is `None` in the input, defaults to NOW().
    pub async fn create(pool: &PgPool, input: &NewOrderHeader) -> Result<OrderHeader, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_headers
                 (order_date, customer_id, shipping_contact_mech_id, billing_contact_mech_id)
             VALUES (COALESCE($1, NOW()), $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderHeader>(&query)
            .bind(input.order_date)
            .bind(input.customer_id)
            .bind(input.shipping_contact_mech_id)
            .bind(input.billing_contact_mech_id)
            .fetch_one(pool)
            .await
    }

    /// Find an order header by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OrderHeader>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_headers WHERE id = $1");
        sqlx::query_as::<_, OrderHeader>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an order's shipping/billing references. Only non-`None`
    /// fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        shipping_contact_mech_id: Option<DbId>,
        billing_contact_mech_id: Option<DbId>,
    ) -> Result<Option<OrderHeader>, sqlx::Error> {
        let query = format!(
            "UPDATE order_headers SET
                shipping_contact_mech_id = COALESCE($2, shipping_contact_mech_id),
                billing_contact_mech_id = COALESCE($3, billing_contact_mech_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderHeader>(&query)
            .bind(id)
            .bind(shipping_contact_mech_id)
            .bind(billing_contact_mech_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order header by ID. Returns `true` if a row was removed.
    ///
    /// Items referencing the header are NOT touched here; the handler
    /// deletes them first via [`crate::repositories::OrderItemRepo`].
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_headers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all order headers. Used by the seed binary to reset the table.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_headers").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
