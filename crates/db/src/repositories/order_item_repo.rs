//! Repository for the `order_items` table.
//!
//! Item lookups that come from the HTTP surface always match on both the
//! item id and the owning order id, so a valid item id can never be used
//! to reach into a different order.

use sqlx::PgPool;

use ordersvc_core::types::DbId;

use crate::models::order_item::{NewOrderItem, OrderItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, order_id, product_id, quantity, status, created_at, updated_at";

/// Provides CRUD operations for order items.
pub struct OrderItemRepo;

impl OrderItemRepo {
    /// Insert a new order item, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewOrderItem) -> Result<OrderItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_items (order_id, product_id, quantity, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(input.order_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all items belonging to an order. No pagination; row order is
    /// not guaranteed to callers.
    pub async fn list_by_order(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_items WHERE order_id = $1");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item's quantity/status, matching on both the item id and
    /// the owning order id. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no item matches the (id, order_id) pair.
    pub async fn update_for_order(
        pool: &PgPool,
        id: DbId,
        order_id: DbId,
        quantity: Option<i32>,
        status: Option<&str>,
    ) -> Result<Option<OrderItem>, sqlx::Error> {
        let query = format!(
            "UPDATE order_items SET
                quantity = COALESCE($3, quantity),
                status = COALESCE($4, status),
                updated_at = NOW()
             WHERE id = $1 AND order_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(id)
            .bind(order_id)
            .bind(quantity)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, matching on both the item id and the owning order
    /// id. Returns `true` if a row was removed.
    pub async fn delete_for_order(
        pool: &PgPool,
        id: DbId,
        order_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = $1 AND order_id = $2")
            .bind(id)
            .bind(order_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all items belonging to an order. Returns the number of rows
    /// removed. Run before deleting the header itself.
    pub async fn delete_by_order(pool: &PgPool, order_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete all order items. Used by the seed binary to reset the table.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_items").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
