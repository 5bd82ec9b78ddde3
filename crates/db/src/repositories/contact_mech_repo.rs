//! Repository for the `contact_mechs` table.

use sqlx::PgPool;

use ordersvc_core::types::DbId;

use crate::models::contact_mech::{ContactMech, CreateContactMech};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, street_address, city, state, postal_code, \
                       phone_number, email, created_at, updated_at";

/// Provides CRUD operations for contact mechanisms.
pub struct ContactMechRepo;

impl ContactMechRepo {
    /// Insert a new contact mechanism, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMech,
    ) -> Result<ContactMech, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_mechs
                 (customer_id, street_address, city, state, postal_code, phone_number, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMech>(&query)
            .bind(input.customer_id)
            .bind(&input.street_address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.postal_code)
            .bind(&input.phone_number)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a contact mechanism by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactMech>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_mechs WHERE id = $1");
        sqlx::query_as::<_, ContactMech>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete all contact mechanisms. Used by the seed binary to reset the table.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_mechs").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
