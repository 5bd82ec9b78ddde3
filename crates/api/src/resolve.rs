//! Reference resolution (population) for response payloads.
//!
//! Rows store references as plain ids; responses return the referenced
//! records in full. Resolution is an explicit lookup-and-merge at the
//! service boundary: the header's three references are fetched
//! concurrently, and item product lookups are batched into one query.
//! A reference whose target row no longer exists resolves to `null`.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;

use ordersvc_core::types::{DbId, Timestamp};
use ordersvc_db::models::contact_mech::ContactMech;
use ordersvc_db::models::customer::Customer;
use ordersvc_db::models::order_header::OrderHeader;
use ordersvc_db::models::order_item::OrderItem;
use ordersvc_db::models::product::Product;
use ordersvc_db::repositories::{ContactMechRepo, CustomerRepo, OrderItemRepo, ProductRepo};

use crate::error::AppResult;

/// An order header with its references resolved and its items attached.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub id: DbId,
    pub order_date: Timestamp,
    pub customer: Option<Customer>,
    pub shipping_contact_mech: Option<ContactMech>,
    pub billing_contact_mech: Option<ContactMech>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub order_items: Vec<OrderItemDetail>,
}

/// An order item with its product reference resolved.
#[derive(Debug, Serialize)]
pub struct OrderItemDetail {
    pub id: DbId,
    pub order_id: DbId,
    pub product: Option<Product>,
    pub quantity: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Resolve a header's customer/shipping/billing references and all of its
/// items (with their products) into an [`OrderDetail`].
pub async fn resolve_order(pool: &PgPool, header: OrderHeader) -> AppResult<OrderDetail> {
    let (customer, shipping, billing, items) = tokio::try_join!(
        CustomerRepo::find_by_id(pool, header.customer_id),
        ContactMechRepo::find_by_id(pool, header.shipping_contact_mech_id),
        ContactMechRepo::find_by_id(pool, header.billing_contact_mech_id),
        OrderItemRepo::list_by_order(pool, header.id),
    )?;

    let order_items = resolve_items(pool, items).await?;

    Ok(OrderDetail {
        id: header.id,
        order_date: header.order_date,
        customer,
        shipping_contact_mech: shipping,
        billing_contact_mech: billing,
        created_at: header.created_at,
        updated_at: header.updated_at,
        order_items,
    })
}

/// Resolve a list of items, batching the product lookups into one query.
pub async fn resolve_items(
    pool: &PgPool,
    items: Vec<OrderItem>,
) -> AppResult<Vec<OrderItemDetail>> {
    let mut product_ids: Vec<DbId> = items.iter().map(|i| i.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    let products: HashMap<DbId, Product> = if product_ids.is_empty() {
        HashMap::new()
    } else {
        ProductRepo::find_by_ids(pool, &product_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    Ok(items
        .into_iter()
        .map(|item| {
            let product = products.get(&item.product_id).cloned();
            merge_item(item, product)
        })
        .collect())
}

/// Resolve a single item's product reference.
pub async fn resolve_item(pool: &PgPool, item: OrderItem) -> AppResult<OrderItemDetail> {
    let product = ProductRepo::find_by_id(pool, item.product_id).await?;
    Ok(merge_item(item, product))
}

fn merge_item(item: OrderItem, product: Option<Product>) -> OrderItemDetail {
    OrderItemDetail {
        id: item.id,
        order_id: item.order_id,
        product,
        quantity: item.quantity,
        status: item.status,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}
