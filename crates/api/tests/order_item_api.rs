//! HTTP-level integration tests for the order item endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

/// Create an empty order through the API and return its id.
async fn create_order(pool: &PgPool, fx: &common::Fixtures) -> String {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/orders",
            serde_json::json!({
                "customer_id": fx.customer.id.to_string(),
                "shipping_contact_mech_id": fx.shipping.id.to_string(),
                "billing_contact_mech_id": fx.billing.id.to_string()
            }),
        )
        .await,
    )
    .await;
    created["data"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Item addition
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_returns_201_with_resolved_product(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/orders/{order_id}/items"),
        serde_json::json!({
            "product_id": fx.product.id.to_string(),
            "quantity": 4
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["quantity"], 4);
    assert_eq!(json["data"]["status"], "Pending");
    assert_eq!(json["data"]["order_id"], order_id);
    assert_eq!(json["data"]["product"]["product_name"], "T-Shirt");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_to_missing_order_returns_404(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;

    let app = common::build_test_app(pool);
    let missing = uuid::Uuid::new_v4();
    let response = post_json(
        app,
        &format!("/orders/{missing}/items"),
        serde_json::json!({
            "product_id": fx.product.id.to_string(),
            "quantity": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], format!("No order found with id {missing}"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_with_malformed_product_id_returns_400(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/orders/{order_id}/items"),
        serde_json::json!({
            "product_id": "garbage",
            "quantity": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid id: garbage");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_with_zero_quantity_returns_validation_error(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/orders/{order_id}/items"),
        serde_json::json!({
            "product_id": fx.product.id.to_string(),
            "quantity": 0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let errors = json["errors"].as_array().unwrap();
    assert!(errors[0].as_str().unwrap().contains("at least 1"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_with_unknown_status_returns_validation_error(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/orders/{order_id}/items"),
        serde_json::json!({
            "product_id": fx.product.id.to_string(),
            "quantity": 1,
            "status": "Returned"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert!(errors[0].as_str().unwrap().contains("Invalid status"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_item_with_nonexistent_product_is_accepted(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    // Product existence is not verified; the dangling reference resolves
    // to null in the response.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/orders/{order_id}/items"),
        serde_json::json!({
            "product_id": uuid::Uuid::new_v4().to_string(),
            "quantity": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["product"].is_null());
}

// ---------------------------------------------------------------------------
// Item update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_item_changes_quantity_and_status(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/orders/{order_id}/items"),
            serde_json::json!({
                "product_id": fx.product.id.to_string(),
                "quantity": 1
            }),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/orders/{order_id}/items/{item_id}"),
        serde_json::json!({
            "quantity": 5,
            "status": "Shipped"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["quantity"], 5);
    assert_eq!(json["data"]["status"], "Shipped");
    assert_eq!(json["data"]["product"]["id"], fx.product.id.to_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_item_with_mismatched_order_returns_404(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_a = create_order(&pool, &fx).await;
    let order_b = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/orders/{order_a}/items"),
            serde_json::json!({
                "product_id": fx.product.id.to_string(),
                "quantity": 2
            }),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    // Valid item id, wrong owning order: must 404, never mutate.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/orders/{order_b}/items/{item_id}"),
        serde_json::json!({"quantity": 99}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!("No order item found with id {item_id} for order {order_b}")
    );

    // The item under its real order is unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/orders/{order_a}")).await).await;
    assert_eq!(json["data"]["order_items"][0]["quantity"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_item_with_zero_quantity_returns_validation_error(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_id = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/orders/{order_id}/items"),
            serde_json::json!({
                "product_id": fx.product.id.to_string(),
                "quantity": 3
            }),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/orders/{order_id}/items/{item_id}"),
        serde_json::json!({"quantity": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert!(errors[0].as_str().unwrap().contains("at least 1"));
}

// ---------------------------------------------------------------------------
// Item deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_item_requires_matching_order(pool: PgPool) {
    let fx = common::seed_fixtures(&pool).await;
    let order_a = create_order(&pool, &fx).await;
    let order_b = create_order(&pool, &fx).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/orders/{order_a}/items"),
            serde_json::json!({
                "product_id": fx.product.id.to_string(),
                "quantity": 1
            }),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    // Wrong order: 404, item survives.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/orders/{order_b}/items/{item_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Right order: deleted with acknowledgment.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/orders/{order_a}/items/{item_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Order item deleted successfully");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/orders/{order_a}")).await).await;
    assert_eq!(json["data"]["order_items"], serde_json::json!([]));
}
