//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt::oneshot` to send requests directly to
//! the router without an actual TCP listener. `build_test_app` goes through
//! the same `build_app_router` as the production binary, so tests exercise
//! the full middleware stack.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ordersvc_api::config::ServerConfig;
use ordersvc_api::router::build_app_router;
use ordersvc_api::state::AppState;
use ordersvc_db::models::contact_mech::{ContactMech, CreateContactMech};
use ordersvc_db::models::customer::{CreateCustomer, Customer};
use ordersvc_db::models::product::{CreateProduct, Product};
use ordersvc_db::repositories::{ContactMechRepo, CustomerRepo, ProductRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seeded reference records for order tests: one customer with two contact
/// mechanisms (shipping, billing) and one product.
pub struct Fixtures {
    pub customer: Customer,
    pub shipping: ContactMech,
    pub billing: ContactMech,
    pub product: Product,
}

/// Insert the fixture records through the repositories.
pub async fn seed_fixtures(pool: &PgPool) -> Fixtures {
    let customer = CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: "John".into(),
            last_name: "Doe".into(),
        },
    )
    .await
    .unwrap();

    let shipping = ContactMechRepo::create(
        pool,
        &CreateContactMech {
            customer_id: customer.id,
            street_address: "1600 Amphitheatre Parkway".into(),
            city: "Mountain View".into(),
            state: "CA".into(),
            postal_code: "94043".into(),
            phone_number: Some("(650) 253-0000".into()),
            email: Some("john.doe@example.com".into()),
        },
    )
    .await
    .unwrap();

    let billing = ContactMechRepo::create(
        pool,
        &CreateContactMech {
            customer_id: customer.id,
            street_address: "1 Infinite Loop".into(),
            city: "Cupertino".into(),
            state: "CA".into(),
            postal_code: "95014".into(),
            phone_number: None,
            email: None,
        },
    )
    .await
    .unwrap();

    let product = ProductRepo::create(
        pool,
        &CreateProduct {
            product_name: "T-Shirt".into(),
            color: Some("Red".into()),
            size: Some("M".into()),
        },
    )
    .await
    .unwrap();

    Fixtures {
        customer,
        shipping,
        billing,
        product,
    }
}
