//! One-time seed binary: resets the tables and inserts sample customers,
//! contact mechanisms, and products, logging the created ids so the API
//! can be exercised by hand.
//!
//! Run with `cargo run --bin seed` (requires `DATABASE_URL`).

use ordersvc_db::models::contact_mech::CreateContactMech;
use ordersvc_db::models::customer::CreateCustomer;
use ordersvc_db::models::product::CreateProduct;
use ordersvc_db::repositories::{
    ContactMechRepo, CustomerRepo, OrderHeaderRepo, OrderItemRepo, ProductRepo,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = ordersvc_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    ordersvc_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Err(err) = seed(&pool).await {
        tracing::error!(error = %err, "Seeding failed");
        std::process::exit(1);
    }

    tracing::info!("Database seeded successfully");
}

async fn seed(pool: &ordersvc_db::DbPool) -> Result<(), sqlx::Error> {
    // Clear existing data, items before headers.
    OrderItemRepo::delete_all(pool).await?;
    OrderHeaderRepo::delete_all(pool).await?;
    ContactMechRepo::delete_all(pool).await?;
    CustomerRepo::delete_all(pool).await?;
    ProductRepo::delete_all(pool).await?;
    tracing::info!("Data cleared");

    // Customers.
    let john = CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: "John".into(),
            last_name: "Doe".into(),
        },
    )
    .await?;
    let jane = CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
        },
    )
    .await?;
    tracing::info!(customer_1 = %john.id, customer_2 = %jane.id, "Customers created");

    // Contact mechanisms.
    let john_contact_1 = ContactMechRepo::create(
        pool,
        &CreateContactMech {
            customer_id: john.id,
            street_address: "1600 Amphitheatre Parkway".into(),
            city: "Mountain View".into(),
            state: "CA".into(),
            postal_code: "94043".into(),
            phone_number: Some("(650) 253-0000".into()),
            email: Some("john.doe@example.com".into()),
        },
    )
    .await?;
    let john_contact_2 = ContactMechRepo::create(
        pool,
        &CreateContactMech {
            customer_id: john.id,
            street_address: "1 Infinite Loop".into(),
            city: "Cupertino".into(),
            state: "CA".into(),
            postal_code: "95014".into(),
            phone_number: Some("(408) 996-1010".into()),
            email: Some("john.doe@work.com".into()),
        },
    )
    .await?;
    let jane_contact = ContactMechRepo::create(
        pool,
        &CreateContactMech {
            customer_id: jane.id,
            street_address: "350 Fifth Avenue".into(),
            city: "New York".into(),
            state: "NY".into(),
            postal_code: "10118".into(),
            phone_number: Some("(212) 736-3100".into()),
            email: Some("jane.smith@example.com".into()),
        },
    )
    .await?;
    tracing::info!(
        john_contact_1 = %john_contact_1.id,
        john_contact_2 = %john_contact_2.id,
        jane_contact = %jane_contact.id,
        "Contact mechanisms created"
    );

    // Products.
    let products = [
        ("T-Shirt", "Red", "M"),
        ("Jeans", "Blue", "32"),
        ("Sneakers", "White", "9"),
        ("Jacket", "Black", "L"),
        ("Hat", "Green", "One Size"),
    ];
    for (name, color, size) in products {
        ProductRepo::create(
            pool,
            &CreateProduct {
                product_name: name.into(),
                color: Some(color.into()),
                size: Some(size.into()),
            },
        )
        .await?;
    }

    for product in ProductRepo::list(pool).await? {
        tracing::info!(product_id = %product.id, name = %product.product_name, "Product created");
    }

    Ok(())
}
