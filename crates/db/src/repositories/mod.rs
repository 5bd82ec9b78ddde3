//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_mech_repo;
pub mod customer_repo;
pub mod order_header_repo;
pub mod order_item_repo;
pub mod product_repo;

pub use contact_mech_repo::ContactMechRepo;
pub use customer_repo::CustomerRepo;
pub use order_header_repo::OrderHeaderRepo;
pub use order_item_repo::OrderItemRepo;
pub use product_repo::ProductRepo;
