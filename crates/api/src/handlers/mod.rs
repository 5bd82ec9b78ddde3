//! Request handlers for the order API.
//!
//! Handlers validate input via `ordersvc_core` helpers, delegate to the
//! repositories in `ordersvc_db`, resolve references for the response via
//! [`crate::resolve`], and map failures through [`crate::error::AppError`].

pub mod order_items;
pub mod orders;
