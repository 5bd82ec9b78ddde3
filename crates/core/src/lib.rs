//! Shared domain types and validation for the order service.

pub mod order;
pub mod types;
