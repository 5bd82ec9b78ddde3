//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` wire DTOs for the HTTP surface, carrying references as
//!   raw strings so malformed ids can be rejected with a 400 instead of a
//!   body-deserialization failure
//! - A typed insert input where the wire shape and the row shape differ

pub mod contact_mech;
pub mod customer;
pub mod order_header;
pub mod order_item;
pub mod product;
