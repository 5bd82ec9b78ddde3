//! Order item constants and validation functions.
//!
//! Provides the fulfillment status enumeration and the quantity/status
//! checks shared by the order creation and item endpoints.

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Fulfillment status of an order item.
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_PROCESSING: &str = "Processing";
pub const STATUS_SHIPPED: &str = "Shipped";
pub const STATUS_DELIVERED: &str = "Delivered";
pub const STATUS_CANCELLED: &str = "Cancelled";

/// All valid item statuses. New items default to [`STATUS_PENDING`].
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_PROCESSING,
    STATUS_SHIPPED,
    STATUS_DELIVERED,
    STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// Minimum quantity for an order item.
pub const MIN_QUANTITY: i32 = 1;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate that the quantity meets the minimum.
pub fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity >= MIN_QUANTITY {
        Ok(())
    } else {
        Err(format!("Quantity must be at least {MIN_QUANTITY}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_enumerated_statuses_are_valid() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = validate_status("Returned").unwrap_err();
        assert!(err.contains("Invalid status 'Returned'"));
    }

    #[test]
    fn status_check_is_case_sensitive() {
        assert!(validate_status("pending").is_err());
    }

    #[test]
    fn quantity_of_one_is_valid() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(250).is_ok());
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        let err = validate_quantity(0).unwrap_err();
        assert!(err.contains("at least 1"));
        assert!(validate_quantity(-3).is_err());
    }
}
