//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers, record encoding
//! and request validation.

use super::models::CartEntry;
use crate::access::schema::{ATTR_CART_ITEM_ID, ATTR_USER, CART_KEY};
use crate::store::{AttributeValue, Record};
use uuid::Uuid;

/// Creates a fresh cart entry identifier (hyphenated UUID v4).
///
/// Never reused: every insertion gets its own id.
pub fn new_cart_id() -> String {
    Uuid::new_v4().to_string()
}

/// Encodes an entry in the cart table's attribute layout.
pub fn encode_entry(entry: &CartEntry) -> Record {
    Record::from([
        (CART_KEY.to_string(), AttributeValue::S(entry.cart_id.clone())),
        (ATTR_USER.to_string(), AttributeValue::S(entry.user.clone())),
        (ATTR_CART_ITEM_ID.to_string(), AttributeValue::S(entry.item_id.clone())),
    ])
}

/// Returns the email unchanged unless it is empty or only whitespace.
///
/// The store refuses empty strings as index keys, so blank emails are turned
/// away before any store call. Anything else is matched byte for byte.
pub fn non_blank_email(email: Option<&str>) -> Option<&str> {
    email.filter(|e| !e.trim().is_empty())
}
