//! Storage schema
//!
//! Table, key and index names are deploy-time constants shared by every store
//! backend.

use super::AccessError;
use crate::catalog::{helpers::encode_item, models::CatalogItem};
use crate::store::InMemoryStore;
use crate::store::KeyValueStore;

// =============================================================================
// Catalog table
// =============================================================================

/// Table holding catalog items
pub const CATALOG_TABLE: &str = "BravoSafetyEssentials";
/// Primary key attribute of the catalog table
pub const ITEM_KEY: &str = "ItemId";

pub const ATTR_NAME: &str = "Name";
pub const ATTR_DESCRIPTION: &str = "Description";
pub const ATTR_PRICE: &str = "Price";
pub const ATTR_CATEGORY: &str = "Category";
pub const ATTR_THUMB_IMAGE_URI: &str = "ThumbImageUri";
pub const ATTR_PROFILE_IMAGE_URI: &str = "ProfileImageUri";

/// Secondary index on `Category`
pub const CATEGORY_INDEX: &str = "CategoryIndex";

// =============================================================================
// Cart table
// =============================================================================

/// Table holding cart entries
pub const CART_TABLE: &str = "BravoSafetyEssentialsCart";
/// Primary key attribute of the cart table
pub const CART_KEY: &str = "cartId";
pub const ATTR_USER: &str = "User";
pub const ATTR_CART_ITEM_ID: &str = "itemId";

/// Secondary index on `User`
pub const USER_INDEX: &str = "UserIndex";

/// Builds an in-memory store laid out like the managed tables and loads
/// `catalog` into it.
pub async fn provision_memory_store(catalog: &[CatalogItem]) -> Result<InMemoryStore, AccessError> {
    let store = InMemoryStore::new()
        .with_table(CATALOG_TABLE, ITEM_KEY)
        .with_index(CATALOG_TABLE, CATEGORY_INDEX, ATTR_CATEGORY)
        .with_table(CART_TABLE, CART_KEY)
        .with_index(CART_TABLE, USER_INDEX, ATTR_USER);

    for item in catalog {
        store.put(CATALOG_TABLE, encode_item(item)).await?;
    }

    tracing::info!(items = catalog.len(), "in-memory store provisioned");
    Ok(store)
}
