//! Store Access Layer
//!
//! The only component that talks to storage. Each operation issues exactly one
//! store call and decodes what comes back into catalog / cart types before
//! returning; any failure aborts the whole operation.

pub mod error;
pub mod schema;

pub use error::AccessError;

use crate::cart::{helpers::encode_entry, helpers::new_cart_id, models::CartEntry};
use crate::catalog::{
    helpers::{decode_item, decode_items},
    models::{CatalogItem, FilterAttribute},
};
use crate::store::{KeyValueStore, StoreError};
use schema::*;
use std::sync::Arc;

/// Typed catalog and cart operations over a shared store client.
#[derive(Clone)]
pub struct StoreAccess {
    store: Arc<dyn KeyValueStore>,
}

impl StoreAccess {
    /// Wraps the long-lived store client
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns every catalog item in the store's native order.
    pub async fn list_all_items(&self) -> Result<Vec<CatalogItem>, AccessError> {
        let records = self.store.scan(CATALOG_TABLE).await?;
        tracing::debug!(count = records.len(), "catalog scanned");
        decode_items(&records)
    }

    /// Returns the items whose `attribute` equals `value` exactly.
    ///
    /// Only attributes on the [`FilterAttribute`] allow-list can be queried;
    /// the index name is derived from the attribute, never taken from input.
    pub async fn query_items_by_attribute(
        &self,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<CatalogItem>, AccessError> {
        let filter = FilterAttribute::parse(attribute)
            .ok_or_else(|| AccessError::UnknownFilter(attribute.to_string()))?;

        let records = self
            .store
            .query(
                CATALOG_TABLE,
                filter.index_name(),
                filter.storage_attribute(),
                value,
            )
            .await
            .map_err(|e| match e {
                StoreError::MissingResource(_) | StoreError::Rejected(_) => {
                    tracing::warn!(attribute, error = %e, "filter index not usable");
                    AccessError::UnknownFilter(attribute.to_string())
                }
                other => AccessError::StoreUnavailable(other),
            })?;

        decode_items(&records)
    }

    /// Fetches a single catalog item by its primary key.
    pub async fn get_item(&self, item_id: &str) -> Result<CatalogItem, AccessError> {
        let record = self
            .store
            .get(CATALOG_TABLE, ITEM_KEY, item_id)
            .await?
            .ok_or_else(|| AccessError::NotFound(item_id.to_string()))?;
        decode_item(&record)
    }

    /// Appends a new cart entry under a freshly generated cart id.
    ///
    /// No read-before-write: adding the same item twice yields two entries.
    pub async fn add_cart_entry(
        &self,
        item_id: &str,
        user_email: &str,
    ) -> Result<CartEntry, AccessError> {
        let entry = CartEntry {
            cart_id: new_cart_id(),
            user: user_email.to_string(),
            item_id: item_id.to_string(),
        };

        self.store.put(CART_TABLE, encode_entry(&entry)).await?;
        tracing::info!(cart_id = %entry.cart_id, item_id, "cart entry added");
        Ok(entry)
    }

    /// Counts the cart entries belonging to `user_email` (0 when none).
    pub async fn count_cart_entries(&self, user_email: &str) -> Result<usize, AccessError> {
        let records = self
            .store
            .query(CART_TABLE, USER_INDEX, ATTR_USER, user_email)
            .await?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AttributeValue, InMemoryStore, Record};
    use async_trait::async_trait;

    fn item(id: &str, category: &str) -> CatalogItem {
        CatalogItem {
            item_id: id.into(),
            name: format!("Item {}", id),
            description: "d".into(),
            price: 100,
            category: category.into(),
            thumb_image_uri: "u1".into(),
            profile_image_uri: "u2".into(),
        }
    }

    async fn access_with(items: &[CatalogItem]) -> (StoreAccess, Arc<InMemoryStore>) {
        let store = Arc::new(provision_memory_store(items).await.unwrap());
        (StoreAccess::new(store.clone()), store)
    }

    /// Store whose every call fails as if the network were down.
    struct UnreachableStore;

    #[async_trait]
    impl KeyValueStore for UnreachableStore {
        async fn scan(&self, _: &str) -> Result<Vec<Record>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn query(&self, _: &str, _: &str, _: &str, _: &str) -> Result<Vec<Record>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn get(&self, _: &str, _: &str, _: &str) -> Result<Option<Record>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn put(&self, _: &str, _: Record) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_get_item_returns_requested_key() {
        let (access, _) = access_with(&[item("i1", "tools"), item("i2", "gloves")]).await;

        for id in ["i1", "i2"] {
            let found = access.get_item(id).await.unwrap();
            assert_eq!(found.item_id, id);
        }

        assert!(matches!(
            access.get_item("unknown").await,
            Err(AccessError::NotFound(id)) if id == "unknown"
        ));
    }

    #[tokio::test]
    async fn test_empty_catalog_lists_nothing() {
        let (access, _) = access_with(&[]).await;
        assert!(access.list_all_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_by_category_is_subset_of_list() {
        let (access, _) = access_with(&[
            item("i1", "tools"),
            item("i2", "gloves"),
            item("i3", "tools"),
            item("i4", "Tools"),
        ])
        .await;

        let all = access.list_all_items().await.unwrap();
        let tools = access
            .query_items_by_attribute("category", "tools")
            .await
            .unwrap();

        assert_eq!(tools.len(), 2);
        assert!(tools.iter().all(|i| i.category == "tools"));
        assert!(tools.iter().all(|i| all.contains(i)));
    }

    #[tokio::test]
    async fn test_query_rejects_attributes_outside_allow_list() {
        let (access, _) = access_with(&[item("i1", "tools")]).await;

        assert!(matches!(
            access.query_items_by_attribute("price", "100").await,
            Err(AccessError::UnknownFilter(attr)) if attr == "price"
        ));
    }

    #[tokio::test]
    async fn test_query_maps_missing_index_to_unknown_filter() {
        let store = InMemoryStore::new().with_table(CATALOG_TABLE, ITEM_KEY);
        let access = StoreAccess::new(Arc::new(store));

        assert!(matches!(
            access.query_items_by_attribute("category", "tools").await,
            Err(AccessError::UnknownFilter(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_record_fails_whole_listing() {
        let (access, store) = access_with(&[item("i1", "tools")]).await;

        let mut broken = crate::catalog::helpers::encode_item(&item("i2", "tools"));
        broken.insert(ATTR_PRICE.into(), AttributeValue::N("cheap".into()));
        store.put(CATALOG_TABLE, broken).await.unwrap();

        assert!(matches!(
            access.list_all_items().await,
            Err(AccessError::MalformedRecord { field, .. }) if field == ATTR_PRICE
        ));
        assert!(matches!(
            access.query_items_by_attribute("category", "tools").await,
            Err(AccessError::MalformedRecord { .. })
        ));
        // The intact item is still readable on its own.
        assert!(access.get_item("i1").await.is_ok());
    }

    #[tokio::test]
    async fn test_cart_entries_are_never_deduplicated() {
        let (access, store) = access_with(&[item("i1", "tools")]).await;

        assert_eq!(access.count_cart_entries("a@b.com").await.unwrap(), 0);

        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(access.add_cart_entry("i1", "a@b.com").await.unwrap().cart_id);
        }
        access.add_cart_entry("i1", "c@d.com").await.unwrap();

        assert_eq!(access.count_cart_entries("a@b.com").await.unwrap(), 3);
        assert_eq!(access.count_cart_entries("c@d.com").await.unwrap(), 1);
        assert_eq!(store.row_count(CART_TABLE), 4);

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3, "cart ids must be fresh per insertion");
    }

    #[tokio::test]
    async fn test_cart_entry_for_unknown_item_is_accepted() {
        let (access, _) = access_with(&[]).await;
        let entry = access.add_cart_entry("ghost", "a@b.com").await.unwrap();
        assert_eq!(entry.item_id, "ghost");
        assert_eq!(access.count_cart_entries("a@b.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_store_surfaces_store_unavailable() {
        let access = StoreAccess::new(Arc::new(UnreachableStore));

        assert!(matches!(
            access.list_all_items().await,
            Err(AccessError::StoreUnavailable(_))
        ));
        assert!(matches!(
            access.query_items_by_attribute("category", "tools").await,
            Err(AccessError::StoreUnavailable(_))
        ));
        assert!(matches!(
            access.get_item("i1").await,
            Err(AccessError::StoreUnavailable(_))
        ));
        assert!(matches!(
            access.add_cart_entry("i1", "a@b.com").await,
            Err(AccessError::StoreUnavailable(_))
        ));
        assert!(matches!(
            access.count_cart_entries("a@b.com").await,
            Err(AccessError::StoreUnavailable(_))
        ));
    }
}
