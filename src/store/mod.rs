//! Key-Value Store Port
//!
//! This module defines the raw interface the service needs from its backing
//! key-value store, together with the typed attribute encoding records are
//! exchanged in:
//! - `KeyValueStore` trait (scan, index query, get, put)
//! - `AttributeValue` / `Record` wire types
//! - `StoreError` raw failure kinds
//! - Adapters: in-memory (always built) and DynamoDB (`dynamodb` feature)

pub mod memory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

pub use memory::InMemoryStore;

#[cfg(feature = "dynamodb")]
pub use self::dynamodb::DynamoDbStore;

// =============================================================================
// Wire Types
// =============================================================================

/// A single typed attribute as held by the store.
///
/// Numbers travel as decimal strings, exactly as the store returns them; it is
/// up to the reader to decide how to parse them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// String attribute
    S(String),
    /// Number attribute, kept in its textual form
    N(String),
}

impl AttributeValue {
    /// Returns the inner string if this is a string attribute
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            AttributeValue::N(_) => None,
        }
    }

    /// Returns the textual number if this is a number attribute
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            AttributeValue::S(_) => None,
        }
    }
}

/// A raw store record: attribute name to typed value.
pub type Record = HashMap<String, AttributeValue>;

// =============================================================================
// Errors
// =============================================================================

/// Failures reported by a store adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or the transport failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The named table or index does not exist.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// The store refused the request as invalid.
    #[error("request rejected by store: {0}")]
    Rejected(String),
}

// =============================================================================
// Port
// =============================================================================

/// Raw operations the service issues against its key-value store.
///
/// Implementations must be safe to share across request tasks; the service
/// holds a single instance for its whole lifetime.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns every record of `table` in the store's native order.
    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError>;

    /// Returns the records of `table` whose `key_attribute` equals `value`,
    /// resolved through the secondary index `index`.
    async fn query(
        &self,
        table: &str,
        index: &str,
        key_attribute: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError>;

    /// Fetches the record whose primary key `key_attribute` equals `key`.
    async fn get(
        &self,
        table: &str,
        key_attribute: &str,
        key: &str,
    ) -> Result<Option<Record>, StoreError>;

    /// Writes `record`, replacing any record with the same primary key.
    async fn put(&self, table: &str, record: Record) -> Result<(), StoreError>;
}
