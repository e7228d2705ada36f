//! In-memory key-value store adapter
//!
//! Tables live in a `DashMap` keyed by table name, so concurrent request tasks
//! can read and write without an external lock. Secondary indexes are declared
//! up front and behave like the managed store's: querying an index that was
//! never declared is an error, not an empty result.

use super::{AttributeValue, KeyValueStore, Record, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;

/// A single table: its primary key attribute, declared indexes and rows in
/// insertion order.
#[derive(Debug, Default)]
struct Table {
    key_attribute: String,
    /// index name -> indexed attribute
    indexes: HashMap<String, String>,
    rows: Vec<Record>,
    /// primary key -> position in `rows`
    positions: HashMap<AttributeValue, usize>,
}

impl Table {
    fn key_of<'a>(&self, record: &'a Record) -> Option<&'a AttributeValue> {
        record.get(&self.key_attribute)
    }

    /// Inserts `record` under `key`, replacing an existing row in place so
    /// scan order stays insertion order.
    fn upsert(&mut self, key: AttributeValue, record: Record) {
        match self.positions.get(&key) {
            Some(&pos) => self.rows[pos] = record,
            None => {
                self.positions.insert(key, self.rows.len());
                self.rows.push(record);
            }
        }
    }
}

/// Key-value store held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: DashMap<String, Table>,
}

impl InMemoryStore {
    /// Creates a store with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a table whose primary key is `key_attribute`.
    pub fn with_table(self, table: &str, key_attribute: &str) -> Self {
        self.tables.insert(
            table.to_string(),
            Table {
                key_attribute: key_attribute.to_string(),
                ..Table::default()
            },
        );
        self
    }

    /// Declares a secondary index `index` on `attribute` of an existing table.
    /// Unknown tables are ignored.
    pub fn with_index(self, table: &str, index: &str, attribute: &str) -> Self {
        if let Some(mut t) = self.tables.get_mut(table) {
            t.indexes.insert(index.to_string(), attribute.to_string());
        }
        self
    }

    /// Number of rows currently held by `table` (0 for unknown tables).
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map(|t| t.rows.len()).unwrap_or(0)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError> {
        let t = self
            .tables
            .get(table)
            .ok_or_else(|| StoreError::MissingResource(format!("table {}", table)))?;
        Ok(t.rows.clone())
    }

    async fn query(
        &self,
        table: &str,
        index: &str,
        key_attribute: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        let t = self
            .tables
            .get(table)
            .ok_or_else(|| StoreError::MissingResource(format!("table {}", table)))?;

        let indexed = t.indexes.get(index).ok_or_else(|| {
            StoreError::MissingResource(format!("index {} on table {}", index, table))
        })?;

        if indexed != key_attribute {
            return Err(StoreError::Rejected(format!(
                "index {} is keyed on {}, not {}",
                index, indexed, key_attribute
            )));
        }

        let wanted = AttributeValue::S(value.to_string());
        Ok(t.rows
            .iter()
            .filter(|r| r.get(key_attribute) == Some(&wanted))
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        table: &str,
        key_attribute: &str,
        key: &str,
    ) -> Result<Option<Record>, StoreError> {
        let t = self
            .tables
            .get(table)
            .ok_or_else(|| StoreError::MissingResource(format!("table {}", table)))?;

        if t.key_attribute != key_attribute {
            return Err(StoreError::Rejected(format!(
                "table {} is keyed on {}, not {}",
                table, t.key_attribute, key_attribute
            )));
        }

        let wanted = AttributeValue::S(key.to_string());
        Ok(t.positions.get(&wanted).map(|&pos| t.rows[pos].clone()))
    }

    async fn put(&self, table: &str, record: Record) -> Result<(), StoreError> {
        let mut t = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::MissingResource(format!("table {}", table)))?;

        let key = t.key_of(&record).cloned().ok_or_else(|| {
            StoreError::Rejected(format!(
                "record is missing primary key {}",
                t.key_attribute
            ))
        })?;

        t.upsert(key, record);
        Ok(())
    }
}
