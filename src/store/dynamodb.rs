//! DynamoDB key-value store adapter
//!
//! Credentials come from the host's ambient identity through the default AWS
//! provider chain; nothing is configured in code.

use super::{AttributeValue, KeyValueStore, Record, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// Store adapter backed by a long-lived DynamoDB client.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient environment (region, credentials).
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config))
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Attribute kinds other than strings and numbers are outside the service's
/// data model; they are kept out of the record so decoding reports the field
/// as missing.
fn from_dynamo(item: HashMap<String, DynamoValue>) -> Record {
    item.into_iter()
        .filter_map(|(k, v)| match v {
            DynamoValue::S(s) => Some((k, AttributeValue::S(s))),
            DynamoValue::N(n) => Some((k, AttributeValue::N(n))),
            _ => None,
        })
        .collect()
}

fn to_dynamo(record: Record) -> HashMap<String, DynamoValue> {
    record
        .into_iter()
        .map(|(k, v)| {
            let v = match v {
                AttributeValue::S(s) => DynamoValue::S(s),
                AttributeValue::N(n) => DynamoValue::N(n),
            };
            (k, v)
        })
        .collect()
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::ServiceError(_) => match err.code() {
            Some("ResourceNotFoundException") => StoreError::MissingResource(message),
            Some("ValidationException") => StoreError::Rejected(message),
            _ => StoreError::Unavailable(message),
        },
        _ => StoreError::Unavailable(message),
    }
}

// =============================================================================
// Port implementation
// =============================================================================

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError> {
        let items: Vec<HashMap<String, DynamoValue>> = self
            .client
            .scan()
            .table_name(table)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(map_sdk_error)?;

        tracing::debug!(table, count = items.len(), "scan complete");
        Ok(items.into_iter().map(from_dynamo).collect())
    }

    async fn query(
        &self,
        table: &str,
        index: &str,
        key_attribute: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        let items: Vec<HashMap<String, DynamoValue>> = self
            .client
            .query()
            .table_name(table)
            .index_name(index)
            .key_condition_expression("#k = :v")
            .expression_attribute_names("#k", key_attribute)
            .expression_attribute_values(":v", DynamoValue::S(value.to_string()))
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(map_sdk_error)?;

        tracing::debug!(table, index, count = items.len(), "query complete");
        Ok(items.into_iter().map(from_dynamo).collect())
    }

    async fn get(
        &self,
        table: &str,
        key_attribute: &str,
        key: &str,
    ) -> Result<Option<Record>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(key_attribute, DynamoValue::S(key.to_string()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(output.item().cloned().map(from_dynamo))
    }

    async fn put(&self, table: &str, record: Record) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_dynamo(record)))
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(())
    }
}
