use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use thiserror::Error;
use tracing::debug;

use shared::domain::Message;

const UUID_ATTR: &str = "uuid";
const MESSAGE_ATTR: &str = "message";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} against table '{table}' failed: {message}")]
    Request {
        operation: &'static str,
        table: String,
        message: String,
    },
    #[error("stored item is missing string attribute '{attribute}'")]
    MalformedItem { attribute: &'static str },
}

/// Persistence boundary for guestbook entries. Point lookups report absence
/// as `Ok(None)` so callers must branch on it rather than crash.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Unconditional write keyed by `uuid`; overwrites any existing entry.
    async fn put(&self, message: &Message) -> Result<(), StoreError>;

    async fn get(&self, uuid: &str) -> Result<Option<Message>, StoreError>;

    /// Every entry currently in the store, order unspecified.
    async fn scan_all(&self) -> Result<Vec<Message>, StoreError>;
}

/// `MessageStore` backed by a DynamoDB table with a `uuid` string primary key
/// and a `message` string attribute.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub async fn connect(region: &str, table_name: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: Client::new(&config),
            table_name: table_name.to_string(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn request_error<E: std::error::Error>(&self, operation: &'static str, error: E) -> StoreError {
        StoreError::Request {
            operation,
            table: self.table_name.clone(),
            message: DisplayErrorContext(error).to_string(),
        }
    }
}

#[async_trait]
impl MessageStore for DynamoStore {
    async fn put(&self, message: &Message) -> Result<(), StoreError> {
        debug!(uuid = %message.uuid, table = %self.table_name, "put item");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(UUID_ATTR, AttributeValue::S(message.uuid.clone()))
            .item(MESSAGE_ATTR, AttributeValue::S(message.message.clone()))
            .send()
            .await
            .map_err(|e| self.request_error("PutItem", e))?;
        Ok(())
    }

    async fn get(&self, uuid: &str) -> Result<Option<Message>, StoreError> {
        debug!(%uuid, table = %self.table_name, "get item");
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(UUID_ATTR, AttributeValue::S(uuid.to_string()))
            .send()
            .await
            .map_err(|e| self.request_error("GetItem", e))?;
        output.item.map(message_from_item).transpose()
    }

    async fn scan_all(&self) -> Result<Vec<Message>, StoreError> {
        debug!(table = %self.table_name, "scan table");
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| self.request_error("Scan", e))?;
        output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(message_from_item)
            .collect()
    }
}

fn message_from_item(item: HashMap<String, AttributeValue>) -> Result<Message, StoreError> {
    let uuid = string_attribute(&item, UUID_ATTR)?;
    let message = string_attribute(&item, MESSAGE_ATTR)?;
    Ok(Message { uuid, message })
}

fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    attribute: &'static str,
) -> Result<String, StoreError> {
    item.get(attribute)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or(StoreError::MalformedItem { attribute })
}

/// In-memory `MessageStore` for tests and local runs. Same last-write-wins
/// upsert semantics as the DynamoDB table.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn put(&self, message: &Message) -> Result<(), StoreError> {
        let mut items = self.items.lock().expect("message map lock");
        items.insert(message.uuid.clone(), message.clone());
        Ok(())
    }

    async fn get(&self, uuid: &str) -> Result<Option<Message>, StoreError> {
        let items = self.items.lock().expect("message map lock");
        Ok(items.get(uuid).cloned())
    }

    async fn scan_all(&self) -> Result<Vec<Message>, StoreError> {
        let items = self.items.lock().expect("message map lock");
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
