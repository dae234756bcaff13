use async_trait::async_trait;
use crate::domain::entities::{MessageId, SmsMessage};
use crate::application::errors::StorageError;

/// Append-only conversation log
///
/// Messages keep their insertion order. The only mutation is advancing a
/// sent message to delivered, addressed by id.
#[async_trait]
pub trait MessageLog: Send + Sync {
    async fn append(&self, message: SmsMessage) -> Result<(), StorageError>;

    /// Returns `false` when the message was already delivered or is not a sent message.
    /// Unknown ids are `StorageError::NotFound`.
    async fn mark_delivered(&self, id: MessageId) -> Result<bool, StorageError>;

    async fn get(&self, id: MessageId) -> Result<Option<SmsMessage>, StorageError>;

    async fn messages(&self) -> Result<Vec<SmsMessage>, StorageError>;

    async fn len(&self) -> Result<usize, StorageError>;
}
