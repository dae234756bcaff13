//! In-memory conversation storage

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::traits::MessageLog;
use crate::domain::entities::{MessageId, SmsMessage};
use crate::application::errors::StorageError;

/// Insertion-ordered message log held in memory for the life of the process
#[derive(Clone, Default)]
pub struct MemoryLog {
    messages: Arc<RwLock<Vec<SmsMessage>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageLog for MemoryLog {
    async fn append(&self, message: SmsMessage) -> Result<(), StorageError> {
        let mut messages = self.messages.write().await;
        messages.push(message);
        Ok(())
    }

    async fn mark_delivered(&self, id: MessageId) -> Result<bool, StorageError> {
        let mut messages = self.messages.write().await;
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        Ok(message.mark_delivered())
    }

    async fn get(&self, id: MessageId) -> Result<Option<SmsMessage>, StorageError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn messages(&self) -> Result<Vec<SmsMessage>, StorageError> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }

    async fn len(&self) -> Result<usize, StorageError> {
        Ok(self.messages.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeliveryState;

    #[tokio::test]
    async fn test_append_keeps_order() {
        let log = MemoryLog::new();
        for text in ["one", "two", "three"] {
            log.append(SmsMessage::sent(text)).await.unwrap();
        }
        let contents: Vec<_> = log.messages().await.unwrap().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_mark_delivered_by_id() {
        let log = MemoryLog::new();
        let first = SmsMessage::sent("first");
        let second = SmsMessage::sent("second");
        let first_id = first.id;
        log.append(first).await.unwrap();
        log.append(second).await.unwrap();

        assert!(log.mark_delivered(first_id).await.unwrap());
        let messages = log.messages().await.unwrap();
        assert_eq!(messages[0].delivery, Some(DeliveryState::Delivered));
        assert_eq!(messages[1].delivery, Some(DeliveryState::Sending));
    }

    #[tokio::test]
    async fn test_mark_unknown_id() {
        let log = MemoryLog::new();
        let err = log.mark_delivered(MessageId::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_clones_share_log() {
        let log = MemoryLog::new();
        let other = log.clone();
        other.append(SmsMessage::received("hi")).await.unwrap();
        assert_eq!(log.len().await.unwrap(), 1);
    }
}
