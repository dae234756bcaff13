use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt;

/// Stable identity of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(uuid::Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the conversation produced the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

/// Delivery progress of a sent message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    Sending,
    Delivered,
}

impl DeliveryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryState::Sending => "sending",
            DeliveryState::Delivered => "delivered",
        }
    }
}

/// One SMS in the simulated conversation
#[derive(Debug, Clone, Serialize)]
pub struct SmsMessage {
    pub id: MessageId,
    pub direction: Direction,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Only sent messages carry a delivery state.
    pub delivery: Option<DeliveryState>,
}

impl SmsMessage {
    pub fn sent(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            direction: Direction::Sent,
            content: content.into(),
            timestamp: Utc::now(),
            delivery: Some(DeliveryState::Sending),
        }
    }

    pub fn received(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            direction: Direction::Received,
            content: content.into(),
            timestamp: Utc::now(),
            delivery: None,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.direction == Direction::Sent
    }

    pub fn is_delivered(&self) -> bool {
        self.delivery == Some(DeliveryState::Delivered)
    }

    /// Advance `sending` to `delivered`. Received messages are left alone.
    pub fn mark_delivered(&mut self) -> bool {
        match self.delivery {
            Some(DeliveryState::Sending) => {
                self.delivery = Some(DeliveryState::Delivered);
                true
            }
            _ => false,
        }
    }

    /// Local wall-clock time as `HH:MM`
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_starts_sending() {
        let msg = SmsMessage::sent("HELP GRMILES");
        assert!(msg.is_sent());
        assert_eq!(msg.delivery, Some(DeliveryState::Sending));
        assert!(!msg.is_delivered());
    }

    #[test]
    fn test_mark_delivered_only_once() {
        let mut msg = SmsMessage::sent("STATUS GRMILES123");
        assert!(msg.mark_delivered());
        assert!(msg.is_delivered());
        assert!(!msg.mark_delivered());
    }

    #[test]
    fn test_received_has_no_delivery_state() {
        let mut msg = SmsMessage::received("ok");
        assert_eq!(msg.direction, Direction::Received);
        assert!(!msg.mark_delivered());
        assert_eq!(msg.delivery, None);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(SmsMessage::sent("a").id, SmsMessage::sent("a").id);
    }

    #[test]
    fn test_display_time_format() {
        let time = SmsMessage::sent("x").display_time();
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }
}
