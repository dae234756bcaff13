use async_trait::async_trait;
use crate::domain::entities::SmsMessage;
use crate::application::errors::AppError;

/// Channel trait - abstraction over where the conversation is shown
#[async_trait]
pub trait Channel: Send + Sync {
    /// Prepare the channel before the first message
    async fn start(&self) -> Result<(), AppError>;

    /// Show a message that was just appended to the conversation
    async fn deliver(&self, message: &SmsMessage) -> Result<(), AppError>;

    /// A sent message reached the short code
    async fn delivered(&self, message: &SmsMessage) -> Result<(), AppError>;

    /// Toggle the "is typing" indicator
    async fn set_typing(&self, typing: bool) -> Result<(), AppError>;

    /// Get channel info
    fn channel_info(&self) -> ChannelInfo;
}

/// Channel information
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    pub name: String,
    /// Number the SMS is sent to
    pub short_code: String,
    /// Number the SMS is sent from
    pub sender: String,
}
