//! Console adapter for the SMS demo

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::domain::entities::SmsMessage;
use crate::domain::traits::{Channel, ChannelInfo};
use crate::application::errors::AppError;
use crate::infrastructure::config::Config;

/// Console channel: prints the conversation and reads input lines
pub struct ConsoleAdapter {
    info: ChannelInfo,
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleAdapter {
    pub fn new(config: &Config) -> Self {
        Self {
            info: ChannelInfo {
                name: config.app.name.clone(),
                short_code: config.app.short_code.clone(),
                sender: config.app.sender.clone(),
            },
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    pub async fn read_line(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let mut input = self.input.lock().await;
        Ok(input.next_line().await?.map(|line| line.trim().to_string()))
    }

    pub fn format_message(&self, message: &SmsMessage) -> String {
        if message.is_sent() {
            let state = message.delivery.map(|d| d.as_str()).unwrap_or("");
            format!("[{} {}] {} ({})", self.info.sender, message.display_time(), message.content, state)
        } else {
            format!("[{} {}] {}", self.info.short_code, message.display_time(), message.content)
        }
    }
}

#[async_trait]
impl Channel for ConsoleAdapter {
    async fn start(&self) -> Result<(), AppError> {
        tracing::info!("Starting console SMS channel: {} -> {}", self.info.sender, self.info.short_code);
        println!("📱 {} SMS | send to {} | from {}", self.info.name, self.info.short_code, self.info.sender);
        Ok(())
    }

    async fn deliver(&self, message: &SmsMessage) -> Result<(), AppError> {
        println!("{}", self.format_message(message));
        Ok(())
    }

    async fn delivered(&self, message: &SmsMessage) -> Result<(), AppError> {
        println!("  ✓ delivered: {}", message.content);
        Ok(())
    }

    async fn set_typing(&self, typing: bool) -> Result<(), AppError> {
        if typing {
            println!("  {} is typing...", self.info.name);
        }
        Ok(())
    }

    fn channel_info(&self) -> ChannelInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_format_sent_and_received() {
        let adapter = ConsoleAdapter::new(&Config::default());
        let sent = SmsMessage::sent("HELP GRMILES");
        let line = adapter.format_message(&sent);
        assert!(line.starts_with("[01712345678 "));
        assert!(line.ends_with("HELP GRMILES (sending)"));

        let received = SmsMessage::received("ok");
        assert!(adapter.format_message(&received).starts_with("[16247 "));
    }

    #[tokio::test]
    async fn test_channel_info_from_config() {
        let mut config = Config::default();
        config.app.sender = "01800000000".to_string();
        let info = ConsoleAdapter::new(&config).channel_info();
        assert_eq!(info.sender, "01800000000");
        assert_eq!(info.short_code, "16247");
    }
}
