//! SMS conversation integration tests
//! Run with: cargo test --test sms_flow_test

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use grameen_miles::application::errors::AppError;
use grameen_miles::application::services::{SmsService, SmsTiming};
use grameen_miles::domain::entities::{DeliveryState, Direction, SmsCommand, SmsMessage, FALLBACK_REPLY};
use grameen_miles::domain::traits::{Channel, ChannelInfo, MessageLog};
use grameen_miles::infrastructure::storage::MemoryLog;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Shown(Direction, String),
    Delivered(String),
    Typing(bool),
}

/// Channel that records what would have been shown
#[derive(Default)]
struct RecordingChannel {
    events: Mutex<Vec<Event>>,
}

impl RecordingChannel {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    async fn start(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn deliver(&self, message: &SmsMessage) -> Result<(), AppError> {
        self.push(Event::Shown(message.direction, message.content.clone()));
        Ok(())
    }

    async fn delivered(&self, message: &SmsMessage) -> Result<(), AppError> {
        self.push(Event::Delivered(message.content.clone()));
        Ok(())
    }

    async fn set_typing(&self, typing: bool) -> Result<(), AppError> {
        self.push(Event::Typing(typing));
        Ok(())
    }

    fn channel_info(&self) -> ChannelInfo {
        ChannelInfo {
            name: "test".to_string(),
            short_code: "16247".to_string(),
            sender: "01712345678".to_string(),
        }
    }
}

fn setup() -> (SmsService, Arc<MemoryLog>, Arc<RecordingChannel>) {
    ensure_init();
    let log = Arc::new(MemoryLog::new());
    let channel = Arc::new(RecordingChannel::default());
    let service = SmsService::new(log.clone(), channel.clone(), SmsTiming::default());
    (service, log, channel)
}

/// The three observable states: sending, delivered, reply received
#[tokio::test(start_paused = true)]
async fn test_exchange_passes_through_three_states() {
    let (sms, log, _) = setup();

    let exchange = sms.send("BOOK RIDE GRMILES123").await.unwrap().unwrap();
    let messages = log.messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, exchange.sent);
    assert_eq!(messages[0].delivery, Some(DeliveryState::Sending));
    assert!(sms.is_typing());

    tokio::time::sleep(Duration::from_millis(900)).await;
    let messages = log.messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].delivery, Some(DeliveryState::Delivered));

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let messages = log.messages().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].direction, Direction::Received);
    assert_eq!(messages[1].content, SmsCommand::BookRide.reply());
    assert!(!sms.is_typing());

    let reply_id = exchange.reply().await.unwrap();
    assert_eq!(reply_id, messages[1].id);
}

/// Lowercase input gets the same confirmation as uppercase
#[tokio::test(start_paused = true)]
async fn test_lowercase_command() {
    let (sms, _, _) = setup();

    let reply = sms.send_and_wait("book ride grmiles123").await.unwrap().unwrap();
    assert_eq!(reply.content, SmsCommand::BookRide.reply());
}

/// Unknown commands still get an answer
#[tokio::test(start_paused = true)]
async fn test_unknown_command_gets_fallback() {
    let (sms, log, _) = setup();

    let reply = sms.send_and_wait("XYZ").await.unwrap().unwrap();
    assert_eq!(reply.content, FALLBACK_REPLY);
    assert!(reply.content.contains("Invalid command"));

    let messages = log.messages().await.unwrap();
    assert_eq!(messages[0].content, "XYZ");
    assert!(messages[0].is_delivered());
}

/// Blank input is never sent
#[tokio::test(start_paused = true)]
async fn test_blank_input_not_sent() {
    let (sms, log, channel) = setup();

    assert!(sms.send("   ").await.unwrap().is_none());
    assert_eq!(log.len().await.unwrap(), 0);
    assert!(channel.events().is_empty());
    assert!(!sms.is_typing());
}

/// A later send does not steal the earlier message's delivery acknowledgment
#[tokio::test(start_paused = true)]
async fn test_delivery_marks_its_own_message() {
    let (sms, log, _) = setup();

    let first = sms.send("STATUS GRMILES123").await.unwrap().unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    let second = sms.send("BALANCE GRMILES").await.unwrap().unwrap();

    // 900ms: only the first delivery timer has fired
    tokio::time::sleep(Duration::from_millis(400)).await;
    let first_msg = log.get(first.sent).await.unwrap().unwrap();
    let second_msg = log.get(second.sent).await.unwrap().unwrap();
    assert!(first_msg.is_delivered());
    assert_eq!(second_msg.delivery, Some(DeliveryState::Sending));

    first.reply().await.unwrap();
    second.reply().await.unwrap();
    let messages = log.messages().await.unwrap();
    assert!(messages.iter().filter(|m| m.is_sent()).all(|m| m.is_delivered()));
}

/// Two rapid sends yield two replies, each matching its own input
#[tokio::test(start_paused = true)]
async fn test_rapid_sends_each_get_their_reply() {
    let (sms, log, _) = setup();

    let help = sms.send("help grmiles").await.unwrap().unwrap();
    let cancel = sms.send("CANCEL GRMILES123").await.unwrap().unwrap();

    let help_reply = help.reply().await.unwrap();
    let cancel_reply = cancel.reply().await.unwrap();

    let help_msg = log.get(help_reply).await.unwrap().unwrap();
    let cancel_msg = log.get(cancel_reply).await.unwrap().unwrap();
    assert_eq!(help_msg.content, SmsCommand::Help.reply());
    assert_eq!(cancel_msg.content, SmsCommand::Cancel.reply());

    let messages = log.messages().await.unwrap();
    let directions: Vec<_> = messages.iter().map(|m| m.direction).collect();
    assert_eq!(
        directions,
        vec![Direction::Sent, Direction::Sent, Direction::Received, Direction::Received]
    );
    assert_eq!(messages.iter().filter(|m| m.direction == Direction::Received).count(), 2);
    assert!(!sms.is_typing());
}

/// Typing stays on until the last overlapping reply is in
#[tokio::test(start_paused = true)]
async fn test_typing_held_while_later_reply_pending() {
    let (sms, log, channel) = setup();

    let first = sms.send("STATUS GRMILES123").await.unwrap().unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    let second = sms.send("HELP GRMILES").await.unwrap().unwrap();

    // 2400ms: first reply in (2300ms), second still due at 2800ms
    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert_eq!(log.len().await.unwrap(), 3);
    assert!(sms.is_typing());
    assert!(!channel.events().contains(&Event::Typing(false)));

    first.reply().await.unwrap();
    second.reply().await.unwrap();
    assert!(!sms.is_typing());
    let stops = channel.events().iter().filter(|e| **e == Event::Typing(false)).count();
    assert_eq!(stops, 1);
}

/// Aborting the only pending reply switches typing off and nothing arrives
#[tokio::test(start_paused = true)]
async fn test_abort_clears_typing() {
    let (sms, log, channel) = setup();

    let exchange = sms.send("BALANCE GRMILES").await.unwrap().unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(channel.events().last(), Some(&Event::Typing(true)));

    exchange.abort();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!sms.is_typing());
    assert_eq!(channel.events().last(), Some(&Event::Typing(false)));

    tokio::time::sleep(Duration::from_millis(3000)).await;
    let messages = log.messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_delivered());
    assert!(exchange.reply().await.is_err());
}

/// Channel sees the exchange in order
#[tokio::test(start_paused = true)]
async fn test_channel_event_order() {
    let (sms, _, channel) = setup();

    sms.send_and_wait("HELP GRMILES").await.unwrap();

    assert_eq!(
        channel.events(),
        vec![
            Event::Shown(Direction::Sent, "HELP GRMILES".to_string()),
            Event::Delivered("HELP GRMILES".to_string()),
            Event::Typing(true),
            Event::Typing(false),
            Event::Shown(Direction::Received, SmsCommand::Help.reply().to_string()),
        ]
    );
}

/// Sent text is stored trimmed but otherwise as typed
#[tokio::test(start_paused = true)]
async fn test_sent_content_kept_as_typed() {
    let (sms, log, _) = setup();

    sms.send_and_wait("  Balance GRMiles \n").await.unwrap();
    let messages = log.messages().await.unwrap();
    assert_eq!(messages[0].content, "Balance GRMiles");
    assert_eq!(messages[1].content, SmsCommand::Balance.reply());
}
