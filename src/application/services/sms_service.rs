use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::application::errors::AppError;
use crate::domain::entities::{MessageId, SmsMessage};
use crate::domain::traits::{Channel, MessageLog};
use super::CommandResponder;

/// Artificial latency of the simulated SMS network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmsTiming {
    /// Sent → delivered
    pub delivery_delay: Duration,
    /// Delivered → reply received
    pub reply_delay: Duration,
}

impl Default for SmsTiming {
    fn default() -> Self {
        Self {
            delivery_delay: Duration::from_millis(800),
            reply_delay: Duration::from_millis(1500),
        }
    }
}

/// One in-flight send: the sent message and the task that will reply to it
pub struct Exchange {
    pub sent: MessageId,
    handle: JoinHandle<Result<MessageId, AppError>>,
}

impl Exchange {
    /// Wait for the reply; yields the id of the received message
    pub async fn reply(self) -> Result<MessageId, AppError> {
        self.handle
            .await
            .map_err(|e| AppError::Internal(format!("Reply task failed: {}", e)))?
    }

    /// Drop the pending reply. Delivery marking stops too if it has not
    /// happened yet.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

/// One pending reply. Released by the reply task once the reply is in; if
/// the task is aborted or fails first, dropping the guard clears the typing
/// indicator when no other reply is pending.
struct PendingGuard {
    counter: Arc<AtomicUsize>,
    channel: Arc<dyn Channel>,
    armed: bool,
}

impl PendingGuard {
    fn acquire(counter: &Arc<AtomicUsize>, channel: &Arc<dyn Channel>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter: Arc::clone(counter),
            channel: Arc::clone(channel),
            armed: true,
        }
    }

    /// True when this was the last pending reply
    fn release(mut self) -> bool {
        self.armed = false;
        self.counter.fetch_sub(1, Ordering::SeqCst) == 1
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed || self.counter.fetch_sub(1, Ordering::SeqCst) != 1 {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let channel = Arc::clone(&self.channel);
        runtime.spawn(async move {
            if let Err(e) = channel.set_typing(false).await {
                tracing::warn!("Failed to clear typing indicator: {}", e);
            }
        });
    }
}

/// Simulated SMS short code
///
/// Each send is appended at once in `sending` state. After the delivery
/// delay that same message, looked up by id, is marked delivered. After the
/// reply delay the canned reply is appended as a received message. Sends
/// never wait on each other, so replies to rapid input overlap freely but
/// each one answers its own message.
pub struct SmsService {
    responder: CommandResponder,
    log: Arc<dyn MessageLog>,
    channel: Arc<dyn Channel>,
    timing: SmsTiming,
    pending: Arc<AtomicUsize>,
}

impl SmsService {
    pub fn new(log: Arc<dyn MessageLog>, channel: Arc<dyn Channel>, timing: SmsTiming) -> Self {
        Self {
            responder: CommandResponder::new(),
            log,
            channel,
            timing,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn responder(&self) -> &CommandResponder {
        &self.responder
    }

    pub fn log(&self) -> &Arc<dyn MessageLog> {
        &self.log
    }

    pub fn timing(&self) -> SmsTiming {
        self.timing
    }

    /// True while at least one reply is still on its way
    pub fn is_typing(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Send one SMS. Blank input is not sent and yields `None`.
    pub async fn send(&self, raw: &str) -> Result<Option<Exchange>, AppError> {
        if self.responder.parser().normalize(raw).is_none() {
            return Ok(None);
        }

        let message = SmsMessage::sent(raw.trim());
        let sent = message.id;
        // Resolved now so the reply belongs to this input whatever is sent next.
        let reply = self.responder.respond(raw);

        self.log.append(message.clone()).await?;
        self.channel.deliver(&message).await?;
        tracing::info!("SMS sent: {} ({})", message.content, sent);

        let guard = PendingGuard::acquire(&self.pending, &self.channel);
        let log = Arc::clone(&self.log);
        let channel = Arc::clone(&self.channel);
        let timing = self.timing;

        let handle = tokio::spawn(deliver_and_reply(log, channel, guard, timing, sent, reply));

        Ok(Some(Exchange { sent, handle }))
    }

    /// Send and wait for the reply text
    pub async fn send_and_wait(&self, raw: &str) -> Result<Option<SmsMessage>, AppError> {
        let Some(exchange) = self.send(raw).await? else {
            return Ok(None);
        };
        let id = exchange.reply().await?;
        Ok(self.log.get(id).await?)
    }
}

/// Timer half of a send; runs on its own task
async fn deliver_and_reply(
    log: Arc<dyn MessageLog>,
    channel: Arc<dyn Channel>,
    guard: PendingGuard,
    timing: SmsTiming,
    sent: MessageId,
    reply: &'static str,
) -> Result<MessageId, AppError> {
    tokio::time::sleep(timing.delivery_delay).await;
    if log.mark_delivered(sent).await? {
        if let Some(delivered) = log.get(sent).await? {
            channel.delivered(&delivered).await?;
        }
        tracing::debug!("SMS delivered: {}", sent);
    }
    channel.set_typing(true).await?;

    tokio::time::sleep(timing.reply_delay).await;
    let received = SmsMessage::received(reply);
    let received_id = received.id;
    log.append(received.clone()).await?;
    if guard.release() {
        channel.set_typing(false).await?;
    }
    channel.deliver(&received).await?;
    tracing::debug!("SMS reply for {}: {}", sent, received_id);

    Ok(received_id)
}
