//! Channel trait and message types.

use std::pin::Pin;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::Stream;
use uuid::Uuid;

use crate::error::ChannelError;
use crate::flow::Reply;

/// A raw answer from the user: typed text, a speech transcript, or a button label.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Name of the channel it arrived on.
    pub channel: String,
    pub content: String,
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(channel: &str, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.to_string(),
            content: content.to_string(),
            received_at: Utc::now(),
        }
    }
}

/// Stream of incoming user messages.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// Something that can carry a conversation: hand over user input and
/// deliver the engine's replies.
///
/// The host awaits each `respond` before reading the next message, so an
/// implementation never sees overlapping calls.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;

    /// Begin receiving user input.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Deliver a reply (speak or print its messages, show any choices).
    async fn respond(&self, reply: &Reply) -> Result<(), ChannelError>;

    async fn shutdown(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}
