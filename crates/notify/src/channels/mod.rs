//! Notification channel implementations.

pub mod slack;

use async_trait::async_trait;

use crate::error::ChannelError;
use crate::message::SlackMessage;

/// Trait for notification channels.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Get the name of this channel.
    fn name(&self) -> &'static str;

    /// Deliver a message. Implementations make exactly one attempt.
    async fn send(&self, message: &SlackMessage) -> Result<(), ChannelError>;
}
