//! The messaging-client seam used by the paginator.
//!
//! The paginator never touches Discord directly. It sends, edits and deletes messages
//! and reads button clicks through [`Messenger`], which keeps it testable with a fake
//! and keeps Discord specifics in [`discord`].

use futures::stream::BoxStream;
use serenity::all::{ChannelId, InteractionId, MessageId, UserId};
use serenity::async_trait;
use thiserror::Error;

use crate::paginator::{NavAction, RenderedPage};

/// Discord-backed [`Messenger`] built from a command context.
pub mod discord;

/// Errors reported by a messaging client
#[derive(Error, Debug)]
pub enum MessagingError {
    #[error("Message not found")]
    MessageNotFound,

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for messaging operations
pub type MessagingResult<T> = Result<T, MessagingError>;

/// Opaque reference to a message the bot sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// Everything that makes up one paginated message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPage {
    /// Plain text shown above the embed.
    pub content: String,
    pub embed: RenderedPage,
    /// Navigation buttons to attach; empty means no buttons.
    pub buttons: Vec<NavAction>,
}

/// A button click on a message, as delivered by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClick {
    pub interaction_id: InteractionId,
    pub token: String,
    pub custom_id: String,
    pub user_id: UserId,
}

/// Operations the paginator needs from the chat platform
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a new message, either as a reply to the invocation or as a plain channel post.
    async fn send_message(&self, page: &OutgoingPage, reply: bool)
    -> MessagingResult<MessageHandle>;

    /// Replace the content of a sent message in place.
    async fn edit_message(&self, handle: &MessageHandle, page: &OutgoingPage)
    -> MessagingResult<()>;

    /// Delete a sent message.
    async fn delete_message(&self, handle: &MessageHandle) -> MessagingResult<()>;

    /// Acknowledge a button click without sending anything visible.
    async fn acknowledge(&self, click: &ButtonClick) -> MessagingResult<()>;

    /// Stream of button clicks on `handle`. Ends when the message is gone or the
    /// process shuts down.
    fn button_clicks(&self, handle: &MessageHandle) -> BoxStream<'static, ButtonClick>;
}
