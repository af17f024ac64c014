use futures::StreamExt;
use futures::stream::BoxStream;
use serenity::all::{
    ChannelId, ComponentInteraction, ComponentInteractionCollector, Context, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditMessage, InteractionId, MessageId,
};
use serenity::async_trait;
use serenity::http::HttpError;
use tracing::debug;

use super::{ButtonClick, MessageHandle, Messenger, MessagingError, MessagingResult, OutgoingPage};
use crate::paginator::RenderedPage;
use crate::paginator::controls::create_navigation_buttons;

/// Discord JSON error code for "Unknown Message"
const UNKNOWN_MESSAGE: isize = 10008;

/// Where the command that started a paginator came from
#[derive(Debug, Clone)]
enum Origin {
    /// A prefix command; replies reference the invoking message.
    Message(MessageId),
    /// A slash command; the first message answers the interaction.
    Interaction { id: InteractionId, token: String },
}

impl Origin {
    /// Decide how a page is delivered for this origin and reply mode
    fn delivery(&self, reply: bool) -> Delivery {
        match (self, reply) {
            (Origin::Interaction { id, token }, true) => Delivery::InteractionResponse {
                id: *id,
                token: token.clone(),
            },
            (Origin::Interaction { id, token }, false) => Delivery::ChannelPost {
                reference: None,
                confirm: Some((*id, token.clone())),
            },
            (Origin::Message(message_id), true) => Delivery::ChannelPost {
                reference: Some(*message_id),
                confirm: None,
            },
            (Origin::Message(_), false) => Delivery::ChannelPost {
                reference: None,
                confirm: None,
            },
        }
    }
}

/// Where a new paginated message goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum Delivery {
    /// The page answers the slash command interaction.
    InteractionResponse { id: InteractionId, token: String },
    /// The page is posted to the channel.
    ChannelPost {
        /// Invoking message to reply to.
        reference: Option<MessageId>,
        /// Slash command interaction still to be answered.
        confirm: Option<(InteractionId, String)>,
    },
}

/// [`Messenger`] backed by the serenity HTTP client and gateway collectors
pub struct DiscordMessenger {
    ctx: Context,
    channel_id: ChannelId,
    origin: Origin,
}

impl DiscordMessenger {
    /// Build a messenger for the channel and invocation of a command context.
    pub fn from_context<U: Send + Sync + 'static, E>(ctx: poise::Context<'_, U, E>) -> Self {
        let origin = match ctx {
            poise::Context::Application(app) => Origin::Interaction {
                id: app.interaction.id,
                token: app.interaction.token.clone(),
            },
            poise::Context::Prefix(prefix) => Origin::Message(prefix.msg.id),
        };

        Self {
            ctx: ctx.serenity_context().clone(),
            channel_id: ctx.channel_id(),
            origin,
        }
    }

    async fn respond_to_interaction(
        &self,
        id: InteractionId,
        token: &str,
        page: &OutgoingPage,
    ) -> MessagingResult<MessageHandle> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(page.content.clone())
                .embed(create_embed(&page.embed))
                .components(create_navigation_buttons(&page.buttons)),
        );

        self.ctx
            .http
            .create_interaction_response(id, token, &response, Vec::new())
            .await?;

        // The response itself carries no message id, fetch it for later edits
        let message = self.ctx.http.get_original_interaction_response(token).await?;

        Ok(MessageHandle {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send_message(
        &self,
        page: &OutgoingPage,
        reply: bool,
    ) -> MessagingResult<MessageHandle> {
        let (reference, confirm) = match self.origin.delivery(reply) {
            Delivery::InteractionResponse { id, token } => {
                return self.respond_to_interaction(id, &token, page).await;
            }
            Delivery::ChannelPost { reference, confirm } => (reference, confirm),
        };

        let mut builder = CreateMessage::new()
            .embed(create_embed(&page.embed))
            .components(create_navigation_buttons(&page.buttons));

        if !page.content.is_empty() {
            builder = builder.content(page.content.clone());
        }

        if let Some(message_id) = reference {
            builder = builder.reference_message((self.channel_id, message_id));
        }

        let message = self
            .channel_id
            .send_message(&self.ctx.http, builder)
            .await?;

        debug!("Sent paginated message {}", message.id);

        if let Some((id, token)) = confirm {
            // Slash commands must be answered even when the page went to the channel
            let response = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("ok")
                    .ephemeral(true),
            );
            self.ctx
                .http
                .create_interaction_response(id, &token, &response, Vec::new())
                .await?;
        }

        Ok(MessageHandle {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn edit_message(&self, handle: &MessageHandle, page: &OutgoingPage) -> MessagingResult<()> {
        let builder = EditMessage::new()
            .content(page.content.clone())
            .embed(create_embed(&page.embed))
            .components(create_navigation_buttons(&page.buttons));

        handle
            .channel_id
            .edit_message(&self.ctx.http, handle.message_id, builder)
            .await
            .map_err(classify)?;

        Ok(())
    }

    async fn delete_message(&self, handle: &MessageHandle) -> MessagingResult<()> {
        handle
            .channel_id
            .delete_message(&self.ctx.http, handle.message_id)
            .await
            .map_err(classify)
    }

    async fn acknowledge(&self, click: &ButtonClick) -> MessagingResult<()> {
        self.ctx
            .http
            .create_interaction_response(
                click.interaction_id,
                &click.token,
                &CreateInteractionResponse::Acknowledge,
                Vec::new(),
            )
            .await?;

        Ok(())
    }

    fn button_clicks(&self, handle: &MessageHandle) -> BoxStream<'static, ButtonClick> {
        ComponentInteractionCollector::new(&self.ctx)
            .message_id(handle.message_id)
            .stream()
            .map(|interaction| ButtonClick::from(&interaction))
            .boxed()
    }
}

impl From<&ComponentInteraction> for ButtonClick {
    fn from(interaction: &ComponentInteraction) -> Self {
        Self {
            interaction_id: interaction.id,
            token: interaction.token.clone(),
            custom_id: interaction.data.custom_id.clone(),
            user_id: interaction.user.id,
        }
    }
}

/// Build the Discord embed for a rendered page
pub fn create_embed(page: &RenderedPage) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(page.title.clone())
        .description(page.description.clone())
        .colour(page.colour);

    if let Some(thumbnail) = &page.thumbnail {
        embed = embed.thumbnail(thumbnail.clone());
    }

    if let Some(footer) = &page.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer.clone()));
    }

    embed
}

/// Map "Unknown Message" responses to [`MessagingError::MessageNotFound`]
fn classify(error: serenity::Error) -> MessagingError {
    match &error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.error.code == UNKNOWN_MESSAGE =>
        {
            MessagingError::MessageNotFound
        }
        _ => MessagingError::Discord(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slash() -> Origin {
        Origin::Interaction {
            id: InteractionId::new(7),
            token: "token".to_string(),
        }
    }

    #[test]
    fn test_slash_reply_answers_interaction() {
        assert_eq!(
            slash().delivery(true),
            Delivery::InteractionResponse {
                id: InteractionId::new(7),
                token: "token".to_string(),
            }
        );
    }

    #[test]
    fn test_slash_channel_post_still_answers_interaction() {
        assert_eq!(
            slash().delivery(false),
            Delivery::ChannelPost {
                reference: None,
                confirm: Some((InteractionId::new(7), "token".to_string())),
            }
        );
    }

    #[test]
    fn test_prefix_reply_references_invocation() {
        let origin = Origin::Message(MessageId::new(99));

        assert_eq!(
            origin.delivery(true),
            Delivery::ChannelPost {
                reference: Some(MessageId::new(99)),
                confirm: None,
            }
        );
        assert_eq!(
            origin.delivery(false),
            Delivery::ChannelPost {
                reference: None,
                confirm: None,
            }
        );
    }
}
