use ::serenity::all::{CreateWebhook, ExecuteWebhook};
use poise::{CreateReply, serenity_prelude as serenity};
use tracing::{info, warn};

use crate::{CommandResult, Context};

/// Impersonate a user or bot and send a message as the member
#[poise::command(
    slash_command,
    guild_only,
    category = "Misc",
    required_bot_permissions = "MANAGE_WEBHOOKS"
)]
pub async fn impersonate(
    ctx: Context<'_>,
    #[description = "Member or bot account to impersonate"] member: serenity::Member,
    #[description = "Message to send as the member"] message: String,
) -> CommandResult {
    ctx.send(CreateReply::default().content("ok").ephemeral(true))
        .await?;

    // A throwaway webhook lets the message carry the member's name and avatar
    let webhook = ctx
        .channel_id()
        .create_webhook(ctx.http(), CreateWebhook::new(member.user.name.clone()))
        .await?;

    let sent = webhook
        .execute(
            ctx.http(),
            false,
            ExecuteWebhook::new()
                .content(message)
                .username(member.display_name())
                .avatar_url(member.face()),
        )
        .await;

    if let Err(e) = webhook.delete(ctx.http()).await {
        warn!("Failed to delete impersonation webhook {}: {}", webhook.id, e);
    }

    sent?;
    info!("{} impersonated {}", ctx.author().name, member.user.name);

    Ok(())
}
