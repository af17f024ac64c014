use poise::serenity_prelude as serenity;

use crate::{CommandResult, Context};

/// Get profile picture of yourself or someone else
#[poise::command(slash_command, category = "Misc")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "User to get the avatar of, defaults to you"] user: Option<serenity::User>,
) -> CommandResult {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    ctx.say(user.face()).await?;

    Ok(())
}
