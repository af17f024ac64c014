use poise::CreateReply;

use crate::{CommandResult, Context};

/// Repeat a line of text
#[poise::command(slash_command, category = "Misc")]
pub async fn say(
    ctx: Context<'_>,
    #[description = "Line of text to repeat"] text: String,
) -> CommandResult {
    let is_owner = ctx.framework().options().owners.contains(&ctx.author().id);

    if is_owner {
        // Owners speak through the bot: confirm privately, then post the text as-is
        ctx.send(CreateReply::default().content("ok").ephemeral(true))
            .await?;
        ctx.channel_id().say(ctx.http(), text).await?;
    } else {
        ctx.say(format!("\"{}\"\n-{}", text, ctx.author().display_name()))
            .await?;
    }

    Ok(())
}
