use ::serenity::all::CreateEmbed;
use poise::{CreateReply, serenity_prelude as serenity};
use std::time::Duration;

use crate::utils::config::ColourLookup;
use crate::{CommandResult, Context};

/// Return latency of the bot
#[poise::command(slash_command, category = "Misc")]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    let latency = get_shard_latency(&ctx)
        .await
        .unwrap_or_default()
        .as_millis();

    let embed = CreateEmbed::new()
        .title("**LATENCY**")
        .colour(ctx.data().colours.colour("blue"))
        .description(format!("{} ms", latency));

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

async fn get_shard_latency(ctx: &Context<'_>) -> Option<Duration> {
    // Latency is tracked per shard runner, so look up the runner this command arrived on
    let shard_manager = ctx.framework().shard_manager();
    let runners = shard_manager.runners.lock().await;
    let runner = runners.get(&serenity::ShardId(ctx.serenity_context().shard_id.0))?;

    runner.latency
}
