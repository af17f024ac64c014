use poise::FrameworkError;
use tracing::error;

use crate::commands::general::help::send_help;
use crate::{Context, Data, Error};

/// Framework-wide error handler, turning command failures into user-facing replies
pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::UnknownCommand { .. } => {}
        FrameworkError::NotAnOwner { ctx, .. } => {
            reply(ctx, "This command is owner restricted").await;
        }
        FrameworkError::MissingUserPermissions { ctx, .. } => {
            reply(ctx, "This command is restricted to certain members").await;
        }
        FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            reply(
                ctx,
                &format!("I'm missing some required permissions: {missing_permissions}"),
            )
            .await;
        }
        FrameworkError::ArgumentParse { error, ctx, .. } => {
            // Bad arguments get the command's own help page with the error on top
            let name = ctx.command().qualified_name.clone();
            if let Err(e) = send_help(ctx, Some(&name), Some(error.to_string())).await {
                error!("Failed to send usage help for {}: {}", name, e);
            }
        }
        FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command {}: {}", ctx.command().qualified_name, error);
            reply(ctx, &error.to_string()).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn reply(ctx: Context<'_>, content: &str) {
    if let Err(e) = ctx.reply(content).await {
        error!("Unable to send message: {:?}", e);
    }
}
