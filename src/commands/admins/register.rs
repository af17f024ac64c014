use crate::{CommandResult, Context};

/// Sync slash commands
#[poise::command(prefix_command, owners_only, hide_in_help, category = "Admin")]
pub async fn register(ctx: Context<'_>) -> CommandResult {
    poise::builtins::register_application_commands_buttons(ctx)
        .await
        .map_err(|e| e.into())
}
