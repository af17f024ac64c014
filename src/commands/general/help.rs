//! The paginated `help` command.
//!
//! Also used by the framework error handler to show usage after a bad invocation.

use tracing::debug;

use crate::paginator::{Paginator, PaginatorOptions};
use crate::utils::config::ColourLookup;
use crate::utils::help::{CommandInfo, build_help};
use crate::{CommandResult, Context};

/// Help entries shown per page.
const HELP_PAGE_SIZE: usize = 10;

/// Show all commands, or details about one command or category
#[poise::command(prefix_command, slash_command, category = "General")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command or category to show help about"]
    #[rest]
    entity: Option<String>,
) -> CommandResult {
    send_help(ctx, entity.as_deref(), None).await
}

/// Send a paginated help listing for `entity`, or the overview when `None`.
///
/// With `error` set, the listing is framed as a usage hint: the title becomes
/// `"{name} usage"` and the error is shown above the embed.
pub async fn send_help(
    ctx: Context<'_>,
    entity: Option<&str>,
    error: Option<String>,
) -> CommandResult {
    let commands: Vec<CommandInfo> = ctx
        .framework()
        .options()
        .commands
        .iter()
        .map(CommandInfo::from_command)
        .collect();

    let Some(page) = build_help(&commands, entity, &ctx.data().description) else {
        debug!("No help entity matches {:?}", entity);
        ctx.reply("Entity Not Found").await?;
        return Ok(());
    };

    let (title, message) = match error {
        Some(error) => (
            format!("{} usage", page.title),
            format!("Incorrect usage for {}\n{}", page.title, error),
        ),
        None => (page.title, String::new()),
    };

    let avatar = ctx.cache().current_user().avatar_url();

    let mut options = PaginatorOptions::new()
        .title(title)
        .colour(ctx.data().colours.colour("orange"))
        .page_size(HELP_PAGE_SIZE)
        .timeout(ctx.data().settings.paginator_timeout)
        .extra_message(message);

    if let Some(avatar) = avatar {
        options = options.thumbnail(avatar);
    }

    let mut paginator = Paginator::from_context(ctx, page.entries, options)?;
    paginator.start().await?;
    paginator.run().await?;

    Ok(())
}
