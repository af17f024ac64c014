use tracing::debug;

use crate::paginator::{Paginator, PaginatorOptions};
use crate::utils::config::ColourLookup;
use crate::utils::help::UNCATEGORIZED;
use crate::{CommandResult, Context};

/// Categories listed per page.
const CATEGORIES_PER_PAGE: usize = 10;

/// Display all loaded command categories
#[poise::command(prefix_command, owners_only, hide_in_help, category = "Admin")]
pub async fn categories(ctx: Context<'_>) -> CommandResult {
    let mut names: Vec<String> = ctx
        .framework()
        .options()
        .commands
        .iter()
        .map(|command| {
            command
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        })
        .collect();
    names.sort();
    names.dedup();

    if names.is_empty() {
        ctx.reply("No loaded categories").await?;
        return Ok(());
    }

    debug!("Listing {} command categories", names.len());

    let options = PaginatorOptions::new()
        .title("**Categories**")
        .colour(ctx.data().colours.colour("orange"))
        .page_size(CATEGORIES_PER_PAGE)
        .timeout(ctx.data().settings.paginator_timeout);

    let mut paginator = Paginator::from_context(ctx, names, options)?;
    paginator.start().await?;
    paginator.run().await?;

    Ok(())
}
