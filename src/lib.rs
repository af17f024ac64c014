//! Ghoul's personal assistant: a Discord bot built on poise, with paginated embeds
//! for long output such as help listings.

pub mod commands;
pub mod events;
pub mod messaging;
pub mod paginator;
pub mod utils;

use utils::config::{JsonStore, Settings};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// Shared state, accessible in all command invocations
pub struct Data {
    pub settings: Settings,
    /// Named embed colours (`data/colours.json`).
    pub colours: JsonStore,
    /// Shown as the title of the help overview.
    pub description: String,
}
