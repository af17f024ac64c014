//! This module aggregates all the command modules for the bot.

use crate::{Data, Error};

/// Owner-only maintenance commands (registration, category listing).
pub mod admins;
/// General purpose commands (e.g., help, ping, say).
pub mod general;

/// Every command the framework should know about
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        // General commands
        general::help::help(),
        general::ping::ping(),
        general::say::say(),
        general::avatar::avatar(),
        general::impersonate::impersonate(),
        // Admin commands
        admins::register::register(),
        admins::categories::categories(),
    ]
}
