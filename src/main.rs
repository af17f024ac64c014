use ::serenity::all::{ClientBuilder, OnlineStatus};
use dotenv::dotenv;
use ghoul_assistant::utils::config::{JsonStore, Settings};
use ghoul_assistant::{Data, Error, commands, events};
use poise::serenity_prelude as serenity;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ghoul_assistant=debug,warn")),
        )
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .init();

    dotenv().ok();

    let settings = Settings::load(&JsonStore::data("config")).unwrap_or_else(|e| {
        warn!("Using default settings: {}", e);
        Settings::default()
    });

    let token = env::var("DISCORD_TOKEN").map_err(|_| "Missing DISCORD_TOKEN")?;

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.init_prefix.clone()),
                mention_as_prefix: true,
                case_insensitive_commands: true,
                ..Default::default()
            },
            owners: settings
                .owners
                .iter()
                .map(|id| serenity::UserId::new(*id))
                .collect(),
            on_error: |error| Box::pin(events::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                ctx.set_presence(None, OnlineStatus::Online);
                info!("{} is up and running", ready.user.name);

                // Slash commands are synced on demand with the `register` command
                Ok(Data {
                    settings,
                    colours: JsonStore::data("colours"),
                    description: format!("{}: Ghoul's Personal Assistant", ready.user.name),
                })
            })
        });

    let mut client = ClientBuilder::new(token, intents)
        .framework(framework.build())
        .await?;

    client.start().await.map_err(Into::into)
}
