//! Paginated embeds with button navigation.
//!
//! A [`Paginator`] owns a list of text entries, splits them into pages and keeps a
//! single message up to date as the user clicks through it. All platform access goes
//! through a [`Messenger`], so the state machine itself is plain Rust.

use std::time::Duration;

use futures::StreamExt;
use serenity::all::UserId;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::messaging::discord::DiscordMessenger;
use crate::messaging::{ButtonClick, MessageHandle, Messenger, MessagingError, OutgoingPage};

pub mod controls;
pub mod pages;
pub mod render;

pub use controls::NavAction;
pub use pages::Page;
pub use render::{PageStyle, PageValue, RenderedPage};

/// Default idle time before navigation buttons are removed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while running a paginator
#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("Invalid paginator configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Paginator has not been started")]
    NotStarted,

    #[error("Message not found")]
    MessageNotFound,

    #[error(transparent)]
    Messaging(MessagingError),
}

impl From<MessagingError> for PaginatorError {
    fn from(error: MessagingError) -> Self {
        match error {
            MessagingError::MessageNotFound => PaginatorError::MessageNotFound,
            other => PaginatorError::Messaging(other),
        }
    }
}

/// Result type for paginator operations
pub type PaginatorResult<T> = Result<T, PaginatorError>;

/// What a processed button click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The page changed (or was re-shown) and the message was edited.
    Navigated,
    /// Nothing changed: boundary no-op, foreign user, or unknown button.
    Ignored,
    /// The message was deleted; no further clicks will arrive.
    Deleted,
}

/// Display and behaviour options for a [`Paginator`]
#[derive(Debug, Clone)]
pub struct PaginatorOptions {
    pub style: PageStyle,
    /// Entries per page, at least 1.
    pub page_size: usize,
    /// Only the invoking user may press the buttons.
    pub author_restrict: bool,
    /// Idle time after which the buttons are removed.
    pub timeout: Duration,
    /// 1-indexed page shown by `start`.
    pub initial_page: usize,
    /// Reply to the invocation instead of posting to the channel.
    pub reply: bool,
    /// Appended to every entry.
    pub line_separator: String,
    /// Plain text sent above the embed.
    pub extra_message: String,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            style: PageStyle::default(),
            page_size: 1,
            author_restrict: true,
            timeout: DEFAULT_TIMEOUT,
            initial_page: 1,
            reply: true,
            line_separator: "\n".to_string(),
            extra_message: String::new(),
        }
    }
}

impl PaginatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<PageValue<String>>) -> Self {
        self.style.title = title.into();
        self
    }

    pub fn colour(mut self, colour: impl Into<PageValue<u32>>) -> Self {
        self.style.colour = colour.into();
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<PageValue<String>>) -> Self {
        self.style.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.style.suffix = suffix.into();
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn author_restrict(mut self, author_restrict: bool) -> Self {
        self.author_restrict = author_restrict;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn reply(mut self, reply: bool) -> Self {
        self.reply = reply;
        self
    }

    pub fn line_separator(mut self, line_separator: impl Into<String>) -> Self {
        self.line_separator = line_separator.into();
        self
    }

    pub fn extra_message(mut self, extra_message: impl Into<String>) -> Self {
        self.extra_message = extra_message.into();
        self
    }
}

/// A paginated message and its navigation state
pub struct Paginator<M> {
    messenger: M,
    author: UserId,
    entries: Vec<String>,
    options: PaginatorOptions,
    page_count: usize,
    pages: Vec<Page>,
    current_page: usize,
    started: bool,
    live: Option<MessageHandle>,
}

impl Paginator<DiscordMessenger> {
    /// Build a paginator that answers the given command invocation.
    pub fn from_context<U: Send + Sync + 'static, E>(
        ctx: poise::Context<'_, U, E>,
        entries: Vec<String>,
        options: PaginatorOptions,
    ) -> PaginatorResult<Self> {
        Self::new(
            DiscordMessenger::from_context(ctx),
            ctx.author().id,
            entries,
            options,
        )
    }
}

impl<M: Messenger> Paginator<M> {
    /// Validate the options and build a paginator. Nothing is sent yet.
    pub fn new(
        messenger: M,
        author: UserId,
        entries: Vec<String>,
        options: PaginatorOptions,
    ) -> PaginatorResult<Self> {
        if options.page_size < 1 {
            return Err(PaginatorError::InvalidConfiguration(
                "page size cannot be less than 1".to_string(),
            ));
        }

        let page_count = pages::page_count(entries.len(), options.page_size);

        let per_page_values = [
            ("title", options.style.title.per_page_len()),
            ("colour", options.style.colour.per_page_len()),
            (
                "thumbnail",
                options
                    .style
                    .thumbnail
                    .as_ref()
                    .and_then(PageValue::per_page_len),
            ),
        ];
        for (name, len) in per_page_values {
            if let Some(len) = len.filter(|len| *len != page_count) {
                return Err(PaginatorError::InvalidConfiguration(format!(
                    "{name} has {len} values but there are {page_count} pages"
                )));
            }
        }

        if options.initial_page < 1 || options.initial_page > page_count.max(1) {
            return Err(PaginatorError::InvalidConfiguration(format!(
                "initial page {} is outside 1..={}",
                options.initial_page,
                page_count.max(1)
            )));
        }

        debug!(
            "Created paginator with {} entries over {} pages",
            entries.len(),
            page_count
        );

        Ok(Self {
            messenger,
            author,
            entries,
            page_count,
            pages: Vec::new(),
            current_page: options.initial_page,
            options,
            started: false,
            live: None,
        })
    }

    /// The page currently shown, 1-indexed
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages for the configured entries
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Pages computed by the last `start`
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The live message, if one has been sent and not deleted
    pub fn message(&self) -> Option<&MessageHandle> {
        self.live.as_ref()
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Render the current page
    pub fn render(&self) -> RenderedPage {
        render::render_page(&self.pages, self.current_page, &self.options.style)
    }

    fn outgoing(&self, with_buttons: bool) -> OutgoingPage {
        let buttons = if with_buttons && self.page_count > 1 {
            NavAction::ALL.to_vec()
        } else {
            Vec::new()
        };

        OutgoingPage {
            content: self.options.extra_message.clone(),
            embed: self.render(),
            buttons,
        }
    }

    /// Split the entries, send the initial page and remember the message.
    pub async fn start(&mut self) -> PaginatorResult<()> {
        self.pages = pages::split_pages(
            &self.entries,
            self.options.page_size,
            &self.options.line_separator,
        );
        self.current_page = self.options.initial_page;

        let handle = self
            .messenger
            .send_message(&self.outgoing(true), self.options.reply)
            .await?;

        info!(
            "Started paginator on message {} at page {} of {}",
            handle.message_id, self.current_page, self.page_count
        );

        self.started = true;
        self.live = Some(handle);
        Ok(())
    }

    /// Re-render the current page into the live message.
    pub async fn update(&mut self) -> PaginatorResult<()> {
        let handle = self.live_handle()?;
        self.messenger
            .edit_message(&handle, &self.outgoing(true))
            .await?;
        Ok(())
    }

    /// Delete the live message.
    ///
    /// The handle is released first, so a second call fails with
    /// [`PaginatorError::MessageNotFound`] without reaching the messenger.
    pub async fn delete(&mut self) -> PaginatorResult<()> {
        let handle = self.live.take().ok_or(PaginatorError::MessageNotFound)?;
        self.messenger.delete_message(&handle).await?;
        info!("Deleted paginated message {}", handle.message_id);
        Ok(())
    }

    /// Drop the computed pages. Entries and the live message are left alone.
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Apply a navigation action to the page state.
    ///
    /// Returns `false` when the action is swallowed: previous on the first page,
    /// next on the last page, or delete (which is not a page transition).
    pub fn navigate(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::First => self.current_page = 1,
            NavAction::Previous if self.current_page > 1 => self.current_page -= 1,
            NavAction::Next if self.current_page < self.page_count => self.current_page += 1,
            NavAction::Last => self.current_page = self.page_count.max(1),
            _ => return false,
        }
        true
    }

    /// Acknowledge one button click, then process it.
    ///
    /// The click is acknowledged before anything else happens, so ignored clicks,
    /// failed edits and deletions of the message all leave the interaction answered.
    /// Errors from the action take precedence over errors from the acknowledgement.
    pub async fn handle_click(&mut self, click: &ButtonClick) -> PaginatorResult<ClickOutcome> {
        let acknowledged = self.messenger.acknowledge(click).await;
        let outcome = self.apply_click(click).await?;

        acknowledged?;
        Ok(outcome)
    }

    async fn apply_click(&mut self, click: &ButtonClick) -> PaginatorResult<ClickOutcome> {
        if self.options.author_restrict && click.user_id != self.author {
            debug!(
                "Ignoring paginator click from {} (owner is {})",
                click.user_id, self.author
            );
            return Ok(ClickOutcome::Ignored);
        }

        let Some(action) = NavAction::from_custom_id(&click.custom_id) else {
            warn!("Unknown paginator button id: {}", click.custom_id);
            return Ok(ClickOutcome::Ignored);
        };

        if action == NavAction::Delete {
            self.delete().await?;
            return Ok(ClickOutcome::Deleted);
        }

        if !self.navigate(action) {
            return Ok(ClickOutcome::Ignored);
        }

        debug!("{:?} -> page {} of {}", action, self.current_page, self.page_count);
        self.update().await?;
        Ok(ClickOutcome::Navigated)
    }

    /// Serve button clicks on the live message until it is deleted, the click
    /// stream ends, or no click arrives within the timeout.
    ///
    /// Clicks are handled one at a time in delivery order. On timeout the buttons
    /// are stripped from the message.
    pub async fn run(&mut self) -> PaginatorResult<()> {
        let handle = self.live_handle()?;

        if self.page_count <= 1 {
            return Ok(());
        }

        let mut clicks = self.messenger.button_clicks(&handle);

        loop {
            match tokio::time::timeout(self.options.timeout, clicks.next()).await {
                Ok(Some(click)) => {
                    if self.handle_click(&click).await? == ClickOutcome::Deleted {
                        return Ok(());
                    }
                }
                Ok(None) => {
                    debug!("Click stream for message {} ended", handle.message_id);
                    return Ok(());
                }
                Err(_) => return self.expire().await,
            }
        }
    }

    /// Remove the navigation buttons from the live message.
    ///
    /// A message that is already gone counts as expired.
    pub async fn expire(&mut self) -> PaginatorResult<()> {
        let Some(handle) = self.live else {
            return Ok(());
        };

        match self
            .messenger
            .edit_message(&handle, &self.outgoing(false))
            .await
        {
            Ok(()) => {
                info!("Paginator on message {} expired", handle.message_id);
                Ok(())
            }
            Err(MessagingError::MessageNotFound) => {
                debug!("Expired paginator message {} was already gone", handle.message_id);
                self.live = None;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn live_handle(&self) -> PaginatorResult<MessageHandle> {
        match self.live {
            Some(handle) => Ok(handle),
            None if self.started => Err(PaginatorError::MessageNotFound),
            None => Err(PaginatorError::NotStarted),
        }
    }
}
