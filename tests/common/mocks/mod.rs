//! Recording stand-in for the Discord messenger

use std::sync::{Arc, Mutex, MutexGuard};

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use ghoul_assistant::messaging::{
    ButtonClick, MessageHandle, Messenger, MessagingError, MessagingResult, OutgoingPage,
};
use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;

use super::fixtures::SAMPLE_CHANNEL_ID;

/// One call made against the messenger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send { page: OutgoingPage, reply: bool },
    Edit { handle: MessageHandle, page: OutgoingPage },
    Delete(MessageHandle),
    Acknowledge(String),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    clicks: Vec<ButtonClick>,
    hold_open: bool,
    message_gone: bool,
    sent: u64,
}

/// A [`Messenger`] that records every call and replays scripted clicks.
///
/// Clones share state, so a test can keep one clone while the paginator owns another.
#[derive(Clone, Default)]
pub struct FakeMessenger {
    state: Arc<Mutex<State>>,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks delivered by `button_clicks`. With `hold_open` the stream stays open
    /// afterwards, as the gateway does, so the paginator has to time out.
    pub fn with_clicks(self, clicks: Vec<ButtonClick>, hold_open: bool) -> Self {
        {
            let mut state = self.state();
            state.clicks = clicks;
            state.hold_open = hold_open;
        }
        self
    }

    /// Make every later edit and delete fail as if the message had been removed.
    pub fn remove_message(&self) {
        self.state().message_gone = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Pages passed to send or edit, in order
    pub fn shown_pages(&self) -> Vec<OutgoingPage> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send { page, .. } | Call::Edit { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }

    /// The most recently sent or edited page
    pub fn last_page(&self) -> Option<OutgoingPage> {
        self.shown_pages().pop()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    pub fn acknowledgements(&self) -> usize {
        self.count(|call| matches!(call, Call::Acknowledge(_)))
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl Messenger for FakeMessenger {
    async fn send_message(
        &self,
        page: &OutgoingPage,
        reply: bool,
    ) -> MessagingResult<MessageHandle> {
        let mut state = self.state();
        state.sent += 1;
        state.calls.push(Call::Send {
            page: page.clone(),
            reply,
        });

        Ok(MessageHandle {
            channel_id: ChannelId::new(SAMPLE_CHANNEL_ID),
            message_id: MessageId::new(1000 + state.sent),
        })
    }

    async fn edit_message(
        &self,
        handle: &MessageHandle,
        page: &OutgoingPage,
    ) -> MessagingResult<()> {
        let mut state = self.state();
        state.calls.push(Call::Edit {
            handle: *handle,
            page: page.clone(),
        });

        if state.message_gone {
            Err(MessagingError::MessageNotFound)
        } else {
            Ok(())
        }
    }

    async fn delete_message(&self, handle: &MessageHandle) -> MessagingResult<()> {
        let mut state = self.state();
        state.calls.push(Call::Delete(*handle));

        if state.message_gone {
            Err(MessagingError::MessageNotFound)
        } else {
            state.message_gone = true;
            Ok(())
        }
    }

    async fn acknowledge(&self, click: &ButtonClick) -> MessagingResult<()> {
        self.state()
            .calls
            .push(Call::Acknowledge(click.custom_id.clone()));
        Ok(())
    }

    fn button_clicks(&self, _handle: &MessageHandle) -> BoxStream<'static, ButtonClick> {
        let state = self.state();
        let clicks = stream::iter(state.clicks.clone());

        if state.hold_open {
            clicks.chain(stream::pending()).boxed()
        } else {
            clicks.boxed()
        }
    }
}
