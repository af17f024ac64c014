//! Sample data used across the integration tests

use ghoul_assistant::messaging::ButtonClick;
use ghoul_assistant::paginator::NavAction;
use serenity::all::{InteractionId, UserId};

/// The user who invoked the paginated command
pub const AUTHOR_ID: u64 = 123456789;

/// Somebody else in the channel
pub const BYSTANDER_ID: u64 = 555555555;

/// Channel the fake messenger posts into
pub const SAMPLE_CHANNEL_ID: u64 = 987654321;

pub fn author() -> UserId {
    UserId::new(AUTHOR_ID)
}

pub fn bystander() -> UserId {
    UserId::new(BYSTANDER_ID)
}

/// Five one-letter entries, three pages at a page size of two
pub fn five_entries() -> Vec<String> {
    ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
}

/// A raw click on the button with `custom_id`
pub fn click_id(custom_id: &str, user: UserId) -> ButtonClick {
    ButtonClick {
        interaction_id: InteractionId::new(42),
        token: "interaction-token".to_string(),
        custom_id: custom_id.to_string(),
        user_id: user,
    }
}

/// A click on one of the paginator's own buttons
pub fn click(action: NavAction, user: UserId) -> ButtonClick {
    click_id(action.custom_id(), user)
}
