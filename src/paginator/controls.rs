use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, ReactionType};

/// Prefix shared by every paginator button id
pub const BUTTON_PREFIX: &str = "paginator_";

/// A navigation button on a paginated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Delete,
    First,
    Previous,
    Next,
    Last,
}

impl NavAction {
    /// Every action, in the order the buttons are shown
    pub const ALL: [NavAction; 5] = [
        NavAction::Delete,
        NavAction::First,
        NavAction::Previous,
        NavAction::Next,
        NavAction::Last,
    ];

    /// The custom id of this action's button
    pub fn custom_id(self) -> &'static str {
        match self {
            NavAction::Delete => "paginator_delete",
            NavAction::First => "paginator_first",
            NavAction::Previous => "paginator_previous",
            NavAction::Next => "paginator_next",
            NavAction::Last => "paginator_last",
        }
    }

    /// Map a clicked button id back to its action
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.custom_id() == custom_id)
    }

    fn emoji(self) -> &'static str {
        match self {
            NavAction::Delete => "✖️",
            NavAction::First => "⏪",
            NavAction::Previous => "◀️",
            NavAction::Next => "▶️",
            NavAction::Last => "⏩",
        }
    }

    fn style(self) -> ButtonStyle {
        match self {
            NavAction::Delete => ButtonStyle::Danger,
            _ => ButtonStyle::Primary,
        }
    }
}

/// Creates the navigation row for the given actions
pub fn create_navigation_buttons(actions: &[NavAction]) -> Vec<CreateActionRow> {
    if actions.is_empty() {
        return Vec::new();
    }

    let buttons = actions
        .iter()
        .map(|action| {
            CreateButton::new(action.custom_id())
                .emoji(ReactionType::Unicode(action.emoji().to_string()))
                .style(action.style())
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}
