//! Help text generation.
//!
//! Commands are first flattened into [`CommandInfo`] so the formatting below does not
//! depend on the framework's command type and can be tested on its own.

/// Invisible separator placed before every help entry so blank lines survive in embeds.
const ENTRY_SPACER: &str = "\u{200b}\n";

/// Category used for commands that do not declare one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A command parameter as shown in a signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub required: bool,
}

/// The parts of a command that help output needs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInfo {
    pub name: String,
    pub qualified_name: String,
    pub aliases: Vec<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<ParameterInfo>,
    pub hidden: bool,
    pub subcommands: Vec<CommandInfo>,
}

impl CommandInfo {
    /// Flatten a framework command (and its subcommands).
    pub fn from_command<U, E>(command: &poise::Command<U, E>) -> Self {
        Self {
            name: command.name.clone(),
            qualified_name: command.qualified_name.clone(),
            aliases: command.aliases.clone(),
            category: command.category.clone(),
            description: command.description.clone(),
            parameters: command
                .parameters
                .iter()
                .map(|param| ParameterInfo {
                    name: param.name.clone(),
                    required: param.required,
                })
                .collect(),
            hidden: command.hide_in_help,
            subcommands: command
                .subcommands
                .iter()
                .map(CommandInfo::from_command)
                .collect(),
        }
    }

    /// Category name, with a fallback for commands without one
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    fn parents(&self) -> &str {
        self.qualified_name
            .strip_suffix(&self.name)
            .unwrap_or_default()
    }

    /// Usage line, e.g. `/coin [price|p] <name> [currency]`
    pub fn signature(&self) -> String {
        let invoke = if self.aliases.is_empty() {
            self.name.clone()
        } else {
            format!("[{}|{}]", self.name, self.aliases.join("|"))
        };

        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|param| {
                if param.required {
                    format!("<{}>", param.name)
                } else {
                    format!("[{}]", param.name)
                }
            })
            .collect();

        if params.is_empty() {
            format!("/{}{}", self.parents(), invoke)
        } else {
            format!("/{}{} {}", self.parents(), invoke, params.join(" "))
        }
    }

    fn matches(&self, word: &str) -> bool {
        self.name.eq_ignore_ascii_case(word)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(word))
    }
}

/// What a help query resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpEntity<'a> {
    Command(&'a CommandInfo),
    Category(String),
}

/// Title and entries of a help listing, ready to paginate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub title: String,
    pub entries: Vec<String>,
}

/// Resolve `query` to a command (`"group sub"` walks subcommands) or a category.
pub fn find_entity<'a>(commands: &'a [CommandInfo], query: &str) -> Option<HelpEntity<'a>> {
    let mut words = query.split_whitespace();
    let first = words.next()?;

    let command = commands
        .iter()
        .find(|command| command.matches(first))
        .and_then(|top| {
            words.try_fold(top, |command, word| {
                command.subcommands.iter().find(|sub| sub.matches(word))
            })
        });

    if let Some(command) = command {
        return Some(HelpEntity::Command(command));
    }

    let mut candidates = Vec::new();
    collect_visible(commands, &mut candidates);
    candidates
        .into_iter()
        .map(CommandInfo::category_name)
        .find(|category| category.eq_ignore_ascii_case(query.trim()))
        .map(|category| HelpEntity::Category(category.to_string()))
}

/// Every visible command, subcommands included, sorted by name.
fn collect_visible<'a>(commands: &'a [CommandInfo], out: &mut Vec<&'a CommandInfo>) {
    for command in commands.iter().filter(|command| !command.hidden) {
        out.push(command);
        collect_visible(&command.subcommands, out);
    }
    out.sort_by(|a, b| a.name.cmp(&b.name));
}

fn description(command: &CommandInfo) -> &str {
    command.description.as_deref().unwrap_or("No description")
}

fn detailed_entry(command: &CommandInfo) -> String {
    format!(
        "{ENTRY_SPACER}• **__{}__**\n```\n{}\n```\n{}",
        command.qualified_name,
        command.signature(),
        description(command)
    )
}

fn summary_entry(command: &CommandInfo) -> String {
    let subcommands = if command.subcommands.is_empty() {
        ""
    } else {
        "\nHas subcommands"
    };

    format!(
        "{ENTRY_SPACER}• **__{}__**\n{}{}",
        command.qualified_name,
        description(command),
        subcommands
    )
}

/// Help entries for one command: the command itself, then its visible subcommands.
pub fn command_entries(command: &CommandInfo) -> Vec<String> {
    let mut subcommands: Vec<&CommandInfo> = Vec::new();
    collect_visible(&command.subcommands, &mut subcommands);

    std::iter::once(command)
        .chain(subcommands)
        .map(detailed_entry)
        .collect()
}

/// Help entries for the commands of one category.
pub fn category_entries(commands: &[CommandInfo], category: &str) -> Vec<String> {
    let mut visible = Vec::new();
    collect_visible(commands, &mut visible);

    visible
        .into_iter()
        .filter(|command| command.category_name().eq_ignore_ascii_case(category))
        .map(summary_entry)
        .collect()
}

/// One entry per category, listing its command names.
pub fn overview_entries(commands: &[CommandInfo]) -> Vec<String> {
    let mut entries: Vec<String> = categories(commands)
        .into_iter()
        .map(|category| {
            let names: String = category_commands(commands, &category)
                .iter()
                .map(|command| format!("`{}` ", command.name))
                .collect();
            format!("{ENTRY_SPACER}**{category}**:\n{names}")
        })
        .collect();

    entries.sort();
    entries
}

/// Sorted, de-duplicated category names of the visible commands.
pub fn categories(commands: &[CommandInfo]) -> Vec<String> {
    let mut visible = Vec::new();
    collect_visible(commands, &mut visible);

    let mut names: Vec<String> = visible
        .into_iter()
        .map(|command| command.category_name().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn category_commands<'a>(commands: &'a [CommandInfo], category: &str) -> Vec<&'a CommandInfo> {
    let mut visible = Vec::new();
    collect_visible(commands, &mut visible);
    visible.retain(|command| command.category_name() == category);
    visible
}

/// Build the help listing for an optional query.
///
/// Returns `None` when the query names neither a command nor a category.
pub fn build_help(
    commands: &[CommandInfo],
    query: Option<&str>,
    bot_description: &str,
) -> Option<HelpPage> {
    let Some(query) = query.filter(|query| !query.trim().is_empty()) else {
        return Some(HelpPage {
            title: bot_description.to_string(),
            entries: overview_entries(commands),
        });
    };

    match find_entity(commands, query)? {
        HelpEntity::Command(command) => Some(HelpPage {
            title: command.name.clone(),
            entries: command_entries(command),
        }),
        HelpEntity::Category(category) => Some(HelpPage {
            title: format!("{category} commands"),
            entries: category_entries(commands, &category),
        }),
    }
}
