use super::{handlers, CommandContext, CommandResult};

pub type CommandHandler = fn(&CommandContext<'_>, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Short syntax hint shown by `/help`, e.g. `/projects [page]`.
    pub syntax: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl Command {
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    /// The submitted line, untouched.
    pub input: &'a str,
    /// Command name as typed.
    pub name: &'a str,
    /// Remaining tokens joined with single spaces.
    pub args: &'a str,
    pub tokens: &'a [String],
}

impl<'a> CommandInvocation<'a> {
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(String::as_str)
    }
}

/// Name-to-handler table consulted by the interpreter.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for command in builtin_commands() {
            registry.register(command);
        }
        registry
    }

    /// Add a command, replacing any existing command with the same name.
    pub fn register(&mut self, command: Command) {
        if let Some(existing) = self
            .commands
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(command.name))
        {
            *existing = command;
        } else {
            self.commands.push(command);
        }
    }

    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.matches(name))
    }

    /// Command names (not aliases) starting with `prefix`, case-insensitively.
    pub fn matching(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .map(|command| command.name)
            .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
            .collect()
    }
}

fn builtin_commands() -> Vec<Command> {
    vec![
        Command {
            name: "/help",
            aliases: &[],
            syntax: "/help [command]",
            description: "List commands, or show how to use one.",
            usage: "Usage: /help [command]",
            handler: handlers::core::handle_help,
        },
        Command {
            name: "/projects",
            aliases: &[],
            syntax: "/projects [page]",
            description: "Browse projects, one page at a time.",
            usage: "Usage: /projects [page]",
            handler: handlers::projects::handle_projects,
        },
        Command {
            name: "open",
            aliases: &[],
            syntax: "open <n>",
            description: "Open the demo of project n.",
            usage: "Usage: open <n>",
            handler: handlers::projects::handle_open,
        },
        Command {
            name: "search",
            aliases: &[],
            syntax: "search <term>",
            description: "Find projects matching every word of term.",
            usage: "Usage: search <term>",
            handler: handlers::projects::handle_search,
        },
        Command {
            name: "/about",
            aliases: &[],
            syntax: "/about",
            description: "Who I am and what I work with.",
            usage: "Usage: /about",
            handler: handlers::profile::handle_about,
        },
        Command {
            name: "/contact",
            aliases: &[],
            syntax: "/contact",
            description: "Email and social links.",
            usage: "Usage: /contact",
            handler: handlers::profile::handle_contact,
        },
        Command {
            name: "copy",
            aliases: &[],
            syntax: "copy email",
            description: "Copy my email address to the clipboard.",
            usage: "Usage: copy email",
            handler: handlers::profile::handle_copy,
        },
        Command {
            name: "/resume",
            aliases: &[],
            syntax: "/resume",
            description: "Open my resume.",
            usage: "Usage: /resume",
            handler: handlers::profile::handle_resume,
        },
        Command {
            name: "/theme",
            aliases: &[],
            syntax: "/theme <light|dark|matrix|solarized>",
            description: "Switch the color theme.",
            usage: "Usage: /theme <light|dark|matrix|solarized>",
            handler: handlers::core::handle_theme,
        },
        Command {
            name: "/clear",
            aliases: &["cls"],
            syntax: "/clear",
            description: "Clear the screen.",
            usage: "Usage: /clear (or cls)",
            handler: handlers::core::handle_clear,
        },
    ]
}
