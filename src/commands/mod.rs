mod handlers;
mod registry;

pub use registry::{Command, CommandHandler, CommandInvocation, CommandRegistry};

use crate::core::app::App;
use crate::core::content::Content;
use crate::core::markup::OutputLine;
use crate::core::theme::ThemeName;
use tracing::debug;

/// Side effect requested by a handler; applied by [`App`] after the handler
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
    CopyToClipboard {
        text: String,
        /// Printed when the clipboard accepts the write.
        copied: OutputLine,
        /// Printed when the clipboard refuses it.
        blocked: OutputLine,
    },
    SetTheme(ThemeName),
    ClearScrollback,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<OutputLine>,
    pub effect: Option<Effect>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(line: OutputLine) -> Self {
        Self {
            lines: vec![line],
            effect: None,
        }
    }

    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Read-only data a handler may consult.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub content: &'a Content,
    pub registry: &'a CommandRegistry,
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub args: String,
    pub tokens: Vec<String>,
}

impl ParsedLine {
    pub fn invocation<'a>(&'a self, input: &'a str) -> CommandInvocation<'a> {
        CommandInvocation {
            input,
            name: &self.name,
            args: &self.args,
            tokens: &self.tokens,
        }
    }
}

/// Split a line on whitespace. Returns `None` for blank input.
pub fn parse_line(input: &str) -> Option<ParsedLine> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_string();
    let tokens: Vec<String> = words.map(str::to_string).collect();
    let args = tokens.join(" ");
    Some(ParsedLine { name, args, tokens })
}

/// Resolve a typed name: exact name or alias first, then `search` under a
/// slash-prefixed spelling.
pub fn resolve<'r>(registry: &'r CommandRegistry, name: &str) -> Option<&'r Command> {
    registry.find(name).or_else(|| {
        let bare = name.trim_start_matches('/');
        if bare.eq_ignore_ascii_case("search") {
            registry.find("search")
        } else {
            None
        }
    })
}

pub fn not_found_line(name: &str) -> OutputLine {
    OutputLine::text(format!(
        "Command not found: {name}. Type /help for available commands."
    ))
}

/// Run one submitted line against the app.
pub async fn process_input(app: &mut App, input: &str) {
    let Some(parsed) = parse_line(input) else {
        return;
    };

    app.record_history(input);

    let result = {
        let ctx = app.command_context();
        match resolve(ctx.registry, &parsed.name) {
            Some(command) => {
                debug!(command = command.name, args = %parsed.args, "dispatching command");
                (command.handler)(&ctx, parsed.invocation(input))
            }
            None => {
                debug!(name = %parsed.name, "unknown command");
                CommandResult::line(not_found_line(&parsed.name))
            }
        }
    };

    app.finish_command(input, result).await;
}
