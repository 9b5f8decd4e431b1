use super::usage;
use crate::commands::registry::CommandInvocation;
use crate::commands::{CommandContext, CommandResult, Effect};
use crate::core::markup::{render_title, MarkupBuilder, OutputLine};
use crate::core::theme::ThemeName;

const USAGE_THEME: &str = "Usage: /theme <light|dark|matrix|solarized>";

pub(crate) fn handle_help(
    ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if let Some(topic) = invocation.arg(0) {
        let command = ctx.registry.find(topic).or_else(|| {
            let bare = topic.trim_start_matches('/');
            ctx.registry
                .find(bare)
                .or_else(|| ctx.registry.find(&format!("/{bare}")))
        });
        return match command {
            Some(command) => CommandResult::line(OutputLine::text(command.usage)),
            None => CommandResult::line(OutputLine::text(format!(
                "No details for '{}'.",
                invocation.args
            ))),
        };
    }

    let mut lines = vec![OutputLine::text("Available commands:")];
    for command in ctx.registry.all() {
        let mut line = MarkupBuilder::new();
        line.push(render_title(command.syntax))
            .push_text(" - ")
            .push_text(command.description);
        lines.push(OutputLine::Safe(line.build()));
    }
    CommandResult::lines(lines)
}

pub(crate) fn handle_theme(
    _ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let Some(name) = invocation.arg(0) else {
        return usage(USAGE_THEME);
    };
    match name.parse::<ThemeName>() {
        Ok(theme) => CommandResult::line(OutputLine::text(format!("Theme set to {theme}.")))
            .with_effect(Effect::SetTheme(theme)),
        Err(_) => usage(USAGE_THEME),
    }
}

pub(crate) fn handle_clear(
    _ctx: &CommandContext<'_>,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::empty().with_effect(Effect::ClearScrollback)
}
