use super::usage;
use crate::commands::registry::CommandInvocation;
use crate::commands::{CommandContext, CommandResult, Effect};
use crate::core::markup::{render_link, render_tags, render_title, MarkupBuilder, OutputLine};

const USAGE_COPY: &str = "Usage: copy email";

pub(crate) fn handle_about(
    ctx: &CommandContext<'_>,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let bio = ctx.content.bio();
    let heading = MarkupBuilder::new()
        .push(render_title(&bio.name))
        .push_text(" - ")
        .push_text(&bio.role)
        .build();
    let skills = MarkupBuilder::new()
        .push_text("Skills: ")
        .push(render_tags(&bio.skills))
        .build();

    CommandResult::lines(vec![
        OutputLine::Safe(heading),
        OutputLine::text(format!("Location: {}", bio.location)),
        OutputLine::text(bio.about.clone()),
        OutputLine::Safe(skills),
    ])
}

pub(crate) fn handle_contact(
    ctx: &CommandContext<'_>,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let contact = ctx.content.contact();
    let email = MarkupBuilder::new()
        .push_text("Email: ")
        .push(render_link(
            &format!("mailto:{}", contact.email),
            &contact.email,
        ))
        .push_text(" (type 'copy email' to copy it)")
        .build();

    let mut lines = vec![OutputLine::Safe(email)];
    for social in &contact.socials {
        let line = MarkupBuilder::new()
            .push_text(&format!("{}: ", social.platform))
            .push(render_link(&social.url, &social.url))
            .build();
        lines.push(OutputLine::Safe(line));
    }
    CommandResult::lines(lines)
}

pub(crate) fn handle_copy(
    ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if !invocation.args.eq_ignore_ascii_case("email") {
        return usage(USAGE_COPY);
    }
    let email = ctx.content.contact().email.clone();
    CommandResult::empty().with_effect(Effect::CopyToClipboard {
        copied: OutputLine::text(format!("Email copied to clipboard: {email}")),
        blocked: OutputLine::text(format!("Clipboard access blocked. Email: {email}")),
        text: email,
    })
}

pub(crate) fn handle_resume(
    ctx: &CommandContext<'_>,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::line(OutputLine::text("Opening resume..."))
        .with_effect(Effect::OpenUrl(ctx.content.resume_url().to_string()))
}
