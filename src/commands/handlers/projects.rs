use super::{positive_index, usage};
use crate::commands::registry::CommandInvocation;
use crate::commands::{CommandContext, CommandResult, Effect};
use crate::core::content::Project;
use crate::core::markup::{render_link, render_tags, render_title, MarkupBuilder, OutputLine};

const USAGE_OPEN: &str = "Usage: open <n>";
const USAGE_SEARCH: &str = "Usage: search <term>";
const OPEN_HINT: &str = "Type 'open <n>' to open a project demo.";

pub(crate) fn handle_projects(
    ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let requested = invocation
        .arg(0)
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let number = usize::try_from(requested).unwrap_or(usize::MAX);
    let page = ctx.content.page(number);

    let mut lines = Vec::new();
    if page.projects.is_empty() {
        lines.push(OutputLine::text(format!("No projects on page {}.", page.number)));
    } else {
        lines.push(OutputLine::text(format!(
            "Projects (page {} of {}):",
            page.number, page.total_pages
        )));
        for (offset, project) in page.projects.iter().enumerate() {
            lines.extend(project_lines(page.first_index + offset, project));
        }
    }
    lines.push(OutputLine::text(OPEN_HINT));
    CommandResult::lines(lines)
}

fn project_lines(index: usize, project: &Project) -> Vec<OutputLine> {
    let heading = MarkupBuilder::new()
        .push_text(&format!("[{index}] "))
        .push(render_title(&project.title))
        .build();
    let links = MarkupBuilder::new()
        .push(render_link(&project.demo_url, "demo"))
        .push_text(" | ")
        .push(render_link(&project.source_url, "source"))
        .build();

    let mut lines = vec![
        OutputLine::Safe(heading),
        OutputLine::text(project.description.clone()),
    ];
    if !project.tech.is_empty() {
        lines.push(OutputLine::Safe(render_tags(&project.tech)));
    }
    lines.push(OutputLine::Safe(links));
    lines
}

pub(crate) fn handle_open(
    ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let Some(index) = positive_index(invocation.arg(0)) else {
        return usage(USAGE_OPEN);
    };
    match ctx.content.project(index) {
        Some(project) => {
            CommandResult::line(OutputLine::text(format!("Opening {}...", project.title)))
                .with_effect(Effect::OpenUrl(project.demo_url.clone()))
        }
        None => CommandResult::line(OutputLine::text(format!("Project {index} not found."))),
    }
}

pub(crate) fn handle_search(
    ctx: &CommandContext<'_>,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let term = invocation.args;
    if term.is_empty() {
        return usage(USAGE_SEARCH);
    }

    let matches = search_projects(ctx.content.projects(), term);
    if matches.is_empty() {
        return CommandResult::line(OutputLine::text(format!("No matches for '{term}'.")));
    }

    let mut lines = vec![OutputLine::text(format!(
        "Found {} matching project(s):",
        matches.len()
    ))];
    for (index, project) in matches {
        let line = MarkupBuilder::new()
            .push_text(&format!("[{index}] "))
            .push(render_title(&project.title))
            .push_text(" - ")
            .push_text(&project.description)
            .build();
        lines.push(OutputLine::Safe(line));
    }
    CommandResult::lines(lines)
}

/// Projects containing every whitespace-separated sub-term, with their
/// 1-based global index.
pub(crate) fn search_projects<'a>(
    projects: &'a [Project],
    term: &str,
) -> Vec<(usize, &'a Project)> {
    let needles: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
    if needles.is_empty() {
        return Vec::new();
    }
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| {
            let haystack = project.search_haystack();
            needles.iter().all(|needle| haystack.contains(needle.as_str()))
        })
        .map(|(i, project)| (i + 1, project))
        .collect()
}
