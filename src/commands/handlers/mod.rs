pub(super) mod core;
pub(super) mod profile;
pub(super) mod projects;

use crate::commands::CommandResult;
use crate::core::markup::OutputLine;

pub(super) fn usage(usage: &'static str) -> CommandResult {
    CommandResult::line(OutputLine::text(usage))
}

/// Parse a strictly positive integer argument.
pub(super) fn positive_index(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|n| *n >= 1)
}
