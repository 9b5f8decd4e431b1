use crate::core::app::App;
use crate::core::session::OutputBlock;
use crate::ui::markup::to_line;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const PROMPT: &str = "guest@termfolio:~$";
const INPUT_MARKER: &str = "> ";

/// View-only state that does not belong to the interpreter session.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewState {
    /// Lines scrolled up from the bottom of the scrollback.
    pub scroll_from_bottom: u16,
}

pub fn build_scrollback_lines(blocks: &[OutputBlock], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(PROMPT, theme.prompt_style),
            Span::styled(format!(" {}", block.input), theme.text_style),
        ]));
        for line in &block.lines {
            lines.push(to_line(&line.to_markup(), theme));
        }
    }
    lines
}

/// Rows the lines occupy once wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn ui(f: &mut Frame, app: &App, view: &ViewState, theme: &Theme) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let lines = build_scrollback_lines(&app.session.scrollback, theme);

    // One row goes to the title
    let available_height = chunks[0].height.saturating_sub(1);
    let total_rows = wrapped_height(&lines, chunks[0].width);
    let max_offset = total_rows.saturating_sub(available_height);
    let scroll_offset = max_offset.saturating_sub(view.scroll_from_bottom);

    let title = format!(
        "termfolio v{} • theme: {} • /help for commands, Ctrl+C to quit",
        env!("CARGO_PKG_VERSION"),
        app.theme()
    );

    let scrollback = Paragraph::new(lines)
        .block(Block::default().title(Span::styled(title, theme.muted_style)))
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0));
    f.render_widget(scrollback, chunks[0]);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(INPUT_MARKER, theme.prompt_style),
        Span::styled(app.session.input.clone(), theme.text_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style),
    );
    f.render_widget(input, chunks[1]);

    let typed = UnicodeWidthStr::width(INPUT_MARKER) + app.session.input.width();
    let inner_width = chunks[1].width.saturating_sub(2);
    let cursor_x = u16::try_from(typed)
        .unwrap_or(u16::MAX)
        .min(inner_width.saturating_sub(1));
    f.set_cursor_position(Position::new(chunks[1].x + 1 + cursor_x, chunks[1].y + 1));
}
