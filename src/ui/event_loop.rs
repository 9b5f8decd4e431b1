//! Keyboard-driven main loop for the full-screen shell.

use crate::core::app::App;
use crate::ui::lifecycle::{restore_terminal, setup_terminal};
use crate::ui::renderer::{ui, ViewState};
use crate::ui::theme::ThemeCache;
use crate::utils::input::sanitize_line_input;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info};

const PAGE_SCROLL: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoopAction {
    Continue,
    Break,
}

pub async fn handle_key(app: &mut App, view: &mut ViewState, key: KeyEvent) -> KeyLoopAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return KeyLoopAction::Break,
        KeyCode::Esc => return KeyLoopAction::Break,
        KeyCode::Char('u') if ctrl => app.session.input.clear(),
        KeyCode::Enter => {
            app.submit_input().await;
            view.scroll_from_bottom = 0;
        }
        KeyCode::Up => {
            app.history_up();
        }
        KeyCode::Down => {
            app.history_down();
        }
        KeyCode::Tab => {
            app.complete_input();
        }
        KeyCode::PageUp => {
            view.scroll_from_bottom = view.scroll_from_bottom.saturating_add(PAGE_SCROLL);
        }
        KeyCode::PageDown => {
            view.scroll_from_bottom = view.scroll_from_bottom.saturating_sub(PAGE_SCROLL);
        }
        KeyCode::Backspace => {
            app.session.input.pop();
        }
        KeyCode::Char(c) if !ctrl => app.session.input.push(c),
        _ => {}
    }
    KeyLoopAction::Continue
}

pub fn handle_paste(app: &mut App, text: &str) {
    app.session.input.push_str(&sanitize_line_input(text));
}

pub async fn run_shell(mut app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;
    info!(theme = %app.theme(), "starting interactive shell");

    let mut view = ViewState::default();
    let mut themes = ThemeCache::new(app.theme());
    let result = async {
        loop {
            let theme = themes.get(app.theme());
            terminal.draw(|f| ui(f, &app, &view, theme))?;

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut app, &mut view, key).await == KeyLoopAction::Break {
                        break;
                    }
                }
                Event::Paste(text) => handle_paste(&mut app, &text),
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
        Ok::<(), Box<dyn Error>>(())
    }
    .await;

    restore_terminal(&mut terminal)?;
    info!("shell closed");
    result
}
