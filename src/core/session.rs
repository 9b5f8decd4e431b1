use crate::core::markup::OutputLine;
use crate::core::theme::ThemeName;

/// Output produced by one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBlock {
    /// The raw line as the user typed it.
    pub input: String,
    pub lines: Vec<OutputLine>,
}

/// Per-session interpreter state exposed to the view layer.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub scrollback: Vec<OutputBlock>,
    history: Vec<String>,
    /// `None` while not browsing history. `Some(i)` always indexes `history`.
    history_cursor: Option<usize>,
    pub theme: ThemeName,
    pub input: String,
}

impl SessionState {
    pub fn new(theme: ThemeName, history: Vec<String>) -> Self {
        Self {
            scrollback: Vec::new(),
            history,
            history_cursor: None,
            theme,
            input: String::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
        self.history_cursor = None;
    }

    pub fn append_block(&mut self, block: OutputBlock) {
        self.scrollback.push(block);
    }

    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// Step back through history, stopping at the oldest entry.
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.history_cursor = Some(next);
        self.input = self.history[next].clone();
    }

    /// Step forward; moving past the newest entry leaves history browsing.
    pub fn history_down(&mut self) {
        let Some(index) = self.history_cursor else {
            return;
        };
        let next = index + 1;
        if next >= self.history.len() {
            self.history_cursor = None;
            self.input.clear();
        } else {
            self.history_cursor = Some(next);
            self.input = self.history[next].clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(history: &[&str]) -> SessionState {
        let mut session = SessionState::default();
        for line in history {
            session.push_history(line);
        }
        session
    }

    #[test]
    fn up_and_down_walk_history() {
        let mut session = session_with(&["a", "b", "c"]);
        session.history_up();
        assert_eq!(session.input, "c");
        session.history_up();
        assert_eq!(session.input, "b");
        session.history_down();
        assert_eq!(session.input, "c");
        assert_eq!(session.history_cursor(), Some(2));
        session.history_down();
        assert_eq!(session.input, "");
        assert_eq!(session.history_cursor(), None);
    }

    #[test]
    fn up_floors_at_first_entry() {
        let mut session = session_with(&["a", "b"]);
        for _ in 0..5 {
            session.history_up();
        }
        assert_eq!(session.history_cursor(), Some(0));
        assert_eq!(session.input, "a");
    }

    #[test]
    fn navigation_on_empty_history_is_noop() {
        let mut session = SessionState::default();
        session.input = "typed".into();
        session.history_up();
        session.history_down();
        assert_eq!(session.input, "typed");
        assert_eq!(session.history_cursor(), None);
    }

    #[test]
    fn down_without_browsing_keeps_input() {
        let mut session = session_with(&["a"]);
        session.input = "draft".into();
        session.history_down();
        assert_eq!(session.input, "draft");
    }

    #[test]
    fn push_resets_cursor() {
        let mut session = session_with(&["a", "b"]);
        session.history_up();
        session.push_history("c");
        assert_eq!(session.history_cursor(), None);
        assert_eq!(session.history().len(), 3);
    }
}
